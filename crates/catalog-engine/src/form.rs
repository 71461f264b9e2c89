use catalog_types::{FormField, Product, ProductId, Violation, ViolationKind, Violations};
use chrono::{DateTime, Utc};

/// Which kind of submission the dialog will perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ProductId),
}

/// Raw form input plus the errors from the last submit attempt
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    name: String,
    price: String,
    stock: String,
    category: String,
    description: String,
    errors: Violations,
    focus: Option<FormField>,
}

impl ProductForm {
    pub fn blank() -> Self {
        Self::default()
    }

    /// Pre-fill from an existing record; numbers are rendered back to text
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            stock: product.stock.to_string(),
            category: product.category.clone(),
            description: product.description.clone(),
            errors: Violations::new(),
            focus: None,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Price => &self.price,
            FormField::Stock => &self.stock,
            FormField::Category => &self.category,
            FormField::Description => &self.description,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Price => &mut self.price,
            FormField::Stock => &mut self.stock,
            FormField::Category => &mut self.category,
            FormField::Description => &mut self.description,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    pub fn focus(&self) -> FormField {
        self.focus.unwrap_or(FormField::Name)
    }

    pub fn focus_next(&mut self) {
        self.focus = Some(self.focus().next());
    }

    pub fn focus_previous(&mut self) {
        self.focus = Some(self.focus().previous());
    }

    pub fn push_char(&mut self, c: char) {
        let field = self.focus();
        self.value_mut(field).push(c);
    }

    pub fn pop_char(&mut self) {
        let field = self.focus();
        self.value_mut(field).pop();
    }

    pub fn errors(&self) -> &Violations {
        &self.errors
    }

    pub(crate) fn set_errors(&mut self, errors: Violations) {
        self.errors = errors;
    }

    /// Run every rule and collect all failures rather than stopping at the
    /// first one.
    pub fn validate(&self) -> Result<ValidatedForm, Violations> {
        let mut violations = Violations::new();

        if self.name.trim().is_empty() {
            violations.push(Violation::new(FormField::Name, ViolationKind::MissingField));
        }

        let price = parse_price(&self.price)
            .map_err(|kind| violations.push(Violation::new(FormField::Price, kind)))
            .ok();

        if self.category.trim().is_empty() {
            violations.push(Violation::new(
                FormField::Category,
                ViolationKind::MissingField,
            ));
        }

        let stock = parse_stock(&self.stock)
            .map_err(|kind| violations.push(Violation::new(FormField::Stock, kind)))
            .ok();

        match (price, stock) {
            (Some(price), Some(stock)) if violations.is_empty() => Ok(ValidatedForm {
                name: self.name.trim().to_string(),
                price,
                stock: stock.unwrap_or(0),
                category: self.category.trim().to_string(),
                description: self.description.trim().to_string(),
            }),
            _ => Err(violations),
        }
    }
}

/// Price is required and must be a finite, non-negative number
pub fn parse_price(raw: &str) -> Result<f64, ViolationKind> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ViolationKind::MissingField);
    }
    match raw.parse::<f64>() {
        // adding 0.0 folds "-0" into 0
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value + 0.0),
        _ => Err(ViolationKind::InvalidNumber),
    }
}

/// Stock is optional; when given it must be a non-negative whole number.
/// Whole-valued decimals such as "3.0" are accepted.
pub fn parse_stock(raw: &str) -> Result<Option<u64>, ViolationKind> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    if let Ok(value) = raw.parse::<u64>() {
        return Ok(Some(value));
    }
    match raw.parse::<f64>() {
        Ok(value)
            if value.is_finite()
                && value >= 0.0
                && value.fract() == 0.0
                && value <= u64::MAX as f64 =>
        {
            Ok(Some(value as u64))
        }
        _ => Err(ViolationKind::InvalidNumber),
    }
}

/// Form input that passed validation, normalized and typed
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedForm {
    pub name: String,
    pub price: f64,
    pub stock: u64,
    pub category: String,
    pub description: String,
}

impl ValidatedForm {
    pub fn into_product(
        self,
        id: ProductId,
        created_at: DateTime<Utc>,
        tags: Vec<String>,
    ) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            category: self.category,
            stock: self.stock,
            description: self.description,
            created_at: Some(created_at),
            is_active: true,
            tags,
        }
    }
}

/// Create/edit dialog state. The edit target lives inside the variant so an
/// open edit dialog without a target cannot be expressed.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Dialog {
    #[default]
    Closed,
    Creating(ProductForm),
    Editing { id: ProductId, form: ProductForm },
}

impl Dialog {
    pub fn is_open(&self) -> bool {
        !matches!(self, Dialog::Closed)
    }

    pub fn mode(&self) -> Option<FormMode> {
        match self {
            Dialog::Closed => None,
            Dialog::Creating(_) => Some(FormMode::Create),
            Dialog::Editing { id, .. } => Some(FormMode::Edit(*id)),
        }
    }

    pub fn form(&self) -> Option<&ProductForm> {
        match self {
            Dialog::Closed => None,
            Dialog::Creating(form) | Dialog::Editing { form, .. } => Some(form),
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut ProductForm> {
        match self {
            Dialog::Closed => None,
            Dialog::Creating(form) | Dialog::Editing { form, .. } => Some(form),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, price: &str, category: &str, stock: &str) -> ProductForm {
        let mut form = ProductForm::blank();
        form.set(FormField::Name, name);
        form.set(FormField::Price, price);
        form.set(FormField::Category, category);
        form.set(FormField::Stock, stock);
        form
    }

    fn kinds(violations: &Violations) -> Vec<(FormField, ViolationKind)> {
        violations.iter().map(|v| (v.field, v.kind)).collect()
    }

    #[test]
    fn test_valid_form_is_normalized() {
        let mut form = filled("  Mug ", "9.5", " Kitchen", "");
        form.set(FormField::Description, "  stoneware  ");

        let valid = form.validate().unwrap();
        assert_eq!(valid.name, "Mug");
        assert_eq!(valid.price, 9.5);
        assert_eq!(valid.stock, 0);
        assert_eq!(valid.category, "Kitchen");
        assert_eq!(valid.description, "stoneware");
    }

    #[test]
    fn test_all_violations_are_collected() {
        let form = filled(" ", "", "", "-1");
        let violations = form.validate().unwrap_err();

        assert_eq!(
            kinds(&violations),
            vec![
                (FormField::Name, ViolationKind::MissingField),
                (FormField::Price, ViolationKind::MissingField),
                (FormField::Stock, ViolationKind::InvalidNumber),
                (FormField::Category, ViolationKind::MissingField),
            ]
        );
    }

    #[test]
    fn test_price_rules() {
        assert_eq!(parse_price("12"), Ok(12.0));
        assert_eq!(parse_price(" 0.25 "), Ok(0.25));
        assert_eq!(parse_price("-0"), Ok(0.0));
        assert_eq!(parse_price("   "), Err(ViolationKind::MissingField));
        assert_eq!(parse_price("-5"), Err(ViolationKind::InvalidNumber));
        assert_eq!(parse_price("abc"), Err(ViolationKind::InvalidNumber));
        assert_eq!(parse_price("inf"), Err(ViolationKind::InvalidNumber));
        assert_eq!(parse_price("NaN"), Err(ViolationKind::InvalidNumber));
    }

    #[test]
    fn test_stock_rules() {
        assert_eq!(parse_stock(""), Ok(None));
        assert_eq!(parse_stock("  "), Ok(None));
        assert_eq!(parse_stock("4"), Ok(Some(4)));
        assert_eq!(parse_stock("3.0"), Ok(Some(3)));
        assert_eq!(parse_stock("2.5"), Err(ViolationKind::InvalidNumber));
        assert_eq!(parse_stock("-1"), Err(ViolationKind::InvalidNumber));
        assert_eq!(parse_stock("many"), Err(ViolationKind::InvalidNumber));
    }

    #[test]
    fn test_prefill_renders_numbers_as_text() {
        let product = Product {
            id: ProductId::new(1),
            name: "Lamp".to_string(),
            price: 20.0,
            category: "Home".to_string(),
            stock: 3,
            description: String::new(),
            created_at: None,
            is_active: true,
            tags: Vec::new(),
        };
        let form = ProductForm::from_product(&product);
        assert_eq!(form.value(FormField::Price), "20");
        assert_eq!(form.value(FormField::Stock), "3");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = ProductForm::blank();
        form.push_char('M');
        form.focus_next();
        form.push_char('9');
        form.push_char('x');
        form.pop_char();

        assert_eq!(form.value(FormField::Name), "M");
        assert_eq!(form.value(FormField::Price), "9");
        assert_eq!(form.focus(), FormField::Price);
    }

    #[test]
    fn test_dialog_mode() {
        assert_eq!(Dialog::Closed.mode(), None);
        assert_eq!(
            Dialog::Creating(ProductForm::blank()).mode(),
            Some(FormMode::Create)
        );
        let editing = Dialog::Editing {
            id: ProductId::new(4),
            form: ProductForm::blank(),
        };
        assert_eq!(editing.mode(), Some(FormMode::Edit(ProductId::new(4))));
        assert!(editing.is_open());
    }
}
