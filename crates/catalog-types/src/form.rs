use serde::{Deserialize, Serialize};
use std::fmt;

/// Editable fields of the product form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Price,
    Stock,
    Category,
    Description,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Price,
        FormField::Stock,
        FormField::Category,
        FormField::Description,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Price => "Price",
            FormField::Stock => "Stock",
            FormField::Category => "Category",
            FormField::Description => "Description",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Product name",
            FormField::Price => "0",
            FormField::Stock => "0",
            FormField::Category => "e.g. Electronics",
            FormField::Description => "Optional details",
        }
    }

    pub fn next(&self) -> FormField {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> FormField {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label().to_lowercase())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Required text is empty after trimming
    MissingField,
    /// Not a number, or a negative one
    InvalidNumber,
}

/// One failed rule on one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub field: FormField,
    pub kind: ViolationKind,
}

impl Violation {
    pub fn new(field: FormField, kind: ViolationKind) -> Self {
        Self { field, kind }
    }

    /// Inline message shown under the offending field
    pub fn message(&self) -> &'static str {
        match (self.field, self.kind) {
            (FormField::Name, _) => "Name is required.",
            (FormField::Category, _) => "Category is required.",
            (FormField::Price, ViolationKind::MissingField) => "Price is required.",
            (FormField::Price, ViolationKind::InvalidNumber) => "Price must be a valid number.",
            (FormField::Stock, _) => "Stock must be a positive whole number.",
            (FormField::Description, _) => "Description is invalid.",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message())
    }
}

/// Every violation found by one validation pass, at most one per field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation; a field that already failed keeps its first one
    pub fn push(&mut self, violation: Violation) {
        if self.for_field(violation.field).is_none() {
            self.0.push(violation);
            self.0.sort_by_key(|v| v.field);
        }
    }

    pub fn for_field(&self, field: FormField) -> Option<&Violation> {
        self.0.iter().find(|v| v.field == field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for Violations {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_cycle_wraps() {
        assert_eq!(FormField::Description.next(), FormField::Name);
        assert_eq!(FormField::Name.previous(), FormField::Description);
        assert_eq!(FormField::Price.next(), FormField::Stock);
    }

    #[test]
    fn test_violations_keep_one_per_field_in_field_order() {
        let mut violations = Violations::new();
        violations.push(Violation::new(FormField::Category, ViolationKind::MissingField));
        violations.push(Violation::new(FormField::Name, ViolationKind::MissingField));
        violations.push(Violation::new(FormField::Name, ViolationKind::InvalidNumber));

        assert_eq!(violations.len(), 2);
        let fields: Vec<FormField> = violations.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec![FormField::Name, FormField::Category]);
        assert_eq!(
            violations.for_field(FormField::Name).map(|v| v.kind),
            Some(ViolationKind::MissingField)
        );
    }

    #[test]
    fn test_price_messages_distinguish_kind() {
        let missing = Violation::new(FormField::Price, ViolationKind::MissingField);
        let invalid = Violation::new(FormField::Price, ViolationKind::InvalidNumber);
        assert_eq!(missing.message(), "Price is required.");
        assert_eq!(invalid.message(), "Price must be a valid number.");
        assert_eq!(invalid.to_string(), "price: Price must be a valid number.");
    }
}
