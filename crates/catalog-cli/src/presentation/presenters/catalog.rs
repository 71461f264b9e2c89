use catalog_engine::{Catalog, Dialog, FormMode};
use catalog_types::{FormField, Product, Theme};

use crate::presentation::formatters::{format_added, format_price};
use crate::presentation::view_models::{
    FormFieldViewModel, FormViewModel, ProductPageViewModel, ProductRowViewModel,
    ProductsScreenViewModel, SearchBoxViewModel, StatusBarViewModel,
};

pub fn present_row(product: &Product, currency: &str) -> ProductRowViewModel {
    ProductRowViewModel {
        id: product.id.get(),
        name: product.name.clone(),
        category: product.category.clone(),
        price: product.price,
        price_label: format_price(currency, product.price),
        stock: product.stock,
        description: product.description.clone(),
        added: format_added(product.created_at),
    }
}

pub fn present_page(catalog: &Catalog, currency: &str) -> ProductPageViewModel {
    ProductPageViewModel {
        query: catalog.query().as_str().to_string(),
        view: catalog.view_mode(),
        page: catalog.page(),
        total_pages: catalog.total_pages(),
        page_size: catalog.page_size(),
        total_matches: catalog.filtered_len(),
        products: catalog
            .page_items()
            .into_iter()
            .map(|p| present_row(p, currency))
            .collect(),
    }
}

pub fn present_form(dialog: &Dialog) -> Option<FormViewModel> {
    let mode = dialog.mode()?;
    let form = dialog.form()?;

    let (title, subtitle, submit_label) = match mode {
        FormMode::Create => ("Add product", "Create a new catalog entry.", "Add product"),
        FormMode::Edit(_) => (
            "Edit product",
            "Update the details of this product.",
            "Update product",
        ),
    };

    let fields = FormField::ALL
        .iter()
        .map(|&field| FormFieldViewModel {
            label: field.label(),
            value: form.value(field).to_string(),
            placeholder: field.placeholder(),
            error: form.errors().for_field(field).map(|v| v.message()),
            focused: form.focus() == field,
        })
        .collect();

    Some(FormViewModel {
        title,
        subtitle,
        submit_label,
        fields,
    })
}

/// Renderer-owned UI state the screen needs besides the catalog itself
pub struct ScreenInputs {
    pub theme: Theme,
    pub search_focused: bool,
    pub selected: usize,
    pub status: StatusBarViewModel,
}

pub fn present_screen(
    catalog: &Catalog,
    currency: &str,
    inputs: ScreenInputs,
) -> ProductsScreenViewModel {
    let page = present_page(catalog, currency);
    let selected = if page.products.is_empty() {
        None
    } else {
        Some(inputs.selected.min(page.products.len() - 1))
    };

    ProductsScreenViewModel {
        theme: inputs.theme,
        search: SearchBoxViewModel {
            input: catalog.search_input().to_string(),
            focused: inputs.search_focused,
            pending: catalog.search_pending(),
        },
        page,
        selected,
        form: present_form(catalog.dialog()),
        status: inputs.status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::StatusLevel;
    use catalog_engine::CatalogOptions;
    use catalog_types::{ProductId, ViewMode};

    fn catalog(count: i64) -> Catalog {
        let seed = (1..=count)
            .map(|i| Product {
                id: ProductId::new(i),
                name: format!("Item {i}"),
                price: 10.0 * i as f64,
                category: "Home".to_string(),
                stock: i as u64,
                description: String::new(),
                created_at: None,
                is_active: true,
                tags: Vec::new(),
            })
            .collect();
        Catalog::new(seed, CatalogOptions::default())
    }

    fn inputs(selected: usize) -> ScreenInputs {
        ScreenInputs {
            theme: Theme::Dark,
            search_focused: false,
            selected,
            status: StatusBarViewModel {
                message: String::new(),
                level: StatusLevel::Info,
            },
        }
    }

    #[test]
    fn test_page_view_model() {
        let mut catalog = catalog(8);
        catalog.go_to_page(2);
        let page = present_page(&catalog, "₹");

        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.total_matches, 8);
        assert_eq!(page.view, ViewMode::List);
        assert!(page.has_prev());
        assert!(!page.has_next());
        let labels: Vec<&str> = page.products.iter().map(|p| p.price_label.as_str()).collect();
        assert_eq!(labels, vec!["₹70", "₹80"]);
        assert_eq!(page.products[0].added, "unknown");
    }

    #[test]
    fn test_form_view_model_titles_and_errors() {
        let mut catalog = catalog(1);
        assert!(present_form(catalog.dialog()).is_none());

        catalog.open_create();
        catalog.submit(chrono::Utc::now());
        let form = present_form(catalog.dialog()).unwrap();
        assert_eq!(form.title, "Add product");
        assert_eq!(form.fields[0].error, Some("Name is required."));
        assert!(form.fields[0].focused);
        // stock is optional
        assert_eq!(form.fields[2].label, "Stock");
        assert_eq!(form.fields[2].error, None);

        catalog.close_dialog();
        catalog.open_edit(ProductId::new(1));
        let form = present_form(catalog.dialog()).unwrap();
        assert_eq!(form.title, "Edit product");
        assert_eq!(form.submit_label, "Update product");
        assert_eq!(form.fields[1].value, "10");
    }

    #[test]
    fn test_selection_is_clamped_to_page() {
        let catalog = catalog(3);
        let screen = present_screen(&catalog, "₹", inputs(10));
        assert_eq!(screen.selected, Some(2));

        let empty = Catalog::new(Vec::new(), CatalogOptions::default());
        let screen = present_screen(&empty, "₹", inputs(0));
        assert_eq!(screen.selected, None);
    }
}
