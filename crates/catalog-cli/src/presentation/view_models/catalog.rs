use catalog_types::{Theme, ViewMode};
use serde::Serialize;

use super::common::StatusLevel;

/// One product, pre-formatted for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRowViewModel {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub price_label: String,
    pub stock: u64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub added: String,
}

/// The current page window plus the numbers the pager needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPageViewModel {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub query: String,
    pub view: ViewMode,
    pub page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub total_matches: usize,
    pub products: Vec<ProductRowViewModel>,
}

impl ProductPageViewModel {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormFieldViewModel {
    pub label: &'static str,
    pub value: String,
    pub placeholder: &'static str,
    pub error: Option<&'static str>,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormViewModel {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub submit_label: &'static str,
    pub fields: Vec<FormFieldViewModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchBoxViewModel {
    pub input: String,
    pub focused: bool,
    /// Typed text has not reached the filter yet
    pub pending: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusBarViewModel {
    pub message: String,
    pub level: StatusLevel,
}

/// Everything the products screen draws in one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductsScreenViewModel {
    pub theme: Theme,
    pub search: SearchBoxViewModel,
    pub page: ProductPageViewModel,
    /// Row/card highlighted for editing, index into `page.products`
    pub selected: Option<usize>,
    pub form: Option<FormViewModel>,
    pub status: StatusBarViewModel,
}
