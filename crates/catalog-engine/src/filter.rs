use catalog_types::Product;

/// Normalized search term: trimmed and lower-cased.
///
/// An empty query means "no filtering".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.is_empty() || product.name.to_lowercase().contains(&self.0)
    }
}

/// Records whose name contains the query, in collection order
pub fn filter_products<'a>(products: &'a [Product], query: &SearchQuery) -> Vec<&'a Product> {
    if query.is_empty() {
        return products.iter().collect();
    }
    products.iter().filter(|p| query.matches(p)).collect()
}
