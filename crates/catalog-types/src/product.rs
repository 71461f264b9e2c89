use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use crate::{Error, Result};

/// Product identity, unique within a catalog session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A single catalog record.
///
/// Seed files use camelCase keys (`createdAt`, `isActive`). Optional keys
/// fall back to the defaults a freshly created record would carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub stock: u64,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_active() -> bool {
    true
}

impl Product {
    /// Check the per-record invariants: non-blank name and category, finite
    /// non-negative price. Stock is unsigned so it cannot go negative.
    pub fn check(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidSeed(format!("product {} has an empty name", self.id)));
        }
        if self.category.trim().is_empty() {
            return Err(Error::InvalidSeed(format!(
                "product {} ({}) has an empty category",
                self.id, self.name
            )));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(Error::InvalidSeed(format!(
                "product {} ({}) has an invalid price {}",
                self.id, self.name, self.price
            )));
        }
        Ok(())
    }
}

/// Seed wire shape. Stock is read signed so a negative count is reported
/// against its record instead of as a bare type error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedRecord {
    id: ProductId,
    name: String,
    price: f64,
    category: String,
    #[serde(default)]
    stock: i64,
    #[serde(default)]
    description: String,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default = "default_active")]
    is_active: bool,
    #[serde(default)]
    tags: Vec<String>,
}

impl TryFrom<SeedRecord> for Product {
    type Error = Error;

    fn try_from(record: SeedRecord) -> Result<Self> {
        let stock = u64::try_from(record.stock).map_err(|_| {
            Error::InvalidSeed(format!(
                "product {} ({}) has a negative stock {}",
                record.id, record.name, record.stock
            ))
        })?;
        Ok(Product {
            id: record.id,
            name: record.name,
            price: record.price,
            category: record.category,
            stock,
            description: record.description,
            created_at: record.created_at,
            is_active: record.is_active,
            tags: record.tags,
        })
    }
}

/// Parse a seed document (JSON array of products) and validate it.
///
/// The whole seed is rejected when any record breaks an invariant or two
/// records share an id.
pub fn parse_products(json: &str) -> Result<Vec<Product>> {
    let records: Vec<SeedRecord> = serde_json::from_str(json)?;
    let products = records
        .into_iter()
        .map(Product::try_from)
        .collect::<Result<Vec<_>>>()?;
    validate_products(&products)?;
    Ok(products)
}

/// Read and parse a seed file from disk
pub fn read_products(path: &Path) -> Result<Vec<Product>> {
    let content = std::fs::read_to_string(path)?;
    parse_products(&content)
}

pub fn validate_products(products: &[Product]) -> Result<()> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        product.check()?;
        if !seen.insert(product.id) {
            return Err(Error::InvalidSeed(format!("duplicate product id {}", product.id)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_defaults_for_missing_fields() {
        let json = r#"[{"id": 1, "name": "Lamp", "price": 20, "category": "Home"}]"#;
        let products = parse_products(json).unwrap();

        assert_eq!(products.len(), 1);
        let lamp = &products[0];
        assert_eq!(lamp.id, ProductId::new(1));
        assert_eq!(lamp.stock, 0);
        assert_eq!(lamp.description, "");
        assert!(lamp.created_at.is_none());
        assert!(lamp.is_active);
        assert!(lamp.tags.is_empty());
    }

    #[test]
    fn test_seed_reads_camel_case_keys() {
        let json = r#"[{
            "id": 7,
            "name": "Mug",
            "price": 9.5,
            "category": "Kitchen",
            "stock": 4,
            "description": "Stoneware",
            "createdAt": "2024-03-01T10:00:00Z",
            "isActive": false,
            "tags": ["ceramic"]
        }]"#;
        let products = parse_products(json).unwrap();
        let mug = &products[0];

        assert_eq!(mug.price, 9.5);
        assert!(!mug.is_active);
        assert_eq!(mug.tags, vec!["ceramic".to_string()]);
        assert_eq!(
            mug.created_at.map(|t| t.to_rfc3339()),
            Some("2024-03-01T10:00:00+00:00".to_string())
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[
            {"id": 1, "name": "A", "price": 1, "category": "X"},
            {"id": 1, "name": "B", "price": 2, "category": "Y"}
        ]"#;
        let err = parse_products(json).unwrap_err();
        assert!(matches!(err, Error::InvalidSeed(ref msg) if msg.contains("duplicate")));
    }

    #[test]
    fn test_negative_price_rejected() {
        let json = r#"[{"id": 1, "name": "A", "price": -1, "category": "X"}]"#;
        assert!(matches!(parse_products(json), Err(Error::InvalidSeed(_))));
    }

    #[test]
    fn test_negative_stock_names_the_record() {
        let json = r#"[{"id": 4, "name": "Rug", "price": 1, "category": "X", "stock": -2}]"#;
        let err = parse_products(json).unwrap_err();
        assert!(
            matches!(err, Error::InvalidSeed(ref msg) if msg == "product 4 (Rug) has a negative stock -2")
        );
    }

    #[test]
    fn test_blank_category_rejected() {
        let json = r#"[{"id": 1, "name": "A", "price": 1, "category": "   "}]"#;
        assert!(matches!(parse_products(json), Err(Error::InvalidSeed(_))));
    }
}
