use crate::Result;
use catalog_types::{Product, parse_products, read_products};
use std::fmt;
use std::path::PathBuf;

/// Product list shipped with the binary
pub const DEFAULT_SEED: &str = include_str!("../data/products.json");

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    Embedded,
    File(PathBuf),
}

impl SeedSource {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => SeedSource::File(path),
            None => SeedSource::Embedded,
        }
    }
}

impl fmt::Display for SeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedSource::Embedded => write!(f, "built-in catalog"),
            SeedSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Read the initial product list. Called once per session.
pub fn load_seed(source: &SeedSource) -> Result<Vec<Product>> {
    let products = match source {
        SeedSource::Embedded => parse_products(DEFAULT_SEED)?,
        SeedSource::File(path) => read_products(path)?,
    };
    tracing::info!(%source, products = products.len(), "seed loaded");
    Ok(products)
}
