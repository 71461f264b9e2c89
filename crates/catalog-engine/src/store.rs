use catalog_types::{Product, ProductId};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Issues identities for new records.
///
/// Ids are time-based (milliseconds since the epoch) but never repeat: each
/// id is strictly greater than both the previous one and every seeded id.
/// Returns `None` once that sequence reaches `i64::MAX`.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn seeded_from(products: &[Product]) -> Self {
        let last = products.iter().map(|p| p.id.get()).max().unwrap_or(0);
        Self { last }
    }

    pub fn next(&mut self, now: DateTime<Utc>) -> Option<ProductId> {
        let floor = self.last.checked_add(1)?;
        let candidate = now.timestamp_millis().max(floor);
        self.last = candidate;
        Some(ProductId::new(candidate))
    }
}

/// What an upsert did to the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// Prepended as a new record
    Created,
    /// Replaced the record with the same id, in place
    Updated,
    /// Nothing changed: unknown edit target or an id already taken
    Ignored,
}

/// Ordered in-memory product collection. Only `upsert` mutates it.
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    products: Vec<Product>,
    ids: IdGenerator,
}

impl ProductStore {
    pub fn new(seed: Vec<Product>) -> Self {
        let ids = IdGenerator::seeded_from(&seed);
        Self {
            products: seed,
            ids,
        }
    }

    pub fn upsert(&mut self, record: Product, editing: Option<ProductId>) -> Upsert {
        match editing {
            Some(id) => match self.products.iter_mut().find(|p| p.id == id) {
                Some(slot) => {
                    *slot = record;
                    Upsert::Updated
                }
                None => {
                    tracing::warn!(%id, "edit target not in store");
                    Upsert::Ignored
                }
            },
            None => {
                if self.get(record.id).is_some() {
                    tracing::warn!(id = %record.id, "refusing to create a record with a taken id");
                    return Upsert::Ignored;
                }
                self.products.insert(0, record);
                Upsert::Created
            }
        }
    }

    /// Fresh id for a new record. When the increasing sequence is exhausted
    /// the smallest unused positive id is handed out instead.
    pub fn next_id(&mut self, now: DateTime<Utc>) -> ProductId {
        match self.ids.next(now) {
            Some(id) => id,
            None => {
                let id = self.smallest_free_id();
                tracing::warn!(%id, "id sequence exhausted, reusing a free id");
                id
            }
        }
    }

    fn smallest_free_id(&self) -> ProductId {
        let taken: HashSet<i64> = self.products.iter().map(|p| p.id.get()).collect();
        // at most len() ids are taken, so a free one exists within 1..=len()+1
        let free = (1..).find(|n| !taken.contains(n)).unwrap_or(1);
        ProductId::new(free)
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
