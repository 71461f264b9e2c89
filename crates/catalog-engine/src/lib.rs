//! Product-list view state.
//!
//! Everything here is synchronous and clock-injected: callers pass `now`
//! (an `Instant` for the search debounce, a `DateTime<Utc>` for record
//! timestamps) so the same state machine drives both the interactive TUI and
//! the one-shot `list` command.

pub mod catalog;
pub mod debounce;
pub mod filter;
pub mod form;
pub mod paginator;
pub mod store;

pub use catalog::{Catalog, CatalogOptions, DEFAULT_SEARCH_DELAY, SubmitOutcome};
pub use debounce::Debouncer;
pub use filter::{SearchQuery, filter_products};
pub use form::{Dialog, FormMode, ProductForm, ValidatedForm, parse_price, parse_stock};
pub use paginator::{DEFAULT_PAGE_SIZE, Paginator};
pub use store::{IdGenerator, ProductStore, Upsert};
