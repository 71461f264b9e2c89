use std::time::{Duration, Instant};

use catalog_types::{Product, ProductId, ViewMode, Violations};
use chrono::{DateTime, Utc};

use crate::debounce::Debouncer;
use crate::filter::{SearchQuery, filter_products};
use crate::form::{Dialog, FormMode, ProductForm};
use crate::paginator::{DEFAULT_PAGE_SIZE, Paginator};
use crate::store::{ProductStore, Upsert};

pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogOptions {
    pub page_size: usize,
    pub search_delay: Duration,
    pub view_mode: ViewMode,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            search_delay: DEFAULT_SEARCH_DELAY,
            view_mode: ViewMode::List,
        }
    }
}

/// Result of submitting the product dialog
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(ProductId),
    Updated(ProductId),
    /// Validation failed; the dialog stays open with these errors attached
    Rejected(Violations),
    /// The store refused the write; the dialog stays open with its input
    Ignored,
    /// No dialog was open
    NotOpen,
}

/// The product screen's whole state: collection, search text and applied
/// query, current page, layout and dialog.
///
/// The raw search text changes on every keystroke but only reaches the
/// filter once the debouncer fires via [`Catalog::tick`].
#[derive(Debug, Clone)]
pub struct Catalog {
    store: ProductStore,
    search_input: String,
    debounce: Debouncer<String>,
    query: SearchQuery,
    paginator: Paginator,
    view_mode: ViewMode,
    dialog: Dialog,
}

impl Catalog {
    pub fn new(seed: Vec<Product>, options: CatalogOptions) -> Self {
        tracing::debug!(products = seed.len(), page_size = options.page_size, "catalog opened");
        Self {
            store: ProductStore::new(seed),
            search_input: String::new(),
            debounce: Debouncer::new(options.search_delay),
            query: SearchQuery::default(),
            paginator: Paginator::new(options.page_size),
            view_mode: options.view_mode,
            dialog: Dialog::Closed,
        }
    }

    pub fn store(&self) -> &ProductStore {
        &self.store
    }

    // --------------------------------------------------------
    // Search
    // --------------------------------------------------------

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn set_search_input(&mut self, text: impl Into<String>, now: Instant) {
        self.search_input = text.into();
        self.debounce.schedule(self.search_input.clone(), now);
    }

    pub fn push_search_char(&mut self, c: char, now: Instant) {
        self.search_input.push(c);
        self.debounce.schedule(self.search_input.clone(), now);
    }

    pub fn pop_search_char(&mut self, now: Instant) {
        if self.search_input.pop().is_some() {
            self.debounce.schedule(self.search_input.clone(), now);
        }
    }

    /// Apply the pending search text once it has been quiet long enough.
    /// Returns true when a query was applied.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.debounce.poll(now) {
            Some(text) => {
                self.apply_query(&text);
                true
            }
            None => false,
        }
    }

    /// Apply the pending search text immediately
    pub fn apply_search_now(&mut self) -> bool {
        match self.debounce.flush() {
            Some(text) => {
                self.apply_query(&text);
                true
            }
            None => false,
        }
    }

    fn apply_query(&mut self, text: &str) {
        self.query = SearchQuery::parse(text);
        self.paginator.reset();
        tracing::debug!(query = self.query.as_str(), matches = self.filtered_len(), "search applied");
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn search_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    pub fn search_remaining(&self, now: Instant) -> Option<Duration> {
        self.debounce.remaining(now)
    }

    pub fn filtered(&self) -> Vec<&Product> {
        filter_products(self.store.as_slice(), &self.query)
    }

    pub fn filtered_len(&self) -> usize {
        if self.query.is_empty() {
            return self.store.len();
        }
        self.store.iter().filter(|p| self.query.matches(p)).count()
    }

    // --------------------------------------------------------
    // Pagination
    // --------------------------------------------------------

    pub fn page(&self) -> usize {
        self.paginator.page()
    }

    pub fn page_size(&self) -> usize {
        self.paginator.page_size()
    }

    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages(self.filtered_len())
    }

    /// The current page window of the filtered collection
    pub fn page_items(&self) -> Vec<&Product> {
        let filtered = self.filtered();
        self.paginator.window(&filtered).to_vec()
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        let count = self.filtered_len();
        let moved = self.paginator.go_to(page, count);
        if !moved {
            tracing::trace!(page, total = self.paginator.total_pages(count), "page change ignored");
        }
        moved
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.paginator.page() + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        match self.paginator.page().checked_sub(1) {
            Some(page) => self.go_to_page(page),
            None => false,
        }
    }

    // --------------------------------------------------------
    // Layout
    // --------------------------------------------------------

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggled();
    }

    // --------------------------------------------------------
    // Dialog
    // --------------------------------------------------------

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    pub fn form_mut(&mut self) -> Option<&mut ProductForm> {
        self.dialog.form_mut()
    }

    pub fn open_create(&mut self) {
        self.dialog = Dialog::Creating(ProductForm::blank());
    }

    /// Open the dialog pre-filled from `id`. Returns false if no such record.
    pub fn open_edit(&mut self, id: ProductId) -> bool {
        match self.store.get(id) {
            Some(product) => {
                self.dialog = Dialog::Editing {
                    id,
                    form: ProductForm::from_product(product),
                };
                true
            }
            None => false,
        }
    }

    /// Close without submitting; the form contents are dropped
    pub fn close_dialog(&mut self) {
        self.dialog = Dialog::Closed;
    }

    /// Validate the open form and, if it passes, upsert the record and close
    /// the dialog. The dialog stays open when the store refuses the write.
    ///
    /// Editing keeps the record's id, `created_at` and tags. A record seeded
    /// without a creation time receives `now` on its first edit.
    pub fn submit(&mut self, now: DateTime<Utc>) -> SubmitOutcome {
        let Some(mode) = self.dialog.mode() else {
            return SubmitOutcome::NotOpen;
        };
        let Some(validation) = self.dialog.form().map(ProductForm::validate) else {
            return SubmitOutcome::NotOpen;
        };

        let valid = match validation {
            Ok(valid) => valid,
            Err(violations) => {
                tracing::debug!(%violations, "product form rejected");
                if let Some(form) = self.dialog.form_mut() {
                    form.set_errors(violations.clone());
                }
                return SubmitOutcome::Rejected(violations);
            }
        };

        let (id, created_at, tags, editing) = match mode {
            FormMode::Create => (self.store.next_id(now), now, Vec::new(), None),
            FormMode::Edit(id) => {
                let existing = self.store.get(id);
                let created_at = existing.and_then(|p| p.created_at).unwrap_or(now);
                let tags = existing.map(|p| p.tags.clone()).unwrap_or_default();
                (id, created_at, tags, Some(id))
            }
        };

        let outcome = match self
            .store
            .upsert(valid.into_product(id, created_at, tags), editing)
        {
            Upsert::Created => {
                tracing::info!(%id, "product created");
                SubmitOutcome::Created(id)
            }
            Upsert::Updated => {
                tracing::info!(%id, "product updated");
                SubmitOutcome::Updated(id)
            }
            // nothing was written; keep the typed input
            Upsert::Ignored => return SubmitOutcome::Ignored,
        };

        self.dialog = Dialog::Closed;
        self.paginator.clamp(self.filtered_len());
        outcome
    }
}
