use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Fixed-size page windowing over a sequence whose length is passed in on
/// every call. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    page: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            page: 1,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.page_size).max(1)
    }

    /// Move to `page` if it lies in `[1, total_pages]`; otherwise leave the
    /// current page alone and return false.
    pub fn go_to(&mut self, page: usize, count: usize) -> bool {
        if page < 1 || page > self.total_pages(count) {
            return false;
        }
        self.page = page;
        true
    }

    pub fn next(&mut self, count: usize) -> bool {
        self.go_to(self.page + 1, count)
    }

    pub fn prev(&mut self, count: usize) -> bool {
        match self.page.checked_sub(1) {
            Some(page) => self.go_to(page, count),
            None => false,
        }
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Pull the page back inside the valid range after the sequence shrank
    pub fn clamp(&mut self, count: usize) {
        self.page = self.page.min(self.total_pages(count));
    }

    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    pub fn is_last(&self, count: usize) -> bool {
        self.page >= self.total_pages(count)
    }

    /// Index range of the current page, cut to `count`
    pub fn range(&self, count: usize) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(count);
        let end = (start + self.page_size).min(count);
        start..end
    }

    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }
}
