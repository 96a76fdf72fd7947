use std::sync::{Arc, Mutex, MutexGuard};

use crate::types::book::BookSummary;

use super::{
    pagination::{page_count, PageWindow},
    query::{SearchTerms, TermField},
};

/// Everything the search views share: the entered terms, the current result
/// page, and the server-reported total. `results` holds only the current
/// page's items; `total_results` is whatever the catalog counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQueryState {
    pub terms:         SearchTerms,
    pub results:       Vec<BookSummary>,
    pub current_page:  usize,
    pub total_results: usize,
}

impl Default for SearchQueryState {
    fn default() -> Self {
        Self {
            terms:         SearchTerms::default(),
            results:       vec![],
            current_page:  1,
            total_results: 0,
        }
    }
}

/// Shared handle to one [`SearchQueryState`]. The search-entry view and the
/// results view both hold a clone; setters are the only mutation path and
/// `snapshot` is what rendering works from.
#[derive(Default, Debug, Clone)]
pub struct SearchContext {
    inner: Arc<Mutex<SearchQueryState>>,
}

impl SearchContext {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, SearchQueryState> {
        self.inner.lock().expect("search state lock poisoned")
    }

    pub fn snapshot(&self) -> SearchQueryState {
        self.lock().clone()
    }

    pub fn terms(&self) -> SearchTerms {
        self.lock().terms.clone()
    }

    pub fn set_terms(&self, terms: SearchTerms) {
        self.lock().terms = terms;
    }

    pub fn set_term(&self, field: TermField, value: String) {
        self.lock().terms.set(field, value);
    }

    pub fn set_current_page(&self, page: usize) {
        self.lock().current_page = page;
    }

    pub fn set_results(&self, results: Vec<BookSummary>) {
        self.lock().results = results;
    }

    pub fn set_total_results(&self, total: usize) {
        self.lock().total_results = total;
    }

    /// Applies a fetched page as one mutation, so `current_page` can never
    /// be observed pointing at another page's `results`.
    pub fn apply_page(&self, page: usize, results: Vec<BookSummary>, total: usize) {
        let mut state = self.lock();
        state.current_page = page;
        state.results = results;
        state.total_results = total;
    }

    pub fn page_count(&self) -> usize {
        page_count(self.lock().total_results)
    }

    pub fn window(&self) -> PageWindow {
        let state = self.lock();
        PageWindow::of(state.current_page, state.total_results)
    }
}
