use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use anyhow::Result;
use tracing::{debug, info};

use crate::{traits::CatalogSource, types::book::BookSummary};

use super::{context::SearchContext, pagination::page_count, query::TermField};

/// Turns entered terms into catalog queries and keeps the shared state's
/// page, results and total consistent across overlapping fetches.
pub struct SearchCoordinator<C> {
    context:        SearchContext,
    catalog:        C,
    latest_request: Arc<AtomicU64>,
}

impl<C: CatalogSource> SearchCoordinator<C> {
    pub fn new(context: SearchContext, catalog: C) -> Self {
        Self {
            context,
            catalog,
            latest_request: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn context(&self) -> &SearchContext {
        &self.context
    }

    /// Term edits go straight into the shared context, so every view reads
    /// the same in-progress terms.
    pub fn update_term(&self, field: TermField, value: impl Into<String>) {
        self.context.set_term(field, value.into());
    }

    /// Runs a fresh search over the current terms, landing on page 1.
    /// Returns false without fetching when every term is blank. A failed
    /// fetch leaves the previous results on screen.
    pub async fn search(&self) -> Result<bool> {
        let terms = self.context.terms();
        let Some(query) = terms.to_query() else {
            debug!("all search terms blank, not searching");
            return Ok(false);
        };
        self.fetch_page(&query, 1).await?;
        Ok(true)
    }

    /// Re-runs the current term query for page `n`. Pages outside
    /// `1..=page_count` are rejected as no-ops and return false.
    pub async fn go_to_page(&self, page: usize) -> Result<bool> {
        let state = self.context.snapshot();
        if !(1..=page_count(state.total_results)).contains(&page) {
            debug!(page, "page out of range, ignoring");
            return Ok(false);
        }
        let Some(query) = state.terms.to_query() else {
            return Ok(false);
        };
        self.fetch_page(&query, page).await?;
        Ok(true)
    }

    async fn fetch_page(&self, query: &str, page: usize) -> Result<()> {
        let ticket = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.catalog.search(query, page).await;
        // A newer request went out while this one was in flight; whatever
        // came back here, the newer one owns the state now.
        if self.latest_request.load(Ordering::SeqCst) != ticket {
            info!(page, "discarding stale search response");
            return Ok(());
        }
        let response = result?;
        let results: Vec<BookSummary> = response.docs.into_iter().map(BookSummary::from).collect();
        self.context
            .apply_page(page, results, response.num_found);
        info!(page, total = response.num_found, "search results updated");
        Ok(())
    }
}
