use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex},
    time::Duration,
};

use anyhow::{bail, Result};
use pretty_assertions::assert_eq;
use tokio::sync::Notify;

use openshelf::{
    catalog::schema::{
        edition::EditionsResponse,
        search::{Doc, SearchResponse},
        work::WorkResponse,
    },
    search::{
        context::SearchContext, coordinator::SearchCoordinator, pagination::PAGE_SIZE,
        query::TermField,
    },
    traits::CatalogSource,
};

/// A catalog whose responses can be held back, released in a chosen order,
/// or made to fail, so overlapping fetches can be driven deterministically.
#[derive(Clone, Default)]
struct ScriptedCatalog {
    total:   usize,
    gates:   Arc<Mutex<HashMap<usize, Arc<Notify>>>>,
    failing: Arc<Mutex<HashSet<usize>>>,
    calls:   Arc<Mutex<Vec<usize>>>,
}

impl ScriptedCatalog {
    fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    fn block_page(&self, page: usize) {
        self.gates
            .lock()
            .unwrap()
            .insert(page, Arc::new(Notify::new()));
    }

    fn release_page(&self, page: usize) {
        if let Some(gate) = self.gates.lock().unwrap().get(&page) {
            gate.notify_one();
        }
    }

    fn fail_page(&self, page: usize) {
        self.failing.lock().unwrap().insert(page);
    }

    fn calls(&self) -> Vec<usize> {
        self.calls.lock().unwrap().clone()
    }

    async fn wait_for_call(&self, page: usize) {
        loop {
            if self.calls().contains(&page) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }

    fn page_docs(&self, page: usize) -> Vec<Doc> {
        let start = (page - 1) * PAGE_SIZE;
        let len = PAGE_SIZE.min(self.total.saturating_sub(start));
        (0..len)
            .map(|i| Doc {
                key:           format!("/works/OL{page}x{i}W"),
                title:         format!("Book {page}-{i}"),
                author_name:   Some(vec!["Some Author".to_string()]),
                edition_count: Some(1),
            })
            .collect()
    }
}

impl CatalogSource for ScriptedCatalog {
    async fn search(&self, _query: &str, page: usize) -> Result<SearchResponse> {
        self.calls.lock().unwrap().push(page);
        let gate = self.gates.lock().unwrap().get(&page).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if self.failing.lock().unwrap().contains(&page) {
            bail!("catalog unreachable");
        }
        Ok(SearchResponse {
            docs:      self.page_docs(page),
            num_found: self.total,
        })
    }

    async fn work(&self, _id: &str) -> Result<WorkResponse> {
        bail!("not scripted");
    }

    async fn editions(&self, _id: &str) -> Result<EditionsResponse> {
        bail!("not scripted");
    }

    async fn author_name(&self, _key: &str) -> Result<String> {
        bail!("not scripted");
    }

    async fn language_name(&self, _key: &str) -> Result<String> {
        bail!("not scripted");
    }
}

/// Context with terms entered and a first page already applied, as if one
/// search had completed.
fn seeded(
    catalog: &ScriptedCatalog,
    total: usize,
) -> (SearchContext, Arc<SearchCoordinator<ScriptedCatalog>>) {
    let context = SearchContext::new();
    context.set_term(TermField::Title, "dune".to_string());
    context.apply_page(1, vec![], total);
    let coordinator = Arc::new(SearchCoordinator::new(context.clone(), catalog.clone()));
    (context, coordinator)
}

#[tokio::test]
async fn blank_terms_issue_no_fetch() {
    let catalog = ScriptedCatalog::new(45);
    let coordinator = SearchCoordinator::new(SearchContext::new(), catalog.clone());
    assert!(!coordinator.search().await.unwrap());
    assert_eq!(catalog.calls(), Vec::<usize>::new());
}

#[tokio::test]
async fn search_lands_on_page_one() {
    let catalog = ScriptedCatalog::new(45);
    let context = SearchContext::new();
    let coordinator = SearchCoordinator::new(context.clone(), catalog.clone());
    coordinator.update_term(TermField::Title, "dune");
    assert!(coordinator.search().await.unwrap());
    let state = context.snapshot();
    assert_eq!(state.current_page, 1);
    assert_eq!(state.total_results, 45);
    assert_eq!(state.results.len(), 10);
    assert_eq!(state.results[0].id, "OL1x0W");
}

#[tokio::test]
async fn repeated_search_is_idempotent() {
    let catalog = ScriptedCatalog::new(45);
    let context = SearchContext::new();
    let coordinator = SearchCoordinator::new(context.clone(), catalog.clone());
    coordinator.update_term(TermField::Author, "herbert");
    coordinator.search().await.unwrap();
    let first = context.snapshot();
    coordinator.search().await.unwrap();
    assert_eq!(context.snapshot(), first);
    assert_eq!(catalog.calls(), vec![1, 1]);
}

#[tokio::test]
async fn out_of_range_pages_are_rejected_without_a_fetch() {
    let catalog = ScriptedCatalog::new(45);
    let (context, coordinator) = seeded(&catalog, 45);
    let before = context.snapshot();
    assert!(!coordinator.go_to_page(0).await.unwrap());
    assert!(!coordinator.go_to_page(6).await.unwrap());
    assert_eq!(catalog.calls(), Vec::<usize>::new());
    assert_eq!(context.snapshot(), before);
}

#[tokio::test]
async fn no_results_means_no_valid_pages() {
    let catalog = ScriptedCatalog::new(0);
    let (_, coordinator) = seeded(&catalog, 0);
    assert!(!coordinator.go_to_page(1).await.unwrap());
    assert_eq!(catalog.calls(), Vec::<usize>::new());
}

#[tokio::test]
async fn page_change_applies_page_and_results_together() {
    let catalog = ScriptedCatalog::new(45);
    let (context, coordinator) = seeded(&catalog, 45);
    assert!(coordinator.go_to_page(2).await.unwrap());
    let state = context.snapshot();
    assert_eq!(state.current_page, 2);
    assert_eq!(state.results[0].title, "Book 2-0");
    assert_eq!(state.results.len(), 10);
}

#[tokio::test]
async fn failed_fetch_leaves_previous_state_in_place() {
    let catalog = ScriptedCatalog::new(45);
    let context = SearchContext::new();
    let coordinator = SearchCoordinator::new(context.clone(), catalog.clone());
    coordinator.update_term(TermField::Title, "dune");
    coordinator.search().await.unwrap();
    let before = context.snapshot();

    catalog.fail_page(2);
    assert!(coordinator.go_to_page(2).await.is_err());
    assert_eq!(context.snapshot(), before);
}

#[tokio::test]
async fn newest_request_wins_when_the_stale_one_resolves_last() {
    let catalog = ScriptedCatalog::new(45);
    let (context, coordinator) = seeded(&catalog, 45);
    catalog.block_page(2);
    catalog.block_page(3);

    let c2 = Arc::clone(&coordinator);
    let t2 = tokio::spawn(async move { c2.go_to_page(2).await });
    catalog.wait_for_call(2).await;
    let c3 = Arc::clone(&coordinator);
    let t3 = tokio::spawn(async move { c3.go_to_page(3).await });
    catalog.wait_for_call(3).await;

    // The newer request resolves first; the stale response that arrives
    // afterwards must be discarded.
    catalog.release_page(3);
    t3.await.unwrap().unwrap();
    catalog.release_page(2);
    t2.await.unwrap().unwrap();

    let state = context.snapshot();
    assert_eq!(state.current_page, 3);
    assert!(state
        .results
        .iter()
        .all(|book| book.title.starts_with("Book 3-")));
}

#[tokio::test]
async fn newest_request_wins_with_in_order_completion_too() {
    let catalog = ScriptedCatalog::new(45);
    let (context, coordinator) = seeded(&catalog, 45);
    catalog.block_page(2);
    catalog.block_page(3);

    let c2 = Arc::clone(&coordinator);
    let t2 = tokio::spawn(async move { c2.go_to_page(2).await });
    catalog.wait_for_call(2).await;
    let c3 = Arc::clone(&coordinator);
    let t3 = tokio::spawn(async move { c3.go_to_page(3).await });
    catalog.wait_for_call(3).await;

    catalog.release_page(2);
    t2.await.unwrap().unwrap();
    catalog.release_page(3);
    t3.await.unwrap().unwrap();

    let state = context.snapshot();
    assert_eq!(state.current_page, 3);
    assert!(state
        .results
        .iter()
        .all(|book| book.title.starts_with("Book 3-")));
}

#[tokio::test]
async fn term_updates_are_visible_to_every_context_clone() {
    let catalog = ScriptedCatalog::new(0);
    let context = SearchContext::new();
    let results_side = context.clone();
    let coordinator = SearchCoordinator::new(context, catalog);
    coordinator.update_term(TermField::Subject, "ecology");
    assert_eq!(results_side.snapshot().terms.subject, "ecology");
}
