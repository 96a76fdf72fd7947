use std::{collections::HashMap, time::Duration};

use anyhow::{Context, Result};
use const_format::concatcp;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{
    config::Config,
    search::pagination::PAGE_SIZE,
    traits::CatalogSource,
    types::{
        edition::{Edition, LANGUAGE_UNAVAILABLE, VALUE_MISSING},
        work::{AuthorSource, WorkDetails},
    },
};

use super::schema::{
    author::AuthorResponse, edition::EditionsResponse, language::LanguageResponse,
    search::SearchResponse, work::WorkResponse,
};

const USER_AGENT: &str = concatcp!("openshelf/", env!("CARGO_PKG_VERSION"));
const SEARCH_FIELDS: &str = "key,title,author_name,edition_count";

#[derive(Debug, Clone)]
pub struct CatalogClient {
    client:   reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            base_url: config.catalog_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &HashMap<&str, String>,
    ) -> Result<T> {
        debug!("GET {url}");
        let body = self
            .client
            .get(url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let mut deserializer = serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(&mut deserializer)
            .with_context(|| format!("unexpected response shape from {url}"))
    }

    /// Resolves the display names for a work's authors. Lookups run
    /// independently; a failed one drops out of the list instead of failing
    /// the others.
    pub async fn resolve_author_names(&self, work: &WorkDetails) -> Vec<String> {
        let mut handles = Vec::with_capacity(work.authors.len());
        for author in work.authors.iter().cloned() {
            let client = self.clone();
            handles.push(tokio::spawn(async move {
                match author {
                    AuthorSource::Named(name) => Some(name),
                    AuthorSource::Reference(key) => match client.author_name(&key).await {
                        Ok(name) => Some(name),
                        Err(e) => {
                            warn!("author lookup for {key} failed: {e:#}");
                            None
                        }
                    },
                }
            }));
        }
        let mut names = Vec::with_capacity(handles.len());
        for handle in handles {
            if let Ok(Some(name)) = handle.await {
                names.push(name);
            }
        }
        names
    }

    /// Resolves an edition's primary language to a display name. Editions
    /// without a language reference get "N/A" without a lookup; a failed
    /// lookup degrades to "Unavailable" rather than failing the caller.
    pub async fn resolve_language(&self, edition: &Edition) -> String {
        match &edition.language_key {
            None => VALUE_MISSING.to_string(),
            Some(key) => match self.language_name(key).await {
                Ok(name) => name,
                Err(e) => {
                    warn!("language lookup for {key} failed: {e:#}");
                    LANGUAGE_UNAVAILABLE.to_string()
                }
            },
        }
    }
}

impl CatalogSource for CatalogClient {
    async fn search(&self, query: &str, page: usize) -> Result<SearchResponse> {
        let url = format!("{}/search.json", self.base_url);
        let mut params = HashMap::new();
        params.insert("q", query.to_string());
        params.insert("fields", SEARCH_FIELDS.to_string());
        params.insert("limit", PAGE_SIZE.to_string());
        params.insert("page", page.to_string());
        self.get_json(&url, &params).await
    }

    async fn work(&self, id: &str) -> Result<WorkResponse> {
        let url = format!("{}/works/{}.json", self.base_url, id);
        self.get_json(&url, &HashMap::new()).await
    }

    async fn editions(&self, id: &str) -> Result<EditionsResponse> {
        let url = format!("{}/works/{}/editions.json", self.base_url, id);
        self.get_json(&url, &HashMap::new()).await
    }

    async fn author_name(&self, key: &str) -> Result<String> {
        let url = format!("{}{}.json", self.base_url, key);
        let author: AuthorResponse = self.get_json(&url, &HashMap::new()).await?;
        Ok(author.name)
    }

    async fn language_name(&self, key: &str) -> Result<String> {
        let url = format!("{}{}.json", self.base_url, key);
        let language: LanguageResponse = self.get_json(&url, &HashMap::new()).await?;
        Ok(language.name)
    }
}
