use anyhow::Result;

use crate::{
    catalog::{
        schema::{edition::EditionsResponse, search::SearchResponse, work::WorkResponse},
        CatalogClient,
    },
    config::Config,
};

/// The catalog endpoints the coordinators are driven through. Implemented
/// over HTTP by [`CatalogClient`]; tests script their own implementation.
pub trait CatalogSource {
    async fn search(&self, query: &str, page: usize) -> Result<SearchResponse>;
    async fn work(&self, id: &str) -> Result<WorkResponse>;
    async fn editions(&self, id: &str) -> Result<EditionsResponse>;
    async fn author_name(&self, key: &str) -> Result<String>;
    async fn language_name(&self, key: &str) -> Result<String>;
}

pub trait DisplayTerminal {
    async fn fmt(&self, f: &mut String, client: &CatalogClient, config: &Config) -> Result<()>;
    async fn fmt_to_string(&self, client: &CatalogClient, config: &Config) -> Result<String> {
        let mut s = String::new();
        self.fmt(&mut s, client, config).await?;
        Ok(s)
    }
}
