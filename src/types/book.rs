use std::fmt::Write;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::{schema::search::Doc, CatalogClient},
    config::{Config, Styleable},
    traits::DisplayTerminal,
};

pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// One row of a search result page, reduced to what the result list shows.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id:            String,
    pub title:         String,
    pub author_names:  Vec<String>,
    pub edition_count: u32,
}

/// Catalog keys are slash-delimited paths ("/works/OL45883W"); the trailing
/// segment is the id everything else navigates by.
pub fn id_from_key(key: &str) -> &str {
    key.rsplit('/').next().unwrap_or(key)
}

impl From<Doc> for BookSummary {
    fn from(doc: Doc) -> Self {
        Self {
            id:            id_from_key(&doc.key).to_string(),
            title:         doc.title,
            author_names:  doc.author_name.unwrap_or_default(),
            edition_count: doc.edition_count.unwrap_or_default(),
        }
    }
}

impl BookSummary {
    pub fn authors_display(&self) -> String {
        if self.author_names.is_empty() {
            UNKNOWN_AUTHOR.to_string()
        } else {
            self.author_names.join(", ")
        }
    }
}

impl DisplayTerminal for BookSummary {
    async fn fmt(&self, f: &mut String, _client: &CatalogClient, config: &Config) -> Result<()> {
        // Title
        write!(f, "{} ", self.title.style(&config.output_book.style_content))?;
        // Author(s)
        write!(
            f,
            "{} ",
            config.output_author.format_str(self.authors_display())
        )?;
        // Edition count
        let editions = match self.edition_count {
            1 => "1 edition".to_string(),
            n => format!("{n} editions"),
        };
        write!(f, "{} ", config.output_edition.format_str(editions))?;
        // Id, the handle for `show` and `editions`
        write!(f, "{}", config.output_id.format_str(&self.id))?;
        Ok(())
    }
}
