use std::fmt::Write;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::{schema::edition::EditionEntry, CatalogClient},
    config::{Config, Styleable},
    traits::DisplayTerminal,
};

pub const VALUE_MISSING: &str = "N/A";
pub const LANGUAGE_UNAVAILABLE: &str = "Unavailable";

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edition {
    pub title:        Option<String>,
    pub publish_date: Option<String>,
    pub publishers:   Vec<String>,
    pub language_key: Option<String>,
    pub isbn_10:      Option<Vec<String>>,
    pub isbn_13:      Option<Vec<String>>,
}

impl From<EditionEntry> for Edition {
    fn from(entry: EditionEntry) -> Self {
        Self {
            title:        entry.title,
            publish_date: entry.publish_date,
            publishers:   entry.publishers.unwrap_or_default(),
            // The first language reference is the edition's primary one
            language_key: entry
                .languages
                .unwrap_or_default()
                .into_iter()
                .next()
                .map(|l| l.key),
            isbn_10:      entry.isbn_10,
            isbn_13:      entry.isbn_13,
        }
    }
}

impl Edition {
    /// ISBN-10 is preferred over ISBN-13 when both are present.
    pub fn isbn_display(&self) -> (&'static str, String) {
        match (&self.isbn_10, &self.isbn_13) {
            (Some(isbns), _) if !isbns.is_empty() => ("ISBN-10", isbns.join(", ")),
            (_, Some(isbns)) if !isbns.is_empty() => ("ISBN-13", isbns.join(", ")),
            _ => ("ISBN-13", VALUE_MISSING.to_string()),
        }
    }

    pub fn publishers_display(&self) -> String {
        if self.publishers.is_empty() {
            VALUE_MISSING.to_string()
        } else {
            self.publishers.join(", ")
        }
    }
}

impl DisplayTerminal for Edition {
    async fn fmt(&self, f: &mut String, client: &CatalogClient, config: &Config) -> Result<()> {
        // Title
        let title = self.title.as_deref().unwrap_or(VALUE_MISSING);
        write!(f, "{} ", title.style(&config.output_edition.style_content))?;
        // Publish date
        if let Some(publish_date) = &self.publish_date {
            write!(f, "{} ", config.output_publish_date.format_str(publish_date))?;
        }
        // Publisher(s)
        write!(
            f,
            "{} ",
            config.output_publisher.format_str(self.publishers_display())
        )?;
        // Language, resolved through the catalog
        let language = client.resolve_language(self).await;
        write!(f, "{} ", config.output_language.format_str(language))?;
        // ISBN
        let (label, isbns) = self.isbn_display();
        write!(
            f,
            "{}: {}",
            label,
            isbns.style(&config.output_isbn.style_content)
        )?;
        Ok(())
    }
}
