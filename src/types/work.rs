use serde::{Deserialize, Serialize};

use crate::catalog::schema::work::{AuthorEntry, WorkResponse};

pub const NO_DESCRIPTION: &str = "No description listed";
pub const NO_AUTHORS: &str = "No authors listed";
pub const NO_SUBJECTS: &str = "No Subjects Listed";

const PREVIEW_LENGTH: usize = 350;

/// Where a work's author name comes from: inlined in the work record, or
/// behind a reference that needs its own lookup. Resolved once when the
/// response is ingested so nothing downstream deals with the wire shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthorSource {
    Named(String),
    Reference(String),
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDetails {
    pub title:       String,
    pub description: Option<String>,
    pub subjects:    Vec<String>,
    pub authors:     Vec<AuthorSource>,
}

impl From<WorkResponse> for WorkDetails {
    fn from(work: WorkResponse) -> Self {
        Self {
            title:       work.title.unwrap_or_default(),
            description: work.description.map(|d| d.into_value()),
            subjects:    work.subjects.unwrap_or_default(),
            authors:     work
                .authors
                .unwrap_or_default()
                .into_iter()
                .map(|entry| match entry {
                    AuthorEntry::Reference(r) => AuthorSource::Reference(r.author.key),
                    AuthorEntry::Inline(i) => AuthorSource::Named(i.name),
                })
                .collect(),
        }
    }
}

impl WorkDetails {
    /// The first 350 characters of the description, or all of it when it is
    /// short enough, or the fallback text when there is none.
    pub fn description_preview(&self) -> String {
        match self.description.as_deref() {
            None | Some("") => NO_DESCRIPTION.to_string(),
            Some(text) => {
                if text.chars().count() > PREVIEW_LENGTH {
                    let cut: String = text.chars().take(PREVIEW_LENGTH).collect();
                    format!("{cut}...")
                } else {
                    text.to_string()
                }
            }
        }
    }

    pub fn description_full(&self) -> &str {
        match self.description.as_deref() {
            None | Some("") => NO_DESCRIPTION,
            Some(text) => text,
        }
    }

    pub fn has_longer_description(&self) -> bool {
        self.description
            .as_deref()
            .is_some_and(|text| text.chars().count() > PREVIEW_LENGTH)
    }
}
