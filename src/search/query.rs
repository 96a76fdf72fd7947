use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermField {
    Title,
    Author,
    Subject,
}

/// The three free-text search fields. An empty string means "no constraint";
/// nothing is trimmed or validated beyond that.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTerms {
    pub title:   String,
    pub author:  String,
    pub subject: String,
}

impl SearchTerms {
    pub fn set(&mut self, field: TermField, value: String) {
        match field {
            TermField::Title => self.title = value,
            TermField::Author => self.author = value,
            TermField::Subject => self.subject = value,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.title.is_empty() && self.author.is_empty() && self.subject.is_empty()
    }

    /// Builds the catalog query: one `field:value` clause per non-blank
    /// field, joined by `+`. Blank fields contribute nothing at all, and a
    /// fully blank term set builds no query.
    pub fn to_query(&self) -> Option<String> {
        let mut clauses = Vec::new();
        if !self.title.is_empty() {
            clauses.push(format!("title:{}", self.title));
        }
        if !self.author.is_empty() {
            clauses.push(format!("author:{}", self.author));
        }
        if !self.subject.is_empty() {
            clauses.push(format!("subject:{}", self.subject));
        }
        if clauses.is_empty() {
            None
        } else {
            Some(clauses.join("+"))
        }
    }
}
