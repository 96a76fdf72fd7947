use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditionsResponse {
    pub entries: Vec<EditionEntry>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditionEntry {
    pub title:        Option<String>,
    pub publish_date: Option<String>,
    pub publishers:   Option<Vec<String>>,
    pub languages:    Option<Vec<LanguageKey>>,
    pub isbn_10:      Option<Vec<String>>,
    pub isbn_13:      Option<Vec<String>>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageKey {
    pub key: String,
}
