use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub docs:      Vec<Doc>,
    #[serde(rename = "numFound")]
    pub num_found: usize,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doc {
    pub key:           String,
    pub title:         String,
    pub author_name:   Option<Vec<String>>,
    pub edition_count: Option<u32>,
}
