use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorResponse {
    pub name:       String,
    pub birth_date: Option<String>,
    pub death_date: Option<String>,
}
