use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkResponse {
    pub title:       Option<String>,
    pub description: Option<Description>,
    pub subjects:    Option<Vec<String>>,
    pub authors:     Option<Vec<AuthorEntry>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Simple(String),
    Complex(DescriptionComplex),
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptionComplex {
    pub value: String,
}

impl Description {
    pub fn into_value(self) -> String {
        match self {
            Self::Simple(s) => s,
            Self::Complex(c) => c.value,
        }
    }
}

// Works carry their authors either as references that need a second lookup
// or with the name inlined; both shapes occur across the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorEntry {
    Reference(AuthorReference),
    Inline(AuthorInline),
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorReference {
    pub author: AuthorKey,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorKey {
    pub key: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorInline {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn description_as_plain_string() {
        let work: WorkResponse =
            serde_json::from_str(r#"{ "title": "Dune", "description": "A desert planet." }"#)
                .unwrap();
        assert_eq!(
            work.description,
            Some(Description::Simple("A desert planet.".to_string()))
        );
    }

    #[test]
    fn description_as_value_object() {
        let work: WorkResponse = serde_json::from_str(
            r#"{ "title": "Dune", "description": { "type": "/type/text", "value": "A desert planet." } }"#,
        )
        .unwrap();
        assert_eq!(
            work.description.map(Description::into_value),
            Some("A desert planet.".to_string())
        );
    }

    #[test]
    fn authors_as_references() {
        let work: WorkResponse = serde_json::from_str(
            r#"{ "authors": [{ "author": { "key": "/authors/OL79034A" }, "type": { "key": "/type/author_role" } }] }"#,
        )
        .unwrap();
        assert_eq!(
            work.authors,
            Some(vec![AuthorEntry::Reference(AuthorReference {
                author: AuthorKey {
                    key: "/authors/OL79034A".to_string(),
                },
            })])
        );
    }

    #[test]
    fn authors_with_inline_names() {
        let work: WorkResponse =
            serde_json::from_str(r#"{ "authors": [{ "name": "Frank Herbert" }] }"#).unwrap();
        assert_eq!(
            work.authors,
            Some(vec![AuthorEntry::Inline(AuthorInline {
                name: "Frank Herbert".to_string(),
            })])
        );
    }
}
