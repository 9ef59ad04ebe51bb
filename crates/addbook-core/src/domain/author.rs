//! Author references and creators

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// An author reference as returned by a catalog.
///
/// Edition records carry `{"key": "/authors/OL1A"}`, work records wrap it as
/// `{"author": {"key": ...}, "type": {...}}`. Fields are held in a sorted map
/// so two references with the same fields compare equal regardless of the
/// order they arrived in.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct AuthorRef {
    fields: BTreeMap<String, Value>,
}

impl AuthorRef {
    /// Reference with a single `key` field
    pub fn from_key(key: impl Into<String>) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert("key".to_string(), Value::String(key.into()));
        Self { fields }
    }

    /// Builder method to add an arbitrary field
    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// The author key, from `key` or the nested `author.key`.
    pub fn key(&self) -> Option<&str> {
        self.fields
            .get("key")
            .and_then(Value::as_str)
            .or_else(|| {
                self.fields
                    .get("author")
                    .and_then(|a| a.get("key"))
                    .and_then(Value::as_str)
            })
            .filter(|k| !k.is_empty())
    }

    /// Canonical serialized form with fields ordered by name at every level.
    pub fn canonical(&self) -> String {
        fn sorted(value: &Value) -> Value {
            match value {
                Value::Object(map) => {
                    let ordered: BTreeMap<&String, Value> =
                        map.iter().map(|(k, v)| (k, sorted(v))).collect();
                    serde_json::to_value(ordered).unwrap_or(Value::Null)
                }
                Value::Array(items) => Value::Array(items.iter().map(sorted).collect()),
                other => other.clone(),
            }
        }

        let ordered: BTreeMap<&String, Value> =
            self.fields.iter().map(|(k, v)| (k, sorted(v))).collect();
        serde_json::to_string(&ordered).unwrap_or_default()
    }
}

/// A parsed author name
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    pub creator_type: String,
    pub first_name: String,
    pub last_name: String,
}

impl Creator {
    pub fn author(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            creator_type: "author".to_string(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Format as "Last, First" for BibTeX
    pub fn to_bibtex_format(&self) -> String {
        if self.first_name.is_empty() {
            self.last_name.clone()
        } else {
            format!("{}, {}", self.last_name, self.first_name)
        }
    }
}
