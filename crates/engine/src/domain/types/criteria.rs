use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Caller-supplied evaluation context for a single `validate` call.
///
/// Accepted for forward compatibility. The engine records which criteria were
/// present but does not let them shape the validation exchange.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationCriteria {
    #[serde(flatten)]
    entries: BTreeMap<String, serde_json::Value>,
}

impl EvaluationCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.entries.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
