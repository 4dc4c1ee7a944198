//! Wrapper compatibility matrix
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// For each wrapper version, the distribution versions it can launch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapperMatrix {
    pub wrapper_pairs: BTreeMap<String, Vec<String>>,
}

impl WrapperMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, wrapper: &str, distribution: &str) {
        self.wrapper_pairs
            .entry(wrapper.to_string())
            .or_default()
            .push(distribution.to_string());
    }

    /// Make sure `wrapper` has a row even if it launches nothing
    pub fn ensure_row(&mut self, wrapper: &str) {
        self.wrapper_pairs.entry(wrapper.to_string()).or_default();
    }

    pub fn can_execute(&self, wrapper: &str, distribution: &str) -> bool {
        self.wrapper_pairs
            .get(wrapper)
            .map(|v| v.iter().any(|d| d == distribution))
            .unwrap_or(false)
    }

    /// Distributions `wrapper` can launch, empty for unknown wrappers
    pub fn executable_by(&self, wrapper: &str) -> &[String] {
        self.wrapper_pairs
            .get(wrapper)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
