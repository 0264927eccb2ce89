//! Options handed over by the host

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The host's check options.
///
/// Accepted at the whole-template and single-type entry points and passed
/// through untouched; no field changes how quotas are checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckOptions {
    #[serde(flatten)]
    pub settings: HashMap<String, serde_json::Value>,
}

impl CheckOptions {
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.settings.get(key)
    }
}
