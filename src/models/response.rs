use std::collections::HashMap;

use serde::Deserialize;

/// Backend response for form submissions. The shape is backend-defined and
/// only loosely checked: every field is defaulted so a partial or foreign
/// body still deserializes.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct BackendResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub errors: HashMap<String, Vec<String>>,
}

impl BackendResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }

    /// Human-readable failure text: the backend message followed by the
    /// per-field errors flattened as `field : error` lines.
    pub fn failure_notice(&self) -> String {
        let mut parts = Vec::new();
        if !self.message.is_empty() {
            parts.push(self.message.clone());
        }
        for (field, errors) in &self.errors {
            for error in errors {
                parts.push(format!("{field} : {error}"));
            }
        }
        if parts.is_empty() {
            return "the server returned an unexpected response".to_string();
        }
        parts.join("\n")
    }
}

/// One entry of the `GET /api/services/` listing.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Service {
    pub id: u32,
    pub nom: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duree_minutes: Option<u32>,
}
