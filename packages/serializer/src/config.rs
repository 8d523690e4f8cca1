use crate::error::SerializerResult;
use serde::{Deserialize, Serialize};

/// Options for the stylesheet serializer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SerializerConfig {
    /// Props that carry class names, in priority order. Also the attribute
    /// names matched when stripping leftover hashes from markup.
    pub class_attributes: Vec<String>,
    /// Remove registry hashes that were not aliased from class attributes
    pub strip_unreferenced_hashes: bool,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            class_attributes: vec!["class".to_string(), "className".to_string()],
            strip_unreferenced_hashes: true,
        }
    }
}

impl SerializerConfig {
    pub fn from_json(source: &str) -> SerializerResult<Self> {
        Ok(serde_json::from_str(source)?)
    }
}
