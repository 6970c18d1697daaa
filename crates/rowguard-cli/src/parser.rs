use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationDoc {
    pub dictionaries: HashMap<String, Vec<String>>,
    pub fields: Vec<FieldDoc>,
    pub key_field: usize,
    pub error_message_column: String,
    #[serde(default)]
    pub skip_header: bool,
}

#[derive(Debug, Deserialize)]
pub struct FieldDoc {
    #[serde(rename = "fieldID")]
    pub field_id: usize,
    #[serde(rename = "type", default)]
    pub field_type: String,
    #[serde(default)]
    pub storage: String,
    pub separator: Option<String>,
    #[serde(default)]
    pub rules: Vec<RuleDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDoc {
    #[serde(rename = "type")]
    pub rule_type: String,
    pub dictionary: Option<String>,
    pub ref_field: Option<usize>,
    pub error_message: String,
}

pub fn parse_config(path: &Path) -> Result<ValidationDoc> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let doc: ValidationDoc = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(doc)
}
