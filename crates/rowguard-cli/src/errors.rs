use rowguard_core::RuleError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Field {field_id}: IN_DICTIONARY rule is missing its 'dictionary' name")]
    MissingDictionaryName { field_id: usize },

    #[error("Field {field_id}: NOT_IN_FIELD rule is missing its 'refField' index")]
    MissingRefField { field_id: usize },

    // Rejections from the core model (unknown dictionary, missing separator,
    // bad column reference)
    #[error("Invalid rule configuration")]
    Rule(#[from] RuleError),
}
