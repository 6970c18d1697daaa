//! Rule model: dictionaries, fields, rules and the validation aggregate.
//!
//! The aggregate is built once from configuration and never mutated. Rule
//! misconfiguration that evaluators would otherwise trip over at runtime
//! (missing separator, unresolved dictionary name) is rejected here, at
//! construction time.

use std::collections::{HashMap, HashSet};

use xxhash_rust::xxh3::xxh3_64;

use crate::errors::RuleError;
use crate::normalize::normalize;
use crate::utils::column_ref::ColumnRef;
use crate::utils::hasher::Xxh3Builder;

/// Named set of allowed values, stored as xxh3 hashes of the normalized form.
#[derive(Debug)]
pub struct Dictionary {
    keys: HashSet<u64, Xxh3Builder>,
}

impl Dictionary {
    pub fn from_values(values: Vec<String>) -> Self {
        let mut keys = HashSet::with_hasher(Xxh3Builder);
        for value in values {
            let _ = keys.insert(xxh3_64(normalize(&value).as_bytes()));
        }
        Self { keys }
    }

    /// Membership test for an already-normalized comparison key.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(&xxh3_64(key.as_bytes()))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// One check applied to a field's value(s). Each variant carries exactly the
/// data its evaluator needs.
#[derive(Debug)]
pub enum Rule {
    NonNull {
        error_message: String,
    },
    InDictionary {
        dictionary: String,
        error_message: String,
    },
    NotInField {
        ref_field: usize,
        error_message: String,
    },
    /// Unrecognized rule kind from configuration. Reported and skipped at
    /// evaluation time, never fatal.
    Unknown {
        kind: String,
    },
}

impl Rule {
    pub fn name(&self) -> &str {
        match self {
            Rule::NonNull { .. } => "NON_NULL",
            Rule::InDictionary { .. } => "IN_DICTIONARY",
            Rule::NotInField { .. } => "NOT_IN_FIELD",
            Rule::Unknown { kind } => kind,
        }
    }

    fn splits_values(&self) -> bool {
        matches!(self, Rule::InDictionary { .. } | Rule::NotInField { .. })
    }
}

/// Validation configuration for one column.
#[derive(Debug)]
pub struct Field {
    /// 0-based column index
    pub field_id: usize,
    /// Declared value type, informational only
    pub field_type: String,
    /// Declared storage mode, informational only
    pub storage: String,
    /// Separator splitting a cell into multiple logical values
    pub separator: Option<String>,
    /// Rules applied in configured order
    pub rules: Vec<Rule>,
}

/// The root aggregate: dictionaries, fields and run-level settings.
#[derive(Debug)]
pub struct Validation {
    dictionaries: HashMap<String, Dictionary>,
    fields: Vec<Field>,
    key_field: usize,
    error_column: ColumnRef,
    skip_header: bool,
}

impl Validation {
    /// Build the aggregate, rejecting rule misconfiguration up front: a
    /// multi-value rule on a field with no separator, or an IN_DICTIONARY
    /// rule naming a dictionary absent from the mapping.
    pub fn new(
        dictionaries: HashMap<String, Vec<String>>,
        fields: Vec<Field>,
        key_field: usize,
        error_column: ColumnRef,
        skip_header: bool,
    ) -> Result<Self, RuleError> {
        for field in &fields {
            for rule in &field.rules {
                if rule.splits_values() && field.separator.is_none() {
                    return Err(RuleError::MissingSeparator {
                        field: field.field_id,
                        rule: rule.name().to_string(),
                    });
                }
                if let Rule::InDictionary { dictionary, .. } = rule {
                    if !dictionaries.contains_key(dictionary) {
                        return Err(RuleError::UnknownDictionary {
                            field: field.field_id,
                            dictionary: dictionary.clone(),
                        });
                    }
                }
            }
        }

        let dictionaries = dictionaries
            .into_iter()
            .map(|(name, values)| (name, Dictionary::from_values(values)))
            .collect();

        Ok(Self {
            dictionaries,
            fields,
            key_field,
            error_column,
            skip_header,
        })
    }

    /// Check every configured column index against the sheet width. Runs
    /// before the first row so a bad index fails fast with a diagnostic
    /// naming the field instead of surfacing mid-run.
    pub fn check_width(&self, width: usize) -> Result<(), RuleError> {
        for field in &self.fields {
            if field.field_id >= width {
                return Err(RuleError::FieldOutOfRange {
                    field: field.field_id,
                    width,
                });
            }
            for rule in &field.rules {
                if let Rule::NotInField { ref_field, .. } = rule {
                    if *ref_field >= width {
                        return Err(RuleError::RefFieldOutOfRange {
                            field: field.field_id,
                            ref_field: *ref_field,
                            width,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    pub fn dictionary(&self, name: &str) -> Option<&Dictionary> {
        self.dictionaries.get(name)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn key_field(&self) -> usize {
        self.key_field
    }

    pub fn error_column(&self) -> &ColumnRef {
        &self.error_column
    }

    pub fn skip_header(&self) -> bool {
        self.skip_header
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_column() -> ColumnRef {
        ColumnRef::parse("H").unwrap()
    }

    #[test]
    fn test_dictionary_normalizes_values_at_load() {
        let dictionary = Dictionary::from_values(vec!["red".to_string(), " Blue ".to_string()]);
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("RED"));
        assert!(dictionary.contains("BLUE"));
        assert!(!dictionary.contains("red"));
    }

    #[test]
    fn test_new_rejects_multi_value_rule_without_separator() {
        let fields = vec![Field {
            field_id: 1,
            field_type: "string".to_string(),
            storage: "multi".to_string(),
            separator: None,
            rules: vec![Rule::InDictionary {
                dictionary: "colors".to_string(),
                error_message: "has invalid values".to_string(),
            }],
        }];
        let mut dictionaries = HashMap::new();
        dictionaries.insert("colors".to_string(), vec!["RED".to_string()]);

        let result = Validation::new(dictionaries, fields, 0, error_column(), true);
        assert_eq!(
            result.err().unwrap().to_string(),
            "Field 1: rule 'IN_DICTIONARY' splits multi-value cells but the field has no separator"
        );
    }

    #[test]
    fn test_new_rejects_unknown_dictionary() {
        let fields = vec![Field {
            field_id: 2,
            field_type: "string".to_string(),
            storage: "multi".to_string(),
            separator: Some(";".to_string()),
            rules: vec![Rule::InDictionary {
                dictionary: "missing".to_string(),
                error_message: "has invalid values".to_string(),
            }],
        }];

        let result = Validation::new(HashMap::new(), fields, 0, error_column(), true);
        assert_eq!(
            result.err().unwrap().to_string(),
            "Field 2: rule 'IN_DICTIONARY' references unknown dictionary 'missing'"
        );
    }

    #[test]
    fn test_check_width_flags_field_out_of_range() {
        let fields = vec![Field {
            field_id: 5,
            field_type: "string".to_string(),
            storage: "single".to_string(),
            separator: None,
            rules: vec![Rule::NonNull {
                error_message: "is mandatory".to_string(),
            }],
        }];
        let validation = Validation::new(HashMap::new(), fields, 0, error_column(), true).unwrap();

        assert!(validation.check_width(6).is_ok());
        assert_eq!(
            validation.check_width(3).err().unwrap().to_string(),
            "Field 5 indexes a column outside the sheet width 3"
        );
    }

    #[test]
    fn test_check_width_flags_ref_field_out_of_range() {
        let fields = vec![Field {
            field_id: 0,
            field_type: "string".to_string(),
            storage: "multi".to_string(),
            separator: Some(";".to_string()),
            rules: vec![Rule::NotInField {
                ref_field: 9,
                error_message: "must not overlap".to_string(),
            }],
        }];
        let validation = Validation::new(HashMap::new(), fields, 0, error_column(), true).unwrap();

        assert_eq!(
            validation.check_width(4).err().unwrap().to_string(),
            "Field 0: rule 'NOT_IN_FIELD' references column 9 outside the sheet width 4"
        );
    }

    #[test]
    fn test_unknown_rule_kind_is_accepted() {
        let fields = vec![Field {
            field_id: 0,
            field_type: "string".to_string(),
            storage: "single".to_string(),
            separator: None,
            rules: vec![Rule::Unknown {
                kind: "FOO".to_string(),
            }],
        }];

        let validation = Validation::new(HashMap::new(), fields, 0, error_column(), false).unwrap();
        assert_eq!(validation.fields()[0].rules[0].name(), "FOO");
    }
}
