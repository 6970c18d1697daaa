use rowguard_core::{ColumnRef, Field, Rule, Validation};

use crate::errors::ConfigError;
use crate::parser::{FieldDoc, RuleDoc, ValidationDoc};

/// Compile the raw configuration document into the core validation
/// aggregate. A rule kind missing its payload is rejected here; an
/// unrecognized kind compiles to `Rule::Unknown` so evaluation can report
/// and skip it.
pub fn construct_validation(doc: ValidationDoc) -> Result<Validation, ConfigError> {
    let mut fields = Vec::with_capacity(doc.fields.len());
    for field in doc.fields {
        fields.push(construct_field(field)?);
    }

    let error_column = ColumnRef::parse(&doc.error_message_column)?;
    let validation = Validation::new(
        doc.dictionaries,
        fields,
        doc.key_field,
        error_column,
        doc.skip_header,
    )?;
    Ok(validation)
}

fn construct_field(doc: FieldDoc) -> Result<Field, ConfigError> {
    let field_id = doc.field_id;
    let mut rules = Vec::with_capacity(doc.rules.len());
    for rule in doc.rules {
        rules.push(construct_rule(rule, field_id)?);
    }
    Ok(Field {
        field_id,
        field_type: doc.field_type,
        storage: doc.storage,
        separator: doc.separator,
        rules,
    })
}

fn construct_rule(doc: RuleDoc, field_id: usize) -> Result<Rule, ConfigError> {
    match doc.rule_type.as_str() {
        "NON_NULL" => Ok(Rule::NonNull {
            error_message: doc.error_message,
        }),
        "IN_DICTIONARY" => {
            let dictionary = doc
                .dictionary
                .ok_or(ConfigError::MissingDictionaryName { field_id })?;
            Ok(Rule::InDictionary {
                dictionary,
                error_message: doc.error_message,
            })
        }
        "NOT_IN_FIELD" => {
            let ref_field = doc
                .ref_field
                .ok_or(ConfigError::MissingRefField { field_id })?;
            Ok(Rule::NotInField {
                ref_field,
                error_message: doc.error_message,
            })
        }
        _ => Ok(Rule::Unknown {
            kind: doc.rule_type,
        }),
    }
}
