use crate::model::{Rule, Validation};
use crate::report::ValidationReport;
use crate::rules::{membership, overlap, presence};
use crate::sheet::cell;

/// Validate one row: fields in configured order, rules in configured order,
/// every non-empty evaluator result concatenated in order. Each fragment
/// carries its own leading space, so the concatenation reads naturally.
pub fn validate_row(
    row: &[String],
    validation: &Validation,
    headers: &[String],
    report: &ValidationReport,
) -> String {
    let mut row_result = String::new();

    for field in validation.fields() {
        for rule in &field.rules {
            let fragment = match rule {
                Rule::NonNull { error_message } => {
                    presence::evaluate(row, field.field_id, error_message, headers)
                }
                Rule::InDictionary {
                    dictionary,
                    error_message,
                } => {
                    // Separator and dictionary presence are guaranteed by
                    // Validation::new
                    match (field.separator.as_deref(), validation.dictionary(dictionary)) {
                        (Some(separator), Some(dictionary)) => membership::evaluate(
                            row,
                            field.field_id,
                            separator,
                            dictionary,
                            error_message,
                            headers,
                        ),
                        _ => None,
                    }
                }
                Rule::NotInField {
                    ref_field,
                    error_message,
                } => match field.separator.as_deref() {
                    Some(separator) => overlap::evaluate(
                        row,
                        field.field_id,
                        separator,
                        *ref_field,
                        error_message,
                        headers,
                    ),
                    None => None,
                },
                Rule::Unknown { kind } => {
                    log::warn!(
                        "Unknown rule type '{}' on field {}, skipping",
                        kind,
                        field.field_id
                    );
                    None
                }
            };

            if let Some(text) = fragment {
                report.record(cell(headers, field.field_id), rule.name(), 1);
                row_result.push_str(&text);
            }
        }
    }

    row_result
}
