use xxhash_rust::xxh3::xxh3_64;

use crate::normalize::{normalized_keys, tokenize};
use crate::sheet::cell;

/// NOT_IN_FIELD: flags values that overlap between two fields when overlap
/// is forbidden (e.g. mutually-exclusive tag sets). Both cells are split
/// with the evaluated field's separator.
pub fn evaluate(
    row: &[String],
    field_id: usize,
    separator: &str,
    ref_field: usize,
    message: &str,
    headers: &[String],
) -> Option<String> {
    let reference = normalized_keys(cell(row, ref_field), separator);
    let mut values = String::new();
    for token in tokenize(cell(row, field_id), separator) {
        if reference.contains(&xxh3_64(token.key.as_bytes())) {
            values.push_str(token.raw);
            values.push(';');
        }
    }
    if values.is_empty() {
        return None;
    }
    Some(format!(
        " Fields {} and {} {}, error values: {}",
        cell(headers, field_id),
        cell(headers, ref_field),
        message,
        values
    ))
}
