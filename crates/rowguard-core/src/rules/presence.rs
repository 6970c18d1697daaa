use crate::sheet::cell;

/// NON_NULL: flags a cell that is empty after trimming.
pub fn evaluate(row: &[String], field_id: usize, message: &str, headers: &[String]) -> Option<String> {
    if !cell(row, field_id).trim().is_empty() {
        return None;
    }
    Some(format!(" Field {} {}", cell(headers, field_id), message))
}
