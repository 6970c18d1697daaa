use crate::model::Dictionary;
use crate::normalize::tokenize;
use crate::sheet::cell;

/// IN_DICTIONARY: flags every cell value whose normalized form is not in the
/// dictionary. Listed values keep their original text.
pub fn evaluate(
    row: &[String],
    field_id: usize,
    separator: &str,
    dictionary: &Dictionary,
    message: &str,
    headers: &[String],
) -> Option<String> {
    let mut values = String::new();
    for token in tokenize(cell(row, field_id), separator) {
        if !dictionary.contains(&token.key) {
            values.push_str(token.raw);
            values.push(';');
        }
    }
    if values.is_empty() {
        return None;
    }
    Some(format!(
        " Field {} {}, values not in dictionary: {}",
        cell(headers, field_id),
        message,
        values
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> Dictionary {
        Dictionary::from_values(vec!["RED".to_string(), "BLUE".to_string()])
    }

    fn headers() -> Vec<String> {
        vec!["Id".to_string(), "Color".to_string()]
    }

    #[test]
    fn test_lists_only_values_outside_the_dictionary() {
        let row = vec!["1".to_string(), "red;green;BLUE".to_string()];
        let result = evaluate(&row, 1, ";", &colors(), "has invalid values", &headers());
        assert_eq!(
            result.unwrap(),
            " Field Color has invalid values, values not in dictionary: green;"
        );
    }

    #[test]
    fn test_all_values_in_dictionary_passes() {
        let row = vec!["1".to_string(), "RED; blue ".to_string()];
        assert!(evaluate(&row, 1, ";", &colors(), "has invalid values", &headers()).is_none());
    }

    #[test]
    fn test_listed_values_keep_original_casing() {
        let row = vec!["1".to_string(), "Pink; Mauve".to_string()];
        let result = evaluate(&row, 1, ";", &colors(), "has invalid values", &headers());
        assert_eq!(
            result.unwrap(),
            " Field Color has invalid values, values not in dictionary: Pink; Mauve;"
        );
    }

    #[test]
    fn test_empty_tokens_are_ignored() {
        let row = vec!["1".to_string(), " ; ;".to_string()];
        assert!(evaluate(&row, 1, ";", &colors(), "has invalid values", &headers()).is_none());
    }

    #[test]
    fn test_missing_cell_passes() {
        let row = vec!["1".to_string()];
        assert!(evaluate(&row, 1, ";", &colors(), "has invalid values", &headers()).is_none());
    }
}
