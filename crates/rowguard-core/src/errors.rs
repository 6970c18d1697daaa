use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuleError {
    /// An IN_DICTIONARY rule names a dictionary missing from the configuration
    #[error("Field {field}: rule 'IN_DICTIONARY' references unknown dictionary '{dictionary}'")]
    UnknownDictionary { field: usize, dictionary: String },

    /// A multi-value rule is attached to a field with no separator
    #[error("Field {field}: rule '{rule}' splits multi-value cells but the field has no separator")]
    MissingSeparator { field: usize, rule: String },

    /// The field's own column index does not exist in the sheet
    #[error("Field {field} indexes a column outside the sheet width {width}")]
    FieldOutOfRange { field: usize, width: usize },

    /// A NOT_IN_FIELD reference index does not exist in the sheet
    #[error("Field {field}: rule 'NOT_IN_FIELD' references column {ref_field} outside the sheet width {width}")]
    RefFieldOutOfRange {
        field: usize,
        ref_field: usize,
        width: usize,
    },

    /// The error-column reference could not be parsed
    #[error("Invalid error column reference '{0}': expected a single letter A-Z")]
    InvalidColumnRef(String),

    /// The sheet has no rows, so no header row to resolve names against
    #[error("Sheet '{0}' is empty: no header row")]
    EmptySheet(String),

    /// CSV reading or writing error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// IO error while persisting the annotated copy
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
