use std::collections::HashMap;

/// Outcome of one validation run over one worksheet.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub sheet_name: String,
    /// Number of data rows evaluated (the header is excluded when skipped)
    pub total_rows: usize,
    annotations: Vec<RowAnnotation>,
    field_results: HashMap<String, Vec<RuleResult>>,
}

impl ValidationResult {
    pub fn new(sheet_name: String, total_rows: usize) -> Self {
        Self {
            sheet_name,
            total_rows,
            annotations: Vec::new(),
            field_results: HashMap::new(),
        }
    }

    pub fn add_annotations(&mut self, annotations: Vec<RowAnnotation>) {
        self.annotations = annotations;
    }

    pub fn add_field_results(&mut self, field_results: HashMap<String, Vec<RuleResult>>) {
        self.field_results = field_results;
    }

    /// Per-row annotations, in ascending row order.
    pub fn annotations(&self) -> &[RowAnnotation] {
        &self.annotations
    }

    pub fn field_results(&self) -> &HashMap<String, Vec<RuleResult>> {
        &self.field_results
    }

    /// Number of rows with at least one violation.
    pub fn error_rows(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_passed(&self) -> bool {
        self.annotations.is_empty()
    }
}

/// Error message destined for one row's error column.
#[derive(Debug, Clone)]
pub struct RowAnnotation {
    /// 0-based row index in the worksheet
    pub row: usize,
    pub message: String,
}

/// Violation count for one rule on one field.
#[derive(Debug, Clone)]
pub struct RuleResult {
    pub rule_name: String,
    pub violation_count: usize,
    pub violation_percentage: f64,
}

impl RuleResult {
    pub fn new(rule_name: String, violation_count: usize, violation_percentage: f64) -> Self {
        Self {
            rule_name,
            violation_count,
            violation_percentage,
        }
    }
}
