use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Error;

use crate::Reporter;

#[derive(Serialize, Deserialize)]
pub struct JsonFormatter {
    version: String,
    timestamp: String,
    sheets: Vec<SheetFormatter>,
}

#[derive(Serialize, Deserialize)]
struct SheetFormatter {
    name: String,
    n_rows: usize,
    error_rows: usize,
    pass: bool,
    annotations: Vec<AnnotationFormatter>,
    fields: Vec<FieldFormatter>,
}

#[derive(Serialize, Deserialize)]
struct AnnotationFormatter {
    row: usize,
    message: String,
}

#[derive(Serialize, Deserialize)]
struct FieldFormatter {
    name: String,
    rules: Vec<RuleFormatter>,
}

#[derive(Serialize, Deserialize)]
struct RuleFormatter {
    name: String,
    violations: usize,
    violation_percent: f64,
}

impl JsonFormatter {
    pub fn new(version: String) -> Self {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        Self {
            version,
            timestamp,
            sheets: Vec::new(),
        }
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Reporter for JsonFormatter {
    fn on_start(&self) {}

    fn on_loading(&self) {}

    fn on_validation_start(&self) {}

    fn on_sheet_result(&mut self, result: &rowguard_core::ValidationResult) {
        let annotations: Vec<AnnotationFormatter> = result
            .annotations()
            .iter()
            .map(|a| AnnotationFormatter {
                row: a.row,
                message: a.message.clone(),
            })
            .collect();

        let mut field_names: Vec<&String> = result.field_results().keys().collect();
        field_names.sort();
        let fields: Vec<FieldFormatter> = field_names
            .into_iter()
            .map(|name| {
                let rules: Vec<RuleFormatter> = result.field_results()[name]
                    .iter()
                    .map(|r| RuleFormatter {
                        name: r.rule_name.clone(),
                        violations: r.violation_count,
                        violation_percent: r.violation_percentage,
                    })
                    .collect();
                FieldFormatter {
                    name: name.clone(),
                    rules,
                }
            })
            .collect();

        self.sheets.push(SheetFormatter {
            name: result.sheet_name.clone(),
            n_rows: result.total_rows,
            error_rows: result.error_rows(),
            pass: result.is_passed(),
            annotations,
            fields,
        });
    }

    fn on_complete(&self, _error_rows: usize) {}
}
