use rayon::prelude::*;

use crate::errors::RuleError;
use crate::model::Validation;
use crate::report::ValidationReport;
use crate::results::{RowAnnotation, ValidationResult};
use crate::sheet::cell;
use crate::validator::row::validate_row;

/// Drives the row validator over a whole worksheet.
///
/// Row 0 supplies the column display names used in error text; it is also
/// evaluated as data unless the configuration says to skip it. Rows are
/// independent, so they are evaluated in parallel; the indexed collect keeps
/// results in row order, making the output identical to a sequential pass.
pub struct ValidationRun<'a> {
    validation: &'a Validation,
    report: ValidationReport,
}

impl<'a> ValidationRun<'a> {
    pub fn new(validation: &'a Validation) -> Self {
        Self {
            validation,
            report: ValidationReport::new(),
        }
    }

    pub fn execute(
        &self,
        sheet_name: &str,
        rows: &[Vec<String>],
    ) -> Result<ValidationResult, RuleError> {
        let Some(headers) = rows.first() else {
            return Err(RuleError::EmptySheet(sheet_name.to_string()));
        };
        self.validation.check_width(headers.len())?;

        let skip_header = self.validation.skip_header();
        let data_rows = if skip_header {
            rows.len().saturating_sub(1)
        } else {
            rows.len()
        };
        self.report.set_total_rows(data_rows);

        let row_results: Vec<String> = rows
            .par_iter()
            .enumerate()
            .map(|(index, row)| {
                if index == 0 && skip_header {
                    return String::new();
                }
                validate_row(row, self.validation, headers, &self.report)
            })
            .collect();

        let key_field = self.validation.key_field();
        let mut annotations = Vec::new();
        for (index, text) in row_results.iter().enumerate() {
            if text.is_empty() {
                continue;
            }
            let message = format!(
                "{}: {}.{}\n",
                cell(headers, key_field),
                cell(&rows[index], key_field),
                text
            );
            annotations.push(RowAnnotation {
                row: index,
                message,
            });
        }

        let mut result = ValidationResult::new(sheet_name.to_string(), data_rows);
        result.add_annotations(annotations);
        result.add_field_results(self.report.to_results());
        Ok(result)
    }

    pub fn report(&self) -> &ValidationReport {
        &self.report
    }
}
