use prettytable::{Cell, Row, Table};
use rowguard_core::ValidationResult;

use crate::utils::numbers::format_numbers;
use crate::Reporter;

pub struct StdOutFormatter {
    intro: String,
    intro_len: usize,
}

impl StdOutFormatter {
    pub fn new(version: String) -> Self {
        let s = format!("rowguard v{} - Validation Report", version);
        let n = s.len();
        Self {
            intro: s,
            intro_len: n,
        }
    }

    pub fn print_loading_start(&self) {
        println!("Loading data...");
    }

    pub fn print_validation_start(&self) {
        println!("\nValidating...");
    }

    pub fn print_sheet_result(&self, result: &ValidationResult) {
        let status = if result.is_passed() {
            "PASSED"
        } else {
            "FAILED"
        };
        let rows_formatted = format_numbers(result.total_rows);

        println!(
            "\n{} ({} rows) - {}",
            result.sheet_name, rows_formatted, status
        );

        if result.field_results().is_empty() {
            return;
        }
        println!("{}", render_breakdown(result));
    }

    pub fn print_summary(&self, error_rows: usize) {
        println!("\n===================================");
        println!("Validation finished, {} errors found", error_rows);
    }
}

/// Per-field rule breakdown, sorted by field then rule for stable output.
fn render_breakdown(result: &ValidationResult) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Field"),
        Cell::new("Rule"),
        Cell::new("Violations"),
        Cell::new("% Rows"),
    ]));

    let mut fields: Vec<&String> = result.field_results().keys().collect();
    fields.sort();

    for field in fields {
        for rule in &result.field_results()[field] {
            table.add_row(Row::new(vec![
                Cell::new(field),
                Cell::new(&rule.rule_name),
                Cell::new(&format_numbers(rule.violation_count)),
                Cell::new(&format!("{:.2}%", rule.violation_percentage)),
            ]));
        }
    }

    table.to_string()
}

impl Reporter for StdOutFormatter {
    fn on_start(&self) {
        let underline = "=".repeat(self.intro_len);

        println!("{}", self.intro);
        println!("{}", underline);
    }

    fn on_loading(&self) {
        self.print_loading_start();
    }

    fn on_validation_start(&self) {
        self.print_validation_start();
    }

    fn on_sheet_result(&mut self, result: &ValidationResult) {
        self.print_sheet_result(result);
    }

    fn on_complete(&self, error_rows: usize) {
        self.print_summary(error_rows);
    }
}
