pub mod formatters;
pub mod utils;

use rowguard_core::ValidationResult;

pub use formatters::{json::JsonFormatter, stdout::StdOutFormatter};

pub trait Reporter {
    fn on_start(&self);
    fn on_loading(&self);
    fn on_validation_start(&self);
    fn on_sheet_result(&mut self, result: &ValidationResult);
    fn on_complete(&self, error_rows: usize);
}
