pub mod errors;
pub mod model;
pub mod normalize;
pub mod report;
pub mod results;
pub mod rules;
pub mod sheet;
pub mod utils;
pub mod validator;

pub use errors::RuleError;
pub use model::{Dictionary, Field, Rule, Validation};
pub use report::ValidationReport;
pub use results::{RowAnnotation, RuleResult, ValidationResult};
pub use sheet::{CsvSheet, Worksheet};
pub use utils::column_ref::ColumnRef;
pub use validator::ValidationRun;
