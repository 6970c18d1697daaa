//! Row validation and run orchestration.
//!
//! `row` dispatches one row through every configured field and rule;
//! `run` drives the row validator over a whole worksheet.

pub mod row;
pub mod run;

pub use run::ValidationRun;
