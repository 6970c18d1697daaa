//! Rule evaluators, one module per rule kind.
//!
//! Each evaluator is a pure function over one row: it receives the cell
//! indices and rule payload, and returns the violation fragment or `None`.
//! Fragments start with a space so the row validator can concatenate them
//! directly.

pub mod membership;
pub mod overlap;
pub mod presence;
