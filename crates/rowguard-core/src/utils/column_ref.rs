use std::fmt;

use crate::errors::RuleError;

/// Spreadsheet-style column reference used to address the error column.
///
/// Only single-letter columns (A-Z) are supported; multi-letter references
/// are rejected at parse time rather than silently writing to the wrong cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRef {
    letter: char,
}

impl ColumnRef {
    pub fn parse(value: &str) -> Result<Self, RuleError> {
        let mut chars = value.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) if letter.is_ascii_alphabetic() => Ok(Self {
                letter: letter.to_ascii_uppercase(),
            }),
            _ => Err(RuleError::InvalidColumnRef(value.to_string())),
        }
    }

    /// 0-based column index.
    pub fn index(&self) -> usize {
        (self.letter as u8 - b'A') as usize
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter)
    }
}
