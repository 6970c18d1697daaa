//! Cell tokenization and value normalization.
//!
//! Multi-value cells are split on the field's separator. Comparisons always
//! use the trimmed, uppercased form of a token; violation messages echo the
//! original token text untouched.

use std::collections::HashSet;

use xxhash_rust::xxh3::xxh3_64;

use crate::utils::hasher::Xxh3Builder;

/// One candidate value from a cell: the original text slice and the
/// normalized comparison key derived from it.
pub struct Token<'a> {
    pub raw: &'a str,
    pub key: String,
}

/// Normalized comparison form: trimmed and uppercased.
pub fn normalize(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Split a cell on `separator`, dropping tokens that are empty after
/// trimming.
pub fn tokenize<'a>(cell: &'a str, separator: &str) -> Vec<Token<'a>> {
    cell.split(separator)
        .filter_map(|piece| {
            let key = normalize(piece);
            if key.is_empty() {
                None
            } else {
                Some(Token { raw: piece, key })
            }
        })
        .collect()
}

/// Hashed key set for one side of a membership comparison.
pub fn normalized_keys(cell: &str, separator: &str) -> HashSet<u64, Xxh3Builder> {
    let mut keys = HashSet::with_hasher(Xxh3Builder);
    for token in tokenize(cell, separator) {
        let _ = keys.insert(xxh3_64(token.key.as_bytes()));
    }
    keys
}
