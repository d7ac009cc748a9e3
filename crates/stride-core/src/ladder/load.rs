//! Dictionary file loader
//!
//! Reads whitespace-delimited tokens, lowercasing each before insertion. An
//! empty file yields an empty vocabulary, which the search treats as "no
//! ladder possible" (except for the begin == end case).

use std::fs;
use std::path::Path;

use crate::error::{Result, StrideError};
use crate::ladder::Vocabulary;

/// Read a dictionary from `path`
pub fn read_words(path: &Path) -> Result<Vocabulary> {
    let text = fs::read_to_string(path).map_err(|e| StrideError::DictionaryUnreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(text.split_whitespace().collect())
}
