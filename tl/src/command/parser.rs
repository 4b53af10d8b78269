//! Line tokenizer

use crate::DELIMITER;

/// Split a raw input line into tokens
///
/// Surrounding whitespace (line terminator included) is stripped from the
/// whole line only; individual tokens are kept verbatim. An empty line yields
/// a single empty token.
pub fn parse(line: &str) -> Vec<String> {
    line.trim().split(DELIMITER).map(str::to_string).collect()
}
