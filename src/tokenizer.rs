#![warn(dead_code)]
////////////////////////////////////////////////////////////////////
// tokenizer module - reads whitespace-separated typed values
////////////////////////////////////////////////////////////////////

use crate::errors::throw;
use crate::errors::Errors::InsufficientValues;
use crate::typed_values::TypedValue;

/// Reads exactly `n` whitespace-delimited tokens from `line`, left to
/// right, inferring the most specific type of each. Tokens beyond the
/// n-th are ignored; fewer than `n` tokens is an error naming the raw
/// line. The token cursor lives only for the duration of the call.
pub fn parse_values(line: &str, n: usize) -> std::io::Result<Vec<TypedValue>> {
    let mut cursor = line.split_whitespace();
    let mut values = Vec::with_capacity(n);
    for count in 0..n {
        match cursor.next() {
            Some(token) => values.push(TypedValue::wrap_token(token)?),
            None => return throw(InsufficientValues(count, n, line.to_string())),
        }
    }
    Ok(values)
}

/// Reads every token on the line; a convenience for callers that have
/// already counted the fields they expect.
pub fn parse_values_all(line: &str) -> std::io::Result<Vec<TypedValue>> {
    line.split_whitespace().map(TypedValue::wrap_token).collect()
}
