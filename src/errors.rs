#![warn(dead_code)]
////////////////////////////////////////////////////////////////////
// Errors class
////////////////////////////////////////////////////////////////////

use std::fmt::{Debug, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Represents an Error Message
#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum Errors {
    InsufficientValues(usize, usize, String),
    InvalidDescriptorNumber(String, String),
    NonPositiveCount(String, i64),
    UnknownDescriptorKind(String, String),
}

impl Display for Errors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Errors::InsufficientValues(found, wanted, line) =>
                format!("Expected {wanted} values, but found only {found} in \"{line}\""),
            Errors::InvalidDescriptorNumber(line, cause) =>
                format!("Error parsing descriptor \"{line}\": {cause}"),
            Errors::NonPositiveCount(field, value) =>
                format!("{field} must be positive, but got {value}"),
            Errors::UnknownDescriptorKind(kind, line) =>
                format!("Unknown descriptor type '{kind}' in \"{line}\""),
        };
        write!(f, "{text}")
    }
}

pub fn throw<A>(error: Errors) -> std::io::Result<A> {
    Err(std::io::Error::new(std::io::ErrorKind::Other, error.to_string()))
}

/// Unit tests
#[cfg(test)]
mod tests {
    use super::*;
    use Errors::*;

    #[test]
    fn test_error_messages() {
        verify(InsufficientValues(2, 3, "1 2".into()),
               "Expected 3 values, but found only 2 in \"1 2\"");
        verify(InvalidDescriptorNumber("#table[3, x, string]".into(), "invalid digit found in string".into()),
               "Error parsing descriptor \"#table[3, x, string]\": invalid digit found in string");
        verify(NonPositiveCount("Length".into(), -1),
               "Length must be positive, but got -1");
        verify(UnknownDescriptorKind("matrix".into(), "#matrix[3]".into()),
               "Unknown descriptor type 'matrix' in \"#matrix[3]\"");
    }

    #[test]
    fn test_throw_produces_io_error() {
        let result: std::io::Result<()> = throw(NonPositiveCount("Row count".into(), 0));
        assert_eq!(result.unwrap_err().to_string(),
                   "Row count must be positive, but got 0");
    }

    fn verify(error: Errors, message: &str) {
        assert_eq!(error.to_string().as_str(), message)
    }
}
