////////////////////////////////////////////////////////////////////
//      Tabula v0.1.0 - line-oriented tabular input parsing
////////////////////////////////////////////////////////////////////

//! Tabula parses a small line-oriented text format that describes tabular
//! data. A line is either a metadata declaration (a *descriptor* for an
//! index, a column or a table) or a run of whitespace-separated typed
//! values. The two entry points are [`descriptors::parse_descriptor`] and
//! [`tokenizer::parse_values`]; both are pure, synchronous and keep no
//! state between calls. Reading lines from a file or stream, and building
//! actual index/column/table entities out of the parsed results, is the
//! caller's business.

#[macro_export]
macro_rules! cnv_error {
    ($e:expr) => {
        std::io::Error::new(std::io::ErrorKind::Other, $e)
    }
}

pub mod data_types;
pub mod descriptors;
pub mod errors;
pub mod numbers;
pub mod tokenizer;
pub mod typed_values;

pub use crate::descriptors::{parse_descriptor, Descriptor};
pub use crate::tokenizer::parse_values;
pub use crate::typed_values::TypedValue;
