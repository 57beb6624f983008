#![warn(dead_code)]
////////////////////////////////////////////////////////////////////
// DataType class
////////////////////////////////////////////////////////////////////

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::data_types::DataType::*;

/// Represents a Tabula-native datatype; the closed set of value kinds a
/// column or table may declare
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum DataType {
    AnyType,
    BooleanType,
    DateTimeType,
    DoubleType,
    IntegerType,
    NumberType,
    StringType,
}

impl DataType {

    ////////////////////////////////////////////////////////////////////
    //  STATIC METHODS
    ////////////////////////////////////////////////////////////////////

    /// resolves a datatype from its textual name (e.g. "integer");
    /// matching is case-insensitive and whitespace-trimmed, and any
    /// unrecognized name degrades to [AnyType]
    pub fn from_type_name(type_name: &str) -> DataType {
        match type_name.trim().to_lowercase().as_str() {
            "string" => StringType,
            "boolean" => BooleanType,
            "number" => NumberType,
            "integer" => IntegerType,
            "double" => DoubleType,
            "datetime" => DateTimeType,
            _ => AnyType,
        }
    }

    /// resolves a datatype from an optional textual name; an absent name
    /// maps to [AnyType]
    pub fn from_type_name_opt(type_name: Option<&str>) -> DataType {
        type_name.map(Self::from_type_name).unwrap_or(AnyType)
    }

    ////////////////////////////////////////////////////////////////////
    //  INSTANCE METHODS
    ////////////////////////////////////////////////////////////////////

    /// indicates whether a value tagged `other` satisfies a column or
    /// table declared as `self`; [NumberType] is the numeric supertype
    /// and [AnyType] accepts everything
    pub fn is_assignable_from(&self, other: &DataType) -> bool {
        match (self, other) {
            (AnyType, _) => true,
            (NumberType, IntegerType | DoubleType | NumberType) => true,
            (a, b) => a == b,
        }
    }

    pub fn to_type_declaration(&self) -> Option<String> {
        match self {
            AnyType => None,
            other => Some(other.to_string()),
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AnyType => "any",
            BooleanType => "boolean",
            DateTimeType => "datetime",
            DoubleType => "double",
            IntegerType => "integer",
            NumberType => "number",
            StringType => "string",
        };
        write!(f, "{name}")
    }
}
