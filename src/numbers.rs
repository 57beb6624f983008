#![warn(dead_code)]
////////////////////////////////////////////////////////////////////
// Numbers class
////////////////////////////////////////////////////////////////////

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::data_types::DataType;
use crate::data_types::DataType::{DoubleType, IntegerType};
use crate::numbers::Numbers::*;

/// Represents a numeric value read from a value line
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Numbers {
    F64Value(f64),
    I64Value(i64),
}

impl Eq for Numbers {}

impl Ord for Numbers {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Numbers {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_f64().partial_cmp(&other.to_f64())
    }
}

impl Hash for Numbers {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            F64Value(v) => v.to_bits().hash(state), // Convert to bits for hashing
            I64Value(v) => v.hash(state),
        }
    }
}

impl Numbers {

    ////////////////////////////////////////////////////////////////////
    //  INSTANCE METHODS
    ////////////////////////////////////////////////////////////////////

    /// returns the datatype tag of the numeric value
    pub fn get_type(&self) -> DataType {
        match self {
            F64Value(..) => DoubleType,
            I64Value(..) => IntegerType,
        }
    }

    pub fn to_f64(&self) -> f64 {
        match self {
            F64Value(v) => *v,
            I64Value(v) => v.to_f64().unwrap_or(0.),
        }
    }

    pub fn to_i64(&self) -> i64 {
        match self {
            F64Value(v) => v.to_i64().unwrap_or(0),
            I64Value(v) => *v,
        }
    }
}

impl Display for Numbers {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            F64Value(v) => write!(f, "{v}"),
            I64Value(v) => write!(f, "{v}"),
        }
    }
}
