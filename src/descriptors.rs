#![warn(dead_code)]
////////////////////////////////////////////////////////////////////
// Descriptor class - represents an index, column or table declaration
////////////////////////////////////////////////////////////////////

use std::fmt::{Display, Formatter};

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::cnv_error;
use crate::data_types::DataType;
use crate::errors::throw;
use crate::errors::Errors::{InvalidDescriptorNumber, NonPositiveCount, UnknownDescriptorKind};

/// The descriptor grammar: `#<kind>[<count>(, <field2>)?(, <field3>)?]`,
/// anchored to the whole line. The count accepts an optional sign so that
/// negative declarations are rejected as errors rather than ignored.
const DESCRIPTOR_FORMAT: &str =
    r"^#(\w+)\[(-?\d+)(?:\s*,\s*([^,\]]+))?(?:\s*,\s*([^\]]+))?\]$";

/// Represents a parsed metadata declaration for an index, column or table
#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum Descriptor {
    Index { len: usize, name: Option<String> },
    Column { rows: usize, data_type: DataType, name: Option<String> },
    Table { rows: usize, cols: usize, data_type: DataType },
}

impl Descriptor {

    ////////////////////////////////////////////////////////////////////
    //  STATIC METHODS
    ////////////////////////////////////////////////////////////////////

    /// creates an index descriptor; the name, when present, is trimmed
    pub fn index(len: i64, name: Option<&str>) -> std::io::Result<Self> {
        if len <= 0 {
            return throw(NonPositiveCount("Length".into(), len));
        }
        Ok(Self::Index {
            len: len as usize,
            name: name.map(|s| s.trim().to_string()),
        })
    }

    /// creates a column descriptor; the name, when present, is trimmed
    pub fn column(rows: i64, data_type: DataType, name: Option<&str>) -> std::io::Result<Self> {
        if rows <= 0 {
            return throw(NonPositiveCount("Row count".into(), rows));
        }
        Ok(Self::Column {
            rows: rows as usize,
            data_type,
            name: name.map(|s| s.trim().to_string()),
        })
    }

    /// creates a table descriptor
    pub fn table(rows: i64, cols: i64, data_type: DataType) -> std::io::Result<Self> {
        if rows <= 0 {
            return throw(NonPositiveCount("Row count".into(), rows));
        }
        if cols <= 0 {
            return throw(NonPositiveCount("Column count".into(), cols));
        }
        Ok(Self::Table {
            rows: rows as usize,
            cols: cols as usize,
            data_type,
        })
    }

    ////////////////////////////////////////////////////////////////////
    //  INSTANCE METHODS
    ////////////////////////////////////////////////////////////////////

    /// returns the declared datatype; an index carries no type
    pub fn get_data_type(&self) -> Option<DataType> {
        match self {
            Self::Index { .. } => None,
            Self::Column { data_type, .. } | Self::Table { data_type, .. } => Some(*data_type),
        }
    }

    /// returns the declared name; tables are anonymous
    pub fn get_name(&self) -> Option<&str> {
        match self {
            Self::Index { name, .. } | Self::Column { name, .. } => name.as_deref(),
            Self::Table { .. } => None,
        }
    }

    /// returns the declared number of rows (the length, for an index)
    pub fn get_row_count(&self) -> usize {
        match self {
            Self::Index { len, .. } => *len,
            Self::Column { rows, .. } | Self::Table { rows, .. } => *rows,
        }
    }

    /// renders the descriptor in its canonical textual syntax
    pub fn to_code(&self) -> String {
        match self {
            Self::Index { len, name } => match name {
                Some(name) => format!("#index[{len}, {name}]"),
                None => format!("#index[{len}]"),
            },
            Self::Column { rows, data_type, name } => match (data_type.to_type_declaration(), name) {
                (_, Some(name)) => format!("#column[{rows}, {data_type}, {name}]"),
                (Some(decl), None) => format!("#column[{rows}, {decl}]"),
                (None, None) => format!("#column[{rows}]"),
            },
            Self::Table { rows, cols, data_type } => match data_type.to_type_declaration() {
                Some(decl) => format!("#table[{rows}, {cols}, {decl}]"),
                None => format!("#table[{rows}, {cols}]"),
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!(self)
    }
}

impl Display for Descriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_code())
    }
}

/// Recognizes a descriptor line. Returns `Ok(None)` when the line does not
/// fit the declaration grammar at all (e.g. it is a value line), and an
/// error when the grammar matches but the kind is unknown or a numeric
/// field is malformed or non-positive.
pub fn parse_descriptor(line: &str) -> std::io::Result<Option<Descriptor>> {
    let regex = Regex::new(DESCRIPTOR_FORMAT).map_err(|e| cnv_error!(e))?;
    let captures = match regex.captures(line) {
        Some(captures) => captures,
        None => return Ok(None),
    };
    let field2 = captures.get(3).map(|m| m.as_str());
    let field3 = captures.get(4).map(|m| m.as_str());
    let descriptor = match &captures[1] {
        "index" => Descriptor::index(parse_count(Some(&captures[2]), line)?, field2)?,
        "column" => Descriptor::column(
            parse_count(Some(&captures[2]), line)?,
            DataType::from_type_name_opt(field2),
            field3,
        )?,
        "table" => Descriptor::table(
            parse_count(Some(&captures[2]), line)?,
            parse_count(field2, line)?,
            DataType::from_type_name_opt(field3),
        )?,
        kind => return throw(UnknownDescriptorKind(kind.to_string(), line.to_string())),
    };
    debug!("recognized {descriptor} in \"{line}\"");
    Ok(Some(descriptor))
}

/// parses a numeric descriptor field, naming the raw line on failure
fn parse_count(field: Option<&str>, line: &str) -> std::io::Result<i64> {
    match field {
        None => throw(InvalidDescriptorNumber(line.to_string(), "missing numeric field".into())),
        Some(text) => match text.trim().parse::<i64>() {
            Ok(number) => Ok(number),
            Err(cause) => throw(InvalidDescriptorNumber(line.to_string(), cause.to_string())),
        },
    }
}
