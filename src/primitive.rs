//! Typed primitive wrappers
//!
//! [`PrimitiveValue`] is the column readers' value form: each wrapper
//! carries its own kind tag next to the payload it decoded from a page.
//! Cells take their values from wrappers through
//! [`Field::from_primitive`](crate::Field::from_primitive).
//!
//! `Vector` is the one non-scalar member: it groups the wrappers of an
//! aligned row. It is a valid wrapper but has no cell representation, so
//! handing it to a cell conversion fails with
//! [`UnsupportedKind`](crate::FieldError::UnsupportedKind).

use crate::binary::Binary;
use crate::datakind::DataKind;
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// A decoded page value with its kind tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PrimitiveValue {
    /// Boolean true or false
    Boolean(bool),

    /// 32-bit signed integer (also carries day-offsets for `DATE` columns)
    Int32(i32),

    /// 64-bit signed integer (also carries ticks for `TIMESTAMP` columns)
    Int64(i64),

    /// 32-bit IEEE-754 floating point
    Float(f32),

    /// 64-bit IEEE-754 floating point
    Double(f64),

    /// Shared byte payload (`TEXT`/`BLOB`/`STRING` columns)
    Binary(Binary),

    /// The wrappers of one aligned row, in column order
    Vector(Vec<PrimitiveValue>),
}

impl PrimitiveValue {
    /// The kind tag this wrapper carries.
    ///
    /// `Binary` reports `Text`, the canonical payload kind; the declared
    /// column kind decides whether the payload lands in a `TEXT`, `BLOB`,
    /// or `STRING` cell.
    pub fn kind(&self) -> DataKind {
        match self {
            PrimitiveValue::Boolean(_) => DataKind::Boolean,
            PrimitiveValue::Int32(_) => DataKind::Int32,
            PrimitiveValue::Int64(_) => DataKind::Int64,
            PrimitiveValue::Float(_) => DataKind::Float,
            PrimitiveValue::Double(_) => DataKind::Double,
            PrimitiveValue::Binary(_) => DataKind::Text,
            PrimitiveValue::Vector(_) => DataKind::Vector,
        }
    }

    /// Try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PrimitiveValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as i32
    pub fn as_int32(&self) -> Option<i32> {
        match self {
            PrimitiveValue::Int32(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as i64
    pub fn as_int64(&self) -> Option<i64> {
        match self {
            PrimitiveValue::Int64(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as f32
    pub fn as_float(&self) -> Option<f32> {
        match self {
            PrimitiveValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get as f64
    pub fn as_double(&self) -> Option<f64> {
        match self {
            PrimitiveValue::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Try to get as a payload reference
    pub fn as_binary(&self) -> Option<&Binary> {
        match self {
            PrimitiveValue::Binary(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get as an aligned-row wrapper slice
    pub fn as_vector(&self) -> Option<&[PrimitiveValue]> {
        match self {
            PrimitiveValue::Vector(v) => Some(v),
            _ => None,
        }
    }

    /// Box this wrapper into a generic value.
    ///
    /// `Vector` has no generic form and yields `None`. The payload handle
    /// is shared, not copied.
    pub fn to_value(&self) -> Option<Value> {
        match self {
            PrimitiveValue::Boolean(b) => Some(Value::Boolean(*b)),
            PrimitiveValue::Int32(i) => Some(Value::Int32(*i)),
            PrimitiveValue::Int64(i) => Some(Value::Int64(*i)),
            PrimitiveValue::Float(f) => Some(Value::Float(*f)),
            PrimitiveValue::Double(d) => Some(Value::Double(*d)),
            PrimitiveValue::Binary(b) => Some(Value::Binary(b.clone())),
            PrimitiveValue::Vector(_) => None,
        }
    }

    /// Payload footprint in bytes, for read-buffer memory accounting.
    ///
    /// `Binary` counts its byte length; `Vector` sums its members.
    pub fn size_in_bytes(&self) -> usize {
        match self {
            PrimitiveValue::Boolean(_) => 1,
            PrimitiveValue::Int32(_) => 4,
            PrimitiveValue::Int64(_) => 8,
            PrimitiveValue::Float(_) => 4,
            PrimitiveValue::Double(_) => 8,
            PrimitiveValue::Binary(b) => b.len(),
            PrimitiveValue::Vector(v) => v.iter().map(PrimitiveValue::size_in_bytes).sum(),
        }
    }
}

impl std::fmt::Display for PrimitiveValue {
    /// Render in natural form; a vector renders its members in brackets
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrimitiveValue::Boolean(b) => write!(f, "{}", b),
            PrimitiveValue::Int32(i) => write!(f, "{}", i),
            PrimitiveValue::Int64(i) => write!(f, "{}", i),
            PrimitiveValue::Float(v) => write!(f, "{}", v),
            PrimitiveValue::Double(v) => write!(f, "{}", v),
            PrimitiveValue::Binary(b) => write!(f, "{}", b),
            PrimitiveValue::Vector(members) => {
                write!(f, "[")?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", member)?;
                }
                write!(f, "]")
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
