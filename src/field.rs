//! Typed scalar cells
//!
//! [`Field`] is one column's value in one materialized row. The read path
//! builds fields from page wrappers ([`Field::from_primitive`]), query
//! execution hands them to consumers inside
//! [`RowRecord`](crate::RowRecord)s, and generic surfaces box them
//! through [`Value`] ([`Field::to_value`] / [`Field::from_value`]).
//!
//! ## Slot Sharing
//!
//! Kinds that store the same primitive share an accessor, and the sharing
//! is part of the contract:
//!
//! | Accessor | Accepted variants |
//! |----------|-------------------|
//! | `int32_value` | `Int32`, `Date` (raw day-offset) |
//! | `int64_value` | `Int64`, `Timestamp` |
//! | `binary_value` | `Text`, `Blob`, `String` |
//! | `date_value` | `Date`, `Int32` (converted to a calendar date) |
//!
//! Any other variant behind an accessor is a
//! [`KindMismatch`](FieldError::KindMismatch); a null cell behind any
//! accessor is a [`NullField`](FieldError::NullField). No accessor ever
//! fabricates a default.
//!
//! ## Null Cells
//!
//! [`Field::Null`] is the single absent representation: the column has no
//! value at this row. Boxing short-circuits on it ([`to_value`] yields
//! `Ok(None)` before looking at the requested kind) and `None` unboxes
//! back to it.
//!
//! [`to_value`]: Field::to_value

use crate::binary::Binary;
use crate::datakind::DataKind;
use crate::date;
use crate::error::{FieldError, Result};
use crate::primitive::PrimitiveValue;
use crate::value::Value;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One column's value in one materialized row.
///
/// A field is built fully formed: directly as a variant, from a generic
/// value ([`from_value`](Field::from_value)), or from a page wrapper
/// ([`from_primitive`](Field::from_primitive)). There are no kind-less
/// constructors and no slot setters.
///
/// `Clone` is the row pipeline's copy operation. It is cheap for every
/// variant: payload variants share their bytes by reference
/// ([`Binary::ptr_eq`] observably holds between a cell and its clone).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Field {
    /// No value for this column at this row
    Null,

    /// Boolean cell
    Boolean(bool),

    /// 32-bit integer cell
    Int32(i32),

    /// 64-bit integer cell
    Int64(i64),

    /// 32-bit float cell
    Float(f32),

    /// 64-bit float cell
    Double(f64),

    /// UTF-8 text cell
    Text(Binary),

    /// Epoch-tick timestamp cell
    Timestamp(i64),

    /// Calendar-date cell, carrying the day-offset storage form
    Date(i32),

    /// Opaque byte cell
    Blob(Binary),

    /// String cell
    String(Binary),
}

impl Field {
    /// The kind this cell holds, or `None` for a null cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use seriate::{DataKind, Field};
    ///
    /// assert_eq!(Field::Int32(7).kind(), Some(DataKind::Int32));
    /// assert_eq!(Field::Null.kind(), None);
    /// ```
    pub fn kind(&self) -> Option<DataKind> {
        match self {
            Field::Null => None,
            Field::Boolean(_) => Some(DataKind::Boolean),
            Field::Int32(_) => Some(DataKind::Int32),
            Field::Int64(_) => Some(DataKind::Int64),
            Field::Float(_) => Some(DataKind::Float),
            Field::Double(_) => Some(DataKind::Double),
            Field::Text(_) => Some(DataKind::Text),
            Field::Timestamp(_) => Some(DataKind::Timestamp),
            Field::Date(_) => Some(DataKind::Date),
            Field::Blob(_) => Some(DataKind::Blob),
            Field::String(_) => Some(DataKind::String),
        }
    }

    /// Check if this cell is null
    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    fn mismatch(&self, expected: &'static str) -> FieldError {
        match self.kind() {
            Some(actual) => FieldError::KindMismatch { expected, actual },
            None => FieldError::NullField,
        }
    }

    /// Read a `Boolean` cell.
    pub fn bool_value(&self) -> Result<bool> {
        match self {
            Field::Null => Err(FieldError::NullField),
            Field::Boolean(v) => Ok(*v),
            other => Err(other.mismatch("BOOLEAN")),
        }
    }

    /// Read the i32 slot: an `Int32` cell, or the raw day-offset of a
    /// `Date` cell.
    pub fn int32_value(&self) -> Result<i32> {
        match self {
            Field::Null => Err(FieldError::NullField),
            Field::Int32(v) | Field::Date(v) => Ok(*v),
            other => Err(other.mismatch("INT32")),
        }
    }

    /// Read the i64 slot: an `Int64` cell, or the tick of a `Timestamp`
    /// cell.
    pub fn int64_value(&self) -> Result<i64> {
        match self {
            Field::Null => Err(FieldError::NullField),
            Field::Int64(v) | Field::Timestamp(v) => Ok(*v),
            other => Err(other.mismatch("INT64")),
        }
    }

    /// Read a `Float` cell.
    pub fn float_value(&self) -> Result<f32> {
        match self {
            Field::Null => Err(FieldError::NullField),
            Field::Float(v) => Ok(*v),
            other => Err(other.mismatch("FLOAT")),
        }
    }

    /// Read a `Double` cell.
    pub fn double_value(&self) -> Result<f64> {
        match self {
            Field::Null => Err(FieldError::NullField),
            Field::Double(v) => Ok(*v),
            other => Err(other.mismatch("DOUBLE")),
        }
    }

    /// Read the payload slot of a `Text`, `Blob`, or `String` cell.
    ///
    /// The returned handle shares the cell's bytes.
    pub fn binary_value(&self) -> Result<Binary> {
        match self {
            Field::Null => Err(FieldError::NullField),
            Field::Text(b) | Field::Blob(b) | Field::String(b) => Ok(b.clone()),
            other => Err(other.mismatch("BINARY")),
        }
    }

    /// Read a `Date` cell (or the i32 slot of an `Int32` cell) as a
    /// calendar date.
    ///
    /// Fails with [`DateOutOfRange`](FieldError::DateOutOfRange) when the
    /// stored offset has no calendar form.
    pub fn date_value(&self) -> Result<NaiveDate> {
        match self {
            Field::Null => Err(FieldError::NullField),
            Field::Date(d) | Field::Int32(d) => {
                date::from_day_offset(*d).ok_or(FieldError::DateOutOfRange(*d))
            }
            other => Err(other.mismatch("DATE")),
        }
    }

    /// Box this cell into the generic form for `kind`.
    ///
    /// A null cell yields `Ok(None)` before any kind validation, so null
    /// columns box to absence even under a kind outside the scalar set.
    /// Otherwise the requested kind picks the slot: the slot-sharing
    /// aliases apply (`Int32` of a `Date` cell boxes the raw day-offset,
    /// `Timestamp` boxes as [`Value::Int64`]), `Date` boxes the converted
    /// calendar date, and the payload kinds box a shared handle.
    ///
    /// # Examples
    ///
    /// ```
    /// use seriate::{DataKind, Field, Value};
    ///
    /// let cell = Field::Int32(42);
    /// assert_eq!(cell.to_value(DataKind::Int32)?, Some(Value::Int32(42)));
    /// assert_eq!(Field::Null.to_value(DataKind::Int32)?, None);
    /// # Ok::<(), seriate::FieldError>(())
    /// ```
    pub fn to_value(&self, kind: DataKind) -> Result<Option<Value>> {
        if self.is_null() {
            return Ok(None);
        }
        let value = match kind {
            DataKind::Boolean => Value::Boolean(self.bool_value()?),
            DataKind::Int32 => Value::Int32(self.int32_value()?),
            DataKind::Int64 | DataKind::Timestamp => Value::Int64(self.int64_value()?),
            DataKind::Float => Value::Float(self.float_value()?),
            DataKind::Double => Value::Double(self.double_value()?),
            DataKind::Date => Value::Date(self.date_value()?),
            DataKind::Text | DataKind::Blob | DataKind::String => {
                Value::Binary(self.binary_value()?)
            }
            DataKind::Vector | DataKind::Unknown => {
                warn!("no generic form for kind {}", kind);
                return Err(FieldError::UnsupportedKind(kind));
            }
        };
        Ok(Some(value))
    }

    /// Unbox a generic value into a cell of `kind`.
    ///
    /// `None` builds the null cell, for every `kind`. `Some` must carry
    /// the shape [`to_value`](Field::to_value) produces for `kind`, plus
    /// the storage-form aliases: `Date` also accepts a raw
    /// [`Value::Int32`] day-offset, and `Timestamp` takes its tick from
    /// [`Value::Int64`]. Anything else is a
    /// [`KindMismatch`](FieldError::KindMismatch).
    ///
    /// # Examples
    ///
    /// ```
    /// use seriate::{DataKind, Field, Value};
    ///
    /// let cell = Field::from_value(DataKind::Date, Some(Value::Int32(19_876)))?;
    /// assert_eq!(cell, Field::Date(19_876));
    ///
    /// let absent = Field::from_value(DataKind::Date, None)?;
    /// assert!(absent.is_null());
    /// # Ok::<(), seriate::FieldError>(())
    /// ```
    pub fn from_value(kind: DataKind, value: Option<Value>) -> Result<Field> {
        let Some(value) = value else {
            return Ok(Field::Null);
        };
        let field = match (kind, value) {
            (DataKind::Boolean, Value::Boolean(b)) => Field::Boolean(b),
            (DataKind::Int32, Value::Int32(i)) => Field::Int32(i),
            (DataKind::Int64, Value::Int64(i)) => Field::Int64(i),
            (DataKind::Timestamp, Value::Int64(i)) => Field::Timestamp(i),
            (DataKind::Float, Value::Float(v)) => Field::Float(v),
            (DataKind::Double, Value::Double(v)) => Field::Double(v),
            (DataKind::Date, Value::Date(d)) => Field::Date(date::to_day_offset(d)),
            (DataKind::Date, Value::Int32(i)) => Field::Date(i),
            (DataKind::Text, Value::Binary(b)) => Field::Text(b),
            (DataKind::Blob, Value::Binary(b)) => Field::Blob(b),
            (DataKind::String, Value::Binary(b)) => Field::String(b),
            (DataKind::Vector | DataKind::Unknown, _) => {
                warn!("no cell form for kind {}", kind);
                return Err(FieldError::UnsupportedKind(kind));
            }
            (_, other) => {
                return Err(FieldError::KindMismatch {
                    expected: kind.name(),
                    actual: other.kind(),
                });
            }
        };
        Ok(field)
    }

    /// Build a cell of the schema-declared `kind` from a page wrapper.
    ///
    /// Dispatch goes by the wrapper's own kind tag; the schema kind picks
    /// the variant among the kinds that share the wrapper's slot. An
    /// `Int32` wrapper fills `Int32` or `Date` columns, an `Int64` wrapper
    /// fills `Int64` or `Timestamp`, and a `Binary` wrapper fills `Text`,
    /// `Blob`, or `String` with a shared handle. A wrapper whose slot the
    /// schema kind does not use is a
    /// [`KindMismatch`](FieldError::KindMismatch); a `Vector` wrapper or a
    /// non-scalar schema kind is
    /// [`UnsupportedKind`](FieldError::UnsupportedKind).
    pub fn from_primitive(kind: DataKind, value: &PrimitiveValue) -> Result<Field> {
        if let PrimitiveValue::Vector(_) = value {
            warn!("no cell form for wrapper kind {}", DataKind::Vector);
            return Err(FieldError::UnsupportedKind(DataKind::Vector));
        }
        if !kind.is_scalar() {
            warn!("no cell form for schema kind {}", kind);
            return Err(FieldError::UnsupportedKind(kind));
        }
        let field = match (value, kind) {
            (PrimitiveValue::Boolean(b), DataKind::Boolean) => Field::Boolean(*b),
            (PrimitiveValue::Int32(i), DataKind::Int32) => Field::Int32(*i),
            (PrimitiveValue::Int32(i), DataKind::Date) => Field::Date(*i),
            (PrimitiveValue::Int64(i), DataKind::Int64) => Field::Int64(*i),
            (PrimitiveValue::Int64(i), DataKind::Timestamp) => Field::Timestamp(*i),
            (PrimitiveValue::Float(v), DataKind::Float) => Field::Float(*v),
            (PrimitiveValue::Double(v), DataKind::Double) => Field::Double(*v),
            (PrimitiveValue::Binary(b), DataKind::Text) => Field::Text(b.clone()),
            (PrimitiveValue::Binary(b), DataKind::Blob) => Field::Blob(b.clone()),
            (PrimitiveValue::Binary(b), DataKind::String) => Field::String(b.clone()),
            _ => {
                return Err(FieldError::KindMismatch {
                    expected: kind.name(),
                    actual: value.kind(),
                });
            }
        };
        Ok(field)
    }
}

impl std::fmt::Display for Field {
    /// Render the cell for row output.
    ///
    /// A null cell renders the literal `null`. A `Date` cell renders its
    /// raw day-offset (the storage form); use
    /// [`date_value`](Field::date_value) for the calendar form.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Null => write!(f, "null"),
            Field::Boolean(b) => write!(f, "{}", b),
            Field::Int32(i) => write!(f, "{}", i),
            Field::Int64(i) => write!(f, "{}", i),
            Field::Float(v) => write!(f, "{}", v),
            Field::Double(v) => write!(f, "{}", v),
            Field::Timestamp(t) => write!(f, "{}", t),
            Field::Date(d) => write!(f, "{}", d),
            Field::Text(b) | Field::Blob(b) | Field::String(b) => write!(f, "{}", b),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
