//! # Seriate
//!
//! Typed scalar cells and row materialization for columnar time-series
//! storage.
//!
//! A store declares each column with one [`DataKind`]; the read path
//! decodes pages into [`PrimitiveValue`] wrappers, materializes them into
//! [`Field`] cells, collects cells into timestamped [`RowRecord`]s, and
//! boxes cells into kind-erased [`Value`]s at generic surfaces such as
//! drivers and row printers.
//!
//! ## Quick Start
//!
//! ```
//! use seriate::prelude::*;
//!
//! // A page wrapper read for an INT32 column becomes a cell
//! let cell = Field::from_primitive(DataKind::Int32, &PrimitiveValue::Int32(42))?;
//! assert_eq!(cell.int32_value()?, 42);
//!
//! // Cells materialize into rows
//! let mut row = RowRecord::new(1_717_300_000_000);
//! row.push(cell);
//! row.push(Field::Null);
//! assert_eq!(row.to_string(), "1717300000000\t42\tnull");
//!
//! // And box into generic values at the driver boundary
//! let boxed = row.fields()[0].to_value(DataKind::Int32)?;
//! assert_eq!(boxed, Some(Value::Int32(42)));
//! # Ok::<(), seriate::FieldError>(())
//! ```
//!
//! ## The Cell Model
//!
//! - [`Field`] - one column's value in one row, tagged by kind
//! - [`DataKind`] - the kind enumeration with wire byte codes
//! - [`Binary`] - shared byte payload behind `TEXT`/`BLOB`/`STRING`
//! - [`PrimitiveValue`] - the page readers' typed wrapper
//! - [`Value`] - the kind-erased form for generic consumers
//! - [`RowRecord`] - a timestamped row of cells
//!
//! Null cells have exactly one representation, [`Field::Null`], and every
//! typed read is checked: a wrong-slot access is a
//! [`FieldError::KindMismatch`], never a silent default.

#![warn(missing_docs)]

mod binary;
mod datakind;
mod error;
mod field;
mod primitive;
mod row;
mod value;

pub mod date;
pub mod prelude;

// Re-export the cell model
pub use binary::Binary;
pub use datakind::DataKind;
pub use field::Field;
pub use primitive::PrimitiveValue;
pub use row::RowRecord;
pub use value::Value;

// Re-export error handling
pub use error::{FieldError, Result};
