//! Convenient imports for Seriate.
//!
//! This module re-exports the most commonly used types so you can get
//! started with a single import:
//!
//! ```
//! use seriate::prelude::*;
//!
//! let cell = Field::from_value(DataKind::Boolean, Some(Value::Boolean(true)))?;
//! assert_eq!(cell.to_string(), "true");
//! # Ok::<(), FieldError>(())
//! ```

// The cell model
pub use crate::binary::Binary;
pub use crate::datakind::DataKind;
pub use crate::field::Field;
pub use crate::primitive::PrimitiveValue;
pub use crate::row::RowRecord;
pub use crate::value::Value;

// Error handling
pub use crate::error::{FieldError, Result};

// Day-offset conversion
pub use crate::date::{from_day_offset, to_day_offset, EPOCH};
