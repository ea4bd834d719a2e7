//! Error types for field access and kind dispatch.
//!
//! Two of these conditions come straight from the cell model: [`NullField`]
//! for value access on a null cell, and [`UnsupportedKind`] for dispatch on a
//! kind outside the recognized scalar set. The other two are failures the
//! tagged representation surfaces instead of hiding: [`KindMismatch`] where a
//! caller reads a slot the cell does not carry, and [`DateOutOfRange`] where
//! a stored day-offset has no calendar form.
//!
//! [`NullField`]: FieldError::NullField
//! [`UnsupportedKind`]: FieldError::UnsupportedKind
//! [`KindMismatch`]: FieldError::KindMismatch
//! [`DateOutOfRange`]: FieldError::DateOutOfRange

use crate::datakind::DataKind;
use thiserror::Error;

/// All errors produced by field access and conversion.
///
/// Every failure is immediate and local: there are no retries and no partial
/// results. Callers (the row-materialization layer) decide whether to abort
/// the row, the scan, or propagate further.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Value access attempted on a null cell.
    #[error("field is null")]
    NullField,

    /// A dispatch received a kind outside the recognized scalar set.
    ///
    /// This is a schema-corruption signal, not a recoverable condition: it
    /// means the kind enumeration grew a member the dispatch tables do not
    /// cover (`Vector` and `Unknown` are the members shipped today).
    #[error("unsupported data kind: {0}")]
    UnsupportedKind(DataKind),

    /// An accessor or conversion asked for a slot the cell does not carry.
    #[error("kind mismatch: expected {expected}, got {actual}")]
    KindMismatch {
        /// The slot the caller asked for.
        expected: &'static str,
        /// The kind the cell actually holds.
        actual: DataKind,
    },

    /// A day-offset has no representable calendar date.
    #[error("day offset {0} is outside the supported calendar range")]
    DateOutOfRange(i32),
}

/// Result type for field operations.
pub type Result<T> = std::result::Result<T, FieldError>;

impl FieldError {
    /// Check if this is a null-field error.
    pub fn is_null_field(&self) -> bool {
        matches!(self, FieldError::NullField)
    }

    /// Check if this is an unsupported-kind error.
    pub fn is_unsupported_kind(&self) -> bool {
        matches!(self, FieldError::UnsupportedKind(_))
    }

    /// Check if this is a kind-mismatch error.
    pub fn is_kind_mismatch(&self) -> bool {
        matches!(self, FieldError::KindMismatch { .. })
    }
}
