//! Data kind enumeration
//!
//! Every column in the store is declared with exactly one kind, and every
//! value that crosses the read path carries one. The kind decides which
//! payload slot a cell uses and how the cell renders.
//!
//! ## The Twelve Kinds
//!
//! | Kind | Code | Scalar? |
//! |-----------|------|---------|
//! | Boolean | 0 | yes |
//! | Int32 | 1 | yes |
//! | Int64 | 2 | yes |
//! | Float | 3 | yes |
//! | Double | 4 | yes |
//! | Text | 5 | yes |
//! | Vector | 6 | no |
//! | Unknown | 7 | no |
//! | Timestamp | 8 | yes |
//! | Date | 9 | yes |
//! | Blob | 10 | yes |
//! | String | 11 | yes |
//!
//! The codes are wire bytes: they are written into file headers and must
//! never be renumbered. `Vector` and `Unknown` are real members of the
//! enumeration but sit outside the scalar set that cell dispatch covers;
//! handing either to a dispatch yields
//! [`FieldError::UnsupportedKind`](crate::FieldError::UnsupportedKind).

use serde::{Deserialize, Serialize};

/// The twelve data kinds in the store's type system.
///
/// This enum identifies which kind a column, cell, or wrapper belongs to.
/// Used for dispatch, schema declaration, and the on-disk type tag.
///
/// ## Invariant
///
/// Byte codes are part of the file format. Extending this enum means
/// appending a new code, never reusing or renumbering an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataKind {
    /// Boolean scalar (code 0)
    Boolean,

    /// 32-bit signed integer scalar (code 1)
    Int32,

    /// 64-bit signed integer scalar (code 2)
    Int64,

    /// 32-bit IEEE float scalar (code 3)
    Float,

    /// 64-bit IEEE float scalar (code 4)
    Double,

    /// UTF-8 text payload (code 5)
    Text,

    /// Aligned multi-column group (code 6)
    ///
    /// Not a scalar. Cells never hold this kind; dispatch rejects it.
    Vector,

    /// Placeholder for an undeclared kind (code 7)
    ///
    /// Not a scalar. Cells never hold this kind; dispatch rejects it.
    Unknown,

    /// Epoch-tick timestamp, stored as i64 (code 8)
    Timestamp,

    /// Calendar date, stored as an i32 day-offset from 1970-01-01 (code 9)
    Date,

    /// Opaque byte payload (code 10)
    Blob,

    /// String payload (code 11)
    ///
    /// Shares the byte-payload slot with `Text` and `Blob`.
    String,
}

impl DataKind {
    /// All data kinds (for iteration)
    pub const ALL: [DataKind; 12] = [
        DataKind::Boolean,
        DataKind::Int32,
        DataKind::Int64,
        DataKind::Float,
        DataKind::Double,
        DataKind::Text,
        DataKind::Vector,
        DataKind::Unknown,
        DataKind::Timestamp,
        DataKind::Date,
        DataKind::Blob,
        DataKind::String,
    ];

    /// Get all data kinds as a slice
    pub fn all() -> &'static [DataKind] {
        &Self::ALL
    }

    /// Schema spelling of this kind (upper-case, as written in DDL)
    pub const fn name(&self) -> &'static str {
        match self {
            DataKind::Boolean => "BOOLEAN",
            DataKind::Int32 => "INT32",
            DataKind::Int64 => "INT64",
            DataKind::Float => "FLOAT",
            DataKind::Double => "DOUBLE",
            DataKind::Text => "TEXT",
            DataKind::Vector => "VECTOR",
            DataKind::Unknown => "UNKNOWN",
            DataKind::Timestamp => "TIMESTAMP",
            DataKind::Date => "DATE",
            DataKind::Blob => "BLOB",
            DataKind::String => "STRING",
        }
    }

    /// Wire byte code (the on-disk type tag)
    pub const fn to_byte(&self) -> u8 {
        match self {
            DataKind::Boolean => 0,
            DataKind::Int32 => 1,
            DataKind::Int64 => 2,
            DataKind::Float => 3,
            DataKind::Double => 4,
            DataKind::Text => 5,
            DataKind::Vector => 6,
            DataKind::Unknown => 7,
            DataKind::Timestamp => 8,
            DataKind::Date => 9,
            DataKind::Blob => 10,
            DataKind::String => 11,
        }
    }

    /// Parse from a wire byte code
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(DataKind::Boolean),
            1 => Some(DataKind::Int32),
            2 => Some(DataKind::Int64),
            3 => Some(DataKind::Float),
            4 => Some(DataKind::Double),
            5 => Some(DataKind::Text),
            6 => Some(DataKind::Vector),
            7 => Some(DataKind::Unknown),
            8 => Some(DataKind::Timestamp),
            9 => Some(DataKind::Date),
            10 => Some(DataKind::Blob),
            11 => Some(DataKind::String),
            _ => None,
        }
    }

    /// Check if this kind is in the scalar set cell dispatch covers
    ///
    /// `Vector` and `Unknown` are members of the enumeration but carry no
    /// cell representation; every other kind does.
    pub const fn is_scalar(&self) -> bool {
        match self {
            DataKind::Vector | DataKind::Unknown => false,
            _ => true,
        }
    }
}

impl std::fmt::Display for DataKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_kind_all() {
        let all = DataKind::all();
        assert_eq!(all.len(), 12);

        // Verify all variants are present
        assert!(all.contains(&DataKind::Boolean));
        assert!(all.contains(&DataKind::Int32));
        assert!(all.contains(&DataKind::Int64));
        assert!(all.contains(&DataKind::Float));
        assert!(all.contains(&DataKind::Double));
        assert!(all.contains(&DataKind::Text));
        assert!(all.contains(&DataKind::Vector));
        assert!(all.contains(&DataKind::Unknown));
        assert!(all.contains(&DataKind::Timestamp));
        assert!(all.contains(&DataKind::Date));
        assert!(all.contains(&DataKind::Blob));
        assert!(all.contains(&DataKind::String));
    }

    #[test]
    fn test_data_kind_const_all() {
        assert_eq!(DataKind::ALL.len(), 12);
    }

    #[test]
    fn test_data_kind_names() {
        assert_eq!(DataKind::Boolean.name(), "BOOLEAN");
        assert_eq!(DataKind::Int32.name(), "INT32");
        assert_eq!(DataKind::Int64.name(), "INT64");
        assert_eq!(DataKind::Float.name(), "FLOAT");
        assert_eq!(DataKind::Double.name(), "DOUBLE");
        assert_eq!(DataKind::Text.name(), "TEXT");
        assert_eq!(DataKind::Vector.name(), "VECTOR");
        assert_eq!(DataKind::Unknown.name(), "UNKNOWN");
        assert_eq!(DataKind::Timestamp.name(), "TIMESTAMP");
        assert_eq!(DataKind::Date.name(), "DATE");
        assert_eq!(DataKind::Blob.name(), "BLOB");
        assert_eq!(DataKind::String.name(), "STRING");
    }

    #[test]
    fn test_data_kind_byte_codes() {
        assert_eq!(DataKind::Boolean.to_byte(), 0);
        assert_eq!(DataKind::Int32.to_byte(), 1);
        assert_eq!(DataKind::Int64.to_byte(), 2);
        assert_eq!(DataKind::Float.to_byte(), 3);
        assert_eq!(DataKind::Double.to_byte(), 4);
        assert_eq!(DataKind::Text.to_byte(), 5);
        assert_eq!(DataKind::Vector.to_byte(), 6);
        assert_eq!(DataKind::Unknown.to_byte(), 7);
        assert_eq!(DataKind::Timestamp.to_byte(), 8);
        assert_eq!(DataKind::Date.to_byte(), 9);
        assert_eq!(DataKind::Blob.to_byte(), 10);
        assert_eq!(DataKind::String.to_byte(), 11);
    }

    #[test]
    fn test_data_kind_from_byte() {
        assert_eq!(DataKind::from_byte(0), Some(DataKind::Boolean));
        assert_eq!(DataKind::from_byte(5), Some(DataKind::Text));
        assert_eq!(DataKind::from_byte(9), Some(DataKind::Date));
        assert_eq!(DataKind::from_byte(11), Some(DataKind::String));
        assert_eq!(DataKind::from_byte(12), None);
        assert_eq!(DataKind::from_byte(255), None);
    }

    #[test]
    fn test_data_kind_byte_roundtrip() {
        for kind in DataKind::all() {
            let byte = kind.to_byte();
            let restored = DataKind::from_byte(byte).unwrap();
            assert_eq!(*kind, restored);
        }
    }

    #[test]
    fn test_data_kind_display() {
        assert_eq!(format!("{}", DataKind::Boolean), "BOOLEAN");
        assert_eq!(format!("{}", DataKind::Timestamp), "TIMESTAMP");
        assert_eq!(format!("{}", DataKind::Blob), "BLOB");
    }

    #[test]
    fn test_data_kind_is_scalar() {
        // Scalar set
        assert!(DataKind::Boolean.is_scalar());
        assert!(DataKind::Int32.is_scalar());
        assert!(DataKind::Int64.is_scalar());
        assert!(DataKind::Float.is_scalar());
        assert!(DataKind::Double.is_scalar());
        assert!(DataKind::Text.is_scalar());
        assert!(DataKind::Timestamp.is_scalar());
        assert!(DataKind::Date.is_scalar());
        assert!(DataKind::Blob.is_scalar());
        assert!(DataKind::String.is_scalar());

        // Outside the scalar set (no cell representation)
        assert!(!DataKind::Vector.is_scalar());
        assert!(!DataKind::Unknown.is_scalar());
    }

    #[test]
    fn test_data_kind_copy() {
        let kind = DataKind::Int32;
        let kind2 = kind; // Copy
        assert_eq!(kind, kind2);
    }

    #[test]
    fn test_data_kind_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        for kind in DataKind::all() {
            set.insert(*kind);
        }
        assert_eq!(set.len(), 12, "All DataKinds should be unique");
    }

    #[test]
    fn test_data_kind_serialization() {
        for kind in DataKind::all() {
            let json = serde_json::to_string(kind).unwrap();
            let restored: DataKind = serde_json::from_str(&json).unwrap();
            assert_eq!(*kind, restored);
        }
    }

    #[test]
    fn test_data_kind_equality() {
        assert_eq!(DataKind::Int32, DataKind::Int32);
        assert_ne!(DataKind::Int32, DataKind::Date);
        assert_ne!(DataKind::Text, DataKind::String);
    }
}
