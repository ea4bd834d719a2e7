//! Generic boxed values
//!
//! [`Value`] is the kind-erased form a cell takes when it crosses into
//! generic consumer code (drivers, row printers, language bindings). A cell
//! boxes into a `Value` through [`Field::to_value`] and unboxes back through
//! [`Field::from_value`].
//!
//! ## No Null Variant
//!
//! `Value` deliberately has no null member. Absence at the generic level is
//! `Option<Value>`: a null cell boxes to `None`, and `None` unboxes to a
//! null cell. Keeping absence out of the enum means there is exactly one way
//! to spell it.
//!
//! ## Equality Rules
//!
//! - Different variants are never equal (no coercion): `Int32(1)` !=
//!   `Int64(1)`, `Int64(1)` != `Double(1.0)`
//! - `Float`/`Double` use IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`
//!
//! [`Field::to_value`]: crate::Field::to_value
//! [`Field::from_value`]: crate::Field::from_value

use crate::binary::Binary;
use crate::datakind::DataKind;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A kind-erased scalar value.
///
/// ## The Seven Variants
///
/// 1. `Boolean` - true or false
/// 2. `Int32` - 32-bit signed integer (also the raw form of day-offsets)
/// 3. `Int64` - 64-bit signed integer (also the boxed form of timestamps)
/// 4. `Float` - 32-bit IEEE-754 floating point
/// 5. `Double` - 64-bit IEEE-754 floating point
/// 6. `Binary` - shared byte payload (`TEXT`/`BLOB`/`STRING` columns)
/// 7. `Date` - calendar date
///
/// There is no timestamp variant: a `TIMESTAMP` cell boxes its tick as
/// `Int64`. `DATE` is the one kind that changes shape when boxed, from a
/// day-offset to a calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Boolean true or false
    Boolean(bool),

    /// 32-bit signed integer
    Int32(i32),

    /// 64-bit signed integer
    Int64(i64),

    /// 32-bit IEEE-754 floating point
    Float(f32),

    /// 64-bit IEEE-754 floating point
    Double(f64),

    /// Shared byte payload
    Binary(Binary),

    /// Calendar date
    Date(NaiveDate),
}

impl Value {
    /// The kind this value belongs to.
    ///
    /// `Binary` reports `Text`, the canonical payload kind; the column it
    /// came from may have been declared `TEXT`, `BLOB`, or `STRING`.
    pub fn kind(&self) -> DataKind {
        match self {
            Value::Boolean(_) => DataKind::Boolean,
            Value::Int32(_) => DataKind::Int32,
            Value::Int64(_) => DataKind::Int64,
            Value::Float(_) => DataKind::Float,
            Value::Double(_) => DataKind::Double,
            Value::Binary(_) => DataKind::Text,
            Value::Date(_) => DataKind::Date,
        }
    }

    /// Returns the variant name as a string (for error messages)
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Boolean(_) => "Boolean",
            Value::Int32(_) => "Int32",
            Value::Int64(_) => "Int64",
            Value::Float(_) => "Float",
            Value::Double(_) => "Double",
            Value::Binary(_) => "Binary",
            Value::Date(_) => "Date",
        }
    }

    /// Try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as i32
    pub fn as_int32(&self) -> Option<i32> {
        match self {
            Value::Int32(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as i64
    pub fn as_int64(&self) -> Option<i64> {
        match self {
            Value::Int64(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as f32
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get as f64
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Try to get as a payload reference
    pub fn as_binary(&self) -> Option<&Binary> {
        match self {
            Value::Binary(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get as a calendar date
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<Binary> for Value {
    fn from(v: Binary) -> Self {
        Value::Binary(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Binary(Binary::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Binary(Binary::from(v))
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Binary(Binary::from(v))
    }
}

impl std::fmt::Display for Value {
    /// Render in natural form: `true`, `42`, `6.25`, payload text, ISO date
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Int32(i) => write!(f, "{}", i),
            Value::Int64(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{}", v),
            Value::Double(v) => write!(f, "{}", v),
            Value::Binary(b) => write!(f, "{}", b),
            Value::Date(d) => write!(f, "{}", d),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod kind_tests {
        use super::*;

        #[test]
        fn test_kind_per_variant() {
            assert_eq!(Value::Boolean(true).kind(), DataKind::Boolean);
            assert_eq!(Value::Int32(1).kind(), DataKind::Int32);
            assert_eq!(Value::Int64(1).kind(), DataKind::Int64);
            assert_eq!(Value::Float(1.0).kind(), DataKind::Float);
            assert_eq!(Value::Double(1.0).kind(), DataKind::Double);
            assert_eq!(Value::Date(crate::date::EPOCH).kind(), DataKind::Date);
        }

        #[test]
        fn test_binary_reports_text() {
            let v = Value::Binary(Binary::from("payload"));
            assert_eq!(v.kind(), DataKind::Text);
        }

        #[test]
        fn test_type_names_unique() {
            let values = vec![
                Value::Boolean(true),
                Value::Int32(0),
                Value::Int64(0),
                Value::Float(0.0),
                Value::Double(0.0),
                Value::Binary(Binary::from("")),
                Value::Date(crate::date::EPOCH),
            ];

            let type_names: std::collections::HashSet<_> =
                values.iter().map(|v| v.type_name()).collect();
            assert_eq!(type_names.len(), 7, "All 7 type names must be unique");
        }
    }

    mod accessor_tests {
        use super::*;

        #[test]
        fn test_as_bool() {
            assert_eq!(Value::Boolean(true).as_bool(), Some(true));
            assert_eq!(Value::Int32(1).as_bool(), None);
        }

        #[test]
        fn test_as_int32() {
            assert_eq!(Value::Int32(42).as_int32(), Some(42));
            assert_eq!(Value::Int64(42).as_int32(), None);
        }

        #[test]
        fn test_as_int64() {
            assert_eq!(Value::Int64(i64::MAX).as_int64(), Some(i64::MAX));
            assert_eq!(Value::Int32(1).as_int64(), None);
        }

        #[test]
        fn test_as_float() {
            assert_eq!(Value::Float(6.25).as_float(), Some(6.25));
            assert_eq!(Value::Double(6.25).as_float(), None);
        }

        #[test]
        fn test_as_double() {
            assert_eq!(Value::Double(6.25).as_double(), Some(6.25));
            assert_eq!(Value::Float(6.25).as_double(), None);
        }

        #[test]
        fn test_as_binary() {
            let b = Binary::from("abc");
            assert_eq!(Value::Binary(b.clone()).as_binary(), Some(&b));
            assert_eq!(Value::Int32(1).as_binary(), None);
        }

        #[test]
        fn test_as_date() {
            let d = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
            assert_eq!(Value::Date(d).as_date(), Some(d));
            assert_eq!(Value::Int32(19_876).as_date(), None);
        }
    }

    mod equality_tests {
        use super::*;

        #[test]
        fn test_same_variant_equality() {
            assert_eq!(Value::Boolean(true), Value::Boolean(true));
            assert_eq!(Value::Int32(42), Value::Int32(42));
            assert_ne!(Value::Int32(42), Value::Int32(43));
            assert_eq!(Value::Binary(Binary::from("a")), Value::Binary(Binary::from("a")));
        }

        #[test]
        fn test_no_cross_variant_coercion() {
            // Same numeric magnitude, different variant: never equal
            assert_ne!(Value::Int32(1), Value::Int64(1));
            assert_ne!(Value::Int64(1), Value::Double(1.0));
            assert_ne!(Value::Float(1.0), Value::Double(1.0));
            assert_ne!(Value::Boolean(true), Value::Int32(1));
        }

        #[test]
        fn test_date_not_equal_to_raw_offset() {
            let d = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
            assert_ne!(Value::Date(d), Value::Int32(19_876));
        }

        #[test]
        fn test_float_nan_not_equal() {
            // IEEE-754: NaN != NaN
            assert_ne!(Value::Float(f32::NAN), Value::Float(f32::NAN));
            assert_ne!(Value::Double(f64::NAN), Value::Double(f64::NAN));
        }

        #[test]
        fn test_negative_zero_equals_positive_zero() {
            // IEEE-754: -0.0 == 0.0
            assert_eq!(Value::Float(-0.0), Value::Float(0.0));
            assert_eq!(Value::Double(-0.0), Value::Double(0.0));
        }
    }

    mod from_tests {
        use super::*;

        #[test]
        fn test_from_primitives() {
            assert_eq!(Value::from(true), Value::Boolean(true));
            assert_eq!(Value::from(42i32), Value::Int32(42));
            assert_eq!(Value::from(42i64), Value::Int64(42));
            assert_eq!(Value::from(1.5f32), Value::Float(1.5));
            assert_eq!(Value::from(1.5f64), Value::Double(1.5));
        }

        #[test]
        fn test_from_payload_forms() {
            assert_eq!(Value::from("abc"), Value::Binary(Binary::from("abc")));
            assert_eq!(
                Value::from(String::from("abc")),
                Value::Binary(Binary::from("abc"))
            );
            assert_eq!(
                Value::from(vec![1u8, 2]),
                Value::Binary(Binary::from(&[1u8, 2][..]))
            );
        }

        #[test]
        fn test_from_date() {
            let d = NaiveDate::from_ymd_opt(2000, 2, 29).unwrap();
            assert_eq!(Value::from(d), Value::Date(d));
        }
    }

    mod display_tests {
        use super::*;

        #[test]
        fn test_display_natural_forms() {
            assert_eq!(Value::Boolean(true).to_string(), "true");
            assert_eq!(Value::Int32(42).to_string(), "42");
            assert_eq!(Value::Int64(-7).to_string(), "-7");
            assert_eq!(Value::Float(6.25).to_string(), "6.25");
            assert_eq!(Value::Double(0.5).to_string(), "0.5");
        }

        #[test]
        fn test_display_payload_as_text() {
            assert_eq!(Value::Binary(Binary::from("hello")).to_string(), "hello");
        }

        #[test]
        fn test_display_date_iso() {
            let d = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
            assert_eq!(Value::Date(d).to_string(), "2024-06-02");
        }
    }

    mod serialization_tests {
        use super::*;

        #[test]
        fn test_value_serialization_all_variants() {
            let test_values = vec![
                Value::Boolean(true),
                Value::Int32(42),
                Value::Int64(-42),
                Value::Float(1.5),
                Value::Double(2.5),
                Value::Binary(Binary::from(&[0u8, 255][..])),
                Value::Date(NaiveDate::from_ymd_opt(2024, 6, 2).unwrap()),
            ];

            for value in test_values {
                let serialized = serde_json::to_string(&value).unwrap();
                let deserialized: Value = serde_json::from_str(&serialized).unwrap();
                assert_eq!(value, deserialized);
            }
        }
    }
}
