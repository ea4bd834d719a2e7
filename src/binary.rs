//! Shared byte payload
//!
//! [`Binary`] is the one payload representation behind the `TEXT`, `BLOB`,
//! and `STRING` kinds. It wraps its bytes in an [`Arc`], so cloning a
//! payload (directly, or by copying the cell that holds it) bumps a
//! reference count and never copies the bytes. [`Binary::ptr_eq`] makes the
//! sharing observable.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

/// Reference-counted byte payload.
///
/// Equality, ordering, and hashing all go by byte content; only
/// [`ptr_eq`](Binary::ptr_eq) looks at the allocation.
///
/// # Examples
///
/// ```
/// use seriate::Binary;
///
/// let payload = Binary::from("sensor-7");
/// let shared = payload.clone();
/// assert_eq!(payload, shared);
/// assert!(payload.ptr_eq(&shared)); // clone shares the allocation
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Binary(Arc<[u8]>);

impl Binary {
    /// Create a payload from raw bytes
    pub fn new(bytes: impl Into<Arc<[u8]>>) -> Self {
        Binary(bytes.into())
    }

    /// View the payload bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Payload length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the payload holds no bytes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check whether two handles share one allocation
    ///
    /// Content equality (`==`) is independent of this: two payloads built
    /// from the same bytes compare equal but do not share.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<&str> for Binary {
    fn from(s: &str) -> Self {
        Binary(Arc::from(s.as_bytes()))
    }
}

impl From<String> for Binary {
    fn from(s: String) -> Self {
        Binary(Arc::from(s.into_bytes()))
    }
}

impl From<&[u8]> for Binary {
    fn from(bytes: &[u8]) -> Self {
        Binary(Arc::from(bytes))
    }
}

impl From<Vec<u8>> for Binary {
    fn from(bytes: Vec<u8>) -> Self {
        Binary(Arc::from(bytes))
    }
}

impl std::fmt::Display for Binary {
    /// Render the payload as UTF-8, replacing invalid sequences
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

// Serialize as plain bytes, not as an rc wrapper. serde's own Arc support
// is feature-gated and would tie the wire shape to the sharing strategy.
impl Serialize for Binary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&self.0)
    }
}

impl<'de> Deserialize<'de> for Binary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = Vec::<u8>::deserialize(deserializer)?;
        Ok(Binary::from(bytes))
    }
}
