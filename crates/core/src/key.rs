//! Identity keys for the record collections.
//!
//! Keys validate on construction: a value of one of these types is
//! well-formed by definition, so the collections never re-check key
//! format. Both key types order the way their collection lists records.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::validate::FieldName;

/// Length of a package tracking number.
pub const TRACKING_LEN: usize = 5;

/// Number of digits in a user id.
pub const USER_ID_DIGITS: usize = 6;

/// Package-order identity key: exactly five ASCII alphanumerics.
///
/// Equality, ordering, and hashing fold ASCII case, so `AB123` and
/// `ab123` name the same order. The casing given at creation is kept for
/// display and persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingNumber(String);

impl TrackingNumber {
    /// Parse and validate a raw tracking number.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.len() != TRACKING_LEN || !raw.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(Error::InvalidFormat {
                field: FieldName::TrackingNumber,
                reason: format!(
                    "expected exactly {} letters or digits, got {:?}",
                    TRACKING_LEN, raw
                ),
            });
        }
        Ok(TrackingNumber(raw.to_string()))
    }

    /// The tracking number as originally entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for TrackingNumber {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for TrackingNumber {}

impl PartialOrd for TrackingNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TrackingNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .bytes()
            .map(|b| b.to_ascii_uppercase())
            .cmp(other.0.bytes().map(|b| b.to_ascii_uppercase()))
    }
}

impl Hash for TrackingNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.0.bytes() {
            state.write_u8(b.to_ascii_uppercase());
        }
    }
}

impl fmt::Display for TrackingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// User identity key: six decimal digits, ordered numerically.
///
/// Stored as the numeric value; [`fmt::Display`] pads back to six digits
/// so `019245` survives a round trip through formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u32);

impl UserId {
    /// Parse and validate a raw user id.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.len() != USER_ID_DIGITS || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidFormat {
                field: FieldName::IdNumber,
                reason: format!("expected exactly {} digits, got {:?}", USER_ID_DIGITS, raw),
            });
        }
        // Six digits always fit in u32.
        let value = raw.parse().map_err(|_| Error::InvalidFormat {
            field: FieldName::IdNumber,
            reason: format!("expected exactly {} digits, got {:?}", USER_ID_DIGITS, raw),
        })?;
        Ok(UserId(value))
    }

    /// The numeric value of the id.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06}", self.0)
    }
}
