//! Per-field validation rules.
//!
//! Every rule is a total function from a raw input string to either a
//! typed value or an [`Error`](crate::Error) naming the offending field.
//! Malformed input rejects as `InvalidFormat`; a well-formed number
//! outside its permitted range rejects as `OutOfRange`. The rule table is
//! fixed for the life of the program, and no rule ever mutates anything,
//! so a failed validation has no side effects by construction.

use std::fmt;

use chrono::NaiveDate;

use crate::error::{Error, Result};

/// Date format accepted for ship and deliver dates, e.g. `12/01/24`.
pub const DATE_FORMAT: &str = "%m/%d/%y";

/// Every field a validation error can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldName {
    TrackingNumber,
    Specification,
    MailingClass,
    Height,
    Width,
    LargestDimension,
    Volume,
    LoadWeight,
    Content,
    Material,
    Diameter,
    IdNumber,
    FirstName,
    LastName,
    Social,
    Salary,
    Account,
    Phone,
    Address,
    ShipDate,
    DeliverDate,
    Cost,
}

impl FieldName {
    /// Human-readable field name used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::TrackingNumber => "tracking number",
            FieldName::Specification => "specification",
            FieldName::MailingClass => "mailing class",
            FieldName::Height => "height",
            FieldName::Width => "width",
            FieldName::LargestDimension => "largest dimension",
            FieldName::Volume => "volume",
            FieldName::LoadWeight => "load weight",
            FieldName::Content => "content",
            FieldName::Material => "material",
            FieldName::Diameter => "diameter",
            FieldName::IdNumber => "id number",
            FieldName::FirstName => "first name",
            FieldName::LastName => "last name",
            FieldName::Social => "social security number",
            FieldName::Salary => "salary",
            FieldName::Account => "bank account number",
            FieldName::Phone => "phone number",
            FieldName::Address => "address",
            FieldName::ShipDate => "ship date",
            FieldName::DeliverDate => "deliver date",
            FieldName::Cost => "cost",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Integer field restricted to `0..=max`.
///
/// Only plain decimal digits are accepted; a sign or decimal point is a
/// format error, not a range error.
pub fn bounded_int(field: FieldName, raw: &str, max: u32) -> Result<u32> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidFormat {
            field,
            reason: format!("expected a whole number, got {:?}", raw),
        });
    }
    let value: u32 = raw.parse().map_err(|_| Error::OutOfRange {
        field,
        reason: format!("must be between 0 and {}, got {}", max, raw),
    })?;
    if value > max {
        return Err(Error::OutOfRange {
            field,
            reason: format!("must be between 0 and {}, got {}", max, value),
        });
    }
    Ok(value)
}

/// Floating-point field that must be finite and not negative.
pub fn non_negative_float(field: FieldName, raw: &str) -> Result<f32> {
    let raw = raw.trim();
    let value: f32 = raw.parse().map_err(|_| Error::InvalidFormat {
        field,
        reason: format!("expected a number, got {:?}", raw),
    })?;
    if !value.is_finite() {
        return Err(Error::InvalidFormat {
            field,
            reason: format!("expected a finite number, got {:?}", raw),
        });
    }
    if value < 0.0 {
        return Err(Error::OutOfRange {
            field,
            reason: format!("cannot be negative, got {}", raw),
        });
    }
    Ok(value)
}

/// Digit string of exactly `len` digits, stored verbatim so leading
/// zeros survive.
pub fn digits_exact(field: FieldName, raw: &str, len: usize) -> Result<String> {
    let raw = raw.trim();
    if raw.len() != len || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidFormat {
            field,
            reason: format!("expected exactly {} digits, got {:?}", len, raw),
        });
    }
    Ok(raw.to_string())
}

/// Digit string of `min..=max` digits, stored verbatim.
pub fn digits_between(field: FieldName, raw: &str, min: usize, max: usize) -> Result<String> {
    let raw = raw.trim();
    if raw.len() < min || raw.len() > max || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidFormat {
            field,
            reason: format!("expected {} to {} digits, got {:?}", min, max, raw),
        });
    }
    Ok(raw.to_string())
}

/// Free-text field that must not be blank. Surrounding whitespace is
/// trimmed before storage.
pub fn free_text(field: FieldName, raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidFormat {
            field,
            reason: "cannot be empty".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Calendar date in MM/DD/YY form. Out-of-calendar dates such as
/// `13/40/23` are rejected.
pub fn date(field: FieldName, raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| Error::DateParse {
        field,
        given: raw.trim().to_string(),
    })
}
