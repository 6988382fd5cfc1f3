//! Record types for the three collections.
//!
//! Records hold validated values only: every constructor here takes raw
//! console strings and runs the full rule set before anything is built,
//! so an order, user, or transaction that exists is well-formed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::key::{TrackingNumber, UserId};
use crate::validate::{self, FieldName};

/// A record with an identity key.
///
/// The key is the sole basis of equality and ordering inside a keyed
/// collection, and must never change for the lifetime of the record.
pub trait Keyed {
    type Key: Ord + std::fmt::Display;

    fn key(&self) -> &Self::Key;
}

// =============================================================================
// PACKAGE ORDERS
// =============================================================================

/// Handling specification printed on a package order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Specification {
    Fragile,
    Books,
    Catalogs,
    DoNotBend,
    NotApplicable,
}

impl Specification {
    pub fn as_str(self) -> &'static str {
        match self {
            Specification::Fragile => "Fragile",
            Specification::Books => "Books",
            Specification::Catalogs => "Catalogs",
            Specification::DoNotBend => "Do-not-Bend",
            Specification::NotApplicable => "N/A",
        }
    }

    /// Parse a console label. `N/A` matches in any casing; the named
    /// specifications must match exactly.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw {
            "Fragile" => Ok(Specification::Fragile),
            "Books" => Ok(Specification::Books),
            "Catalogs" => Ok(Specification::Catalogs),
            "Do-not-Bend" => Ok(Specification::DoNotBend),
            _ if raw.eq_ignore_ascii_case("N/A") => Ok(Specification::NotApplicable),
            _ => Err(Error::InvalidFormat {
                field: FieldName::Specification,
                reason: format!(
                    "must be one of Fragile, Books, Catalogs, Do-not-Bend, N/A; got {:?}",
                    raw
                ),
            }),
        }
    }
}

/// Mailing class of a package order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MailingClass {
    FirstClass,
    Priority,
    Retail,
    Ground,
    Metro,
}

impl MailingClass {
    pub fn as_str(self) -> &'static str {
        match self {
            MailingClass::FirstClass => "First-Class",
            MailingClass::Priority => "Priority",
            MailingClass::Retail => "Retail",
            MailingClass::Ground => "Ground",
            MailingClass::Metro => "Metro",
        }
    }

    pub fn parse(raw: &str) -> Result<Self> {
        match raw {
            "First-Class" => Ok(MailingClass::FirstClass),
            "Priority" => Ok(MailingClass::Priority),
            "Retail" => Ok(MailingClass::Retail),
            "Ground" => Ok(MailingClass::Ground),
            "Metro" => Ok(MailingClass::Metro),
            _ => Err(Error::InvalidFormat {
                field: FieldName::MailingClass,
                reason: format!(
                    "must be one of First-Class, Priority, Retail, Ground, Metro; got {:?}",
                    raw
                ),
            }),
        }
    }
}

/// What a shipping drum is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrumMaterial {
    Plastic,
    Fiber,
}

impl DrumMaterial {
    pub fn as_str(self) -> &'static str {
        match self {
            DrumMaterial::Plastic => "Plastic",
            DrumMaterial::Fiber => "Fiber",
        }
    }

    pub fn parse(raw: &str) -> Result<Self> {
        match raw {
            "Plastic" => Ok(DrumMaterial::Plastic),
            "Fiber" => Ok(DrumMaterial::Fiber),
            _ => Err(Error::InvalidFormat {
                field: FieldName::Material,
                reason: format!("must be Plastic or Fiber; got {:?}", raw),
            }),
        }
    }
}

/// The four supported package shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackageKind {
    Envelope,
    Box,
    Crate,
    Drum,
}

impl PackageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PackageKind::Envelope => "Envelope",
            PackageKind::Box => "Box",
            PackageKind::Crate => "Crate",
            PackageKind::Drum => "Drum",
        }
    }

    pub fn parse(raw: &str) -> Result<Self> {
        match raw {
            "Envelope" => Ok(PackageKind::Envelope),
            "Box" => Ok(PackageKind::Box),
            "Crate" => Ok(PackageKind::Crate),
            "Drum" => Ok(PackageKind::Drum),
            _ => Err(Error::UnknownVariant {
                given: raw.to_string(),
                expected: "Envelope, Box, Crate, Drum",
            }),
        }
    }
}

/// Shape-specific measurements of a package order.
///
/// Each shape carries exactly two extra fields, in the order the console
/// asks for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PackageDetail {
    /// Height and width in inches, each `0..=99`.
    Envelope { height: u32, width: u32 },
    /// Largest dimension in inches (`0..=999`) and volume in cubic
    /// inches (`0..=999999`).
    Box { largest_dimension: u32, volume: u32 },
    /// Maximum load weight in pounds (not negative) and a free-text
    /// content label.
    Crate { load_weight: f32, content: String },
    /// Drum material and diameter in inches (`0..=999`).
    Drum { material: DrumMaterial, diameter: u32 },
}

impl PackageDetail {
    /// Validate the shape-specific field pair for `kind`.
    pub fn parse(kind: PackageKind, detail_1: &str, detail_2: &str) -> Result<Self> {
        match kind {
            PackageKind::Envelope => Ok(PackageDetail::Envelope {
                height: validate::bounded_int(FieldName::Height, detail_1, 99)?,
                width: validate::bounded_int(FieldName::Width, detail_2, 99)?,
            }),
            PackageKind::Box => Ok(PackageDetail::Box {
                largest_dimension: validate::bounded_int(FieldName::LargestDimension, detail_1, 999)?,
                volume: validate::bounded_int(FieldName::Volume, detail_2, 999_999)?,
            }),
            PackageKind::Crate => Ok(PackageDetail::Crate {
                load_weight: validate::non_negative_float(FieldName::LoadWeight, detail_1)?,
                content: validate::free_text(FieldName::Content, detail_2)?,
            }),
            PackageKind::Drum => Ok(PackageDetail::Drum {
                material: DrumMaterial::parse(detail_1)?,
                diameter: validate::bounded_int(FieldName::Diameter, detail_2, 999)?,
            }),
        }
    }

    pub fn kind(&self) -> PackageKind {
        match self {
            PackageDetail::Envelope { .. } => PackageKind::Envelope,
            PackageDetail::Box { .. } => PackageKind::Box,
            PackageDetail::Crate { .. } => PackageKind::Crate,
            PackageDetail::Drum { .. } => PackageKind::Drum,
        }
    }
}

/// A package order: identity key, shared handling fields, and the
/// shape-specific detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageOrder {
    tracking: TrackingNumber,
    specification: Specification,
    mailing_class: MailingClass,
    detail: PackageDetail,
}

impl PackageOrder {
    /// Build an order from raw console fields and an already-validated
    /// tracking number.
    ///
    /// `detail_1`/`detail_2` are the shape-specific pair, e.g. height and
    /// width for an envelope.
    pub fn from_fields(
        tracking: TrackingNumber,
        kind: PackageKind,
        specification: &str,
        mailing_class: &str,
        detail_1: &str,
        detail_2: &str,
    ) -> Result<Self> {
        let specification = Specification::parse(specification)?;
        let mailing_class = MailingClass::parse(mailing_class)?;
        let detail = PackageDetail::parse(kind, detail_1, detail_2)?;
        Ok(PackageOrder {
            tracking,
            specification,
            mailing_class,
            detail,
        })
    }

    pub fn tracking(&self) -> &TrackingNumber {
        &self.tracking
    }

    pub fn specification(&self) -> Specification {
        self.specification
    }

    pub fn mailing_class(&self) -> MailingClass {
        self.mailing_class
    }

    pub fn detail(&self) -> &PackageDetail {
        &self.detail
    }
}

impl Keyed for PackageOrder {
    type Key = TrackingNumber;

    fn key(&self) -> &TrackingNumber {
        &self.tracking
    }
}

// =============================================================================
// USERS
// =============================================================================

/// Role-specific user fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Role {
    Customer {
        phone: String,
        address: String,
    },
    Employee {
        /// Nine digits, leading zeros preserved.
        social: String,
        salary: f32,
        /// Bank account number, 8 to 15 digits.
        account: String,
    },
}

impl Role {
    pub fn name(&self) -> &'static str {
        match self {
            Role::Customer { .. } => "Customer",
            Role::Employee { .. } => "Employee",
        }
    }

    pub fn is_customer(&self) -> bool {
        matches!(self, Role::Customer { .. })
    }

    pub fn is_employee(&self) -> bool {
        matches!(self, Role::Employee { .. })
    }
}

/// The fields a user update may touch, as named on the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    FirstName,
    LastName,
    Social,
    Salary,
    Account,
    Phone,
    Address,
}

impl UserField {
    pub fn as_str(self) -> &'static str {
        match self {
            UserField::FirstName => "First-name",
            UserField::LastName => "Last-name",
            UserField::Social => "Social",
            UserField::Salary => "Salary",
            UserField::Account => "Account",
            UserField::Phone => "Phone",
            UserField::Address => "Address",
        }
    }

    /// Parse a console field name, case-insensitively. The identity key
    /// is deliberately absent: ids are immutable.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let known = [
            UserField::FirstName,
            UserField::LastName,
            UserField::Social,
            UserField::Salary,
            UserField::Account,
            UserField::Phone,
            UserField::Address,
        ];
        known
            .into_iter()
            .find(|field| trimmed.eq_ignore_ascii_case(field.as_str()))
            .ok_or_else(|| Error::UnsupportedField {
                field: format!("{:?}", trimmed),
                reason: "expected First-name, Last-name, Social, Salary, Account, Phone, or Address"
                    .to_string(),
            })
    }
}

/// A user known to the store, either a customer or an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    first_name: String,
    last_name: String,
    role: Role,
}

impl User {
    /// Build a customer from raw console fields.
    pub fn customer(
        id: UserId,
        first_name: &str,
        last_name: &str,
        phone: &str,
        address: &str,
    ) -> Result<Self> {
        Ok(User {
            id,
            first_name: validate::free_text(FieldName::FirstName, first_name)?,
            last_name: validate::free_text(FieldName::LastName, last_name)?,
            role: Role::Customer {
                phone: validate::free_text(FieldName::Phone, phone)?,
                address: validate::free_text(FieldName::Address, address)?,
            },
        })
    }

    /// Build an employee from raw console fields.
    pub fn employee(
        id: UserId,
        first_name: &str,
        last_name: &str,
        social: &str,
        salary: &str,
        account: &str,
    ) -> Result<Self> {
        Ok(User {
            id,
            first_name: validate::free_text(FieldName::FirstName, first_name)?,
            last_name: validate::free_text(FieldName::LastName, last_name)?,
            role: Role::Employee {
                social: validate::digits_exact(FieldName::Social, social, 9)?,
                salary: validate::non_negative_float(FieldName::Salary, salary)?,
                account: validate::digits_between(FieldName::Account, account, 8, 15)?,
            },
        })
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Re-validate and apply one field update.
    ///
    /// The new value goes through the same rule as at creation, and the
    /// field must belong to this user's role. Nothing is assigned until
    /// the value has passed, so a rejected update leaves the user as it
    /// was.
    pub fn update_field(&mut self, field: UserField, value: &str) -> Result<()> {
        match (field, &mut self.role) {
            (UserField::FirstName, _) => {
                self.first_name = validate::free_text(FieldName::FirstName, value)?;
            }
            (UserField::LastName, _) => {
                self.last_name = validate::free_text(FieldName::LastName, value)?;
            }
            (UserField::Phone, Role::Customer { phone, .. }) => {
                *phone = validate::free_text(FieldName::Phone, value)?;
            }
            (UserField::Address, Role::Customer { address, .. }) => {
                *address = validate::free_text(FieldName::Address, value)?;
            }
            (UserField::Social, Role::Employee { social, .. }) => {
                *social = validate::digits_exact(FieldName::Social, value, 9)?;
            }
            (UserField::Salary, Role::Employee { salary, .. }) => {
                *salary = validate::non_negative_float(FieldName::Salary, value)?;
            }
            (UserField::Account, Role::Employee { account, .. }) => {
                *account = validate::digits_between(FieldName::Account, value, 8, 15)?;
            }
            (field, role) => {
                let reason = match role {
                    Role::Customer { .. } => "only employees have this field",
                    Role::Employee { .. } => "only customers have this field",
                };
                return Err(Error::UnsupportedField {
                    field: field.as_str().to_string(),
                    reason: reason.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Keyed for User {
    type Key = UserId;

    fn key(&self) -> &UserId {
        &self.id
    }
}

// =============================================================================
// TRANSACTIONS
// =============================================================================

/// A completed shipping transaction. Transactions are history: once
/// recorded they are never updated or removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    customer: UserId,
    employee: UserId,
    tracking: TrackingNumber,
    ship_date: NaiveDate,
    deliver_date: NaiveDate,
    cost: f32,
}

impl Transaction {
    /// Assemble a transaction from already-validated parts. The role
    /// checks on the two user ids happen in the store, which is the only
    /// layer that can see the user records.
    pub fn new(
        customer: UserId,
        employee: UserId,
        tracking: TrackingNumber,
        ship_date: NaiveDate,
        deliver_date: NaiveDate,
        cost: f32,
    ) -> Self {
        Transaction {
            customer,
            employee,
            tracking,
            ship_date,
            deliver_date,
            cost,
        }
    }

    pub fn customer(&self) -> UserId {
        self.customer
    }

    pub fn employee(&self) -> UserId {
        self.employee
    }

    pub fn tracking(&self) -> &TrackingNumber {
        &self.tracking
    }

    pub fn ship_date(&self) -> NaiveDate {
        self.ship_date
    }

    pub fn deliver_date(&self) -> NaiveDate {
        self.deliver_date
    }

    pub fn cost(&self) -> f32 {
        self.cost
    }
}
