//! Store operations over raw console fields.
//!
//! Every operation takes the strings the console read, validates them in
//! a fixed order (key format, then duplicate or lookup, then remaining
//! fields), and only then touches a collection. A returned error means
//! no collection changed.

use parceldb_core::record::{PackageKind, PackageOrder, Transaction, User, UserField};
use parceldb_core::{Error, Result, TrackingNumber, UserId};
use parceldb_core::validate::{self, FieldName};
use tracing::debug;

use crate::store::Store;

impl Store {
    // === Package orders ===

    /// Insert a package order from raw fields.
    ///
    /// `detail_1`/`detail_2` are the shape-specific pair, in the order
    /// the console asks for them (e.g. height then width for an
    /// envelope).
    pub fn add_package(
        &mut self,
        tracking: &str,
        kind: &str,
        specification: &str,
        mailing_class: &str,
        detail_1: &str,
        detail_2: &str,
    ) -> Result<TrackingNumber> {
        let key = TrackingNumber::parse(tracking)?;
        if self.packages.contains(&key) {
            return Err(Error::DuplicateKey { key: key.to_string() });
        }
        let kind = PackageKind::parse(kind)?;
        let order = PackageOrder::from_fields(
            key.clone(),
            kind,
            specification,
            mailing_class,
            detail_1,
            detail_2,
        )?;
        self.packages.insert(order)?;
        debug!(tracking = %key, kind = kind.as_str(), "package order added");
        Ok(key)
    }

    /// Case-insensitive package lookup. A raw string that cannot be a
    /// tracking number matches nothing.
    pub fn find_package(&self, tracking: &str) -> Option<&PackageOrder> {
        let key = TrackingNumber::parse(tracking).ok()?;
        self.packages.get(&key)
    }

    /// Remove a package order by tracking number.
    pub fn remove_package(&mut self, tracking: &str) -> Result<PackageOrder> {
        let key = TrackingNumber::parse(tracking)
            .map_err(|_| Error::KeyNotFound { key: tracking.trim().to_string() })?;
        let removed = self.packages.remove(&key)?;
        debug!(tracking = %key, "package order removed");
        Ok(removed)
    }

    // === Users ===

    /// Insert a customer from raw fields.
    pub fn add_customer(
        &mut self,
        id: &str,
        first_name: &str,
        last_name: &str,
        phone: &str,
        address: &str,
    ) -> Result<UserId> {
        let key = UserId::parse(id)?;
        if self.users.contains(&key) {
            return Err(Error::DuplicateKey { key: key.to_string() });
        }
        let user = User::customer(key, first_name, last_name, phone, address)?;
        self.users.insert(user)?;
        debug!(id = %key, role = "Customer", "user added");
        Ok(key)
    }

    /// Insert an employee from raw fields.
    pub fn add_employee(
        &mut self,
        id: &str,
        first_name: &str,
        last_name: &str,
        social: &str,
        salary: &str,
        account: &str,
    ) -> Result<UserId> {
        let key = UserId::parse(id)?;
        if self.users.contains(&key) {
            return Err(Error::DuplicateKey { key: key.to_string() });
        }
        let user = User::employee(key, first_name, last_name, social, salary, account)?;
        self.users.insert(user)?;
        debug!(id = %key, role = "Employee", "user added");
        Ok(key)
    }

    /// User lookup by id. A raw string that cannot be an id matches
    /// nothing.
    pub fn find_user(&self, id: &str) -> Option<&User> {
        let key = UserId::parse(id).ok()?;
        self.users.get(&key)
    }

    /// Remove a user by id.
    pub fn remove_user(&mut self, id: &str) -> Result<User> {
        let key = UserId::parse(id)
            .map_err(|_| Error::KeyNotFound { key: id.trim().to_string() })?;
        let removed = self.users.remove(&key)?;
        debug!(id = %key, "user removed");
        Ok(removed)
    }

    /// Update one mutable field of a user, re-validating the new value
    /// under the same rule as at creation.
    pub fn update_user(&mut self, id: &str, field: &str, value: &str) -> Result<()> {
        let key = UserId::parse(id)
            .map_err(|_| Error::KeyNotFound { key: id.trim().to_string() })?;
        if !self.users.contains(&key) {
            return Err(Error::KeyNotFound { key: key.to_string() });
        }
        let field = UserField::parse(field)?;
        self.users.update(&key, |user| user.update_field(field, value))?;
        debug!(id = %key, field = field.as_str(), "user updated");
        Ok(())
    }

    // === Transactions ===

    /// Record a completed shipping transaction.
    ///
    /// Both participant ids must resolve to users of the right role. The
    /// tracking number must be well-formed but is not checked against
    /// the package collection: orders are removed when shipped, while
    /// the transaction log keeps history.
    pub fn record_transaction(
        &mut self,
        customer_id: &str,
        employee_id: &str,
        tracking: &str,
        ship_date: &str,
        deliver_date: &str,
        cost: &str,
    ) -> Result<()> {
        let customer_key = UserId::parse(customer_id)
            .map_err(|_| Error::KeyNotFound { key: customer_id.trim().to_string() })?;
        let employee_key = UserId::parse(employee_id)
            .map_err(|_| Error::KeyNotFound { key: employee_id.trim().to_string() })?;
        let tracking = TrackingNumber::parse(tracking)?;

        let customer = self
            .users
            .get(&customer_key)
            .ok_or_else(|| Error::KeyNotFound { key: customer_key.to_string() })?;
        if !customer.role().is_customer() {
            return Err(Error::RoleMismatch {
                key: customer_key.to_string(),
                expected: "a customer",
            });
        }
        let employee = self
            .users
            .get(&employee_key)
            .ok_or_else(|| Error::KeyNotFound { key: employee_key.to_string() })?;
        if !employee.role().is_employee() {
            return Err(Error::RoleMismatch {
                key: employee_key.to_string(),
                expected: "an employee",
            });
        }

        let ship_date = validate::date(FieldName::ShipDate, ship_date)?;
        let deliver_date = validate::date(FieldName::DeliverDate, deliver_date)?;
        let cost = validate::non_negative_float(FieldName::Cost, cost)?;

        self.transactions.push(Transaction::new(
            customer_key,
            employee_key,
            tracking,
            ship_date,
            deliver_date,
            cost,
        ));
        debug!(
            customer = %customer_key,
            employee = %employee_key,
            "transaction recorded"
        );
        Ok(())
    }
}
