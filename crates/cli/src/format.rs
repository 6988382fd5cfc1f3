//! Record listings → human/json string formatting.
//!
//! Two modes:
//! - **Human** (default): fixed-width tables, one record per row
//! - **JSON** (`--json`): `serde_json::to_string_pretty` of the records
//!
//! Everything here is a pure function to a `String`; printing is the
//! menu loop's job, which is what keeps these testable.

use parceldb_core::record::{PackageDetail, PackageOrder, Role, Transaction, User};
use parceldb_core::DATE_FORMAT;
use serde::Serialize;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format the package-order listing.
pub fn format_packages(orders: &[PackageOrder], mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_json(orders),
        OutputMode::Human => {
            let mut out = String::new();
            push_rule(&mut out, PACKAGE_WIDTH);
            out.push_str(&package_row("Tracking #", "Type", "Specification", "Class", "Details"));
            push_rule(&mut out, PACKAGE_WIDTH);
            for order in orders {
                out.push_str(&package_row(
                    order.tracking().as_str(),
                    order.detail().kind().as_str(),
                    order.specification().as_str(),
                    order.mailing_class().as_str(),
                    &package_details(order.detail()),
                ));
            }
            push_rule(&mut out, PACKAGE_WIDTH);
            out
        }
    }
}

/// Format a single package order (search result).
pub fn format_package(order: &PackageOrder, mode: OutputMode) -> String {
    format_packages(std::slice::from_ref(order), mode)
}

/// Format the user listing.
pub fn format_users(users: &[User], mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_json(users),
        OutputMode::Human => {
            let mut out = String::new();
            push_rule(&mut out, USER_WIDTH);
            out.push_str(&user_row("ID", "Name", "Role", "Details"));
            push_rule(&mut out, USER_WIDTH);
            for user in users {
                out.push_str(&user_row(
                    &user.id().to_string(),
                    &user.full_name(),
                    user.role().name(),
                    &user_details(user.role()),
                ));
            }
            push_rule(&mut out, USER_WIDTH);
            out
        }
    }
}

/// Format the transaction listing.
pub fn format_transactions(transactions: &[Transaction], mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_json(transactions),
        OutputMode::Human => {
            let mut out = String::new();
            push_rule(&mut out, TXN_WIDTH);
            out.push_str(&txn_row(
                "Customer", "Employee", "Tracking #", "Ship", "Deliver", "Cost",
            ));
            push_rule(&mut out, TXN_WIDTH);
            for txn in transactions {
                out.push_str(&txn_row(
                    &txn.customer().to_string(),
                    &txn.employee().to_string(),
                    txn.tracking().as_str(),
                    &txn.ship_date().format(DATE_FORMAT).to_string(),
                    &txn.deliver_date().format(DATE_FORMAT).to_string(),
                    &format!("{:.2}", txn.cost()),
                ));
            }
            push_rule(&mut out, TXN_WIDTH);
            out
        }
    }
}

fn format_json<T: Serialize>(records: &[T]) -> String {
    serde_json::to_string_pretty(records).unwrap_or_else(|e| format!("(error) {}", e))
}

const PACKAGE_WIDTH: usize = 88;
const USER_WIDTH: usize = 82;
const TXN_WIDTH: usize = 72;

fn push_rule(out: &mut String, width: usize) {
    out.push(' ');
    out.push_str(&"-".repeat(width));
    out.push('\n');
}

fn package_row(tracking: &str, kind: &str, spec: &str, class: &str, details: &str) -> String {
    format!(
        "| {:<10} | {:<8} | {:<13} | {:<11} | {:<28} |\n",
        tracking, kind, spec, class, details
    )
}

fn package_details(detail: &PackageDetail) -> String {
    match detail {
        PackageDetail::Envelope { height, width } => {
            format!("height {} in, width {} in", height, width)
        }
        PackageDetail::Box { largest_dimension, volume } => {
            format!("dim {} in, volume {} in^3", largest_dimension, volume)
        }
        PackageDetail::Crate { load_weight, content } => {
            format!("max load {} lb, {}", load_weight, content)
        }
        PackageDetail::Drum { material, diameter } => {
            format!("{}, diameter {} in", material.as_str(), diameter)
        }
    }
}

fn user_row(id: &str, name: &str, role: &str, details: &str) -> String {
    format!("| {:<6} | {:<20} | {:<8} | {:<35} |\n", id, name, role, details)
}

fn user_details(role: &Role) -> String {
    match role {
        Role::Customer { phone, address } => format!("phone {}, {}", phone, address),
        Role::Employee { social, salary, account } => {
            format!("ssn {}, salary {:.2}, account {}", social, salary, account)
        }
    }
}

fn txn_row(
    customer: &str,
    employee: &str,
    tracking: &str,
    ship: &str,
    deliver: &str,
    cost: &str,
) -> String {
    format!(
        "| {:<8} | {:<8} | {:<10} | {:<8} | {:<8} | {:>9} |\n",
        customer, employee, tracking, ship, deliver, cost
    )
}
