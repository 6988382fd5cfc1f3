//! The numbered console menu.
//!
//! One selection per line. Commands that need record fields read one
//! more line of whitespace-separated positional fields and check the
//! arity before anything reaches the store, so a malformed line costs
//! nothing. Reading is generic over [`BufRead`] so tests can feed a
//! scripted session.

use std::io::{self, BufRead};

use parceldb_core::record::PackageKind;
use parceldb_engine::Store;

use crate::format::{self, OutputMode};

const MENU: &str = "\
Choose one of the following operations by number:

\t 1. Show all package orders, sorted by tracking number
\t 2. Add a package order
\t 3. Remove a package order by tracking number
\t 4. Search for a package order by tracking number
\t 5. Show all users, sorted by id
\t 6. Add a user
\t 7. Update a user's info by id
\t 8. Record a completed shipping transaction
\t 9. Show all completed shipping transactions
\t10. Exit
";

/// Drive the menu until `10`, `exit`, or end of input.
pub fn run<R: BufRead>(store: &mut Store, input: &mut R, mode: OutputMode) -> io::Result<()> {
    println!("{}", MENU);
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input behaves like exit so piped sessions close
            // cleanly.
            break;
        }
        match line.trim() {
            "" => continue,
            "1" => print!("{}", format::format_packages(store.packages(), mode)),
            "2" => add_package(store, input)?,
            "3" => remove_package(store, input, mode)?,
            "4" => search_package(store, input, mode)?,
            "5" => print!("{}", format::format_users(store.users(), mode)),
            "6" => add_user(store, input)?,
            "7" => update_user(store, input)?,
            "8" => record_transaction(store, input)?,
            "9" => print!("{}", format::format_transactions(store.transactions(), mode)),
            "10" | "exit" => break,
            "h" | "help" => println!("{}", MENU),
            other => println!("{:?} is not an operation. Enter 'help' to list them.", other),
        }
        println!("\nEnter another operation number, or 'help' for the list.");
    }
    Ok(())
}

/// Print `text`, then read one trimmed line. `None` means the input
/// ended mid-command.
fn prompt<R: BufRead>(input: &mut R, text: &str) -> io::Result<Option<String>> {
    println!("{}", text);
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Split a positional field line, requiring an exact count.
fn split_exact(line: &str, expected: usize) -> Option<Vec<&str>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() == expected {
        Some(fields)
    } else {
        None
    }
}

fn wrong_arity(expected: usize, line: &str) {
    let got = line.split_whitespace().count();
    println!(
        "Expected {} fields but got {}. Returning to the menu.",
        expected, got
    );
}

fn add_package<R: BufRead>(store: &mut Store, input: &mut R) -> io::Result<()> {
    let Some(kind_raw) = prompt(input, "Enter the package type (Envelope, Box, Crate, or Drum):")?
    else {
        return Ok(());
    };
    let kind = match PackageKind::parse(&kind_raw) {
        Ok(kind) => kind,
        Err(e) => {
            println!("(error) {}", e);
            return Ok(());
        }
    };

    // Field names and example differ per package type.
    let (header, example) = match kind {
        PackageKind::Envelope => (
            "TRACKING# SPECIFICATION CLASS HEIGHT WIDTH",
            "GFR23 Books Retail 62 45",
        ),
        PackageKind::Box => (
            "TRACKING# SPECIFICATION CLASS LARGEST-DIMENSION VOLUME",
            "AB123 Fragile First-Class 30 2500",
        ),
        PackageKind::Crate => (
            "TRACKING# SPECIFICATION CLASS MAX-LOAD CONTENT",
            "LM904 N/A Ground 150.5 dishes",
        ),
        PackageKind::Drum => (
            "TRACKING# SPECIFICATION CLASS MATERIAL DIAMETER",
            "Q1T77 Do-not-Bend Metro Fiber 55",
        ),
    };
    let Some(line) = prompt(
        input,
        &format!("Describe the {} as: {}\n   example: {}", kind.as_str().to_lowercase(), header, example),
    )?
    else {
        return Ok(());
    };
    let Some(fields) = split_exact(&line, 5) else {
        wrong_arity(5, &line);
        return Ok(());
    };

    match store.add_package(fields[0], kind.as_str(), fields[1], fields[2], fields[3], fields[4]) {
        Ok(key) => println!("Package order {} added.", key),
        Err(e) => println!("(error) {}", e),
    }
    Ok(())
}

fn remove_package<R: BufRead>(store: &mut Store, input: &mut R, mode: OutputMode) -> io::Result<()> {
    print!("{}", format::format_packages(store.packages(), mode));
    let Some(tracking) = prompt(input, "Enter the tracking number of the order to remove:")? else {
        return Ok(());
    };
    match store.remove_package(&tracking) {
        Ok(order) => println!("Package order {} removed.", order.tracking()),
        Err(e) => println!("(error) {}", e),
    }
    Ok(())
}

fn search_package<R: BufRead>(store: &mut Store, input: &mut R, mode: OutputMode) -> io::Result<()> {
    let Some(tracking) = prompt(input, "Enter the tracking number to search for:")? else {
        return Ok(());
    };
    match store.find_package(&tracking) {
        Some(order) => print!("{}", format::format_package(order, mode)),
        None => println!("No package order found with tracking number {:?}.", tracking),
    }
    Ok(())
}

fn add_user<R: BufRead>(store: &mut Store, input: &mut R) -> io::Result<()> {
    let Some(role) = prompt(input, "Enter the user role (Customer or Employee):")? else {
        return Ok(());
    };
    if role.eq_ignore_ascii_case("employee") {
        let Some(line) = prompt(
            input,
            "Describe the employee as: ID# FIRST LAST SSN SALARY ACCOUNT#\n   example: 000114 Summer Smith 000114444 3456.23 1234567890",
        )?
        else {
            return Ok(());
        };
        let Some(fields) = split_exact(&line, 6) else {
            wrong_arity(6, &line);
            return Ok(());
        };
        match store.add_employee(fields[0], fields[1], fields[2], fields[3], fields[4], fields[5]) {
            Ok(id) => println!("Employee {} added.", id),
            Err(e) => println!("(error) {}", e),
        }
    } else if role.eq_ignore_ascii_case("customer") {
        let Some(line) = prompt(
            input,
            "Describe the customer as: ID# FIRST LAST PHONE ADDRESS\n   example: 019245 Rick Sanchez 555-867-5309 601 University Drive",
        )?
        else {
            return Ok(());
        };
        // The address keeps its spaces: everything after the phone.
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 5 {
            wrong_arity(5, &line);
            return Ok(());
        }
        let address = fields[4..].join(" ");
        match store.add_customer(fields[0], fields[1], fields[2], fields[3], &address) {
            Ok(id) => println!("Customer {} added.", id),
            Err(e) => println!("(error) {}", e),
        }
    } else {
        println!(
            "{:?} is not a user role: expected Customer or Employee. Returning to the menu.",
            role
        );
    }
    Ok(())
}

fn update_user<R: BufRead>(store: &mut Store, input: &mut R) -> io::Result<()> {
    let Some(id) = prompt(input, "Enter the id of the user to update:")? else {
        return Ok(());
    };
    if store.find_user(&id).is_none() {
        println!("No user found with id {:?}.", id);
        return Ok(());
    }
    let Some(field) = prompt(
        input,
        "Which field? (First-name, Last-name, Social, Salary, Account, Phone, or Address)",
    )?
    else {
        return Ok(());
    };
    let Some(value) = prompt(input, "Enter the new value:")? else {
        return Ok(());
    };
    match store.update_user(&id, &field, &value) {
        Ok(()) => println!("User {} updated.", id.trim()),
        Err(e) => println!("(error) {}", e),
    }
    Ok(())
}

fn record_transaction<R: BufRead>(store: &mut Store, input: &mut R) -> io::Result<()> {
    let Some(line) = prompt(
        input,
        "Describe the transaction as: CUSTOMER-ID EMPLOYEE-ID TRACKING# SHIP-DATE DELIVER-DATE COST\n   example: 019245 000114 AB123 12/01/24 12/24/24 3456.23",
    )?
    else {
        return Ok(());
    };
    let Some(fields) = split_exact(&line, 6) else {
        wrong_arity(6, &line);
        return Ok(());
    };
    match store.record_transaction(fields[0], fields[1], fields[2], fields[3], fields[4], fields[5]) {
        Ok(()) => println!("Transaction recorded."),
        Err(e) => println!("(error) {}", e),
    }
    Ok(())
}
