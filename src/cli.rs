pub mod command;
pub mod run;
pub mod shell;

pub use run::run_app;

use crate::prelude::{AppError, Contact, display_contact};
use std::io::{BufRead, Write};

// OUTPUT FUNCTIONS
pub fn listing(i: usize, contact: &Contact) -> String {
    format!("{i:>3}. {}", display_contact(contact))
}

pub fn print_contacts<W: Write>(out: &mut W, contacts: &[Contact]) -> Result<(), AppError> {
    if contacts.is_empty() {
        writeln!(out, "No contact yet")?;
        return Ok(());
    }

    for (i, c) in contacts.iter().enumerate() {
        writeln!(out, "{}", listing(i + 1, c))?;
    }
    Ok(())
}

pub fn prompt<W: Write>(out: &mut W, message: &str) -> Result<(), AppError> {
    write!(out, "{message}\n> ")?;
    out.flush()?;
    Ok(())
}

// INPUT FUNCTIONS
/// Next trimmed line, or `None` once input is exhausted.
pub fn get_input<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Converts a 1-based position shown to the user into a list index.
pub fn to_index(position: usize, len: usize) -> Result<usize, AppError> {
    match position.checked_sub(1) {
        Some(index) if index < len => Ok(index),
        _ => Err(AppError::Index {
            index: position,
            len,
        }),
    }
}
