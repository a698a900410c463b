use std::io::{BufRead, Write};
use std::path::Path;

use super::{get_input, print_contacts, prompt, to_index};
use crate::prelude::{AppError, ContactStore, PendingEdit, RowStatus, display_contact};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Save,
    Search,
    Delete,
    Edit,
    SortByName,
    SortByEmail,
    ViewAll,
    Export,
    Import,
    Clear,
    Exit,
}

const MENU: &str = "
1. Add / Save Changes
2. Search
3. Delete Selected
4. Edit Selected
5. Sort by Name
6. Sort by Email
7. View All
8. Export to CSV
9. Import from CSV
10. Clear
0. Exit";

pub fn parse_menu_choice(action: &str) -> Result<MenuChoice, AppError> {
    match action {
        "1" => Ok(MenuChoice::Save),
        "2" => Ok(MenuChoice::Search),
        "3" => Ok(MenuChoice::Delete),
        "4" => Ok(MenuChoice::Edit),
        "5" => Ok(MenuChoice::SortByName),
        "6" => Ok(MenuChoice::SortByEmail),
        "7" => Ok(MenuChoice::ViewAll),
        "8" => Ok(MenuChoice::Export),
        "9" => Ok(MenuChoice::Import),
        "10" => Ok(MenuChoice::Clear),
        "0" => Ok(MenuChoice::Exit),
        _ => Err(AppError::ParseCommand(action.to_string())),
    }
}

/// Menu loop over `input` until `0` or end of input. Recoverable errors are
/// reported on `out` and the loop carries on.
pub fn run_shell<R: BufRead, W: Write>(
    store: &mut ContactStore,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    let mut pending = PendingEdit::default();

    writeln!(out, "--- Contact Management System ---")?;
    print_contacts(out, store.contact_list())?;

    loop {
        writeln!(out, "{MENU}")?;
        prompt(out, "")?;

        let Some(action) = get_input(input)? else {
            break;
        };

        let choice = match parse_menu_choice(&action) {
            Ok(choice) => choice,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };

        if choice == MenuChoice::Exit {
            break;
        }

        match handle_choice(choice, store, &mut pending, input, out) {
            Ok(true) => continue,
            Ok(false) => break,
            Err(e) => writeln!(out, "Error: {e}")?,
        }
    }

    writeln!(out, "Bye!")?;
    Ok(())
}

/// Ok(false) means input ran out mid-action.
fn handle_choice<R: BufRead, W: Write>(
    choice: MenuChoice,
    store: &mut ContactStore,
    pending: &mut PendingEdit,
    input: &mut R,
    out: &mut W,
) -> Result<bool, AppError> {
    match choice {
        MenuChoice::Save => {
            let current = pending.target().and_then(|index| store.get(index)).cloned();

            let mut fields = Vec::with_capacity(3);
            for (label, kept) in [
                ("Name", current.as_ref().map(|c| c.name.as_str())),
                ("Phone", current.as_ref().map(|c| c.phone.as_str())),
                ("Email", current.as_ref().map(|c| c.email.as_str())),
            ] {
                match kept {
                    Some(value) => prompt(out, &format!("{label} [{value}], Enter keeps it:"))?,
                    None => prompt(out, &format!("{label}:"))?,
                }
                let Some(entered) = get_input(input)? else {
                    return Ok(false);
                };
                fields.push(match kept {
                    Some(value) if entered.is_empty() => value.to_string(),
                    _ => entered,
                });
            }

            let editing = pending.is_editing();
            let contact = store.save_form(pending, &fields[0], &fields[1], &fields[2])?;
            if editing {
                writeln!(out, "Contact updated successfully!")?;
            } else {
                writeln!(out, "Contact '{}' added successfully!", contact.name)?;
            }
            print_contacts(out, store.contact_list())?;
        }

        MenuChoice::Search => {
            prompt(out, "Name to search:")?;
            let Some(name) = get_input(input)? else {
                return Ok(false);
            };

            let found = store.search(&name);
            if found.is_empty() {
                writeln!(out, "No contact found with that name.")?;
            }
            for c in found {
                writeln!(out, "{}", display_contact(c))?;
            }
        }

        MenuChoice::Delete => {
            let Some(index) = select_position(store, input, out)? else {
                return Ok(false);
            };

            let name = store.contact_list()[index].name.clone();
            prompt(out, &format!("Delete contact '{name}'? (y/n)"))?;
            let Some(consent) = get_input(input)? else {
                return Ok(false);
            };
            if !consent.eq_ignore_ascii_case("y") {
                return Ok(true);
            }

            store.delete(index)?;
            pending.clear();
            writeln!(out, "Contact '{name}' deleted successfully")?;
            print_contacts(out, store.contact_list())?;
        }

        MenuChoice::Edit => {
            let Some(index) = select_position(store, input, out)? else {
                return Ok(false);
            };

            let contact = pending.select(index, store)?;
            writeln!(out, "Editing: {}", display_contact(contact))?;
            writeln!(out, "Modify the fields with 'Add / Save Changes'.")?;
        }

        MenuChoice::SortByName => {
            store.sort_by_name()?;
            print_contacts(out, store.contact_list())?;
        }

        MenuChoice::SortByEmail => {
            store.sort_by_email()?;
            print_contacts(out, store.contact_list())?;
        }

        MenuChoice::ViewAll => print_contacts(out, store.contact_list())?,

        MenuChoice::Export => {
            prompt(out, "Export to (.csv file or directory):")?;
            let Some(des) = get_input(input)? else {
                return Ok(false);
            };
            if des.is_empty() {
                return Ok(true);
            }

            let (path, total) = store.export_csv(Path::new(&des))?;
            writeln!(out, "Successfully exported {total} contacts to {path:?}.")?;
        }

        MenuChoice::Import => {
            prompt(out, "Import from (.csv file):")?;
            let Some(src) = get_input(input)? else {
                return Ok(false);
            };
            if src.is_empty() {
                return Ok(true);
            }

            let summary = store.import_csv(Path::new(&src))?;
            for outcome in summary
                .outcomes
                .iter()
                .filter(|o| o.status != RowStatus::Imported)
            {
                writeln!(out, "{}", outcome.describe())?;
            }
            writeln!(
                out,
                "Successfully imported {} contacts ({} skipped).",
                summary.imported(),
                summary.skipped()
            )?;
            print_contacts(out, store.contact_list())?;
        }

        MenuChoice::Clear => {
            pending.clear();
            writeln!(out, "Form cleared.")?;
        }

        MenuChoice::Exit => return Ok(false),
    }

    Ok(true)
}

fn select_position<R: BufRead, W: Write>(
    store: &ContactStore,
    input: &mut R,
    out: &mut W,
) -> Result<Option<usize>, AppError> {
    print_contacts(out, store.contact_list())?;
    prompt(out, "Select contact number:")?;

    let Some(position) = get_input(input)? else {
        return Ok(None);
    };
    let position: usize = position
        .parse()
        .map_err(|_| AppError::ParseCommand(position.clone()))?;

    to_index(position, store.len()).map(Some)
}
