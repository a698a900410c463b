use crate::{
    cli::{
        self,
        command::{Cli, Commands, SortKey},
        shell,
    },
    logger,
    prelude::{AppError, Contact, ContactStore, PendingEdit, RowStatus, display_contact, parse_storage},
};
use clap::Parser;
use dotenv::dotenv;
use std::io::{self, Write};
use tracing::debug;

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();

    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let storage = parse_storage(&cli.storage_choice, &cli.file)?;
    let mut store = ContactStore::open(storage)?;
    debug!(medium = store.medium(), count = store.len(), "contact store opened");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Add { name, phone, email } => {
            let contact = store.upsert(None, name.trim(), phone.trim(), email.trim())?;
            writeln!(out, "Contact '{}' added successfully!", contact.name)?;
        }

        Commands::Edit {
            index,
            name,
            phone,
            email,
        } => {
            let mut pending = PendingEdit::default();
            let current = pending
                .select(cli::to_index(index, store.len())?, &store)?
                .clone();

            let name = name.unwrap_or(current.name);
            let phone = phone.unwrap_or(current.phone);
            let email = email.unwrap_or(current.email);

            store.save_form(&mut pending, name.trim(), phone.trim(), email.trim())?;
            writeln!(out, "Contact updated successfully!")?;
        }

        Commands::Delete { index } => {
            let removed = store.delete(cli::to_index(index, store.len())?)?;
            writeln!(out, "Contact '{}' deleted successfully", removed.name)?;
        }

        // View only; the stored order is left alone
        Commands::List { sort } => {
            let mut contacts: Vec<Contact> = store.contact_list().to_vec();
            match sort {
                Some(SortKey::Name) => contacts.sort_by_cached_key(|c| c.name.to_lowercase()),
                Some(SortKey::Email) => contacts.sort_by_cached_key(|c| c.email.to_lowercase()),
                None => {}
            }
            cli::print_contacts(&mut out, &contacts)?;
        }

        Commands::Search { name } => {
            let found = store.search(name.trim());
            if found.is_empty() {
                writeln!(out, "No contact found with that name.")?;
            }
            for c in found {
                writeln!(out, "{}", display_contact(c))?;
            }
        }

        Commands::Sort { by } => {
            match by {
                SortKey::Name => store.sort_by_name()?,
                SortKey::Email => store.sort_by_email()?,
            }
            cli::print_contacts(&mut out, store.contact_list())?;
        }

        Commands::Import { src } => {
            let summary = store.import_csv(&src)?;
            for outcome in summary
                .outcomes
                .iter()
                .filter(|o| o.status != RowStatus::Imported)
            {
                writeln!(out, "{}", outcome.describe())?;
            }
            writeln!(
                out,
                "Successfully imported {} contacts from {:?} ({} skipped).",
                summary.imported(),
                src,
                summary.skipped()
            )?;
        }

        Commands::Export { des } => {
            let (path, total) = store.export_csv(&des)?;
            writeln!(out, "Successfully exported {} contacts to {:?}.", total, path)?;
        }

        Commands::Shell => {
            let stdin = io::stdin();
            shell::run_shell(&mut store, &mut stdin.lock(), &mut out)?;
        }
    }

    Ok(())
}
