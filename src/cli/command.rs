use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::store::DEFAULT_STORAGE_PATH;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Contact book with CSV import and export")]
pub struct Cli {
    /// Storage choice (json, mem)
    #[arg(long = "storage", env = "STORAGE_CHOICE", default_value_t = String::from("json"))]
    pub storage_choice: String,

    /// Path of the JSON contacts file
    #[arg(long, env = "CONTACTS_FILE", default_value = DEFAULT_STORAGE_PATH)]
    pub file: PathBuf,

    /// Log store activity to stderr
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Contact email address
        #[arg(long)]
        email: String,
    },
    /// Edit the contact at a listed position.
    /// Fields left out keep their current value
    Edit {
        /// Position as shown by `list`
        #[arg(long)]
        index: usize,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },
    /// Delete the contact at a listed position
    Delete {
        /// Position as shown by `list`
        #[arg(long)]
        index: usize,
    },
    /// List contacts
    List {
        /// Show sorted without saving the order
        #[arg(long)]
        sort: Option<SortKey>,
    },
    /// Find contacts whose name matches, ignoring case
    Search {
        #[arg(long)]
        name: String,
    },
    /// Sort the stored list
    Sort {
        #[arg(long, value_enum, default_value_t = SortKey::Name)]
        by: SortKey,
    },
    /// Import contacts from a .csv file
    Import {
        /// File path to the source .csv file
        #[arg(short, long)]
        src: PathBuf,
    },
    /// Export contacts to a .csv file
    Export {
        /// Destination file, or a directory to write contacts.csv into
        #[arg(short, long)]
        des: PathBuf,
    },
    /// Interactive menu
    Shell,
}

/// Supported sort keys
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    Name,
    Email,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_edit_with_partial_fields() {
        let cli = Cli::parse_from([
            "contact-book",
            "--storage",
            "mem",
            "edit",
            "--index",
            "2",
            "--phone",
            "0987654321",
        ]);

        assert_eq!(cli.storage_choice, "mem");
        match cli.command {
            Commands::Edit {
                index,
                name,
                phone,
                email,
            } => {
                assert_eq!(index, 2);
                assert_eq!(name, None);
                assert_eq!(phone.as_deref(), Some("0987654321"));
                assert_eq!(email, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn sort_defaults_to_name() {
        let cli = Cli::parse_from(["contact-book", "sort"]);

        assert!(matches!(cli.command, Commands::Sort { by: SortKey::Name }));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
