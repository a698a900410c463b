pub mod export_csv;
pub mod import_csv;

use super::*;
pub use export_csv::export_contacts_to_csv;
pub use import_csv::{
    CsvRow, CsvRows, ImportOutcome, ImportSummary, RowStatus, contact_from_row, open_csv_rows,
};

pub const CSV_HEADER: [&str; 3] = ["Name", "Phone", "Email"];
