use std::path::PathBuf;

use super::*;
use csv::{Terminator, WriterBuilder};

const EXPORT_FILE_NAME: &str = "contacts.csv";

/// Writes `Name,Phone,Email` followed by one row per contact, in list order.
/// A directory destination gets `contacts.csv` inside it.
pub fn export_contacts_to_csv(
    contacts: &[Contact],
    des: &Path,
) -> Result<(PathBuf, u64), AppError> {
    let mut file_path = des.to_path_buf();

    if file_path.is_dir() {
        file_path = file_path.join(EXPORT_FILE_NAME);
    }

    let terminator = if cfg!(windows) {
        Terminator::CRLF
    } else {
        Terminator::Any(b'\n')
    };

    let mut writer = WriterBuilder::new()
        .terminator(terminator)
        .from_path(&file_path)?;

    writer.write_record(CSV_HEADER)?;

    let mut counter: u64 = 0;

    for contact in contacts {
        writer.write_record([&contact.name, &contact.phone, &contact.email])?;
        counter += 1;
    }

    writer.flush()?;

    Ok((file_path, counter))
}
