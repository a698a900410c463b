use std::fs::File;
use std::io::{BufRead, BufReader};

use super::*;
use csv::{ReaderBuilder, StringRecord};

/// How a single CSV row was handled during an import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStatus {
    Imported,
    Duplicate,
    InvalidPhone,
    InvalidEmail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    pub line: u64,
    pub name: String,
    pub email: String,
    pub status: RowStatus,
}

impl ImportOutcome {
    pub fn describe(&self) -> String {
        match self.status {
            RowStatus::Imported => format!("Imported contact: {}", self.name),
            RowStatus::Duplicate => {
                format!("Skipping duplicate contact: {} ({})", self.name, self.email)
            }
            RowStatus::InvalidPhone => format!("Invalid phone number for contact: {}", self.name),
            RowStatus::InvalidEmail => format!("Invalid email for contact: {}", self.name),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub outcomes: Vec<ImportOutcome>,
}

impl ImportSummary {
    pub fn count(&self, status: RowStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }

    pub fn imported(&self) -> usize {
        self.count(RowStatus::Imported)
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.imported()
    }
}

/// One CSV record and the line it starts on.
#[derive(Debug, Clone)]
pub struct CsvRow {
    pub line: u64,
    pub fields: StringRecord,
}

/// Rows of a CSV source after its header line.
///
/// Every physical line counts: a blank line is a row with no fields. A quoted
/// field may span lines; such a row keeps the number of its first line.
pub struct CsvRows<R> {
    input: R,
    line: u64,
}

impl<R: BufRead> CsvRows<R> {
    /// Consumes the first line as the header, whatever it holds. A source
    /// with no lines at all is malformed.
    pub fn new(mut input: R) -> Result<Self, AppError> {
        let mut header = String::new();
        if input.read_line(&mut header)? == 0 {
            return Err(AppError::Format { line: 1, fields: 0 });
        }

        Ok(Self { input, line: 1 })
    }

    fn next_chunk(&mut self) -> Result<Option<(u64, String)>, AppError> {
        let start = self.line + 1;
        let mut chunk = String::new();

        loop {
            if self.input.read_line(&mut chunk)? == 0 {
                break;
            }
            self.line += 1;

            // an odd quote count means a quoted field runs onto the next line
            if chunk.matches('"').count() % 2 == 0 {
                break;
            }
        }

        if chunk.is_empty() {
            Ok(None)
        } else {
            Ok(Some((start, chunk)))
        }
    }
}

impl<R: BufRead> Iterator for CsvRows<R> {
    type Item = Result<CsvRow, AppError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_chunk() {
            Ok(Some((line, chunk))) => {
                Some(parse_row(&chunk).map(|fields| CsvRow { line, fields }))
            }
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

fn parse_row(chunk: &str) -> Result<StringRecord, AppError> {
    if chunk.trim_end_matches(['\r', '\n']).is_empty() {
        return Ok(StringRecord::new());
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(chunk.as_bytes());

    match reader.records().next() {
        Some(record) => Ok(record?),
        None => Ok(StringRecord::new()),
    }
}

pub fn open_csv_rows(src: &Path) -> Result<CsvRows<BufReader<File>>, AppError> {
    CsvRows::new(BufReader::new(File::open(src)?))
}

/// A row must carry exactly name, phone and email.
pub fn contact_from_row(row: &CsvRow) -> Result<Contact, AppError> {
    if row.fields.len() != 3 {
        return Err(AppError::Format {
            line: row.line,
            fields: row.fields.len(),
        });
    }

    Ok(Contact::new(&row.fields[0], &row.fields[1], &row.fields[2]))
}
