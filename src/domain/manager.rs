use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::prelude::{AppError, Contact, Storage};
use crate::store::storage_port::{
    ImportOutcome, ImportSummary, RowStatus, contact_from_row, export_contacts_to_csv,
    open_csv_rows,
};
use crate::validation::{is_valid_email, is_valid_phone};

/// The ordered contact list and the backend it is written through.
///
/// Every mutating operation rewrites the whole list to storage once it has
/// changed memory. When that write fails the error is returned and memory is
/// left as mutated.
pub struct ContactStore {
    mem: Vec<Contact>,
    storage: Box<dyn Storage>,
}

impl ContactStore {
    pub fn open(storage: Box<dyn Storage>) -> Result<Self, AppError> {
        let mem = storage.load()?;
        Ok(Self { mem, storage })
    }

    pub fn contact_list(&self) -> &[Contact] {
        &self.mem
    }

    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.mem.get(index)
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    pub fn medium(&self) -> &str {
        self.storage.get_medium()
    }

    fn save(&self) -> Result<(), AppError> {
        self.storage.save(&self.mem)
    }

    fn check_index(&self, index: usize) -> Result<(), AppError> {
        if index < self.mem.len() {
            Ok(())
        } else {
            Err(AppError::Index {
                index,
                len: self.mem.len(),
            })
        }
    }

    /// Replaces the contact at `index`, or appends when there is none.
    pub fn upsert(
        &mut self,
        index: Option<usize>,
        name: &str,
        phone: &str,
        email: &str,
    ) -> Result<Contact, AppError> {
        let contact = Contact::new(name, phone, email);
        contact.validate()?;

        match index {
            Some(index) => {
                self.check_index(index)?;
                self.mem[index] = contact.clone();
                info!(index, name = %contact.name, "contact updated");
            }
            None => {
                self.mem.push(contact.clone());
                info!(name = %contact.name, "contact added");
            }
        }

        self.save()?;
        Ok(contact)
    }

    /// `upsert` against whatever `pending` points at; the target is consumed
    /// only if the save went through validation.
    pub fn save_form(
        &mut self,
        pending: &mut PendingEdit,
        name: &str,
        phone: &str,
        email: &str,
    ) -> Result<Contact, AppError> {
        let stored = self.upsert(pending.target(), name, phone, email);

        if !matches!(stored, Err(AppError::Validation(_))) {
            pending.clear();
        }
        stored
    }

    pub fn delete(&mut self, index: usize) -> Result<Contact, AppError> {
        self.check_index(index)?;

        let removed = self.mem.remove(index);
        info!(index, name = %removed.name, "contact deleted");

        self.save()?;
        Ok(removed)
    }

    pub fn search(&self, name: &str) -> Vec<&Contact> {
        let wanted = name.to_lowercase();

        self.mem
            .iter()
            .filter(|cont| cont.name.to_lowercase() == wanted)
            .collect()
    }

    pub fn sort_by_name(&mut self) -> Result<(), AppError> {
        self.mem.sort_by_cached_key(|c| c.name.to_lowercase());
        self.save()
    }

    pub fn sort_by_email(&mut self) -> Result<(), AppError> {
        self.mem.sort_by_cached_key(|c| c.email.to_lowercase());
        self.save()
    }

    pub fn export_csv(&self, des: &Path) -> Result<(PathBuf, u64), AppError> {
        let (path, total) = export_contacts_to_csv(&self.mem, des)?;
        info!(path = %path.display(), total, "contacts exported");
        Ok((path, total))
    }

    /// Appends every well-formed, valid, non-duplicate row of `src`.
    ///
    /// A row without exactly three fields, a blank line included, stops the
    /// import; the rows appended before it are kept and saved. A read failure
    /// midway leaves the list as it was before the import.
    pub fn import_csv(&mut self, src: &Path) -> Result<ImportSummary, AppError> {
        let rows = open_csv_rows(src)?;
        let before = self.mem.len();
        let mut summary = ImportSummary::default();

        for result in rows {
            let row = match result {
                Ok(row) => row,
                Err(e) => {
                    self.mem.truncate(before);
                    return Err(e);
                }
            };

            let contact = match contact_from_row(&row) {
                Ok(contact) => contact,
                Err(e) => {
                    warn!(error = %e, kept = self.mem.len() - before, "import stopped");
                    self.save()?;
                    return Err(e);
                }
            };

            let status = if contact.already_exist(&self.mem) {
                RowStatus::Duplicate
            } else if !is_valid_phone(&contact.phone) {
                RowStatus::InvalidPhone
            } else if !is_valid_email(&contact.email) {
                RowStatus::InvalidEmail
            } else {
                RowStatus::Imported
            };

            let outcome = ImportOutcome {
                line: row.line,
                name: contact.name.clone(),
                email: contact.email.clone(),
                status,
            };

            if status == RowStatus::Imported {
                self.mem.push(contact);
            } else {
                warn!(line = outcome.line, "{}", outcome.describe());
            }
            summary.outcomes.push(outcome);
        }

        self.save()?;
        info!(
            path = %src.display(),
            imported = summary.imported(),
            skipped = summary.skipped(),
            "contacts imported"
        );
        Ok(summary)
    }
}

/// The position a form is currently editing, if any.
///
/// Selecting a new position overwrites whatever was pending.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PendingEdit {
    target: Option<usize>,
}

impl PendingEdit {
    pub fn select<'a>(
        &mut self,
        index: usize,
        store: &'a ContactStore,
    ) -> Result<&'a Contact, AppError> {
        let contact = store.get(index).ok_or(AppError::Index {
            index,
            len: store.len(),
        })?;
        self.target = Some(index);
        Ok(contact)
    }

    pub fn target(&self) -> Option<usize> {
        self.target
    }

    pub fn is_editing(&self) -> bool {
        self.target.is_some()
    }

    pub fn clear(&mut self) {
        self.target = None;
    }
}
