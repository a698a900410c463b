pub mod json;
pub mod memory;
pub mod storage_port;

use crate::prelude::{AppError, Contact};
use std::fs;
use std::path::Path;

pub use json::JsonStorage;
pub use memory::MemStorage;

pub const DEFAULT_STORAGE_PATH: &str = "contacts.json";

/// Where a `ContactStore` keeps its list between runs.
pub trait Storage {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    /// Replaces everything previously saved with `contacts`.
    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMedium {
    Json,
    Mem,
}

impl StorageMedium {
    pub fn from(choice: &str) -> Result<Self, AppError> {
        match choice.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(StorageMedium::Json),
            "mem" => Ok(StorageMedium::Mem),
            other => Err(AppError::Config(format!(
                "'{other}' is not a recognized storage medium (json, mem)"
            ))),
        }
    }
}

pub fn parse_storage(choice: &str, path: &Path) -> Result<Box<dyn Storage>, AppError> {
    match StorageMedium::from(choice)? {
        StorageMedium::Json => Ok(Box::new(JsonStorage::new(path))),
        StorageMedium::Mem => Ok(Box::new(MemStorage::default())),
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_storage_choice() -> Result<(), AppError> {
        assert_eq!(StorageMedium::from("json")?, StorageMedium::Json);
        assert_eq!(StorageMedium::from(" MEM ")?, StorageMedium::Mem);
        assert!(matches!(
            StorageMedium::from("txt"),
            Err(AppError::Config(_))
        ));
        Ok(())
    }

    #[test]
    fn builds_requested_backend() -> Result<(), AppError> {
        let storage = parse_storage("mem", Path::new("unused.json"))?;
        assert_eq!(storage.get_medium(), "mem");

        let storage = parse_storage("json", Path::new("contacts.json"))?;
        assert_eq!(storage.get_medium(), "json");
        Ok(())
    }
}
