use super::*;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

pub struct JsonStorage {
    pub path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        if !fs::exists(&self.path)? {
            debug!(path = %self.path.display(), "no contacts file yet, starting empty");
            return Ok(Vec::new());
        }

        let data = fs::read_to_string(&self.path)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        let contacts: Vec<Contact> = serde_json::from_str(&data)?;
        debug!(path = %self.path.display(), count = contacts.len(), "loaded contacts");
        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let mut data = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut data, PrettyFormatter::with_indent(b"    "));
        contacts.serialize(&mut serializer)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        file.write_all(&data)?;

        debug!(path = %self.path.display(), count = contacts.len(), "saved contacts");
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn json_store_is_persistent() -> Result<(), AppError> {
        let dir = tempdir()?;
        let storage = JsonStorage::new(dir.path().join("contacts.json"));

        let contacts = vec![
            Contact::new("Uche", "01234567890", "ucheuche@gmail.com"),
            Contact::new("Alex", "01234567890", "alex@mail.com"),
        ];
        storage.save(&contacts)?;

        assert_eq!(storage.load()?, contacts);

        storage.save(&contacts[1..])?;
        let reloaded = storage.load()?;
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].name, "Alex");
        Ok(())
    }

    #[test]
    fn missing_or_empty_file_is_an_empty_list() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.json");
        let storage = JsonStorage::new(&path);

        assert!(storage.load()?.is_empty());

        fs::write(&path, "")?;
        assert!(storage.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn writes_an_array_of_objects() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("nested").join("contacts.json");
        let storage = JsonStorage::new(&path);

        storage.save(&[Contact::new("Bo", "1234567890", "bo@x.com")])?;

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
        assert_eq!(
            value,
            serde_json::json!([{ "name": "Bo", "phone": "1234567890", "email": "bo@x.com" }])
        );
        Ok(())
    }

    #[test]
    fn rejects_corrupt_file() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.json");
        fs::write(&path, "{ not json")?;

        assert!(matches!(JsonStorage::new(&path).load(), Err(AppError::Json(_))));
        Ok(())
    }
}
