use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::validation::{is_valid_email, is_valid_phone};

#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Contact {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Checks the fields in the order a form reports them: every field present,
    /// then email format, then phone format.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("name", &self.name),
            ("phone", &self.phone),
            ("email", &self.email),
        ] {
            if value.is_empty() {
                return Err(ValidationError::EmptyField { field });
            }
        }

        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }

        if !is_valid_phone(&self.phone) {
            return Err(ValidationError::InvalidPhone);
        }

        Ok(())
    }

    /// Same name or same email, compared exactly.
    pub fn collides_with(&self, other: &Contact) -> bool {
        self.name == other.name || self.email == other.email
    }

    pub fn already_exist(&self, contact_list: &[Contact]) -> bool {
        contact_list.iter().any(|cont| self.collides_with(cont))
    }
}

pub fn display_contact(contact: &Contact) -> String {
    format!("{} | {} | {}", contact.name, contact.phone, contact.email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_contact_passes() {
        let contact = Contact::new("Bo", "1234567890", "bo@x.com");

        assert_eq!(contact.validate(), Ok(()));
    }

    #[test]
    fn empty_fields_are_reported_first() {
        let contact = Contact::new("", "123", "nope");
        assert_eq!(
            contact.validate(),
            Err(ValidationError::EmptyField { field: "name" })
        );

        let contact = Contact::new("Bo", "1234567890", "");
        assert_eq!(
            contact.validate(),
            Err(ValidationError::EmptyField { field: "email" })
        );
    }

    #[test]
    fn email_is_checked_before_phone() {
        let contact = Contact::new("Bo", "123", "notanemail");

        assert_eq!(contact.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn bad_phone_is_reported() {
        let contact = Contact::new("Bo", "12ab", "bo@x.com");

        assert_eq!(contact.validate(), Err(ValidationError::InvalidPhone));
    }

    #[test]
    fn duplicates_match_on_name_or_email() {
        let list = vec![Contact::new("Al", "1234567890", "al@x.com")];

        assert!(Contact::new("Al", "0987654321", "other@x.com").already_exist(&list));
        assert!(Contact::new("Bo", "0987654321", "al@x.com").already_exist(&list));
        // case-sensitive
        assert!(!Contact::new("al", "0987654321", "AL@x.com").already_exist(&list));
    }

    #[test]
    fn display_joins_fields() {
        let contact = Contact::new("Bo", "1234567890", "bo@x.com");

        assert_eq!(display_contact(&contact), "Bo | 1234567890 | bo@x.com");
    }
}
