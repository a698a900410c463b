pub mod contact;
pub mod manager;

pub use contact::{Contact, display_contact};
pub use manager::{ContactStore, PendingEdit};
