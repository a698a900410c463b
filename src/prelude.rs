pub use crate::cli::{command, run_app};
pub use crate::domain::{
    contact::{self, Contact, display_contact},
    manager::{ContactStore, PendingEdit},
};
pub use crate::errors::{AppError, ValidationError};
pub use crate::store::{
    self, JsonStorage, MemStorage, Storage, parse_storage,
    storage_port::{ImportSummary, RowStatus},
};
pub use crate::validation::{is_valid_email, is_valid_phone};
