pub mod email;
pub mod error;
pub mod models;


pub use email::{fold_email, validate_email};
pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::email_index_preference::EmailIndexPreference;
pub use models::new_user_record::NewUserRecord;
pub use models::user_changes::UserChanges;
pub use models::user_record::UserRecord;
