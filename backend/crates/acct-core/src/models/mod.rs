pub mod email_index_preference;
pub mod new_user_record;
pub mod user_changes;
pub mod user_record;
