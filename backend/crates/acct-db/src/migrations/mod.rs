pub mod create_users_table;
pub mod migration;
pub mod migration_set;
