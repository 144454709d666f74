pub mod connection;
pub mod error;
pub mod memory;
pub mod migrations;
pub mod repositories;
pub mod schema;
pub mod store;

#[cfg(test)]
mod tests;

pub use connection::pool_builder::PoolBuilder;
pub use error::{DbError, Result};
pub use memory::memory_user_store::MemoryUserStore;
pub use migrations::create_users_table::CreateUsersTable;
pub use migrations::migration::Migration;
pub use migrations::migration_set::Migrations;
pub use repositories::user_repository::UserRepository;
pub use schema::engine_capabilities::{EngineCapabilities, SqliteVersion};
pub use schema::schema_state::{SchemaState, schema_state};
pub use schema::uniqueness_strategy::{
    ExpressionIndex, ShadowColumn, StrategyKind, UniquenessStrategy, select_strategy,
};
pub use store::UserStore;
