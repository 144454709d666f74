mod fixtures;
pub mod store_contract;
mod test_db;

pub use fixtures::*;
pub use test_db::*;
