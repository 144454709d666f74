pub mod memory_user_store;
