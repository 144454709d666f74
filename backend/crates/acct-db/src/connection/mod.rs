pub mod pool_builder;
