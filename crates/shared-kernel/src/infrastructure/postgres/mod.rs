// crates/shared-kernel/src/infrastructure/postgres/mod.rs

pub mod factories;
pub mod mappers;
pub mod utils;
