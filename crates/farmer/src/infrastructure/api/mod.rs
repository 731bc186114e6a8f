// crates/farmer/src/infrastructure/api/mod.rs
pub mod http;
