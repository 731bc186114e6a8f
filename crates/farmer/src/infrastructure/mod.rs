// crates/farmer/src/infrastructure/mod.rs

pub mod api;
pub mod bootstrap;
pub mod identity;
pub mod nominatim;
pub mod postgres;
