// crates/shared-kernel/src/infrastructure/mod.rs

#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub mod bootstrap;
