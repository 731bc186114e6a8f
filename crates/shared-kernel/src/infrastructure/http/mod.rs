// crates/shared-kernel/src/infrastructure/http/mod.rs

mod cors;

pub use cors::permissive_cors;
