// crates/farmer/src/infrastructure/api/http/mod.rs
pub mod extractors;
pub mod handlers;
pub mod mappers;
mod router;
mod state;


pub use router::build_router;
pub use state::ApiState;
