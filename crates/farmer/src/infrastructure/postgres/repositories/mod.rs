mod postgres_farm_repository;
mod postgres_farmer_repository;

pub use postgres_farm_repository::PostgresFarmRepository;
pub use postgres_farmer_repository::PostgresFarmerRepository;
