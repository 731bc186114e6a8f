mod postgres_migrations;

pub use postgres_migrations::run_farmer_postgres_migrations;
