mod postgres_farm_repository_it;
mod postgres_farmer_repository_it;
mod postgres_identity_gateway_it;
