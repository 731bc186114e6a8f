pub mod authenticate_user;
pub mod fetch_farm;
pub mod register_farm;
pub mod register_farmer;

mod payload;
