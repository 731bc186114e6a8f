mod farm_handler;
mod farmer_handler;

pub use farm_handler::{fetch_farm, register_farm, FarmHandler};
pub use farmer_handler::{authenticate_user, register_farmer, FarmerHandler};
