mod register_farmer_command;
mod register_farmer_use_case;

pub use register_farmer_command::RegisterFarmerCommand;
pub use register_farmer_use_case::RegisterFarmerUseCase;
