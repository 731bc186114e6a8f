mod register_farm_command;
mod register_farm_use_case;

pub use register_farm_command::RegisterFarmCommand;
pub use register_farm_use_case::RegisterFarmUseCase;
