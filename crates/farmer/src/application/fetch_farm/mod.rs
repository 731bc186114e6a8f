mod fetch_farm_command;
mod fetch_farm_use_case;

pub use fetch_farm_command::FetchFarmCommand;
pub use fetch_farm_use_case::FetchFarmUseCase;
