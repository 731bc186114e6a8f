mod farm_repository;
mod farmer_repository;

pub use farm_repository::FarmRepository;
pub use farmer_repository::FarmerRepository;

#[cfg(test)]
mod farm_repository_stub;
#[cfg(test)]
mod farmer_repository_stub;

#[cfg(test)]
pub use farm_repository_stub::FarmRepositoryStub;
#[cfg(test)]
pub use farmer_repository_stub::FarmerRepositoryStub;
