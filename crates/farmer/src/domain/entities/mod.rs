mod farm_record;
mod farmer_profile;
mod identity_record;

pub use farm_record::FarmRecord;
pub use farmer_profile::{FarmerProfile, FARMER_ROLE_ID, FARMER_ROLE_NAME};
pub use identity_record::IdentityRecord;
