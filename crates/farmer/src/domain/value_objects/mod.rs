mod bearer_token;
mod district_name;
mod farmer_id;
mod phone_number;

pub use bearer_token::BearerToken;
pub use district_name::DistrictName;
pub use farmer_id::FarmerId;
pub use phone_number::PhoneNumber;
