mod latitude;
mod longitude;
mod value_object;

pub use latitude::Latitude;
pub use longitude::Longitude;
pub use value_object::ValueObject;
