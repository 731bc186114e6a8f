mod error_mapper;

pub use error_mapper::{ApiError, ToHttpResponse};
