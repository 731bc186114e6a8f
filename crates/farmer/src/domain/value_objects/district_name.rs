// crates/farmer/src/domain/value_objects/district_name.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistrictName(String);

impl DistrictName {
    pub const UNKNOWN: &'static str = "Unknown District";

    pub fn from_raw(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
