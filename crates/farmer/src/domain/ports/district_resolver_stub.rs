use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use shared_kernel::domain::value_objects::{Latitude, Longitude};
use shared_kernel::errors::{DomainError, Result};

use crate::domain::ports::DistrictResolver;
use crate::domain::value_objects::DistrictName;

#[derive(Default)]
pub struct DistrictResolverStub {
    pub district_to_return: Arc<Mutex<Option<DistrictName>>>,
    pub error_to_return: Arc<Mutex<Option<DomainError>>>,
    /// Coordonnées reçues, dans l'ordre des appels
    pub calls: Arc<Mutex<Vec<(f64, f64)>>>,
}

impl DistrictResolverStub {
    pub fn returning(district: &str) -> Self {
        let stub = Self::default();
        *stub.district_to_return.lock().unwrap() = Some(DistrictName::from_raw(district));
        stub
    }

    pub fn failing(err: DomainError) -> Self {
        let stub = Self::default();
        *stub.error_to_return.lock().unwrap() = Some(err);
        stub
    }
}

#[async_trait]
impl DistrictResolver for DistrictResolverStub {
    async fn resolve_district(
        &self,
        latitude: Latitude,
        longitude: Longitude,
    ) -> Result<DistrictName> {
        self.calls.lock().unwrap().push((latitude.value(), longitude.value()));

        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }

        Ok(self
            .district_to_return
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(DistrictName::unknown))
    }
}
