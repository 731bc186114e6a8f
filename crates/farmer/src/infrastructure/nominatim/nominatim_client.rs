// crates/farmer/src/infrastructure/nominatim/nominatim_client.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::{Latitude, Longitude};
use shared_kernel::errors::{infra_err, AppError, AppResult, ErrorCode, Result};

use crate::domain::ports::DistrictResolver;
use crate::domain::value_objects::DistrictName;
use crate::infrastructure::nominatim::ReverseGeocodeResponse;

/// Niveau "city" de Nominatim
const REVERSE_ZOOM: &str = "10";

pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_USER_AGENT: &str = "farmer-registry/0.1";

#[derive(Debug, Clone)]
pub struct NominatimConfig {
    pub base_url: String,
    pub user_agent: String,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_NOMINATIM_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl NominatimConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("NOMINATIM_URL").unwrap_or(defaults.base_url),
            user_agent: std::env::var("NOMINATIM_USER_AGENT").unwrap_or(defaults.user_agent),
        }
    }
}

pub struct NominatimClient {
    http: reqwest::Client,
    base_url: String,
}

impl NominatimClient {
    pub fn new(config: &NominatimConfig) -> AppResult<Self> {
        // La politique d'usage de Nominatim exige un User-Agent identifiable
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| {
                let message = format!("HTTP client init failed: {e}");
                AppError::new(ErrorCode::InfrastructureFailure, message)
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn reverse(
        &self,
        latitude: Latitude,
        longitude: Longitude,
    ) -> Result<ReverseGeocodeResponse> {
        let url = format!("{}/reverse", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("format", "json".to_string()),
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("zoom", REVERSE_ZOOM.to_string()),
                ("addressdetails", "1".to_string()),
            ])
            .send()
            .await
            .map_err(|e| infra_err(format!("Reverse geocoding request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(infra_err(format!("Reverse geocoding returned HTTP {status}")));
        }

        response
            .json::<ReverseGeocodeResponse>()
            .await
            .map_err(|e| infra_err(format!("Invalid reverse geocoding response: {e}")))
    }
}

#[async_trait]
impl DistrictResolver for NominatimClient {
    async fn resolve_district(
        &self,
        latitude: Latitude,
        longitude: Longitude,
    ) -> Result<DistrictName> {
        let response = self.reverse(latitude, longitude).await?;
        Ok(response.district_name())
    }
}
