// crates/farmer/src/infrastructure/nominatim/nominatim_response.rs

use serde::Deserialize;

use crate::domain::value_objects::DistrictName;

/// Réponse `/reverse?format=json`. Nominatim renvoie `{"error": ...}` sans
/// `address` quand aucun lieu ne correspond.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReverseGeocodeResponse {
    #[serde(default)]
    pub address: Option<ReverseGeocodeAddress>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReverseGeocodeAddress {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
}

impl ReverseGeocodeResponse {
    /// city > town > village ; une chaîne vide compte comme absente
    pub fn district_name(&self) -> DistrictName {
        let Some(address) = &self.address else {
            return DistrictName::unknown();
        };

        [&address.city, &address.town, &address.village]
            .into_iter()
            .flatten()
            .find(|name| !name.is_empty())
            .map(|name| DistrictName::from_raw(name.as_str()))
            .unwrap_or_else(DistrictName::unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> ReverseGeocodeResponse {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_city_wins_over_town_and_village() {
        let res = parse(r#"{"address":{"village":"Nansana","town":"Wakiso","city":"Kampala"}}"#);
        assert_eq!(res.district_name().as_str(), "Kampala");
    }

    #[test]
    fn test_fallback_order() {
        assert_eq!(
            parse(r#"{"address":{"town":"Wakiso","village":"Nansana"}}"#).district_name().as_str(),
            "Wakiso"
        );
        assert_eq!(
            parse(r#"{"address":{"city":"","village":"Nansana"}}"#).district_name().as_str(),
            "Nansana"
        );
        assert_eq!(
            parse(r#"{"address":{"country":"Uganda"}}"#).district_name().as_str(),
            "Unknown District"
        );
    }

    #[test]
    fn test_missing_address_is_unknown() {
        let response = parse(r#"{"error":"Unable to geocode"}"#);
        assert_eq!(response.district_name(), DistrictName::unknown());
    }
}
