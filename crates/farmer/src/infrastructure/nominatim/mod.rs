mod nominatim_client;
mod nominatim_response;


pub use nominatim_client::{NominatimClient, NominatimConfig};
pub use nominatim_response::{ReverseGeocodeAddress, ReverseGeocodeResponse};
