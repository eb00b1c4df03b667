//! Geocoding and routing adapters over HTTP.
//!
//! - `nominatim` - Nominatim-compatible `/search` geocoder
//! - `osrm` - OSRM-compatible `/route/v1/driving` router
//!
//! Both share one `reqwest::Client` carrying the configured per-call timeout
//! and `User-Agent`. There is no retry and no caching.

mod nominatim;
mod osrm;

pub use nominatim::NominatimGeocoder;
pub use osrm::OsrmRouteProvider;

use reqwest::Client;

use crate::config::GeoConfig;
use crate::ports::GeoError;

/// HTTP client for the geo services.
pub fn build_client(config: &GeoConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(config.timeout())
        .user_agent(config.user_agent.clone())
        .build()
}

fn map_reqwest_error(e: reqwest::Error) -> GeoError {
    if e.is_timeout() {
        GeoError::Timeout
    } else if e.is_decode() {
        GeoError::Malformed(e.to_string())
    } else {
        GeoError::Transport(e.to_string())
    }
}

fn trim_base(url: &str) -> &str {
    url.trim_end_matches('/')
}
