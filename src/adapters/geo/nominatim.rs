//! Nominatim geocoder.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::domain::pricing::GeoPoint;
use crate::ports::{GeoError, Geocoder};

use super::{map_reqwest_error, trim_base};

/// Search result; Nominatim encodes coordinates as strings.
#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

pub struct NominatimGeocoder {
    client: Client,
    base_url: String,
}

impl NominatimGeocoder {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, address: &str) -> Result<GeoPoint, GeoError> {
        let url = format!("{}/search", trim_base(&self.base_url));

        let response = self
            .client
            .get(&url)
            .query(&[("format", "json"), ("limit", "1"), ("q", address)])
            .send()
            .await
            .map_err(map_reqwest_error)?;

        if response.status() != StatusCode::OK {
            tracing::warn!(status = %response.status(), "Geocoder returned non-OK status");
            return Err(GeoError::Status(response.status().as_u16()));
        }

        let places: Vec<Place> = response.json().await.map_err(map_reqwest_error)?;
        let place = places.into_iter().next().ok_or(GeoError::NoResults)?;

        let lat = parse_coordinate("lat", &place.lat)?;
        let lon = parse_coordinate("lon", &place.lon)?;
        Ok(GeoPoint::new(lat, lon))
    }
}

fn parse_coordinate(name: &str, raw: &str) -> Result<f64, GeoError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| GeoError::Malformed(format!("invalid {} '{}'", name, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::geo::build_client;
    use crate::config::GeoConfig;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn geocoder(server: &MockServer) -> NominatimGeocoder {
        let config = GeoConfig {
            timeout_secs: 1,
            user_agent: "saas-calc-test".to_string(),
            ..Default::default()
        };
        NominatimGeocoder::new(build_client(&config).unwrap(), server.uri())
    }

    #[tokio::test]
    async fn returns_first_result_parsed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("format", "json"))
            .and(query_param("limit", "1"))
            .and(query_param("q", "Red Square, Moscow"))
            .and(header("User-Agent", "saas-calc-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"lat": "55.7539", "lon": "37.6208", "display_name": "Red Square"},
                {"lat": "0", "lon": "0"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let point = geocoder(&server).geocode("Red Square, Moscow").await.unwrap();
        assert_eq!(point, GeoPoint::new(55.7539, 37.6208));
    }

    #[tokio::test]
    async fn empty_result_is_no_results() {
        let server = MockServer::start().await;
        Mock::given(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let result = geocoder(&server).geocode("nowhere").await;
        assert_eq!(result, Err(GeoError::NoResults));
    }

    #[tokio::test]
    async fn non_ok_status_is_error() {
        let server = MockServer::start().await;
        Mock::given(path("/search"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let result = geocoder(&server).geocode("Tver").await;
        assert_eq!(result, Err(GeoError::Status(503)));
    }

    #[tokio::test]
    async fn unparsable_coordinates_are_malformed() {
        let server = MockServer::start().await;
        Mock::given(path("/search"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([{"lat": "north", "lon": "37.6"}])),
            )
            .mount(&server)
            .await;

        let result = geocoder(&server).geocode("Tver").await;
        assert!(matches!(result, Err(GeoError::Malformed(_))));
    }

    #[tokio::test]
    async fn non_json_body_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let result = geocoder(&server).geocode("Tver").await;
        assert!(matches!(result, Err(GeoError::Malformed(_))));
    }

    #[tokio::test]
    async fn slow_service_times_out() {
        let server = MockServer::start().await;
        Mock::given(path("/search"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([{"lat": "1", "lon": "2"}]))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let result = geocoder(&server).geocode("Tver").await;
        assert_eq!(result, Err(GeoError::Timeout));
    }

    #[tokio::test]
    async fn unreachable_service_is_transport_error() {
        let client = reqwest::Client::new();
        let geocoder = NominatimGeocoder::new(client, "http://127.0.0.1:9");

        let result = geocoder.geocode("Tver").await;
        assert!(matches!(result, Err(GeoError::Transport(_))));
    }
}
