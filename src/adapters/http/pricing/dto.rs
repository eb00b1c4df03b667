//! HTTP DTOs for pricing endpoints.
//!
//! Missing fields deserialize to empty values so that validation, not the
//! JSON extractor, reports them.

use serde::{Deserialize, Serialize};

use crate::domain::pricing::{
    DistanceOutcome, DistanceRequest, GeoPoint, LayeredQuote, MortgageInput, MortgageQuote,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayeredCalcRequest {
    #[serde(default)]
    pub selected: Vec<String>,
    #[serde(default)]
    pub calculator_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceCalcRequest {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub vehicle: String,
    #[serde(default)]
    pub round_trip: bool,
    #[serde(default)]
    pub calculator_id: String,
}

impl DistanceCalcRequest {
    pub fn to_domain(&self) -> DistanceRequest {
        DistanceRequest {
            from: self.from.clone(),
            to: self.to.clone(),
            vehicle: self.vehicle.clone(),
            round_trip: self.round_trip,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageCalcRequest {
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub years: i64,
    #[serde(default)]
    pub calculator_id: String,
}

impl MortgageCalcRequest {
    pub fn to_domain(&self) -> MortgageInput {
        MortgageInput {
            amount: self.amount,
            rate: self.rate,
            years: self.years,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayeredCalcResponse {
    pub base_price: f64,
    pub selected_options_total: f64,
    pub total: f64,
    pub ignored_option_ids: Vec<String>,
}

impl From<LayeredQuote> for LayeredCalcResponse {
    fn from(quote: LayeredQuote) -> Self {
        Self {
            base_price: quote.base_price,
            selected_options_total: quote.selected_options_total,
            total: quote.total,
            ignored_option_ids: quote.ignored_option_ids,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutePointResponse {
    pub lat: f64,
    pub lon: f64,
}

impl From<GeoPoint> for RoutePointResponse {
    fn from(point: GeoPoint) -> Self {
        Self {
            lat: point.lat,
            lon: point.lon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceCalcResponse {
    pub distance_one_way_km: f64,
    pub distance_total_km: f64,
    pub price_base: f64,
    pub price_km: f64,
    pub price_load: f64,
    pub price_total: f64,
    pub route: Vec<RoutePointResponse>,
}

impl From<DistanceOutcome> for DistanceCalcResponse {
    fn from(outcome: DistanceOutcome) -> Self {
        let quote = outcome.quote;
        Self {
            distance_one_way_km: quote.distance_one_way_km,
            distance_total_km: quote.distance_total_km,
            price_base: quote.price_base,
            price_km: quote.price_km,
            price_load: quote.price_load,
            price_total: quote.price_total,
            route: outcome.route.into_iter().map(Into::into).collect(),
        }
    }
}

/// Figures rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortgageCalcResponse {
    pub monthly: f64,
    pub total: f64,
    pub overpayment: f64,
}

impl From<MortgageQuote> for MortgageCalcResponse {
    fn from(quote: MortgageQuote) -> Self {
        let rounded = quote.rounded();
        Self {
            monthly: rounded.monthly,
            total: rounded.total,
            overpayment: rounded.overpayment,
        }
    }
}
