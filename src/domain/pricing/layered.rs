//! Layered product configurator.
//!
//! A base product rendered from per-view images with optional add-ons, each
//! contributing its own overlay layers and price.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::domain::foundation::ValidationError;

/// One selectable add-on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerOption {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub price: f64,
    /// Preselected when the widget opens.
    #[serde(default)]
    pub default: bool,
    #[serde(default)]
    pub order: i32,
    /// View name (`front`, `rear`, ...) to overlay image URL.
    #[serde(default)]
    pub layers: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayeredConfig {
    /// View name to base image URL.
    #[serde(default)]
    pub base_views: BTreeMap<String, String>,
    #[serde(default)]
    pub options: Vec<LayerOption>,
    #[serde(default)]
    pub base_price: f64,
    #[serde(default)]
    pub base_description: String,
    #[serde(default = "default_show_rear")]
    pub show_rear: bool,
}

fn default_show_rear() -> bool {
    true
}

impl LayeredConfig {
    /// Rejects negative or non-finite prices and blank or repeated option ids.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_price("basePrice", self.base_price)?;

        let mut seen = HashSet::new();
        for option in &self.options {
            if option.id.trim().is_empty() {
                return Err(ValidationError::empty_field("options.id"));
            }
            if !seen.insert(option.id.as_str()) {
                return Err(ValidationError::invalid_format(
                    "options.id",
                    format!("duplicate option id '{}'", option.id),
                ));
            }
            check_price(&format!("options.{}.price", option.id), option.price)?;
        }
        Ok(())
    }
}

impl Default for LayeredConfig {
    /// Trailer demo: tent frame and spare wheel mount over front and rear views.
    fn default() -> Self {
        Self {
            base_views: views("/img/trailer_front_base.png", "/img/trailer_rear_base.png"),
            options: vec![
                LayerOption {
                    id: "frame_tent".to_string(),
                    label: "Подъёмный каркас с тентом".to_string(),
                    price: 40000.0,
                    default: true,
                    order: 1,
                    layers: views("/img/trailer_front_tent.png", "/img/trailer_rear_tent.png"),
                },
                LayerOption {
                    id: "spare_wheel".to_string(),
                    label: "Крепление запасного колеса".to_string(),
                    price: 4700.0,
                    default: false,
                    order: 2,
                    layers: views("/img/trailer_front_spare.png", "/img/trailer_rear_spare.png"),
                },
            ],
            base_price: 0.0,
            base_description: "Базовая комплектация без дополнительных опций.".to_string(),
            show_rear: true,
        }
    }
}

fn views(front: &str, rear: &str) -> BTreeMap<String, String> {
    BTreeMap::from([
        ("front".to_string(), front.to_string()),
        ("rear".to_string(), rear.to_string()),
    ])
}

pub(super) fn check_price(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::not_finite(field));
    }
    if value < 0.0 {
        return Err(ValidationError::negative(field, value));
    }
    Ok(())
}

/// Price breakdown for a set of selected options.
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredQuote {
    pub base_price: f64,
    pub selected_options_total: f64,
    pub total: f64,
    /// Matched ids in configuration order.
    pub selected_option_ids: Vec<String>,
    /// Requested ids with no matching option, first occurrence order.
    pub ignored_option_ids: Vec<String>,
}

/// Sums the base price and every option whose id appears in `selected`.
///
/// `selected` is treated as a set. Unknown ids are not an error.
pub fn price_layered(config: &LayeredConfig, selected: &[String]) -> LayeredQuote {
    let wanted: HashSet<&str> = selected.iter().map(String::as_str).collect();

    let mut selected_option_ids = Vec::new();
    let mut selected_options_total = 0.0;
    for option in config.options.iter().filter(|o| wanted.contains(o.id.as_str())) {
        selected_options_total += option.price;
        selected_option_ids.push(option.id.clone());
    }

    let known: HashSet<&str> = config.options.iter().map(|o| o.id.as_str()).collect();
    let mut reported = HashSet::new();
    let ignored_option_ids = selected
        .iter()
        .filter(|id| !known.contains(id.as_str()) && reported.insert(id.as_str()))
        .cloned()
        .collect();

    LayeredQuote {
        base_price: config.base_price,
        selected_options_total,
        total: config.base_price + selected_options_total,
        selected_option_ids,
        ignored_option_ids,
    }
}

/// Ids of options preselected by default, sorted by `order`.
pub fn default_selection(config: &LayeredConfig) -> Vec<String> {
    let mut defaults: Vec<&LayerOption> = config.options.iter().filter(|o| o.default).collect();
    defaults.sort_by_key(|o| o.order);
    defaults.into_iter().map(|o| o.id.clone()).collect()
}
