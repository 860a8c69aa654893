//! Quote Service - price one item from raw form input
//!
//! Raw text is parsed leniently: anything that is not a usable number is
//! priced as zero instead of being rejected.

use parcel_domain::calculate_fee;
use parcel_types::{Dimensions, FeeResult, UnitSystem};
use tracing::{debug, warn};

/// Unparsed measurements as typed by the user
#[derive(Debug, Clone, Default)]
pub struct QuoteInput {
    pub length: String,
    pub width: String,
    pub height: String,
    pub weight: String,
    pub unit_system: UnitSystem,
    pub apparel: bool,
}

impl QuoteInput {
    pub fn new(
        length: impl Into<String>,
        width: impl Into<String>,
        height: impl Into<String>,
        weight: impl Into<String>,
    ) -> Self {
        Self {
            length: length.into(),
            width: width.into(),
            height: height.into(),
            weight: weight.into(),
            ..Default::default()
        }
    }

    pub fn with_unit_system(mut self, unit_system: UnitSystem) -> Self {
        self.unit_system = unit_system;
        self
    }

    pub fn with_apparel(mut self, apparel: bool) -> Self {
        self.apparel = apparel;
        self
    }

    /// Parse every field into engine input
    pub fn to_dimensions(&self) -> Dimensions {
        Dimensions::new(
            parse_field("length", &self.length),
            parse_field("width", &self.width),
            parse_field("height", &self.height),
            parse_field("weight", &self.weight),
            self.unit_system,
        )
    }
}

/// Parse a measurement typed by a user
///
/// Accepts a decimal comma. Empty, non-numeric, non-finite and negative
/// text all yield 0.0.
pub fn parse_measurement(raw: &str) -> f64 {
    try_parse_measurement(raw).unwrap_or(0.0)
}

fn try_parse_measurement(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replace(',', ".");
    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

fn parse_field(name: &str, raw: &str) -> f64 {
    match try_parse_measurement(raw) {
        Some(value) => value,
        None => {
            warn!(field = name, raw, "unusable measurement, treating as 0");
            0.0
        }
    }
}

/// Price an item from raw input
pub fn quote(input: &QuoteInput) -> FeeResult {
    debug!(
        length = %input.length,
        width = %input.width,
        height = %input.height,
        weight = %input.weight,
        unit = %input.unit_system,
        apparel = input.apparel,
        "quoting item"
    );

    let dimensions = input.to_dimensions();
    let result = calculate_fee(&dimensions, input.apparel);

    debug!(
        tier = %result.tier,
        fee = result.fee,
        shipping_weight = result.shipping_weight,
        savings = result.savings.len(),
        "quote complete"
    );
    result
}
