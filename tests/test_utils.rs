#![allow(dead_code)] // Each test crate uses a different subset of these helpers

use bscalc_lib::{OptionKind, PricingRequest};
use serde::Deserialize;

/// Path of the independently computed reference table
pub const REFERENCE_PRICES: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/data/reference_prices.csv"
);

/// CSV row structure matching the reference table
#[derive(Debug, Deserialize)]
pub struct ReferenceRow {
    pub spot: f64,
    pub strike: f64,
    pub maturity: f64,
    pub rate: f64,
    pub volatility: f64,
    #[serde(rename = "option_type")]
    pub option_type: String,
    pub price: f64,
    pub d1: f64,
    pub d2: f64,
}

impl ReferenceRow {
    /// Convert the row into a validated request
    pub fn to_request(&self) -> PricingRequest {
        let kind: OptionKind = self
            .option_type
            .parse()
            .expect("reference table holds only call/put rows");
        PricingRequest::new(
            self.spot,
            self.strike,
            self.maturity,
            self.rate,
            self.volatility,
            kind,
        )
        .expect("reference table holds only valid inputs")
    }
}

/// Load the reference price table
pub fn load_reference_prices(file_path: &str) -> Result<Vec<ReferenceRow>, Box<dyn std::error::Error>> {
    let mut reader = csv::Reader::from_path(file_path)?;
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: ReferenceRow = result?;
        rows.push(row);
    }
    Ok(rows)
}

/// Build a request, panicking on invalid input
pub fn request(kind: OptionKind, s: f64, k: f64, t: f64, r: f64, sigma: f64) -> PricingRequest {
    PricingRequest::new(s, k, t, r, sigma, kind).expect("valid test request")
}

/// Tolerance that scales with the size of the value being compared
pub fn scaled_tol(value: f64, rel: f64) -> f64 {
    rel * value.abs().max(1.0)
}
