//! Text-level form contract.
//!
//! A front end (the CLI here, a GUI elsewhere) hands over five numeric fields
//! and an option-type field as raw text and gets back one display line:
//!
//! ```text
//! Option Price: $10.45
//! Error: <message>
//! ```
//!
//! [`evaluate`] exposes the same path as a typed result for callers that want
//! to branch on the failure cause.

use crate::error::{PricingError, Result};
use crate::models::bs::BlackScholes;
use crate::models::traits::PricingModel;
use crate::pricing::config::{DisplayConfig, PricerConfig, MAX_DECIMALS};
use crate::pricing::types::{OptionKind, PricingRequest, PricingResult};

/// Raw field contents as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFields {
    /// Stock price (S)
    pub spot: String,
    /// Strike price (K)
    pub strike: String,
    /// Time to maturity in years (T)
    pub maturity: String,
    /// Risk-free rate as a decimal (r)
    pub rate: String,
    /// Volatility as a decimal (sigma)
    pub volatility: String,
    /// Option type, `call` or `put`
    pub kind: String,
}

impl FormFields {
    pub fn new(
        spot: impl Into<String>,
        strike: impl Into<String>,
        maturity: impl Into<String>,
        rate: impl Into<String>,
        volatility: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            spot: spot.into(),
            strike: strike.into(),
            maturity: maturity.into(),
            rate: rate.into(),
            volatility: volatility.into(),
            kind: kind.into(),
        }
    }
}

impl Default for FormFields {
    /// Empty numeric fields with the option type preset to `call`.
    fn default() -> Self {
        Self::new("", "", "", "", "", OptionKind::Call.as_str())
    }
}

/// Parse the form into a validated request.
///
/// Fields are read in the order S, K, T, r, sigma, option type; the first
/// failure is returned.
pub fn parse_request(fields: &FormFields, config: &PricerConfig) -> Result<PricingRequest> {
    let trim = config.trim_input;

    let spot = parse_number("S", field_text(&fields.spot, trim))?;
    let strike = parse_number("K", field_text(&fields.strike, trim))?;
    let maturity = parse_number("T", field_text(&fields.maturity, trim))?;
    let rate = parse_number("r", field_text(&fields.rate, trim))?;
    let volatility = parse_number("sigma", field_text(&fields.volatility, trim))?;
    let kind = OptionKind::parse_with(field_text(&fields.kind, trim), config.kind_matching)?;

    PricingRequest::new(spot, strike, maturity, rate, volatility, kind)
}

fn field_text(raw: &str, trim: bool) -> &str {
    if trim {
        raw.trim()
    } else {
        raw
    }
}

fn parse_number(field: &'static str, text: &str) -> Result<f64> {
    text.parse::<f64>().map_err(|_| PricingError::Parse {
        field,
        value: text.to_string(),
    })
}

/// Parse and price the form, returning the typed outcome.
pub fn evaluate(fields: &FormFields, config: &PricerConfig) -> Result<PricingResult> {
    let outcome = parse_request(fields, config).and_then(|request| BlackScholes.price(&request));
    if let Err(ref err) = outcome {
        tracing::debug!(kind = err.kind(), error = %err, "form rejected");
    }
    outcome
}

/// Render a typed outcome as the single display line.
pub fn render(outcome: &Result<PricingResult>, display: &DisplayConfig) -> String {
    match outcome {
        Ok(result) => format!(
            "{}: {}{:.*}",
            display.price_label,
            display.currency_symbol,
            display.decimals.min(MAX_DECIMALS),
            result.price
        ),
        Err(err) => format!("{}: {}", display.error_label, err),
    }
}

/// Parse, price and render in one step. This is the form's button handler.
pub fn calculate(fields: &FormFields, config: &PricerConfig) -> String {
    render(&evaluate(fields, config), &config.display)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(s: &str, k: &str, t: &str, r: &str, sigma: &str, kind: &str) -> FormFields {
        FormFields::new(s, k, t, r, sigma, kind)
    }

    #[test]
    fn test_reference_call_and_put() {
        let config = PricerConfig::standard();
        let call = fields("100", "100", "1", "0.05", "0.2", "call");
        let put = fields("100", "100", "1", "0.05", "0.2", "put");
        assert_eq!(calculate(&call, &config), "Option Price: $10.45");
        assert_eq!(calculate(&put, &config), "Option Price: $5.57");
    }

    #[test]
    fn test_parse_error_names_first_bad_field() {
        let config = PricerConfig::standard();
        let form = fields("100", "abc", "1", "x", "0.2", "call");
        let err = evaluate(&form, &config).unwrap_err();
        assert_eq!(
            err,
            PricingError::Parse {
                field: "K",
                value: "abc".into()
            }
        );
        assert_eq!(
            calculate(&form, &config),
            "Error: could not convert K to a number: 'abc'"
        );
    }

    #[test]
    fn test_empty_field_is_a_parse_error() {
        let config = PricerConfig::standard();
        let err = evaluate(&FormFields::default(), &config).unwrap_err();
        assert!(matches!(err, PricingError::Parse { field: "S", .. }));
    }

    #[test]
    fn test_numbers_parse_before_kind() {
        let config = PricerConfig::standard();
        let form = fields("100", "100", "1", "oops", "0.2", "straddle");
        assert!(matches!(
            evaluate(&form, &config),
            Err(PricingError::Parse { field: "r", .. })
        ));
    }

    #[test]
    fn test_invalid_kind() {
        let config = PricerConfig::standard();
        let form = fields("100", "100", "1", "0.05", "0.2", "straddle");
        assert_eq!(
            calculate(&form, &config),
            "Error: Invalid option type: 'straddle' (expected 'call' or 'put')"
        );
    }

    #[test]
    fn test_kind_case_policy() {
        let form = fields("100", "100", "1", "0.05", "0.2", "Call");
        assert!(matches!(
            evaluate(&form, &PricerConfig::standard()),
            Err(PricingError::InvalidOptionKind { .. })
        ));
        assert_eq!(
            calculate(&form, &PricerConfig::lenient()),
            "Option Price: $10.45"
        );
    }

    #[test]
    fn test_whitespace_policy() {
        let form = fields(" 100 ", "100\n", "1", "0.05", "0.2", " put");
        assert_eq!(
            calculate(&form, &PricerConfig::standard()),
            "Option Price: $5.57"
        );

        let strict = PricerConfig {
            trim_input: false,
            ..PricerConfig::standard()
        };
        assert!(matches!(
            evaluate(&form, &strict),
            Err(PricingError::Parse { field: "S", .. })
        ));
    }

    #[test]
    fn test_zero_maturity_and_volatility_are_domain_errors() {
        let config = PricerConfig::standard();
        let zero_t = fields("100", "100", "0", "0.05", "0.2", "call");
        let zero_vol = fields("100", "100", "1", "0.05", "0", "put");
        assert!(matches!(
            evaluate(&zero_t, &config),
            Err(PricingError::Domain { field: "T", .. })
        ));
        assert!(matches!(
            evaluate(&zero_vol, &config),
            Err(PricingError::Domain { field: "sigma", .. })
        ));
        assert_eq!(
            calculate(&zero_t, &config),
            "Error: T = 0 is out of range: must be > 0"
        );
    }

    #[test]
    fn test_non_finite_text_is_a_domain_error() {
        let config = PricerConfig::standard();
        let form = fields("inf", "100", "1", "0.05", "0.2", "call");
        assert!(matches!(
            evaluate(&form, &config),
            Err(PricingError::Domain { field: "S", .. })
        ));
        let form = fields("100", "100", "1", "NaN", "0.2", "call");
        assert!(matches!(
            evaluate(&form, &config),
            Err(PricingError::Domain { field: "r", .. })
        ));
    }

    #[test]
    fn test_render_respects_display_config() {
        let config = PricerConfig {
            display: DisplayConfig {
                currency_symbol: "€".into(),
                decimals: 4,
                price_label: "Price".into(),
                error_label: "Failed".into(),
            },
            ..PricerConfig::standard()
        };
        let ok = fields("100", "100", "1", "0.05", "0.2", "call");
        assert_eq!(calculate(&ok, &config), "Price: €10.4506");

        let bad = fields("100", "100", "1", "0.05", "0.2", "swap");
        assert!(calculate(&bad, &config).starts_with("Failed: Invalid option type"));
    }
}
