//! # bscalc-lib: Black-Scholes Pricing of European Options
//!
//! `bscalc-lib` computes the Black-Scholes closed-form price of a European call
//! or put from spot, strike, time to maturity, risk-free rate and volatility.
//!
//! ## Core Features
//!
//! - **Validated requests**: [`PricingRequest`] refuses non-positive spot, strike,
//!   maturity or volatility before any arithmetic runs
//! - **Typed failures**: [`PricingError`] separates parse, option-type and domain errors
//! - **Form contract**: [`calculate`] turns raw text fields into
//!   `Option Price: $x.xx` or `Error: <message>`
//! - **Configurable presentation**: TOML-backed [`PricerConfig`] with presets
//!
//! ## Quick Start
//!
//! ```rust
//! use bscalc_lib::{price_european, OptionKind, PricingRequest};
//!
//! let request = PricingRequest::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call)?;
//! let result = price_european(&request)?;
//! assert_eq!(format!("{:.2}", result.price), "10.45");
//! # Ok::<(), bscalc_lib::PricingError>(())
//! ```
//!
//! Driving it the way a form would:
//!
//! ```rust
//! use bscalc_lib::{calculate, default_configs, FormFields};
//!
//! let fields = FormFields::new("100", "100", "1", "0.05", "0.2", "put");
//! assert_eq!(calculate(&fields, &default_configs::standard()), "Option Price: $5.57");
//! ```
//!
//! ## Pricing Formula
//!
//! ```text
//! d1 = (ln(S/K) + (r + σ²/2)·T) / (σ·√T)
//! d2 = d1 − σ·√T
//! call = S·Φ(d1) − K·e^(−rT)·Φ(d2)
//! put  = K·e^(−rT)·Φ(−d2) − S·Φ(−d1)
//! ```

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod models;
pub mod pricing;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{PricingError, Result};

pub use pricing::{
    config::{DisplayConfig, KindMatching, PricerConfig},
    form::{calculate, evaluate, parse_request, render, FormFields},
    types::{OptionKind, PricingRequest, PricingResult},
};

// Model seam and the Black-Scholes implementation
pub use models::bs::{bs_call_price, bs_put_price, intrinsic_value, BlackScholes};
pub use models::traits::PricingModel;
pub use models::utils::normal_cdf;

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured pricer settings.
///
/// - [`standard()`]: reference behaviour, exact `call`/`put`, two decimals
/// - [`lenient()`]: accepts any casing of the option type
/// - [`precise()`]: six decimals, handy when comparing against tables
pub mod default_configs {
    use crate::pricing::config::PricerConfig;

    /// Exact option-type matching and `Option Price: $x.xx` output.
    ///
    /// ```rust
    /// use bscalc_lib::default_configs;
    ///
    /// let config = default_configs::standard();
    /// assert_eq!(config.display.decimals, 2);
    /// ```
    pub fn standard() -> PricerConfig {
        PricerConfig::standard()
    }

    /// Case-insensitive option-type matching (`Call`, `PUT`, ...).
    pub fn lenient() -> PricerConfig {
        PricerConfig::lenient()
    }

    /// Six decimals in the rendered price.
    pub fn precise() -> PricerConfig {
        PricerConfig::precise()
    }
}

/// Price a European option with the Black-Scholes model.
///
/// # Errors
///
/// [`PricingError::Domain`] if the numbers are valid individually but the
/// closed form cannot be evaluated to a finite value (for example when
/// `σ·√T` underflows or `e^(−rT)` overflows).
///
/// # Example
///
/// ```rust
/// use bscalc_lib::{price_european, OptionKind, PricingRequest};
///
/// let call = PricingRequest::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call)?;
/// let put = call.with_kind(OptionKind::Put);
///
/// let c = price_european(&call)?.price;
/// let p = price_european(&put)?.price;
///
/// // Put-call parity
/// let parity = 100.0 - 100.0 * (-0.05_f64).exp();
/// assert!((c - p - parity).abs() < 1e-10);
/// # Ok::<(), bscalc_lib::PricingError>(())
/// ```
pub fn price_european(request: &PricingRequest) -> Result<PricingResult> {
    BlackScholes::new().price(request)
}
