// Black-Scholes closed form for European calls and puts on a non-dividend-paying
// underlying. Greeks and implied volatility are out of scope for this crate.

use crate::error::{PricingError, Result};
use crate::models::traits::PricingModel;
use crate::models::utils::{discount_factor, normal_cdf};
use crate::pricing::types::{OptionKind, PricingRequest, PricingResult};

/// The Black-Scholes model. Stateless; one value can price any number of requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholes;

impl BlackScholes {
    pub fn new() -> Self {
        Self
    }
}

impl PricingModel for BlackScholes {
    fn name(&self) -> &'static str {
        "Black-Scholes"
    }

    fn price(&self, request: &PricingRequest) -> Result<PricingResult> {
        let s = request.spot();
        let k = request.strike();
        let t = request.maturity();
        let r = request.rate();
        let sigma = request.volatility();

        let vol_sqrt_t = sigma * t.sqrt();
        if vol_sqrt_t <= 0.0 {
            return Err(PricingError::Domain {
                field: "sigma",
                value: sigma,
                reason: "sigma * sqrt(T) underflows to zero",
            });
        }

        let (d1, d2) = d1_d2(s, k, r, t, sigma);
        if d1.is_nan() || d2.is_nan() {
            return Err(PricingError::Domain {
                field: "sigma",
                value: sigma,
                reason: "sigma * sqrt(T) is too large to evaluate d1 and d2",
            });
        }
        let df = discount_factor(r, t);

        let raw = match request.kind() {
            OptionKind::Call => s * normal_cdf(d1) - k * df * normal_cdf(d2),
            OptionKind::Put => k * df * normal_cdf(-d2) - s * normal_cdf(-d1),
        };

        if !raw.is_finite() {
            return Err(PricingError::Domain {
                field: "price",
                value: raw,
                reason: "computed price is not finite",
            });
        }

        // Deep out-of-the-money values can round a hair below zero (or to -0.0).
        let price = if raw > 0.0 { raw } else { 0.0 };

        tracing::debug!(
            model = self.name(),
            kind = %request.kind(),
            spot = s,
            strike = k,
            maturity = t,
            rate = r,
            volatility = sigma,
            d1,
            d2,
            price,
            "priced european option"
        );

        Ok(PricingResult {
            request: *request,
            price,
            d1,
            d2,
        })
    }
}

/// Standardised variables (d1, d2). Caller guarantees positive S, K, T, sigma.
///
/// Written as `ln(S/K)/(σ√T) + (r/σ + σ/2)·√T` so σ² is never formed and very
/// large volatilities still reach the σ → ∞ limits.
#[allow(non_snake_case)]
pub fn d1_d2(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> (f64, f64) {
    let sqrt_t = T.sqrt();
    let vol_sqrt_t = sigma * sqrt_t;
    let d1 = (S / K).ln() / vol_sqrt_t + (r / sigma + 0.5 * sigma) * sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

/// Discounted intrinsic value, the limit of the Black-Scholes price as sigma → 0⁺.
#[allow(non_snake_case)]
pub fn intrinsic_value(kind: OptionKind, S: f64, K: f64, r: f64, T: f64) -> f64 {
    let pv_strike = K * discount_factor(r, T);
    match kind {
        OptionKind::Call => (S - pv_strike).max(0.0),
        OptionKind::Put => (pv_strike - S).max(0.0),
    }
}

/// Price of a European call option under Black-Scholes assumptions.
///
/// Unchecked variant on raw numbers: degenerate `T` or `sigma` collapse to the
/// discounted intrinsic value. Use [`BlackScholes`] for validated pricing.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> f64 {
    if T <= 0.0 || sigma <= 0.0 {
        return intrinsic_value(OptionKind::Call, S, K, r, T.max(0.0));
    }
    let (d1, d2) = d1_d2(S, K, r, T, sigma);
    S * normal_cdf(d1) - K * discount_factor(r, T) * normal_cdf(d2)
}

/// Price of a European put option under Black-Scholes assumptions.
///
/// Same degenerate-input behaviour as [`bs_call_price`].
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> f64 {
    if T <= 0.0 || sigma <= 0.0 {
        return intrinsic_value(OptionKind::Put, S, K, r, T.max(0.0));
    }
    let (d1, d2) = d1_d2(S, K, r, T, sigma);
    K * discount_factor(r, T) * normal_cdf(-d2) - S * normal_cdf(-d1)
}
