pub mod bs;

/// Common traits used by pricing models
pub mod traits {
    use crate::error::Result;
    use crate::pricing::types::{PricingRequest, PricingResult};

    /// A closed-form or numerical model that values a validated request.
    pub trait PricingModel {
        /// Human readable model name
        fn name(&self) -> &'static str;

        /// Value the option described by `request`.
        fn price(&self, request: &PricingRequest) -> Result<PricingResult>;
    }
}

/// Utility functions shared by the pricing models
pub mod utils {
    /// Standard normal cumulative distribution function.
    ///
    /// Φ(x) = 0.5 * (1 + erf(x / √2)), with `erf` from libm, which is accurate
    /// to full double precision.
    pub fn normal_cdf(x: f64) -> f64 {
        0.5 * (1.0 + libm::erf(x / std::f64::consts::SQRT_2))
    }

    /// Continuous discount factor e^(-rT)
    pub fn discount_factor(r: f64, t: f64) -> f64 {
        (-r * t).exp()
    }

}
