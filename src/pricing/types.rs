use crate::error::{PricingError, Result};
use crate::pricing::config::KindMatching;
use std::fmt;
use std::str::FromStr;

/// Exercise right of a European option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
    Call,
    Put,
}

impl OptionKind {
    /// Lowercase name as accepted on input.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }

    /// Parse an option kind under the given matching policy.
    ///
    /// `Exact` accepts only `call` and `put`; `CaseInsensitive` also accepts
    /// `Call`, `PUT` and so on.
    pub fn parse_with(value: &str, matching: KindMatching) -> Result<Self> {
        let kind = match matching {
            KindMatching::Exact => match value {
                "call" => Some(OptionKind::Call),
                "put" => Some(OptionKind::Put),
                _ => None,
            },
            KindMatching::CaseInsensitive => {
                if value.eq_ignore_ascii_case("call") {
                    Some(OptionKind::Call)
                } else if value.eq_ignore_ascii_case("put") {
                    Some(OptionKind::Put)
                } else {
                    None
                }
            }
        };

        kind.ok_or_else(|| PricingError::InvalidOptionKind {
            value: value.to_string(),
        })
    }
}

impl FromStr for OptionKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_with(s, KindMatching::Exact)
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs to a single Black-Scholes valuation.
///
/// Constructed only through [`PricingRequest::new`], which enforces
/// `spot > 0`, `strike > 0`, `maturity > 0`, `volatility > 0` and finiteness of
/// every field. A value of this type is therefore always safe to price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingRequest {
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
    kind: OptionKind,
}

impl PricingRequest {
    /// Validate and build a request.
    ///
    /// # Errors
    ///
    /// [`PricingError::Domain`] naming the first offending field, checked in
    /// the order S, K, T, r, sigma.
    pub fn new(
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
        kind: OptionKind,
    ) -> Result<Self> {
        require_positive("S", spot)?;
        require_positive("K", strike)?;
        require_positive("T", maturity)?;
        require_finite("r", rate)?;
        require_positive("sigma", volatility)?;

        Ok(Self {
            spot,
            strike,
            maturity,
            rate,
            volatility,
            kind,
        })
    }

    /// Spot price of the underlying (S).
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Strike price (K).
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Time to maturity in years (T).
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Continuously compounded risk-free rate (r).
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Annualised volatility (sigma).
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Same contract with the other exercise right.
    pub fn with_kind(self, kind: OptionKind) -> Self {
        Self { kind, ..self }
    }
}

fn require_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::Domain {
            field,
            value,
            reason: "must be finite",
        })
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<()> {
    require_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(PricingError::Domain {
            field,
            value,
            reason: "must be > 0",
        })
    }
}

/// Outcome of a successful valuation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingResult {
    /// The request that was priced
    pub request: PricingRequest,
    /// Theoretical option price (never negative)
    pub price: f64,
    /// Standardised variable d1
    pub d1: f64,
    /// Standardised variable d2 = d1 - sigma * sqrt(T)
    pub d2: f64,
}

impl fmt::Display for PricingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.price)
    }
}
