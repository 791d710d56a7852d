//! Black-Scholes pricing and Greeks for European options.
//!
//! Pure closed-form math: nothing here is consumed by the replay engine.
//! At expiry (`time_to_expiry == 0`) prices collapse to intrinsic value
//! and the Greeks to their limit values.

use serde::{Deserialize, Serialize};

/// Inputs to the Black-Scholes model for one European option.
///
/// `time_to_expiry` is in years; `rate` and `volatility` are annualized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EuropeanOption {
    pub spot: f64,
    pub strike: f64,
    pub time_to_expiry: f64,
    pub rate: f64,
    pub volatility: f64,
}

impl EuropeanOption {
    pub fn new(spot: f64, strike: f64, time_to_expiry: f64, rate: f64, volatility: f64) -> Self {
        Self {
            spot,
            strike,
            time_to_expiry,
            rate,
            volatility,
        }
    }

    fn d1(&self) -> f64 {
        let sqrt_t = self.time_to_expiry.sqrt();
        ((self.spot / self.strike).ln()
            + (self.rate + 0.5 * self.volatility * self.volatility) * self.time_to_expiry)
            / (self.volatility * sqrt_t)
    }

    fn d2(&self) -> f64 {
        self.d1() - self.volatility * self.time_to_expiry.sqrt()
    }

    pub fn call_price(&self) -> f64 {
        if self.time_to_expiry == 0.0 {
            return (self.spot - self.strike).max(0.0);
        }
        let discount = (-self.rate * self.time_to_expiry).exp();
        self.spot * norm_cdf(self.d1()) - self.strike * discount * norm_cdf(self.d2())
    }

    pub fn put_price(&self) -> f64 {
        if self.time_to_expiry == 0.0 {
            return (self.strike - self.spot).max(0.0);
        }
        let discount = (-self.rate * self.time_to_expiry).exp();
        self.strike * discount * norm_cdf(-self.d2()) - self.spot * norm_cdf(-self.d1())
    }

    pub fn call_delta(&self) -> f64 {
        if self.time_to_expiry == 0.0 {
            return if self.spot > self.strike { 1.0 } else { 0.0 };
        }
        norm_cdf(self.d1())
    }

    pub fn put_delta(&self) -> f64 {
        if self.time_to_expiry == 0.0 {
            return if self.spot < self.strike { -1.0 } else { 0.0 };
        }
        norm_cdf(self.d1()) - 1.0
    }

    pub fn gamma(&self) -> f64 {
        if self.time_to_expiry == 0.0 {
            return 0.0;
        }
        norm_pdf(self.d1()) / (self.spot * self.volatility * self.time_to_expiry.sqrt())
    }

    pub fn vega(&self) -> f64 {
        if self.time_to_expiry == 0.0 {
            return 0.0;
        }
        self.spot * norm_pdf(self.d1()) * self.time_to_expiry.sqrt()
    }

    pub fn call_theta(&self) -> f64 {
        if self.time_to_expiry == 0.0 {
            return 0.0;
        }
        let decay = -self.spot * norm_pdf(self.d1()) * self.volatility
            / (2.0 * self.time_to_expiry.sqrt());
        let carry = -self.rate
            * self.strike
            * (-self.rate * self.time_to_expiry).exp()
            * norm_cdf(self.d2());
        decay + carry
    }

    pub fn put_theta(&self) -> f64 {
        if self.time_to_expiry == 0.0 {
            return 0.0;
        }
        let decay = -self.spot * norm_pdf(self.d1()) * self.volatility
            / (2.0 * self.time_to_expiry.sqrt());
        let carry = self.rate
            * self.strike
            * (-self.rate * self.time_to_expiry).exp()
            * norm_cdf(-self.d2());
        decay + carry
    }

    pub fn call_rho(&self) -> f64 {
        if self.time_to_expiry == 0.0 {
            return 0.0;
        }
        self.strike
            * self.time_to_expiry
            * (-self.rate * self.time_to_expiry).exp()
            * norm_cdf(self.d2())
    }

    pub fn put_rho(&self) -> f64 {
        if self.time_to_expiry == 0.0 {
            return 0.0;
        }
        -self.strike
            * self.time_to_expiry
            * (-self.rate * self.time_to_expiry).exp()
            * norm_cdf(-self.d2())
    }
}

/// Standard normal probability density.
fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * std::f64::consts::PI).sqrt()
}

/// Standard normal cumulative distribution.
///
/// Abramowitz–Stegun 26.2.17 polynomial; absolute error below 7.5e-8,
/// which keeps prices accurate well past the cent.
fn norm_cdf(x: f64) -> f64 {
    if x < 0.0 {
        return 1.0 - norm_cdf(-x);
    }
    let t = 1.0 / (1.0 + 0.231_641_9 * x);
    let poly = t
        * (0.319_381_530
            + t * (-0.356_563_782
                + t * (1.781_477_937 + t * (-1.821_255_978 + t * 1.330_274_429))));
    1.0 - norm_pdf(x) * poly
}
