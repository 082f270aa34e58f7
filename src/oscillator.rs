//! Closed-form LC oscillator.
//!
//! Charge and current in an ideal LC circuit follow
//!
//! ```text
//! q(t) = q_max * cos(w * t)
//! i(t) = -w * q_max * sin(w * t),   w = 2π / T
//! ```
//!
//! so the state is fully described by the elapsed simulated time. Nothing is
//! integrated; [`OscillatorModel::advance`] only moves the timer.
//!
//! # Example
//!
//! ```
//! use oscillume::oscillator::OscillatorModel;
//!
//! let mut lc = OscillatorModel::new(30.0, 2.0).unwrap();
//! for _ in 0..40 {
//!     lc.advance(0.05);
//! }
//! assert!((lc.charge() - 30.0).abs() < 1e-9);
//! ```

use std::f64::consts::TAU;

use crate::config::{validate_amplitude, validate_period};
use crate::error::ConfigError;

/// Charge/current state of an ideal LC circuit.
#[derive(Debug, Clone, PartialEq)]
pub struct OscillatorModel {
    maximal_charge: f64,
    period: f64,
    timer: f64,
}

impl OscillatorModel {
    /// Create an oscillator with the given charge amplitude and period (seconds).
    pub fn new(maximal_charge: f64, period: f64) -> Result<Self, ConfigError> {
        let maximal_charge = validate_amplitude(maximal_charge)?;
        let period = validate_period(period)?;
        tracing::debug!(maximal_charge, period, "created LC oscillator");
        Ok(Self {
            maximal_charge,
            period,
            timer: 0.0,
        })
    }

    /// Move simulated time forward by `dt` seconds.
    #[inline]
    pub fn advance(&mut self, dt: f64) {
        self.timer += dt;
    }

    /// Angular rate `2π / period`.
    #[inline]
    pub fn cyclic_frequency(&self) -> f64 {
        TAU / self.period
    }

    /// Charge at the current time.
    #[inline]
    pub fn charge(&self) -> f64 {
        self.charge_at(self.timer)
    }

    /// Current at the current time.
    #[inline]
    pub fn current(&self) -> f64 {
        self.current_at(self.timer)
    }

    /// Charge at an arbitrary time `t`.
    pub fn charge_at(&self, t: f64) -> f64 {
        self.maximal_charge * (self.cyclic_frequency() * t).cos()
    }

    /// Current at an arbitrary time `t`.
    pub fn current_at(&self, t: f64) -> f64 {
        -self.maximal_current() * (self.cyclic_frequency() * t).sin()
    }

    #[inline]
    pub fn maximal_charge(&self) -> f64 {
        self.maximal_charge
    }

    /// Peak current, `w * q_max`.
    #[inline]
    pub fn maximal_current(&self) -> f64 {
        self.cyclic_frequency() * self.maximal_charge
    }

    #[inline]
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Elapsed simulated time in seconds.
    #[inline]
    pub fn timer(&self) -> f64 {
        self.timer
    }
}
