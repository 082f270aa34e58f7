//! Closed-form pendulum over a precomputed arc.
//!
//! The swing is evaluated in *index space*: the amplitude is half the number
//! of trajectory points, and the bob position is the trajectory point at
//! `maximal_deviation + maximal_deviation * cos(w * t)`. This keeps per-frame
//! work at one trigonometric evaluation and one lookup, at the cost of the
//! motion being harmonic along the arc rather than a true small-angle
//! solution.
//!
//! # Example
//!
//! ```
//! use glam::IVec2;
//! use oscillume::pendulum::PendulumModel;
//!
//! let mut pendulum = PendulumModel::new(IVec2::new(400, 0), 300.0, 30.0, 2.0).unwrap();
//! pendulum.advance(0.5); // quarter period: passing the bottom
//! assert_eq!(pendulum.current_position().x, 400);
//! ```

use std::f64::consts::{FRAC_PI_2, TAU};

use glam::IVec2;

use crate::config::{validate_length, validate_period, validate_resolution, validate_swing_degrees};
use crate::error::ConfigError;
use crate::trajectory::{ArcSpan, Trajectory, DEFAULT_RESOLUTION};

/// Pendulum state: fixed geometry, an elapsed timer and the cached bob position.
#[derive(Debug, Clone)]
pub struct PendulumModel {
    fulcrum: IVec2,
    length_of_rope: f64,
    amplitude_degrees: f64,
    period: f64,
    timer: f64,
    trajectory: Trajectory,
    current_index: usize,
}

impl PendulumModel {
    /// Create a pendulum hanging from `fulcrum` with the default trajectory density.
    pub fn new(
        fulcrum: IVec2,
        length_of_rope: f64,
        amplitude_degrees: f64,
        period: f64,
    ) -> Result<Self, ConfigError> {
        Self::with_resolution(fulcrum, length_of_rope, amplitude_degrees, period, DEFAULT_RESOLUTION)
    }

    /// Create a pendulum sampling its arc at `resolution` points per radian.
    pub fn with_resolution(
        fulcrum: IVec2,
        length_of_rope: f64,
        amplitude_degrees: f64,
        period: f64,
        resolution: f64,
    ) -> Result<Self, ConfigError> {
        let length_of_rope = validate_length(length_of_rope)?;
        let amplitude_degrees = validate_swing_degrees(amplitude_degrees)?;
        let period = validate_period(period)?;
        let resolution = validate_resolution(resolution)?;

        let span = ArcSpan::centered(FRAC_PI_2, amplitude_degrees.to_radians());
        let trajectory = Trajectory::generate(fulcrum, length_of_rope, span, resolution);
        tracing::debug!(
            points = trajectory.len(),
            length_of_rope,
            amplitude_degrees,
            period,
            "generated pendulum trajectory"
        );

        let mut pendulum = Self {
            fulcrum,
            length_of_rope,
            amplitude_degrees,
            period,
            timer: 0.0,
            trajectory,
            current_index: 0,
        };
        pendulum.update_position();
        Ok(pendulum)
    }

    /// Move simulated time forward by `dt` seconds and relocate the bob.
    pub fn advance(&mut self, dt: f64) {
        self.timer += dt;
        self.update_position();
    }

    fn update_position(&mut self) {
        let index = self.maximal_deviation() + self.deviation();
        self.current_index = self.trajectory.clamp_index(index);
    }

    /// Angular rate `2π / period`.
    #[inline]
    pub fn cyclic_frequency(&self) -> f64 {
        TAU / self.period
    }

    /// Index-space amplitude: half the trajectory length.
    #[inline]
    pub fn maximal_deviation(&self) -> f64 {
        self.trajectory.len() as f64 / 2.0
    }

    /// Signed offset from the middle of the trajectory, in points.
    pub fn deviation(&self) -> f64 {
        self.maximal_deviation() * (self.cyclic_frequency() * self.timer).cos()
    }

    /// Peak speed along the trajectory, in points per second.
    #[inline]
    pub fn maximal_speed(&self) -> f64 {
        self.maximal_deviation() * self.cyclic_frequency()
    }

    /// Signed speed along the trajectory, in points per second.
    pub fn speed(&self) -> f64 {
        -self.maximal_speed() * (self.cyclic_frequency() * self.timer).sin()
    }

    /// Bob position in pixel coordinates.
    #[inline]
    pub fn current_position(&self) -> IVec2 {
        self.trajectory.points()[self.current_index]
    }

    /// Trajectory index of the bob; always `< trajectory().len()`.
    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[inline]
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    #[inline]
    pub fn fulcrum(&self) -> IVec2 {
        self.fulcrum
    }

    #[inline]
    pub fn length_of_rope(&self) -> f64 {
        self.length_of_rope
    }

    #[inline]
    pub fn amplitude_degrees(&self) -> f64 {
        self.amplitude_degrees
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
