//! Configuration for models, rendering and the window runner.
//!
//! Every config is a plain struct with sensible defaults and `with_*`
//! builder methods. Call `build()` (or one of the `validate_*` helpers) to
//! turn it into a model; all checks happen there, so nothing downstream has to
//! handle bad values mid-simulation.
//!
//! ```
//! use oscillume::config::{PendulumConfig, RenderConfig};
//!
//! let pendulum = PendulumConfig::new(2.0, 30.0)
//!     .with_length_of_rope(250.0)
//!     .build()
//!     .unwrap();
//! let render = RenderConfig::default().with_sample_block_size(2);
//! assert!(render.validate().is_ok());
//! # let _ = pendulum;
//! ```

use glam::IVec2;

use crate::area::Sampling;
use crate::error::ConfigError;
use crate::oscillator::OscillatorModel;
use crate::pendulum::PendulumModel;
use crate::trajectory::{DEFAULT_RESOLUTION, MAX_RESOLUTION};

/// Per-tick time increment used when none is configured.
pub const DEFAULT_FIXED_DT: f64 = 0.05;

/// Sampling stride used for real-time rendering.
pub const DEFAULT_BLOCK_SIZE: u32 = 4;

pub(crate) fn validate_period(period: f64) -> Result<f64, ConfigError> {
    if period > 0.0 && period.is_finite() {
        Ok(period)
    } else {
        Err(ConfigError::NonPositivePeriod(period))
    }
}

pub(crate) fn validate_length(length: f64) -> Result<f64, ConfigError> {
    if length >= 0.0 && length.is_finite() {
        Ok(length)
    } else {
        Err(ConfigError::NegativeLength(length))
    }
}

pub(crate) fn validate_amplitude(amplitude: f64) -> Result<f64, ConfigError> {
    if amplitude >= 0.0 && amplitude.is_finite() {
        Ok(amplitude)
    } else {
        Err(ConfigError::NegativeAmplitude(amplitude))
    }
}

pub(crate) fn validate_swing_degrees(degrees: f64) -> Result<f64, ConfigError> {
    let degrees = validate_amplitude(degrees)?;
    if degrees <= 90.0 {
        Ok(degrees)
    } else {
        Err(ConfigError::AmplitudeOutOfRange(degrees))
    }
}

pub(crate) fn validate_resolution(resolution: f64) -> Result<f64, ConfigError> {
    if resolution > 0.0 && resolution <= MAX_RESOLUTION {
        Ok(resolution)
    } else {
        Err(ConfigError::InvalidResolution(resolution))
    }
}

pub(crate) fn validate_time_step(dt: f64) -> Result<f64, ConfigError> {
    if dt > 0.0 && dt.is_finite() {
        Ok(dt)
    } else {
        Err(ConfigError::NonPositiveTimeStep(dt))
    }
}

/// Parameters of an LC oscillator session.
#[derive(Debug, Clone, PartialEq)]
pub struct OscillatorConfig {
    /// Charge amplitude; also the largest disc radius in pixels.
    pub maximal_charge: f64,
    /// Oscillation period in seconds.
    pub period: f64,
}

impl OscillatorConfig {
    pub fn new(period: f64) -> Self {
        Self {
            maximal_charge: 30.0,
            period,
        }
    }

    pub fn with_maximal_charge(mut self, maximal_charge: f64) -> Self {
        self.maximal_charge = maximal_charge;
        self
    }

    pub fn build(&self) -> Result<OscillatorModel, ConfigError> {
        OscillatorModel::new(self.maximal_charge, self.period)
    }
}

/// Parameters of a pendulum session.
#[derive(Debug, Clone, PartialEq)]
pub struct PendulumConfig {
    /// Suspension point in pixel coordinates (y grows downward).
    pub fulcrum: IVec2,
    /// Rope length in pixels.
    pub length_of_rope: f64,
    /// Swing half-angle in degrees.
    pub amplitude_degrees: f64,
    /// Oscillation period in seconds.
    pub period: f64,
    /// Trajectory points per radian.
    pub resolution: f64,
}

impl PendulumConfig {
    pub fn new(period: f64, amplitude_degrees: f64) -> Self {
        Self {
            fulcrum: IVec2::new(400, 0),
            length_of_rope: 300.0,
            amplitude_degrees,
            period,
            resolution: DEFAULT_RESOLUTION,
        }
    }

    pub fn with_fulcrum(mut self, fulcrum: IVec2) -> Self {
        self.fulcrum = fulcrum;
        self
    }

    pub fn with_length_of_rope(mut self, length: f64) -> Self {
        self.length_of_rope = length;
        self
    }

    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn build(&self) -> Result<PendulumModel, ConfigError> {
        PendulumModel::with_resolution(
            self.fulcrum,
            self.length_of_rope,
            self.amplitude_degrees,
            self.period,
            self.resolution,
        )
    }
}

/// Output surface and frame pacing.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Rasterizer stride; 1 renders every pixel exactly.
    pub sample_block_size: u32,
    /// Simulated seconds added per rendered frame.
    pub fixed_dt: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            sample_block_size: DEFAULT_BLOCK_SIZE,
            fixed_dt: DEFAULT_FIXED_DT,
        }
    }
}

impl RenderConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_sample_block_size(mut self, size: u32) -> Self {
        self.sample_block_size = size;
        self
    }

    pub fn with_fixed_dt(mut self, dt: f64) -> Self {
        self.fixed_dt = dt;
        self
    }

    /// Sampling mode derived from `sample_block_size`.
    pub fn sampling(&self) -> Result<Sampling, ConfigError> {
        Sampling::block(self.sample_block_size)
    }

    /// Check every field without building anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidSurface {
                width: self.width,
                height: self.height,
            });
        }
        self.sampling()?;
        validate_time_step(self.fixed_dt)?;
        Ok(())
    }
}
