//! Error types for oscillume.
//!
//! Configuration problems are caught when a model, field or clock is built and
//! never surface mid-simulation. GPU and window errors only concern the
//! runner binary.

use thiserror::Error;

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Oscillation period must be a positive, finite number of seconds.
    #[error("period must be positive and finite, got {0}")]
    NonPositivePeriod(f64),
    /// Rope length (or any other spatial length) must be non-negative.
    #[error("length must be non-negative and finite, got {0}")]
    NegativeLength(f64),
    /// Amplitudes are magnitudes and cannot be negative.
    #[error("amplitude must be non-negative and finite, got {0}")]
    NegativeAmplitude(f64),
    /// Pendulum swing half-angle outside `[0, 90]` degrees.
    #[error("swing amplitude must be within [0, 90] degrees, got {0}")]
    AmplitudeOutOfRange(f64),
    /// Trajectory sampling density outside `(0, MAX_RESOLUTION]`.
    #[error("trajectory resolution must be positive and at most 100000 points per radian, got {0}")]
    InvalidResolution(f64),
    /// Sampling stride below one pixel.
    #[error("sample block size must be at least 1, got {0}")]
    InvalidBlockSize(u32),
    /// Per-tick time increment must be positive.
    #[error("fixed time step must be positive and finite, got {0}")]
    NonPositiveTimeStep(f64),
    /// Pixel surface with a zero dimension.
    #[error("surface must be at least 1x1, got {width}x{height}")]
    InvalidSurface {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
    },
}

/// Errors that can occur while exporting a pixel surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// Failed to encode or write the image file.
    #[error("failed to write snapshot: {0}")]
    Image(#[from] image::ImageError),
    /// Buffer dimensions did not match its pixel data.
    #[error("pixel data does not match {width}x{height} surface")]
    SizeMismatch {
        /// Surface width in pixels
        width: u32,
        /// Surface height in pixels
        height: u32,
    },
}

/// Errors that can occur during GPU initialization.
#[derive(Debug, Error)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    #[error("failed to create GPU surface: {0}")]
    SurfaceCreation(#[from] wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    #[error("no compatible GPU adapter found; a WebGPU/Vulkan/Metal/DX12 capable device is required")]
    NoAdapter,
    /// Failed to create GPU device.
    #[error("failed to create GPU device: {0}")]
    DeviceCreation(#[from] wgpu::RequestDeviceError),
}

/// Errors that can occur when running the visualizer.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid model or render configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    /// Snapshot export failed.
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    /// Failed to create or run the event loop.
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    /// Failed to create the window.
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    /// GPU initialization failed.
    #[error("GPU error: {0}")]
    Gpu(#[from] GpuError),
}
