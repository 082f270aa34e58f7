//! # Oscillume
//!
//! Closed-form oscillators drawn as radial glows.
//!
//! Two motion models are evaluated analytically at an accumulated time, so
//! advancing a frame is O(1) and never drifts:
//!
//! - [`OscillatorModel`]: an LC circuit, `q(t) = q0 cos(wt)` and `i(t) = -w q0 sin(wt)`.
//! - [`PendulumModel`]: a bob moving along a precomputed [`Trajectory`].
//!
//! Each model output becomes the radius or the brightness of an [`Area`], a
//! disc whose intensity falls off quadratically from its center. Areas write
//! into a caller-owned [`PixelBuffer`], either per pixel or in square blocks.
//!
//! ## Quick Start
//!
//! ```
//! use oscillume::prelude::*;
//!
//! let render = RenderConfig::default();
//! let visual = Visual::pendulum(&PendulumConfig::new(2.0, 30.0)).unwrap();
//! let mut scene = Scene::new(visual, &render).unwrap();
//!
//! for _ in 0..20 {
//!     scene.step();
//! }
//! // The bob starts at the end of its arc and half a period later reaches the start.
//! let Visual::Pendulum(pendulum) = scene.visual() else { unreachable!() };
//! assert_eq!(pendulum.model().current_index(), 0);
//! ```
//!
//! ## Rendering a single field
//!
//! ```
//! use oscillume::prelude::*;
//!
//! let mut buffer = PixelBuffer::new(100, 100).unwrap();
//! let area = Area::new(IVec2::new(50, 50), 10, Rgb::WHITE).with_sampling(Sampling::PerPixel);
//! area.render_into(&mut buffer);
//!
//! assert_eq!(buffer.get(50, 50), Some(Rgb::WHITE));
//! assert_eq!(buffer.get(60, 50), Some(Rgb::BLACK));
//! ```
//!
//! ## Running
//!
//! [`app::run`] opens a window and animates a [`Scene`] at the visual's
//! [preferred tick rate](Visual::preferred_tick_rate). [`app::run_headless`]
//! steps a scene without a window, for snapshots and tests.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber.

pub mod app;
pub mod area;
pub mod config;
pub mod error;
mod gpu;
pub mod input;
pub mod oscillator;
pub mod pendulum;
pub mod scene;
pub mod series;
pub mod surface;
pub mod time;
pub mod trajectory;

pub use area::{magnitude, Area, Sample, Sampling};
pub use config::{OscillatorConfig, PendulumConfig, RenderConfig};
pub use error::{AppError, ConfigError, GpuError, SurfaceError};
pub use glam::{IVec2, UVec2};
pub use oscillator::OscillatorModel;
pub use pendulum::PendulumModel;
pub use scene::{Readout, Scene, Visual};
pub use surface::{PixelBuffer, Rgb};
pub use time::FrameClock;
pub use trajectory::{ArcSpan, Trajectory};

/// Convenient imports for building and driving scenes.
pub mod prelude {
    pub use crate::area::{magnitude, Area, Sampling};
    pub use crate::config::{OscillatorConfig, PendulumConfig, RenderConfig};
    pub use crate::error::{AppError, ConfigError};
    pub use crate::input::Command;
    pub use crate::oscillator::OscillatorModel;
    pub use crate::pendulum::PendulumModel;
    pub use crate::scene::{Readout, Scene, Visual};
    pub use crate::series::{Series, SeriesPair};
    pub use crate::surface::{PixelBuffer, Rgb};
    pub use crate::time::FrameClock;
    pub use crate::trajectory::{ArcSpan, Trajectory};
    pub use crate::{IVec2, UVec2};
}
