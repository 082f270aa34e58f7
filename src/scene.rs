//! Visual elements and the per-frame scene loop.
//!
//! A [`Visual`] couples one motion model to the [`Area`]s that depict it. The
//! set of visuals is closed, so it is a plain enum: each variant reports its
//! own preferred tick rate instead of callers inspecting what it is.
//!
//! [`Scene`] owns one visual, the [`FrameClock`] driving it and the
//! [`PixelBuffer`] it is drawn into.
//!
//! ```
//! use oscillume::config::{OscillatorConfig, RenderConfig};
//! use oscillume::scene::{Scene, Visual};
//!
//! let render = RenderConfig::default();
//! let visual = Visual::oscillator(&OscillatorConfig::new(2.0), &render).unwrap();
//! let mut scene = Scene::new(visual, &render).unwrap();
//! for _ in 0..40 {
//!     scene.step();
//! }
//! assert!((scene.readout().primary - 30.0).abs() < 1e-9);
//! ```

use std::path::Path;

use glam::IVec2;

use crate::area::{magnitude, Area, Sampling};
use crate::config::{OscillatorConfig, PendulumConfig, RenderConfig};
use crate::error::{ConfigError, SurfaceError};
use crate::oscillator::OscillatorModel;
use crate::pendulum::PendulumModel;
use crate::series::SeriesPair;
use crate::surface::{PixelBuffer, Rgb};
use crate::time::FrameClock;

/// Hue of the charge disc.
pub const CHARGE_COLOR: Rgb = Rgb::RED;
/// Hue of the current disc.
pub const CURRENT_COLOR: Rgb = Rgb::BLUE;
/// Hue of the pendulum bob at full speed.
pub const BOB_COLOR: Rgb = Rgb::new(255, 200, 80);
/// Color of the dotted swing arc.
pub const ARC_COLOR: Rgb = Rgb::new(60, 60, 60);
/// Radius of the pendulum bob in pixels.
pub const BOB_RADIUS: u32 = 20;
/// Share of the bob brightness kept at the turning points.
const BOB_MIN_GLOW: f64 = 0.35;
/// Every n-th trajectory point is drawn for the arc.
const ARC_DOT_SPACING: usize = 8;

/// Snapshot of a visual's outputs for plotting collaborators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readout {
    /// Simulated time in seconds.
    pub time: f64,
    /// Cosine quantity: charge or deviation.
    pub primary: f64,
    /// Sine quantity: current or speed.
    pub secondary: f64,
    /// Theoretical maximum of `primary`.
    pub primary_max: f64,
    /// Theoretical maximum of `secondary`.
    pub secondary_max: f64,
}

/// LC oscillator drawn as a charge disc and a current disc.
#[derive(Debug, Clone)]
pub struct OscillatorVisual {
    model: OscillatorModel,
    charge_area: Area,
    current_area: Area,
}

impl OscillatorVisual {
    /// Place the two discs left and right of `center`.
    pub fn new(model: OscillatorModel, center: IVec2, spacing: i32) -> Self {
        let offset = IVec2::new(spacing / 2, 0);
        let mut visual = Self {
            model,
            charge_area: Area::new(center - offset, 1, CHARGE_COLOR),
            current_area: Area::new(center + offset, 1, CURRENT_COLOR),
        };
        visual.retarget();
        visual
    }

    fn retarget(&mut self) {
        self.charge_area.set_radius(magnitude(self.model.charge()));
        self.current_area.set_radius(magnitude(self.model.current()));
    }

    pub fn model(&self) -> &OscillatorModel {
        &self.model
    }

    pub fn charge_area(&self) -> &Area {
        &self.charge_area
    }

    pub fn current_area(&self) -> &Area {
        &self.current_area
    }
}

/// Pendulum drawn as a glowing bob over its dotted arc.
#[derive(Debug, Clone)]
pub struct PendulumVisual {
    model: PendulumModel,
    bob: Area,
}

impl PendulumVisual {
    pub fn new(model: PendulumModel) -> Self {
        let mut visual = Self {
            bob: Area::new(model.current_position(), BOB_RADIUS, BOB_COLOR),
            model,
        };
        visual.retarget();
        visual
    }

    /// Bob brightness in `[BOB_MIN_GLOW, 1]`, growing with speed.
    fn glow(&self) -> f64 {
        let max = self.model.maximal_speed();
        let share = if max > 0.0 {
            (self.model.speed().abs() / max).min(1.0)
        } else {
            0.0
        };
        BOB_MIN_GLOW + (1.0 - BOB_MIN_GLOW) * share
    }

    fn retarget(&mut self) {
        self.bob.set_center(self.model.current_position());
        self.bob.set_peak_color(BOB_COLOR.scale(self.glow()));
    }

    pub fn model(&self) -> &PendulumModel {
        &self.model
    }

    pub fn bob(&self) -> &Area {
        &self.bob
    }
}

/// Any visual element the runner can animate.
#[derive(Debug, Clone)]
pub enum Visual {
    Oscillator(OscillatorVisual),
    Pendulum(PendulumVisual),
}

impl Visual {
    /// LC oscillator centered on the surface described by `render`.
    pub fn oscillator(config: &OscillatorConfig, render: &RenderConfig) -> Result<Self, ConfigError> {
        let model = config.build()?;
        let center = IVec2::new(render.width as i32 / 2, render.height as i32 / 2);
        Ok(Visual::Oscillator(OscillatorVisual::new(
            model,
            center,
            render.width as i32 / 2,
        )))
    }

    pub fn pendulum(config: &PendulumConfig) -> Result<Self, ConfigError> {
        Ok(Visual::Pendulum(PendulumVisual::new(config.build()?)))
    }

    /// Frames per second this element is meant to be animated at.
    pub fn preferred_tick_rate(&self) -> u32 {
        match self {
            Visual::Oscillator(_) => 15,
            Visual::Pendulum(_) => 20,
        }
    }

    /// Human-readable name, used for window titles.
    pub fn name(&self) -> &'static str {
        match self {
            Visual::Oscillator(_) => "LC oscillator",
            Visual::Pendulum(_) => "Pendulum",
        }
    }

    /// Advance the model by `dt` seconds and re-target its fields.
    pub fn advance(&mut self, dt: f64) {
        match self {
            Visual::Oscillator(v) => {
                v.model.advance(dt);
                v.retarget();
            }
            Visual::Pendulum(v) => {
                v.model.advance(dt);
                v.retarget();
            }
        }
    }

    pub fn set_sampling(&mut self, sampling: Sampling) {
        match self {
            Visual::Oscillator(v) => {
                v.charge_area.set_sampling(sampling);
                v.current_area.set_sampling(sampling);
            }
            Visual::Pendulum(v) => v.bob.set_sampling(sampling),
        }
    }

    /// Paint the current state. The surface is not cleared first.
    pub fn draw(&self, surface: &mut PixelBuffer) {
        match self {
            Visual::Oscillator(v) => {
                v.charge_area.render_into(surface);
                v.current_area.render_into(surface);
            }
            Visual::Pendulum(v) => {
                let fulcrum = v.model.fulcrum();
                surface.fill_rect(fulcrum - IVec2::splat(2), glam::UVec2::splat(5), Rgb::WHITE);
                for point in v.model.trajectory().points().iter().step_by(ARC_DOT_SPACING) {
                    surface.put(point.x, point.y, ARC_COLOR);
                }
                v.bob.render_into(surface);
            }
        }
    }

    pub fn readout(&self) -> Readout {
        match self {
            Visual::Oscillator(v) => Readout {
                time: v.model.timer(),
                primary: v.model.charge(),
                secondary: v.model.current(),
                primary_max: v.model.maximal_charge(),
                secondary_max: v.model.maximal_current(),
            },
            Visual::Pendulum(v) => Readout {
                time: v.model.timer(),
                primary: v.model.deviation(),
                secondary: v.model.speed(),
                primary_max: v.model.maximal_deviation(),
                secondary_max: v.model.maximal_speed(),
            },
        }
    }
}

/// One visual, its clock, its surface and its recorded history.
#[derive(Debug)]
pub struct Scene {
    visual: Visual,
    clock: FrameClock,
    surface: PixelBuffer,
    series: SeriesPair,
}

impl Scene {
    pub fn new(mut visual: Visual, render: &RenderConfig) -> Result<Self, ConfigError> {
        render.validate()?;
        visual.set_sampling(render.sampling()?);
        let clock = FrameClock::new(render.fixed_dt)?;
        let mut surface = PixelBuffer::new(render.width, render.height)?;
        visual.draw(&mut surface);

        let readout = visual.readout();
        let mut series = SeriesPair::for_readout(&readout);
        series.record(&readout);

        tracing::debug!(
            visual = visual.name(),
            width = render.width,
            height = render.height,
            fixed_dt = render.fixed_dt,
            "created scene"
        );
        Ok(Self {
            visual,
            clock,
            surface,
            series,
        })
    }

    /// Tick the clock, advance the visual and redraw the surface.
    pub fn step(&mut self) {
        let dt = self.clock.tick();
        if dt > 0.0 {
            self.visual.advance(dt);
            self.series.record(&self.visual.readout());
        }
        self.surface.clear(Rgb::BLACK);
        self.visual.draw(&mut self.surface);
    }

    pub fn readout(&self) -> Readout {
        self.visual.readout()
    }

    pub fn visual(&self) -> &Visual {
        &self.visual
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut FrameClock {
        &mut self.clock
    }

    pub fn surface(&self) -> &PixelBuffer {
        &self.surface
    }

    pub fn series(&self) -> &SeriesPair {
        &self.series
    }

    /// Save the current surface as PNG.
    pub fn snapshot<P: AsRef<Path>>(&self, path: P) -> Result<(), SurfaceError> {
        self.surface.save_png(path)
    }
}
