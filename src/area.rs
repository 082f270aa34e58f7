//! Radial intensity fields ("areas").
//!
//! An [`Area`] paints a glowing disc: brightness is the peak color scaled by a
//! quadratic falloff that reaches zero at the radius,
//!
//! ```text
//! d     = min(|p - center|, radius)
//! ratio = 1 - (d / radius)^2
//! color = peak * ratio
//! ```
//!
//! and everything inside the square `[center - radius, center + radius]` is
//! written, including the black corners.
//!
//! # Sampling
//!
//! [`Sampling::PerPixel`] evaluates the falloff for every pixel and is the
//! reference result. [`Sampling::Block`] evaluates once per `n x n` block and
//! paints the whole block that color: roughly `n^2` times fewer evaluations for
//! the same number of pixel writes. A block stride of 1 is identical to
//! per-pixel rendering.
//!
//! # Example
//!
//! ```
//! use glam::IVec2;
//! use oscillume::area::{Area, Sampling};
//! use oscillume::surface::{PixelBuffer, Rgb};
//!
//! let mut surface = PixelBuffer::new(100, 100).unwrap();
//! let mut area = Area::new(IVec2::new(50, 50), 10, Rgb::WHITE)
//!     .with_sampling(Sampling::PerPixel);
//! area.render_into(&mut surface);
//! assert_eq!(surface.get(50, 50), Some(Rgb::WHITE));
//!
//! area.set_radius(0); // coerced to 1, never divides by zero
//! area.render_into(&mut surface);
//! ```

use std::num::NonZeroU32;

use glam::{IVec2, UVec2};

use crate::config::DEFAULT_BLOCK_SIZE;
use crate::error::ConfigError;
use crate::surface::{PixelBuffer, Rgb};

/// How densely the falloff is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sampling {
    /// One evaluation per pixel.
    PerPixel,
    /// One evaluation per `stride x stride` block.
    Block(NonZeroU32),
}

impl Sampling {
    /// Block sampling with the given stride; rejects 0.
    pub fn block(stride: u32) -> Result<Self, ConfigError> {
        NonZeroU32::new(stride)
            .map(Sampling::Block)
            .ok_or(ConfigError::InvalidBlockSize(stride))
    }

    /// Distance between sample points in pixels.
    #[inline]
    pub fn stride(&self) -> u32 {
        match self {
            Sampling::PerPixel => 1,
            Sampling::Block(n) => n.get(),
        }
    }
}

impl Default for Sampling {
    fn default() -> Self {
        // DEFAULT_BLOCK_SIZE is a non-zero constant.
        Sampling::Block(NonZeroU32::new(DEFAULT_BLOCK_SIZE).unwrap_or(NonZeroU32::MIN))
    }
}

/// One evaluated sample and the block of pixels it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// Top-left pixel of the block; also the point the color was evaluated at.
    pub origin: IVec2,
    /// Block extent, clipped to the field's bounding box.
    pub size: UVec2,
    pub color: Rgb,
}

/// Rounded absolute value of a model output, as a field radius.
///
/// NaN maps to 0; values beyond `u32::MAX` saturate.
pub fn magnitude(value: f64) -> u32 {
    value.round().abs() as u32
}

/// Radial intensity field centered on a point.
#[derive(Debug, Clone, PartialEq)]
pub struct Area {
    center: IVec2,
    radius: u32,
    peak_color: Rgb,
    sampling: Sampling,
    min: IVec2,
    max: IVec2,
}

impl Area {
    /// Create a field; a zero radius becomes 1.
    pub fn new(center: IVec2, radius: u32, peak_color: Rgb) -> Self {
        let mut area = Self {
            center,
            radius: 1,
            peak_color,
            sampling: Sampling::default(),
            min: center,
            max: center,
        };
        area.set_radius(radius);
        area
    }

    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Set the radius; 0 is normalized to 1.
    pub fn set_radius(&mut self, radius: u32) {
        self.radius = radius.max(1);
        self.update_bounds();
    }

    pub fn set_peak_color(&mut self, color: Rgb) {
        self.peak_color = color;
    }

    pub fn set_center(&mut self, center: IVec2) {
        self.center = center;
        self.update_bounds();
    }

    pub fn set_sampling(&mut self, sampling: Sampling) {
        self.sampling = sampling;
    }

    fn update_bounds(&mut self) {
        let r = self.radius.min(i32::MAX as u32) as i32;
        self.min = IVec2::new(self.center.x.saturating_sub(r), self.center.y.saturating_sub(r));
        self.max = IVec2::new(self.center.x.saturating_add(r), self.center.y.saturating_add(r));
    }

    #[inline]
    pub fn center(&self) -> IVec2 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    #[inline]
    pub fn peak_color(&self) -> Rgb {
        self.peak_color
    }

    #[inline]
    pub fn sampling(&self) -> Sampling {
        self.sampling
    }

    /// Inclusive corners `(center - radius, center + radius)`.
    #[inline]
    pub fn bounds(&self) -> (IVec2, IVec2) {
        (self.min, self.max)
    }

    /// Falloff ratio at `point`, in `[0, 1]`.
    pub fn ratio_at(&self, point: IVec2) -> f64 {
        let radius = self.radius as f64;
        let offset = point.as_dvec2() - self.center.as_dvec2();
        let distance = offset.length().min(radius);
        let normalized = distance / radius;
        1.0 - normalized * normalized
    }

    /// Field color at `point`.
    #[inline]
    pub fn color_at(&self, point: IVec2) -> Rgb {
        self.peak_color.scale(self.ratio_at(point))
    }

    /// Evaluate the field block by block, row-major from the top-left corner.
    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        let xs = (self.min.x as i64, self.max.x as i64);
        let ys = (self.min.y as i64, self.max.y as i64);
        self.grid(xs, ys)
    }

    /// The blocks of [`samples`](Self::samples) that overlap a surface of `size`.
    ///
    /// Blocks keep their origin, extent and color, so painting these gives the
    /// same pixels as painting every sample.
    pub fn visible_samples(&self, size: UVec2) -> impl Iterator<Item = Sample> + '_ {
        let stride = self.sampling.stride() as i64;
        let xs = visible_span(self.min.x, self.max.x, size.x, stride);
        let ys = visible_span(self.min.y, self.max.y, size.y, stride);
        match (xs, ys) {
            (Some(xs), Some(ys)) => self.grid(xs, ys),
            _ => self.grid((1, 0), (1, 0)),
        }
    }

    /// Blocks whose origins lie in the inclusive spans, on the grid anchored at `min`.
    fn grid(&self, xs: (i64, i64), ys: (i64, i64)) -> impl Iterator<Item = Sample> + '_ {
        let stride = self.sampling.stride() as usize;
        let max = self.max;

        (ys.0..=ys.1).step_by(stride).flat_map(move |y| {
            (xs.0..=xs.1).step_by(stride).map(move |x| {
                let origin = IVec2::new(x as i32, y as i32);
                let size = UVec2::new(
                    block_extent(origin.x, max.x, stride),
                    block_extent(origin.y, max.y, stride),
                );
                Sample {
                    origin,
                    size,
                    color: self.color_at(origin),
                }
            })
        })
    }

    /// Paint the field into `surface`, clipped to the surface edges.
    ///
    /// Only blocks overlapping the surface are evaluated.
    pub fn render_into(&self, surface: &mut PixelBuffer) {
        for sample in self.visible_samples(surface.size()) {
            surface.fill_rect(sample.origin, sample.size, sample.color);
        }
    }

    /// Re-target the field from a model output and paint it.
    ///
    /// `value` is converted with [`magnitude`] and becomes the radius.
    pub fn render_magnitude(&mut self, value: f64, peak_color: Rgb, surface: &mut PixelBuffer) {
        self.set_radius(magnitude(value));
        self.set_peak_color(peak_color);
        self.render_into(surface);
    }
}

/// Origins of the blocks along one axis that overlap `[0, limit)`.
///
/// The first origin is snapped back onto the stride grid starting at `min`.
fn visible_span(min: i32, max: i32, limit: u32, stride: i64) -> Option<(i64, i64)> {
    let (min, max) = (min as i64, max as i64);
    let lo = min.max(0);
    let hi = max.min(limit as i64 - 1);
    if lo > hi {
        return None;
    }
    let start = min + (lo - min) / stride * stride;
    Some((start, hi))
}

fn block_extent(start: i32, max: i32, stride: usize) -> u32 {
    let remaining = (max as i64 - start as i64 + 1) as u64;
    remaining.min(stride as u64) as u32
}
