//! Circular arc discretization.
//!
//! A [`Trajectory`] is the ordered list of pixel positions a pendulum bob can
//! occupy. It is sampled once at a fixed angular density and then only
//! indexed.
//!
//! Angles follow screen coordinates: `x = cos(a)`, `y = sin(a)` with y growing
//! downward, so `a = π/2` is the point directly below the fulcrum.

use glam::IVec2;

/// Default sampling density in points per radian.
pub const DEFAULT_RESOLUTION: f64 = 250.0;

/// Densest accepted sampling, in points per radian.
///
/// A half-circle swing at this density is about 314 000 points.
pub const MAX_RESOLUTION: f64 = 100_000.0;

/// Angular interval `[start, end]` in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpan {
    pub start: f64,
    pub end: f64,
}

impl ArcSpan {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Symmetric span `[center - half_angle, center + half_angle]`.
    pub fn centered(center: f64, half_angle: f64) -> Self {
        Self {
            start: center - half_angle,
            end: center + half_angle,
        }
    }

    /// Width of the span in radians (never negative).
    #[inline]
    pub fn width(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }
}

/// Ordered, non-empty sequence of arc points.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    points: Vec<IVec2>,
}

impl Trajectory {
    /// Sample the arc of `length` around `fulcrum` over `span` at `resolution`
    /// points per radian.
    ///
    /// Produces `round(span.width() * resolution)` points, or a single point at
    /// `span.start` when that rounds to zero.
    pub fn generate(fulcrum: IVec2, length: f64, span: ArcSpan, resolution: f64) -> Self {
        let count = (span.width() * resolution).round();
        let count = if count.is_finite() && count >= 1.0 {
            count as usize
        } else {
            1
        };

        let points = (0..count)
            .map(|i| {
                let angle = if count == 1 {
                    span.start
                } else {
                    span.start + i as f64 / resolution
                };
                arc_point(fulcrum, length, angle)
            })
            .collect();

        Self { points }
    }

    /// Number of points; always at least one.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: generation guarantees one point.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<IVec2> {
        self.points.get(index).copied()
    }

    /// Round a fractional index and clamp it into range before lookup.
    ///
    /// NaN resolves to the first point, infinities to the matching endpoint.
    pub fn clamped(&self, index: f64) -> IVec2 {
        self.points[self.clamp_index(index)]
    }

    /// Index that [`clamped`](Self::clamped) would read.
    pub fn clamp_index(&self, index: f64) -> usize {
        let last = self.points.len() - 1;
        let rounded = index.round();
        if rounded.is_nan() || rounded <= 0.0 {
            0
        } else if rounded >= last as f64 {
            last
        } else {
            rounded as usize
        }
    }

    #[inline]
    pub fn first(&self) -> IVec2 {
        self.points[0]
    }

    #[inline]
    pub fn last(&self) -> IVec2 {
        self.points[self.points.len() - 1]
    }

    /// Point with the largest y (the bottom of the swing on screen).
    pub fn lowest(&self) -> IVec2 {
        self.points
            .iter()
            .copied()
            .max_by_key(|p| p.y)
            .unwrap_or(self.points[0])
    }

    #[inline]
    pub fn points(&self) -> &[IVec2] {
        &self.points
    }
}

fn arc_point(fulcrum: IVec2, length: f64, angle: f64) -> IVec2 {
    let x = (length * angle.cos() + fulcrum.x as f64).round();
    let y = (length * angle.sin() + fulcrum.y as f64).round();
    IVec2::new(x as i32, y as i32)
}
