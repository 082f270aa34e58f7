//! Bounded time series of model readouts.
//!
//! Plot widgets are outside this crate; these types only collect what such a
//! widget needs: recent `(t, value)` points and fixed axis limits derived from
//! the model's theoretical maxima.

use std::collections::VecDeque;

use crate::scene::Readout;

/// Seconds of history kept by default.
pub const DEFAULT_TIME_WINDOW: f64 = 30.0;

/// One plotted line.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    time_window: f64,
    y_limit: f64,
    points: VecDeque<(f64, f64)>,
}

impl Series {
    /// Empty series with the y axis spanning `[-y_limit, y_limit]`.
    pub fn new(y_limit: f64) -> Self {
        Self::with_time_window(y_limit, DEFAULT_TIME_WINDOW)
    }

    pub fn with_time_window(y_limit: f64, time_window: f64) -> Self {
        Self {
            time_window: time_window.max(0.0),
            y_limit: y_limit.abs(),
            points: VecDeque::new(),
        }
    }

    /// Append a point and drop everything older than the time window.
    pub fn push(&mut self, t: f64, value: f64) {
        self.points.push_back((t, value));
        let cutoff = t - self.time_window;
        while let Some(&(front, _)) = self.points.front() {
            if front >= cutoff {
                break;
            }
            self.points.pop_front();
        }
    }

    /// Axis limits as `(min, max)`.
    #[inline]
    pub fn y_range(&self) -> (f64, f64) {
        (-self.y_limit, self.y_limit)
    }

    /// Time axis limits covering the retained window.
    pub fn t_range(&self) -> (f64, f64) {
        let end = self.points.back().map_or(0.0, |&(t, _)| t);
        ((end - self.time_window).max(0.0), end.max(self.time_window))
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// The two lines of a visual: the cosine quantity above, the sine one below.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPair {
    pub primary: Series,
    pub secondary: Series,
}

impl SeriesPair {
    /// Size both axes from the maxima reported in `readout`.
    pub fn for_readout(readout: &Readout) -> Self {
        Self {
            primary: Series::new(readout.primary_max),
            secondary: Series::new(readout.secondary_max),
        }
    }

    pub fn record(&mut self, readout: &Readout) {
        self.primary.push(readout.time, readout.primary);
        self.secondary.push(readout.time, readout.secondary);
    }
}
