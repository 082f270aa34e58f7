//! Frame-driven simulation clock.
//!
//! Simulated time advances by a fixed increment once per rendered frame,
//! independent of how long the frame actually took. Wall-clock time is only
//! used for FPS reporting and frame pacing.
//!
//! # Example
//!
//! ```
//! use oscillume::time::FrameClock;
//!
//! let mut clock = FrameClock::new(0.05).unwrap();
//!
//! // In your frame loop:
//! let dt = clock.tick();
//! assert_eq!(dt, 0.05);
//! assert_eq!(clock.frame(), 1);
//! ```

use std::time::{Duration, Instant};

use crate::config::{validate_time_step, DEFAULT_FIXED_DT};
use crate::error::ConfigError;

/// Fixed-step clock with pause and time scaling.
#[derive(Debug)]
pub struct FrameClock {
    /// Simulated seconds per tick before scaling.
    fixed_dt: f64,
    /// Time scale multiplier (1.0 = normal speed).
    time_scale: f64,
    /// Whether ticks currently produce zero time.
    paused: bool,
    /// Total simulated seconds handed out.
    sim_elapsed: f64,
    /// Ticks since creation, paused ticks included.
    frame_count: u64,
    /// Calculated FPS (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Instant,
    /// How often to update FPS calculation.
    fps_update_interval: Duration,
}

impl FrameClock {
    /// Create a clock handing out `fixed_dt` simulated seconds per tick.
    pub fn new(fixed_dt: f64) -> Result<Self, ConfigError> {
        Ok(Self::with_step(validate_time_step(fixed_dt)?))
    }

    /// `fixed_dt` must already be validated.
    fn with_step(fixed_dt: f64) -> Self {
        Self {
            fixed_dt,
            time_scale: 1.0,
            paused: false,
            sim_elapsed: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: Instant::now(),
            fps_update_interval: Duration::from_millis(500),
        }
    }

    /// Register a rendered frame and return the simulated increment for it.
    ///
    /// Returns 0 while paused.
    pub fn tick(&mut self) -> f64 {
        self.frame_count += 1;
        self.update_fps(Instant::now());

        if self.paused {
            return 0.0;
        }
        let dt = self.fixed_dt * self.time_scale;
        self.sim_elapsed += dt;
        dt
    }

    fn update_fps(&mut self, now: Instant) {
        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
        }
    }

    /// Unscaled per-tick increment.
    #[inline]
    pub fn fixed_dt(&self) -> f64 {
        self.fixed_dt
    }

    /// Total simulated seconds.
    #[inline]
    pub fn sim_elapsed(&self) -> f64 {
        self.sim_elapsed
    }

    /// Total ticks since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Measured frames per second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Set time scale multiplier.
    ///
    /// - `1.0` = normal speed
    /// - `0.5` = half speed (slow motion)
    /// - `2.0` = double speed
    pub fn set_time_scale(&mut self, scale: f64) {
        self.time_scale = if scale.is_nan() { 0.0 } else { scale.max(0.0) };
    }

    /// Wall-clock time between frames at `tick_rate` frames per second.
    pub fn frame_interval(tick_rate: u32) -> Duration {
        Duration::from_secs(1) / tick_rate.max(1)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::with_step(DEFAULT_FIXED_DT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clock_new() {
        let clock = FrameClock::new(0.02).unwrap();
        assert_eq!(clock.frame(), 0);
        assert_eq!(clock.sim_elapsed(), 0.0);
        assert!(!clock.is_paused());
        assert_eq!(clock.time_scale(), 1.0);
    }

    #[test]
    fn test_rejects_bad_step() {
        assert_eq!(
            FrameClock::new(0.0).unwrap_err(),
            ConfigError::NonPositiveTimeStep(0.0)
        );
        assert!(FrameClock::new(-0.05).is_err());
    }

    #[test]
    fn test_tick_is_fixed_regardless_of_wall_time() {
        let mut clock = FrameClock::new(0.066).unwrap();
        thread::sleep(Duration::from_millis(20));
        assert_eq!(clock.tick(), 0.066);
        assert_eq!(clock.tick(), 0.066);
        assert!((clock.sim_elapsed() - 0.132).abs() < 1e-12);
        assert_eq!(clock.frame(), 2);
    }

    #[test]
    fn test_pause() {
        let mut clock = FrameClock::default();
        clock.tick();
        clock.pause();
        let before = clock.sim_elapsed();
        assert_eq!(clock.tick(), 0.0);
        assert_eq!(clock.sim_elapsed(), before);
        assert_eq!(clock.frame(), 2);

        clock.toggle_pause();
        assert_eq!(clock.tick(), DEFAULT_FIXED_DT);
    }

    #[test]
    fn test_time_scale() {
        let mut clock = FrameClock::new(0.05).unwrap();
        clock.set_time_scale(2.0);
        assert!((clock.tick() - 0.1).abs() < 1e-12);

        // Negative scale should clamp to 0
        clock.set_time_scale(-1.0);
        assert_eq!(clock.time_scale(), 0.0);
        assert_eq!(clock.tick(), 0.0);
    }

    #[test]
    fn test_default_matches_new() {
        let default = FrameClock::default();
        let built = FrameClock::new(DEFAULT_FIXED_DT).unwrap();
        assert_eq!(default.fixed_dt(), built.fixed_dt());
        assert_eq!(default.time_scale(), built.time_scale());
        assert_eq!(default.is_paused(), built.is_paused());
        assert_eq!(default.frame(), built.frame());
        assert_eq!(default.fps_update_interval, built.fps_update_interval);
    }

    #[test]
    fn test_frame_interval() {
        assert_eq!(FrameClock::frame_interval(20), Duration::from_millis(50));
        assert_eq!(FrameClock::frame_interval(0), Duration::from_secs(1));
    }

    #[test]
    fn test_fps_updates() {
        let mut clock = FrameClock::default();
        clock.fps_update_interval = Duration::from_millis(10);
        clock.tick();
        thread::sleep(Duration::from_millis(15));
        clock.tick();
        assert!(clock.fps() > 0.0);
    }
}
