//! Integration tests for the motion models.
//!
//! Randomized sweeps check the closed-form relations over many configurations
//! instead of a handful of hand-picked ones.

use std::f64::consts::{FRAC_PI_2, PI};

use glam::IVec2;
use rand::{rngs::StdRng, Rng, SeedableRng};

use oscillume::config::{OscillatorConfig, PendulumConfig};
use oscillume::error::ConfigError;
use oscillume::oscillator::OscillatorModel;
use oscillume::pendulum::PendulumModel;
use oscillume::trajectory::{ArcSpan, Trajectory};

const SWEEPS: usize = 200;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x05C1_11A7)
}

// ============================================================================
// Oscillator
// ============================================================================

#[test]
fn test_charge_current_ellipse() {
    let mut rng = rng();
    for _ in 0..SWEEPS {
        let q0 = rng.gen_range(0.5..100.0);
        let period = rng.gen_range(0.1..20.0);
        let mut model = OscillatorModel::new(q0, period).unwrap();
        model.advance(rng.gen_range(0.0..1000.0));

        let w = model.cyclic_frequency();
        let q = model.charge();
        let i = model.current();
        let lhs = q * q + (i / w) * (i / w);
        assert!(
            (lhs - q0 * q0).abs() <= 1e-9 * q0 * q0,
            "q={} i={} w={} q0={}",
            q,
            i,
            w,
            q0
        );
    }
}

#[test]
fn test_oscillator_bounds() {
    let mut rng = rng();
    for _ in 0..SWEEPS {
        let q0 = rng.gen_range(0.0..100.0);
        let period = rng.gen_range(0.1..20.0);
        let model = OscillatorModel::new(q0, period).unwrap();
        let t = rng.gen_range(0.0..100.0);

        let tolerance = 1e-9 * (1.0 + model.maximal_current());
        assert!(model.charge_at(t).abs() <= q0 + 1e-9);
        assert!(model.current_at(t).abs() <= model.maximal_current() + tolerance);
    }
}

#[test]
fn test_oscillator_extrema() {
    let model = OscillatorModel::new(30.0, 2.0).unwrap();
    assert_eq!(model.charge_at(0.0), 30.0);
    assert_eq!(model.current_at(0.0), 0.0);

    let quarter = model.current_at(0.5);
    assert!((quarter.abs() - model.maximal_current()).abs() < 1e-9);
    assert!((model.maximal_current() - 30.0 * PI).abs() < 1e-9);
}

#[test]
fn test_oscillator_periodicity() {
    let mut rng = rng();
    for _ in 0..SWEEPS {
        let q0 = rng.gen_range(0.5..100.0);
        let period = rng.gen_range(0.1..20.0);
        let model = OscillatorModel::new(q0, period).unwrap();
        let t = rng.gen_range(0.0..50.0);

        assert!((model.charge_at(t) - model.charge_at(t + period)).abs() < 1e-6 * q0);
        let i_scale = 1.0 + model.maximal_current();
        assert!((model.current_at(t) - model.current_at(t + period)).abs() < 1e-6 * i_scale);
    }
}

#[test]
fn test_fixed_steps_return_to_start() {
    let mut model = OscillatorConfig::new(2.0).build().unwrap();
    for _ in 0..40 {
        model.advance(0.05);
    }
    assert!((model.charge() - 30.0).abs() < 1e-9);
    assert!(model.current().abs() < 1e-9);
}

#[test]
fn test_oscillator_rejects_bad_period() {
    assert_eq!(
        OscillatorModel::new(30.0, 0.0).unwrap_err(),
        ConfigError::NonPositivePeriod(0.0)
    );
    assert!(OscillatorModel::new(30.0, f64::NAN).is_err());
    assert_eq!(
        OscillatorModel::new(-1.0, 2.0).unwrap_err(),
        ConfigError::NegativeAmplitude(-1.0)
    );
}

// ============================================================================
// Trajectory
// ============================================================================

#[test]
fn test_trajectory_spacing() {
    let mut rng = rng();
    for _ in 0..50 {
        let length = rng.gen_range(10.0..500.0);
        let half = rng.gen_range(0.05..FRAC_PI_2);
        let resolution = rng.gen_range(10.0..400.0);
        let span = ArcSpan::centered(FRAC_PI_2, half);
        let trajectory = Trajectory::generate(IVec2::new(400, 0), length, span, resolution);

        assert!(!trajectory.is_empty());
        let expected = (span.width() * resolution).round().max(1.0) as usize;
        assert_eq!(trajectory.len(), expected);

        // Consecutive points lie within one angular step of the arc, plus rounding.
        let step = length / resolution;
        let max_gap = step + 2.0_f64.sqrt();
        for pair in trajectory.points().windows(2) {
            let gap = (pair[1] - pair[0]).as_dvec2().length();
            assert!(gap <= max_gap + 1e-9, "gap {} > {}", gap, max_gap);
        }
    }
}

#[test]
fn test_trajectory_points_on_arc() {
    let fulcrum = IVec2::new(400, 0);
    let trajectory = Trajectory::generate(fulcrum, 300.0, ArcSpan::centered(FRAC_PI_2, 0.5), 250.0);
    for point in trajectory.points() {
        let r = (*point - fulcrum).as_dvec2().length();
        assert!((r - 300.0).abs() <= 1.0, "{:?} is {} from the fulcrum", point, r);
        assert!(point.y > 0);
    }
}

#[test]
fn test_degenerate_span_has_one_point() {
    let trajectory = Trajectory::generate(IVec2::ZERO, 100.0, ArcSpan::new(1.0, 1.0), 250.0);
    assert_eq!(trajectory.len(), 1);
    assert_eq!(trajectory.first(), trajectory.last());
}

// ============================================================================
// Pendulum
// ============================================================================

#[test]
fn test_pendulum_index_always_in_range() {
    let mut rng = rng();
    for _ in 0..SWEEPS {
        let amplitude = rng.gen_range(0.0..=90.0);
        let period = rng.gen_range(0.05..10.0);
        let length = rng.gen_range(0.0..600.0);
        let mut model = PendulumModel::new(IVec2::new(400, 0), length, amplitude, period).unwrap();

        for _ in 0..20 {
            model.advance(rng.gen_range(0.0..1e6));
            assert!(model.current_index() < model.trajectory().len());
            assert_eq!(
                model.current_position(),
                model.trajectory().get(model.current_index()).unwrap()
            );
        }
    }
}

#[test]
fn test_pendulum_adversarial_timers() {
    let mut model = PendulumModel::new(IVec2::new(400, 0), 300.0, 30.0, 2.0).unwrap();
    for dt in [1e300, f64::MAX, f64::INFINITY, f64::NAN] {
        model.advance(dt);
        assert!(model.current_index() < model.trajectory().len());
    }
}

#[test]
fn test_pendulum_swing_endpoints() {
    let mut model = PendulumConfig::new(2.0, 30.0).build().unwrap();
    let last = model.trajectory().len() - 1;
    assert_eq!(model.current_index(), last);

    model.advance(0.5);
    let middle = model.current_index() as i64 - model.trajectory().len() as i64 / 2;
    assert!(middle.abs() <= 1);

    model.advance(0.5);
    assert_eq!(model.current_index(), 0);
}

#[test]
fn test_pendulum_deviation_speed_ellipse() {
    let mut rng = rng();
    for _ in 0..SWEEPS {
        let amplitude = rng.gen_range(1.0..=90.0);
        let period = rng.gen_range(0.1..10.0);
        let mut model = PendulumModel::new(IVec2::new(400, 0), 300.0, amplitude, period).unwrap();
        model.advance(rng.gen_range(0.0..100.0));

        let a = model.maximal_deviation();
        let x = model.deviation();
        let v = model.speed() / model.cyclic_frequency();
        assert!((x * x + v * v - a * a).abs() <= 1e-9 * a * a);
    }
}

#[test]
fn test_pendulum_rejects_bad_config() {
    assert_eq!(
        PendulumModel::new(IVec2::ZERO, -1.0, 30.0, 2.0).unwrap_err(),
        ConfigError::NegativeLength(-1.0)
    );
    assert_eq!(
        PendulumModel::new(IVec2::ZERO, 300.0, 120.0, 2.0).unwrap_err(),
        ConfigError::AmplitudeOutOfRange(120.0)
    );
    assert_eq!(
        PendulumModel::new(IVec2::ZERO, 300.0, 30.0, -2.0).unwrap_err(),
        ConfigError::NonPositivePeriod(-2.0)
    );
}
