//! Integration tests for field rasterization, scenes and snapshots.

use glam::{IVec2, UVec2};

use oscillume::app;
use oscillume::area::{magnitude, Area, Sampling};
use oscillume::config::{OscillatorConfig, PendulumConfig, RenderConfig};
use oscillume::oscillator::OscillatorModel;
use oscillume::scene::{Scene, Visual, CHARGE_COLOR};
use oscillume::surface::{PixelBuffer, Rgb};

fn white_field() -> Area {
    Area::new(IVec2::new(50, 50), 10, Rgb::WHITE).with_sampling(Sampling::PerPixel)
}

fn scratch_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("oscillume-{}-{}", std::process::id(), name))
}

// ============================================================================
// Field colors
// ============================================================================

#[test]
fn test_field_falloff_values() {
    let area = white_field();
    let mut buffer = PixelBuffer::new(100, 100).unwrap();
    area.render_into(&mut buffer);

    assert_eq!(buffer.get(50, 50), Some(Rgb::WHITE));
    assert_eq!(buffer.get(60, 50), Some(Rgb::BLACK));
    assert_eq!(buffer.get(50, 40), Some(Rgb::BLACK));
    // 255 * (1 - 0.25)
    assert_eq!(buffer.get(55, 50), Some(Rgb::new(191, 191, 191)));
}

#[test]
fn test_field_is_symmetric() {
    let area = white_field();
    for dx in 0..=10 {
        for dy in 0..=10 {
            let c = area.color_at(IVec2::new(50 + dx, 50 + dy));
            assert_eq!(c, area.color_at(IVec2::new(50 - dx, 50 + dy)));
            assert_eq!(c, area.color_at(IVec2::new(50 + dx, 50 - dy)));
            assert_eq!(c, area.color_at(IVec2::new(50 - dx, 50 - dy)));
        }
    }
}

#[test]
fn test_writes_stay_inside_bounds() {
    let mut buffer = PixelBuffer::new(100, 100).unwrap();
    buffer.clear(Rgb::new(1, 2, 3));
    let area = Area::new(IVec2::new(50, 50), 10, Rgb::RED).with_sampling(Sampling::block(3).unwrap());
    area.render_into(&mut buffer);

    let (min, max) = area.bounds();
    for y in 0..100 {
        for x in 0..100 {
            let inside = x >= min.x && x <= max.x && y >= min.y && y <= max.y;
            if !inside {
                assert_eq!(buffer.get(x, y), Some(Rgb::new(1, 2, 3)), "({}, {})", x, y);
            }
        }
    }
}

#[test]
fn test_field_clipped_at_surface_edges() {
    let mut buffer = PixelBuffer::new(20, 20).unwrap();
    let area = Area::new(IVec2::new(0, 0), 15, Rgb::BLUE).with_sampling(Sampling::PerPixel);
    area.render_into(&mut buffer);

    assert_eq!(buffer.get(0, 0), Some(Rgb::BLUE));
    assert_eq!(buffer.get(-1, 0), None);
    assert_eq!(buffer.get(19, 19), Some(Rgb::BLACK));
}

// ============================================================================
// Radius normalization and sampling
// ============================================================================

#[test]
fn test_zero_radius_renders_like_one() {
    let mut zero = PixelBuffer::new(20, 20).unwrap();
    let mut one = PixelBuffer::new(20, 20).unwrap();

    let mut area = Area::new(IVec2::new(10, 10), 5, Rgb::RED).with_sampling(Sampling::PerPixel);
    area.set_radius(0);
    area.render_into(&mut zero);
    area.set_radius(1);
    area.render_into(&mut one);

    assert_eq!(zero.as_bytes(), one.as_bytes());
    assert_eq!(zero.get(10, 10), Some(Rgb::RED));
}

#[test]
fn test_stride_one_matches_per_pixel() {
    for radius in [1u32, 7, 30] {
        let mut per_pixel = PixelBuffer::new(80, 80).unwrap();
        let mut blocks = PixelBuffer::new(80, 80).unwrap();

        let area = Area::new(IVec2::new(40, 35), radius, Rgb::new(200, 100, 50));
        area.clone().with_sampling(Sampling::PerPixel).render_into(&mut per_pixel);
        area.with_sampling(Sampling::block(1).unwrap()).render_into(&mut blocks);

        assert_eq!(per_pixel.as_bytes(), blocks.as_bytes(), "radius {}", radius);
    }
}

#[test]
fn test_blocks_tile_the_bounding_box() {
    let area = Area::new(IVec2::new(50, 50), 10, Rgb::WHITE).with_sampling(Sampling::block(4).unwrap());
    let covered: u32 = area.samples().map(|s| s.size.x * s.size.y).sum();
    assert_eq!(covered, 21 * 21);
    assert!(area.samples().all(|s| s.size.x >= 1 && s.size.x <= 4 && s.size.y <= 4));
    assert_eq!(area.samples().next().map(|s| s.size), Some(UVec2::splat(4)));
}

#[test]
fn test_fast_oscillator_renders_only_the_window() {
    let mut model = OscillatorModel::new(30.0, 0.01).unwrap();
    model.advance(0.0025);
    let mut buffer = PixelBuffer::new(800, 400).unwrap();
    let mut area = Area::new(IVec2::new(600, 200), 1, Rgb::BLUE).with_sampling(Sampling::block(4).unwrap());
    area.render_magnitude(model.current(), Rgb::BLUE, &mut buffer);

    assert_eq!(area.radius(), 18850);
    let evaluated = area.visible_samples(buffer.size()).count();
    assert!(evaluated <= 201 * 101, "{} blocks evaluated", evaluated);
    // The whole window lies well inside the disc.
    assert!(buffer.row(0).iter().all(|px| px[2] > 250));
    assert!(buffer.row(399).iter().all(|px| px[2] > 250));
}

#[test]
fn test_render_magnitude_sets_radius() {
    let mut buffer = PixelBuffer::new(100, 100).unwrap();
    let mut area = white_field();
    area.render_magnitude(-12.6, Rgb::RED, &mut buffer);
    assert_eq!(area.radius(), magnitude(-12.6));
    assert_eq!(area.radius(), 13);
    assert_eq!(buffer.get(50, 50), Some(Rgb::RED));
}

// ============================================================================
// Scenes
// ============================================================================

#[test]
fn test_headless_oscillator_full_period() {
    let render = RenderConfig::default();
    let visual = Visual::oscillator(&OscillatorConfig::new(2.0), &render).unwrap();
    let scene = Scene::new(visual, &render).unwrap();

    let scene = app::run_headless(scene, 40, None).unwrap();
    let readout = scene.readout();
    assert!((readout.primary - 30.0).abs() < 1e-9);
    assert_eq!(scene.clock().frame(), 40);

    let Visual::Oscillator(v) = scene.visual() else {
        panic!("expected oscillator");
    };
    let center = v.charge_area().center();
    assert_eq!(scene.surface().get(center.x, center.y), Some(CHARGE_COLOR));
}

#[test]
fn test_headless_snapshot_roundtrip() {
    let path = scratch_path("pendulum.png");
    let render = RenderConfig::default().with_size(320, 240);
    let config = PendulumConfig::new(2.0, 45.0)
        .with_fulcrum(IVec2::new(160, 0))
        .with_length_of_rope(200.0);
    let scene = Scene::new(Visual::pendulum(&config).unwrap(), &render).unwrap();

    let scene = app::run_headless(scene, 5, Some(&path)).unwrap();

    let image = image::open(&path).unwrap().to_rgba8();
    let _ = std::fs::remove_file(&path);
    assert_eq!(image.dimensions(), (320, 240));
    assert_eq!(image.as_raw().as_slice(), scene.surface().as_bytes());
}

#[test]
fn test_snapshot_to_missing_directory_fails() {
    let render = RenderConfig::default().with_size(16, 16);
    let visual = Visual::oscillator(&OscillatorConfig::new(1.0), &render).unwrap();
    let scene = Scene::new(visual, &render).unwrap();

    let path = scratch_path("missing").join("nested").join("frame.png");
    assert!(scene.snapshot(&path).is_err());
}
