//! Window runner: drives a [`Scene`] at its visual's preferred tick rate and
//! presents every frame on the GPU.
//!
//! ```ignore
//! use oscillume::prelude::*;
//!
//! let render = RenderConfig::default();
//! let visual = Visual::pendulum(&PendulumConfig::new(2.0, 30.0))?;
//! let scene = Scene::new(visual, &render)?;
//! oscillume::app::run(scene, "snapshots".into())?;
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::error::AppError;
use crate::gpu::Presenter;
use crate::input::Command;
use crate::scene::Scene;
use crate::time::FrameClock;

/// Slowest and fastest time scale reachable from the keyboard.
const TIME_SCALE_LIMITS: (f64, f64) = (0.125, 8.0);

/// Open a window and animate `scene` until the window is closed.
///
/// Snapshots taken with `S` are written into `snapshot_dir`.
pub fn run(scene: Scene, snapshot_dir: PathBuf) -> Result<(), AppError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(scene, snapshot_dir);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Step `scene` for `frames` ticks without a window, then save it to `snapshot`.
pub fn run_headless(mut scene: Scene, frames: u64, snapshot: Option<&Path>) -> Result<Scene, AppError> {
    for _ in 0..frames {
        scene.step();
    }
    let readout = scene.readout();
    tracing::info!(
        visual = scene.visual().name(),
        frames,
        time = readout.time,
        primary = readout.primary,
        secondary = readout.secondary,
        "headless run finished"
    );
    if let Some(path) = snapshot {
        scene.snapshot(path)?;
    }
    Ok(scene)
}

struct App {
    scene: Scene,
    window: Option<Arc<Window>>,
    presenter: Option<Presenter>,
    frame_interval: Duration,
    next_frame: Instant,
    snapshot_dir: PathBuf,
    snapshot_count: u32,
    error: Option<AppError>,
}

impl App {
    fn new(scene: Scene, snapshot_dir: PathBuf) -> Self {
        let frame_interval = FrameClock::frame_interval(scene.visual().preferred_tick_rate());
        Self {
            scene,
            window: None,
            presenter: None,
            frame_interval,
            next_frame: Instant::now(),
            snapshot_dir,
            snapshot_count: 0,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        tracing::error!(%error, "stopping");
        self.error = Some(error);
        event_loop.exit();
    }

    fn title(&self) -> String {
        let clock = self.scene.clock();
        let state = if clock.is_paused() { " [paused]" } else { "" };
        format!(
            "{} - t = {:.2}s - x{} - {:.1} fps{}",
            self.scene.visual().name(),
            self.scene.readout().time,
            clock.time_scale(),
            clock.fps(),
            state
        )
    }

    fn handle_command(&mut self, event_loop: &ActiveEventLoop, command: Command) {
        let clock = self.scene.clock_mut();
        match command {
            Command::TogglePause => clock.toggle_pause(),
            Command::Exit => event_loop.exit(),
            Command::SpeedUp => {
                let scale = (clock.time_scale() * 2.0).min(TIME_SCALE_LIMITS.1);
                clock.set_time_scale(scale);
            }
            Command::SlowDown => {
                let scale = (clock.time_scale() / 2.0).max(TIME_SCALE_LIMITS.0);
                clock.set_time_scale(scale);
            }
            Command::Snapshot => self.snapshot(),
        }
        tracing::debug!(?command, "handled key command");
    }

    fn snapshot(&mut self) {
        if let Err(e) = std::fs::create_dir_all(&self.snapshot_dir) {
            tracing::warn!(error = %e, dir = %self.snapshot_dir.display(), "cannot create snapshot directory");
            return;
        }
        let path = self
            .snapshot_dir
            .join(format!("frame_{:04}_{:06}.png", self.snapshot_count, self.scene.clock().frame()));
        match self.scene.snapshot(&path) {
            Ok(()) => self.snapshot_count += 1,
            Err(e) => tracing::warn!(error = %e, "snapshot failed"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let surface = self.scene.surface();
        let (width, height) = (surface.width(), surface.height());
        let window_attrs = Window::default_attributes()
            .with_title(self.title())
            .with_inner_size(winit::dpi::PhysicalSize::new(width, height));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, e.into()),
        };
        self.window = Some(window.clone());

        match pollster::block_on(Presenter::new(window, width, height)) {
            Ok(presenter) => self.presenter = Some(presenter),
            Err(e) => return self.fail(event_loop, e.into()),
        }

        tracing::info!(
            visual = self.scene.visual().name(),
            tick_rate = self.scene.visual().preferred_tick_rate(),
            "window opened"
        );
        self.next_frame = Instant::now();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(presenter) = &mut self.presenter {
                    presenter.resize(physical_size);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(command) = Command::from_event(&event) {
                    self.handle_command(event_loop, command);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(presenter) = &mut self.presenter {
                    match presenter.present(self.scene.surface()) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            tracing::warn!("surface lost, reconfiguring");
                            presenter.reconfigure();
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => tracing::error!(error = ?e, "render error"),
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = self.window.clone() else {
            return;
        };

        let now = Instant::now();
        if now >= self.next_frame {
            self.scene.step();
            window.set_title(&self.title());
            window.request_redraw();

            self.next_frame += self.frame_interval;
            // Don't try to catch up after a stall.
            if self.next_frame < now {
                self.next_frame = now + self.frame_interval;
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}
