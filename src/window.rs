//! Native window host.
//!
//! Opens a winit window, mounts the [`Stage`] at the window's size, routes
//! pointer, wheel and resize events into it, and presents one rendered
//! frame per redraw through the GPU blit.

use std::sync::Arc;
use std::time::Instant;

use glam::Vec2;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::error::HostError;
use crate::gpu::GpuState;
use crate::input::wheel_pixels;
use crate::raster::PixelCanvas;
use crate::simulation::Stage;

/// Run `stage` in a new window until it is closed.
pub(crate) fn run(stage: Stage) -> Result<(), HostError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(stage);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

struct App {
    stage: Stage,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    canvas: PixelCanvas,
    mounted_at: Instant,
    error: Option<HostError>,
}

impl App {
    fn new(stage: Stage) -> Self {
        Self {
            stage,
            window: None,
            gpu_state: None,
            canvas: PixelCanvas::new(0, 0),
            mounted_at: Instant::now(),
            error: None,
        }
    }

    fn open(&mut self, event_loop: &ActiveEventLoop) -> Result<(), HostError> {
        let window_config = &self.stage.config().window;
        let window_attrs = Window::default_attributes()
            .with_title(window_config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                window_config.width,
                window_config.height,
            ));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let gpu_state = pollster::block_on(GpuState::new(window.clone()))?;

        let size = window.inner_size();
        self.canvas = PixelCanvas::new(size.width, size.height);
        self.mounted_at = Instant::now();
        self.stage
            .mount(Vec2::new(size.width as f32, size.height as f32), self.mounted_at.elapsed());

        log::info!("window opened at {}x{}", size.width, size.height);

        self.window = Some(window);
        self.gpu_state = Some(gpu_state);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = self.mounted_at.elapsed();
        self.stage.frame(now, Some(&mut self.canvas));

        if let Some(gpu_state) = &mut self.gpu_state {
            match gpu_state.render(&self.canvas) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("surface lost, reconfiguring");
                    gpu_state.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("GPU out of memory, exiting");
                    self.stage.unmount();
                    event_loop.exit();
                }
                Err(e) => log::warn!("render error: {:?}", e),
            }
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(err) = self.open(event_loop) {
                log::error!("failed to start: {err}");
                self.error = Some(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.stage.unmount();
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
                if physical_size.width > 0 && physical_size.height > 0 {
                    self.canvas.resize(physical_size.width, physical_size.height);
                    self.stage.resized(Vec2::new(
                        physical_size.width as f32,
                        physical_size.height as f32,
                    ));
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let now = self.mounted_at.elapsed();
                self.stage
                    .pointer_moved(Vec2::new(position.x as f32, position.y as f32), now);
            }
            WindowEvent::CursorLeft { .. } => {
                self.stage.pointer_left();
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.stage.scroll_by(wheel_pixels(&delta));
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}
