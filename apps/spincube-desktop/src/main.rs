use anyhow::Result;
use clap::Parser;
use spincube_common::AppConfig;
use spincube_cube::{Cube, cube_from_config, render_frame};
use spincube_render_wgpu::WgpuSurface;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "spincube-desktop", about = "Spinning wireframe cube")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Window, GPU surface and the cube they show.
struct CubeApp {
    config: AppConfig,
    cube: Cube,
    window: Option<Arc<Window>>,
    surface: Option<WgpuSurface>,
    frames: u64,
    /// First fatal error; returned from `main` once the loop exits.
    error: Option<anyhow::Error>,
}

impl CubeApp {
    fn new(config: AppConfig) -> Self {
        let cube = cube_from_config(&config);
        Self {
            config,
            cube,
            window: None,
            surface: None,
            frames: 0,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        tracing::error!("{error:#}");
        if self.error.is_none() {
            self.error = Some(error);
        }
        event_loop.exit();
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let display = &self.config.display;
        let attrs = Window::default_attributes()
            .with_title(display.title.as_str())
            .with_inner_size(PhysicalSize::new(display.width, display.height))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attrs)?);

        let size = window.inner_size();
        let surface = WgpuSurface::new(window.clone(), (size.width, size.height), display)?;

        self.window = Some(window);
        self.surface = Some(surface);
        Ok(())
    }
}

impl ApplicationHandler for CubeApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            self.fail(event_loop, e.context("failed to open display"));
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(surface) = &mut self.surface {
                    surface.resize(new_size.width, new_size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                let Some(surface) = &mut self.surface else {
                    return;
                };
                if let Err(e) = render_frame(&mut self.cube, surface, &self.config) {
                    self.fail(event_loop, e.into());
                    return;
                }
                self.frames += 1;
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("spincube-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = CubeApp::new(AppConfig::default());
    event_loop.run_app(&mut app)?;

    tracing::info!(
        frames = app.frames,
        angle = app.cube.angle(),
        "spincube-desktop exiting"
    );

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
