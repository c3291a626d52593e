use crate::batch::LineBatch;
use crate::gpu::LineRenderer;
use glam::DVec2;
use spincube_common::{Color, DisplayConfig};
use spincube_render::{RenderError, Surface};

/// Errors raised while bringing up the GPU surface.
#[derive(Debug, thiserror::Error)]
pub enum GpuError {
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible graphics adapter found")]
    NoAdapter,
    #[error("failed to create device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
}

/// A window-backed [`Surface`] rendering through wgpu.
///
/// `clear` and `draw_line` only touch the CPU-side batch; all GPU work
/// happens in `present`.
pub struct WgpuSurface {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: LineRenderer,
    batch: LineBatch,
    clear_color: Color,
}

impl WgpuSurface {
    /// Create a surface for `target` (typically an `Arc<winit::window::Window>`).
    ///
    /// `physical_size` is the window's current size in pixels; `display`
    /// fixes the coordinate space lines are drawn in.
    pub fn new(
        target: impl Into<wgpu::SurfaceTarget<'static>>,
        physical_size: (u32, u32),
        display: &DisplayConfig,
    ) -> Result<Self, GpuError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(target)?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or(GpuError::NoAdapter)?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("spincube_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults(),
                memory_hints: Default::default(),
            },
            None,
        ))?;

        let surface_caps = surface.get_capabilities(&adapter);
        // Non-sRGB target: 8-bit colors are written unchanged.
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or(GpuError::NoSurfaceFormat)?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let (width, height) = physical_size;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = LineRenderer::new(&device, surface_format);

        tracing::info!(
            backend = adapter.get_info().backend.to_str(),
            format = ?surface_format,
            "GPU surface initialized"
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            renderer,
            batch: LineBatch::new(display.width, display.height),
            clear_color: display.background,
        })
    }

    /// Reconfigure after the window's physical size changed.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.config.width = width.max(1);
        self.config.height = height.max(1);
        self.surface.configure(&self.device, &self.config);
        tracing::debug!(width, height, "surface resized");
    }

    /// Lines queued for the next `present`.
    pub fn pending_lines(&self) -> usize {
        self.batch.line_count()
    }
}

impl Surface for WgpuSurface {
    fn size(&self) -> (u32, u32) {
        self.batch.size()
    }

    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.batch.clear();
    }

    fn draw_line(&mut self, start: DVec2, end: DVec2, color: Color) {
        self.batch.push(start, end, color);
    }

    fn present(&mut self) -> Result<(), RenderError> {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("surface lost or outdated; reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                tracing::warn!("timed out acquiring frame; dropping it");
                return Ok(());
            }
            Err(e) => return Err(RenderError::Backend(e.to_string())),
        };

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.renderer.render(
            &self.device,
            &self.queue,
            &view,
            self.clear_color,
            self.batch.vertices(),
        );
        frame.present();
        Ok(())
    }
}
