use winit::dpi::PhysicalSize;

use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use wgpu::util;
use wgpu::{
    Adapter, Backends, Device, DeviceDescriptor, Features, Instance, Limits, PresentMode, Queue,
    Surface, SurfaceConfiguration, TextureUsages,
};

use crate::error::SetupError;

pub const WINDOW_TITLE: &str = "trophy";
pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;

pub struct Context {
    pub window: Window,
    pub adapter: Adapter,
    pub surface_config: SurfaceConfiguration,
    pub instance: Instance,
    pub device: Device,
    pub queue: Queue,
    pub size: PhysicalSize<u32>,
    pub surface: Surface,
}

impl Context {
    pub async fn create_context() -> Result<(Context, EventLoop<()>), SetupError> {
        let event_loop = EventLoop::new();
        let window = WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .build(&event_loop)?;

        #[cfg(target_os = "macos")]
        let backends = Backends::METAL;
        #[cfg(not(target_os = "macos"))]
        let backends = Backends::VULKAN;

        let instance = Instance::new(backends);
        let size = window.inner_size();
        let surface = unsafe { instance.create_surface(&window) };

        let adapter =
            util::initialize_adapter_from_env_or_default(&instance, backends, Some(&surface))
                .await
                .ok_or_else(|| {
                    SetupError::GraphicsLoaderFailed(
                        "no suitable GPU adapter found on the system".to_string(),
                    )
                })?;
        log::info!("using adapter: {}", adapter.get_info().name);

        let needed_limits = Limits::downlevel_webgl2_defaults().using_resolution(adapter.limits());

        let (device, queue) = adapter
            .request_device(
                &DeviceDescriptor {
                    label: None,
                    features: Features::empty(),
                    limits: needed_limits,
                },
                None,
            )
            .await
            .map_err(|err| SetupError::GraphicsLoaderFailed(err.to_string()))?;

        let format = surface.get_preferred_format(&adapter).ok_or_else(|| {
            SetupError::GraphicsLoaderFailed("surface is incompatible with adapter".to_string())
        })?;

        let surface_config = SurfaceConfiguration {
            usage: TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: PresentMode::Mailbox,
        };

        surface.configure(&device, &surface_config);

        Ok((
            Context {
                surface_config,
                window,
                device,
                queue,
                instance,
                adapter,
                size,
                surface,
            },
            event_loop,
        ))
    }

    /// Viewport sync: follow the window's new client size. Zero-sized updates
    /// (minimized window) are ignored; the surface cannot be configured to
    /// an empty extent.
    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        self.size = size;
        self.surface_config.width = size.width;
        self.surface_config.height = size.height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn recreate_surface(&mut self) {
        self.surface.configure(&self.device, &self.surface_config);
    }
}

/// The viewport covering a client area of the given size.
pub fn viewport_rect(size: PhysicalSize<u32>) -> (f32, f32, f32, f32) {
    (0.0, 0.0, size.width as f32, size.height as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_matches_window_size() {
        let size = PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT);
        assert_eq!(viewport_rect(size), (0.0, 0.0, 800.0, 600.0));
    }

    #[test]
    fn viewport_is_idempotent() {
        let size = PhysicalSize::new(1920, 1080);
        assert_eq!(viewport_rect(size), viewport_rect(size));
    }
}
