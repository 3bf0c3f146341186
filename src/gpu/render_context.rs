use crate::error::GlideError;

fn render_error(stage: &str, e: impl std::fmt::Display) -> GlideError {
    GlideError::Render(format!("{stage}: {e}"))
}

/// Device, queue and window surface for the demo viewer.
pub struct RenderContext {
    /// Logical device.
    pub device: wgpu::Device,
    /// Command queue.
    pub queue: wgpu::Queue,
    surface: Option<wgpu::Surface<'static>>,
    config: wgpu::SurfaceConfiguration,
}

impl RenderContext {
    /// Open a surface on `window` and configure it at `size`, clamped to at
    /// least one pixel per side.
    ///
    /// # Errors
    ///
    /// Returns [`GlideError::Render`] naming the setup stage that failed.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
    ) -> Result<Self, GlideError> {
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window)
            .map_err(|e| render_error("surface", e))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                ..Default::default()
            })
            .await
            .map_err(|e| render_error("adapter", e))?;
        let info = adapter.get_info();
        log::info!("GPU adapter: {} ({:?})", info.name, info.backend);

        // A grid needs nothing beyond the WebGL2 baseline
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Glidecam Device"),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                ..Default::default()
            })
            .await
            .map_err(|e| render_error("device", e))?;

        let mut config = surface
            .get_default_config(&adapter, size.0.max(1), size.1.max(1))
            .ok_or_else(|| {
                GlideError::Render("surface unsupported by adapter".into())
            })?;
        // Glide ticks should not wait on the display refresh
        config.present_mode = wgpu::PresentMode::AutoNoVsync;
        surface.configure(&device, &config);

        Ok(Self {
            device,
            queue,
            surface: Some(surface),
            config,
        })
    }

    /// Surface texture format.
    #[must_use]
    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Resize the surface. Zero-sized requests are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        if let Some(surface) = &self.surface {
            surface.configure(&self.device, &self.config);
        }
    }

    /// Next frame to draw into. `Ok(None)` means the surface was stale and
    /// has been reconfigured, so this frame should be skipped.
    ///
    /// # Errors
    ///
    /// Returns [`GlideError::Render`] once the surface is released, or on
    /// timeouts and out-of-memory.
    pub fn acquire_frame(
        &self,
    ) -> Result<Option<wgpu::SurfaceTexture>, GlideError> {
        let Some(surface) = &self.surface else {
            return Err(GlideError::Render("surface released".into()));
        };
        match surface.get_current_texture() {
            Ok(frame) => Ok(Some(frame)),
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                log::debug!("surface stale, reconfiguring");
                surface.configure(&self.device, &self.config);
                Ok(None)
            }
            Err(e) => Err(render_error("frame", e)),
        }
    }

    /// Drop the presentation surface ahead of the device.
    pub fn release_surface(&mut self) {
        self.surface = None;
    }
}
