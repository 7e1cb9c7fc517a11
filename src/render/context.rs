//! wgpu Context
//!
//! The [`WgpuContext`] holds core GPU handles: device, queue, surface, and
//! config. It is responsible for window surface management, resize
//! handling, and frame submission.

use raw_window_handle::{HasDisplayHandle, HasWindowHandle};

use super::{DEPTH_FORMAT, LetterPass};
use crate::config::IntroConfig;
use crate::errors::{IntroError, Result};

/// Core wgpu context holding GPU handles.
///
/// This struct owns the fundamental wgpu resources needed for rendering:
/// - `device`: GPU device for resource creation
/// - `queue`: Command submission queue
/// - `surface`: Window surface for presentation
/// - `config`: Surface configuration (format, present mode, etc.)
///
/// It also manages the depth buffer texture which is recreated on resize.
pub struct WgpuContext {
    /// The wgpu device for GPU operations
    pub device: wgpu::Device,
    /// The command queue for submitting work
    pub queue: wgpu::Queue,
    /// The window surface for presentation
    pub surface: wgpu::Surface<'static>,
    /// Surface configuration
    pub config: wgpu::SurfaceConfiguration,

    /// Depth buffer texture view (recreated on resize)
    pub depth_texture_view: wgpu::TextureView,
    /// Clear color for the frame
    pub clear_color: wgpu::Color,
}

impl WgpuContext {
    pub async fn new<W>(window: W, intro: &IntroConfig, width: u32, height: u32) -> Result<Self>
    where
        W: HasWindowHandle + HasDisplayHandle + Send + Sync + 'static,
    {
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window)
            .map_err(|e| IntroError::AdapterRequestFailed(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: intro.power_preference,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| IntroError::AdapterRequestFailed(e.to_string()))?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: None,
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::Performance,
                ..Default::default()
            })
            .await?;

        let mut config = surface
            .get_default_config(&adapter, width, height)
            .ok_or_else(|| {
                IntroError::AdapterRequestFailed("Surface not supported by adapter".to_string())
            })?;

        config.present_mode = if intro.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        };
        surface.configure(&device, &config);

        let depth_texture_view = Self::create_depth_texture(&device, &config);

        Ok(Self {
            device,
            queue,
            surface,
            config,
            depth_texture_view,
            clear_color: intro.clear_color,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth_texture_view = Self::create_depth_texture(&self.device, &self.config);
        }
    }

    fn create_depth_texture(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
    ) -> wgpu::TextureView {
        let size = wgpu::Extent3d {
            width: config.width,
            height: config.height,
            depth_or_array_layers: 1,
        };
        let desc = wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        };
        let texture = device.create_texture(&desc);
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    /// Returns the surface color format.
    #[must_use]
    pub fn color_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Returns the current surface dimensions.
    #[inline]
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// Renders one frame of the letter pass and presents it.
    pub fn render_frame(&mut self, letters: &LetterPass) {
        let output = match self.surface.get_current_texture() {
            wgpu::CurrentSurfaceTexture::Success(output)
            | wgpu::CurrentSurfaceTexture::Suboptimal(output) => output,
            // Reconfigured by the next resize event.
            wgpu::CurrentSurfaceTexture::Lost | wgpu::CurrentSurfaceTexture::Outdated => return,
            other => {
                log::error!("Surface error: {other:?}");
                return;
            }
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Intro Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Letter Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            letters.draw(&mut pass);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}
