//! World-space grid renderer used by the demo viewer.
//!
//! Clears to the display background and draws grid lines through the
//! camera's inverse view-projection, so panning and zooming are visible
//! without any scene data.

use wgpu::util::DeviceExt;

use crate::camera::{Camera2d, CameraUniform};
use crate::error::GlideError;
use crate::gpu::render_context::RenderContext;
use crate::host::Renderer;
use crate::options::DisplayOptions;

/// Grid lines closer than this on screen are thinned out by 10x.
const MIN_LINE_GAP_PX: f32 = 8.0;
/// Line half-width in screen pixels.
const LINE_WIDTH_PX: f32 = 1.0;

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct GridUniform {
    color: [f32; 4],
    spacing: f32,
    line_width: f32,
    _pad: [f32; 2],
}

/// Smallest `base * 10^k` (k ≥ 0) whose lines are at least 8 screen
/// pixels apart at the given pixel size.
#[must_use]
pub fn adaptive_spacing(base: f32, pixel_size: f32) -> f32 {
    let mut spacing = base;
    // Bounded so a degenerate pixel size cannot spin forever
    for _ in 0..32 {
        if spacing / pixel_size >= MIN_LINE_GAP_PX {
            break;
        }
        spacing *= 10.0;
    }
    spacing
}

/// Draws a world-space grid on the window surface.
pub struct GridRenderer {
    context: RenderContext,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    camera_buffer: wgpu::Buffer,
    grid_buffer: wgpu::Buffer,
    uniform: CameraUniform,
    display: DisplayOptions,
    destroyed: bool,
}

impl GridRenderer {
    /// Build the grid pipeline on `context`.
    #[must_use]
    pub fn new(context: RenderContext, display: &DisplayOptions) -> Self {
        let uniform = CameraUniform::new();
        let camera_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );
        let grid = GridUniform {
            color: display.grid_color,
            spacing: display.grid_spacing,
            line_width: LINE_WIDTH_PX,
            _pad: [0.0; 2],
        };
        let grid_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Grid Buffer"),
                contents: bytemuck::cast_slice(&[grid]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let uniform_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        };
        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Grid Bind Group Layout"),
                entries: &[uniform_entry(0), uniform_entry(1)],
            },
        );
        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("Grid Bind Group"),
                    layout: &layout,
                    entries: &[
                        wgpu::BindGroupEntry {
                            binding: 0,
                            resource: camera_buffer.as_entire_binding(),
                        },
                        wgpu::BindGroupEntry {
                            binding: 1,
                            resource: grid_buffer.as_entire_binding(),
                        },
                    ],
                });

        let shader = context.device.create_shader_module(wgpu::include_wgsl!(
            "../../assets/shaders/grid.wgsl"
        ));
        let pipeline_layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Grid Pipeline Layout"),
                bind_group_layouts: &[&layout],
                push_constant_ranges: &[],
            },
        );
        let pipeline = context.device.create_render_pipeline(
            &wgpu::RenderPipelineDescriptor {
                label: Some("Grid Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.format(),
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            },
        );

        Self {
            context,
            pipeline,
            bind_group,
            camera_buffer,
            grid_buffer,
            uniform,
            display: display.clone(),
            destroyed: false,
        }
    }

    fn upload(&mut self, camera: &Camera2d) {
        self.uniform.update_view_proj(camera);
        self.context.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[self.uniform]),
        );
        let grid = GridUniform {
            color: self.display.grid_color,
            spacing: adaptive_spacing(
                self.display.grid_spacing,
                camera.pixel_size(),
            ),
            line_width: LINE_WIDTH_PX,
            _pad: [0.0; 2],
        };
        self.context.queue.write_buffer(
            &self.grid_buffer,
            0,
            bytemuck::cast_slice(&[grid]),
        );
    }

    fn clear_color(&self) -> wgpu::Color {
        let [r, g, b, a] = self.display.clear_color;
        wgpu::Color {
            r: f64::from(r),
            g: f64::from(g),
            b: f64::from(b),
            a: f64::from(a),
        }
    }
}

impl Renderer for GridRenderer {
    fn init(&mut self, camera: &Camera2d) -> Result<(), GlideError> {
        self.upload(camera);
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
    }

    fn draw(&mut self, camera: &Camera2d) -> Result<(), GlideError> {
        if self.destroyed {
            return Err(GlideError::Render("renderer already destroyed".into()));
        }
        self.upload(camera);

        let Some(frame) = self.context.acquire_frame()? else {
            return Ok(());
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.context.device.create_command_encoder(
            &wgpu::CommandEncoderDescriptor {
                label: Some("Grid Encoder"),
            },
        );
        {
            let mut pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Grid Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(self.clear_color()),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        },
                    )],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });
            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.bind_group, &[]);
            pass.draw(0..3, 0..1);
        }
        let _ = self.context.queue.submit([encoder.finish()]);
        frame.present();
        Ok(())
    }

    fn destroy(&mut self) -> Result<(), GlideError> {
        if self.destroyed {
            return Ok(());
        }
        self.camera_buffer.destroy();
        self.grid_buffer.destroy();
        self.context.release_surface();
        self.destroyed = true;
        log::debug!("grid renderer resources released");
        Ok(())
    }
}
