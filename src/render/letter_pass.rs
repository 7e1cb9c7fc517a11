//! Letter Render Pass
//!
//! One pipeline draws every letter. Per-letter model matrices live in a
//! single uniform buffer addressed with dynamic offsets (one 256-byte
//! aligned slot per letter); the globals (view-projection, tint, overlay
//! opacity) sit in bind group 0 and are rewritten each frame.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec4};

use crate::geometry::Vertex;
use crate::scene::{OverlayCamera, Scene};

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct GlobalUniforms {
    view_proj: [[f32; 4]; 4],
    tint: [f32; 4],
    opacity: f32,
    _pad: [f32; 3],
}

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct LetterUniforms {
    model: [[f32; 4]; 4],
}

/// GPU buffers for one letter. `None` for blank glyphs (the space), which
/// keep their slot so uniform offsets stay index-aligned with the scene.
struct GpuLetter {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

pub struct LetterPass {
    pipeline: wgpu::RenderPipeline,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    letter_layout: wgpu::BindGroupLayout,
    letter_buffer: Option<wgpu::Buffer>,
    letter_bind_group: Option<wgpu::BindGroup>,
    uniform_stride: u32,
    letters: Vec<Option<GpuLetter>>,
    tint: [f32; 4],
}

impl LetterPass {
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
        tint: Vec4,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Letter Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("letter.wgsl").into()),
        });

        let globals_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Letter Globals BGL"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<GlobalUniforms>() as u64
                    ),
                },
                count: None,
            }],
        });

        let letter_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Letter Model BGL"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<LetterUniforms>() as u64
                    ),
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Letter Pipeline Layout"),
            bind_group_layouts: &[Some(&globals_layout), Some(&letter_layout)],
            immediate_size: 0,
        });

        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: 12,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        };

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Letter Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[vertex_layout],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: color_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: Some(wgpu::DepthStencilState {
                format: depth_format,
                depth_write_enabled: Some(true),
                depth_compare: Some(wgpu::CompareFunction::Less),
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Letter Globals"),
            size: std::mem::size_of::<GlobalUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Letter Globals BG"),
            layout: &globals_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let align = device.limits().min_uniform_buffer_offset_alignment;
        let uniform_stride = (std::mem::size_of::<LetterUniforms>() as u32).div_ceil(align) * align;

        Self {
            pipeline,
            globals_buffer,
            globals_bind_group,
            letter_layout,
            letter_buffer: None,
            letter_bind_group: None,
            uniform_stride,
            letters: Vec::new(),
            tint: tint.to_array(),
        }
    }

    /// Uploads the scene's letter meshes. Called once, when the font has
    /// arrived and the letters exist.
    pub fn upload_letters(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, scene: &Scene) {
        self.letters.clear();

        for letter in &scene.letters {
            if letter.mesh.is_empty() {
                self.letters.push(None);
                continue;
            }

            let vertex_bytes: &[u8] = bytemuck::cast_slice(&letter.mesh.vertices);
            let index_bytes: &[u8] = bytemuck::cast_slice(&letter.mesh.indices);

            let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Letter VB"),
                size: vertex_bytes.len() as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let index_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Letter IB"),
                size: index_bytes.len() as u64,
                usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            queue.write_buffer(&vertex_buffer, 0, vertex_bytes);
            queue.write_buffer(&index_buffer, 0, index_bytes);

            self.letters.push(Some(GpuLetter {
                vertex_buffer,
                index_buffer,
                index_count: letter.mesh.index_count() as u32,
            }));
        }

        let slots = scene.letters.len().max(1) as u64;
        let letter_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Letter Models"),
            size: u64::from(self.uniform_stride) * slots,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let letter_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Letter Models BG"),
            layout: &self.letter_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &letter_buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(std::mem::size_of::<LetterUniforms>() as u64),
                }),
            }],
        });

        self.letter_buffer = Some(letter_buffer);
        self.letter_bind_group = Some(letter_bind_group);
    }

    /// Writes this frame's uniforms: camera, overlay opacity, and one model
    /// matrix per letter.
    pub fn prepare(&self, queue: &wgpu::Queue, camera: &OverlayCamera, scene: &Scene) {
        let globals = GlobalUniforms {
            view_proj: camera.view_projection_matrix().to_cols_array_2d(),
            tint: self.tint,
            opacity: scene.overlay_opacity,
            _pad: [0.0; 3],
        };
        queue.write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        let Some(buffer) = &self.letter_buffer else {
            return;
        };
        for (i, letter) in scene.letters.iter().enumerate() {
            let uniforms = LetterUniforms {
                model: Mat4::from_translation(letter.position).to_cols_array_2d(),
            };
            queue.write_buffer(
                buffer,
                u64::from(self.uniform_stride) * i as u64,
                bytemuck::bytes_of(&uniforms),
            );
        }
    }

    /// Records the draw calls for every letter.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        let Some(bind_group) = &self.letter_bind_group else {
            return;
        };

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.globals_bind_group, &[]);

        for (i, gpu) in self.letters.iter().enumerate() {
            let Some(gpu) = gpu else { continue };
            pass.set_bind_group(1, bind_group, &[self.uniform_stride * i as u32]);
            pass.set_vertex_buffer(0, gpu.vertex_buffer.slice(..));
            pass.set_index_buffer(gpu.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            pass.draw_indexed(0..gpu.index_count, 0, 0..1);
        }
    }
}
