use std::borrow::Cow;
use std::mem;

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;
use wgpu::{
    BindGroup, BindGroupLayoutDescriptor, BindGroupLayoutEntry, BindingType, Buffer,
    BufferBindingType, BufferUsages, PipelineLayoutDescriptor, RenderPipeline, ShaderSource,
    ShaderStages, VertexAttribute, VertexBufferLayout,
};

use crate::error::SetupError;
use crate::shader;
use crate::Context;

mod polygon;
use polygon::{Vertex, INDICES, VERTICES};

pub const SHADER_SOURCE: &str = include_str!("trophy/trophy.wgsl");

/// Which fragment variant the pipeline is built with.
///
/// The shader module carries both fragment entry points; the choice between
/// them is made once, at pipeline creation. Exactly one is ever active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Grayscale,
    RedTint,
}

impl ColorMode {
    pub fn fragment_entry_point(self) -> &'static str {
        match self {
            ColorMode::Grayscale => "fs_white",
            ColorMode::RedTint => "fs_red",
        }
    }
}

/// `tan(t) / 0.5`, the pulse driving both color uniforms. Pure function of
/// elapsed time; unbounded on purpose, values outside [0, 1] clamp in the
/// framebuffer and give the trophy its flickering look.
pub fn pulse_value(elapsed_secs: f32) -> f32 {
    elapsed_secs.tan() / 0.5
}

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct TrophyUniforms {
    white_color: [f32; 4],
    red_color: [f32; 4],
}

impl TrophyUniforms {
    fn at(elapsed_secs: f32) -> Self {
        let value = pulse_value(elapsed_secs);
        TrophyUniforms {
            white_color: [value, value, value, 1.0],
            red_color: [value, 0.0, 0.0, 1.0],
        }
    }
}

pub struct Trophy {
    pub index_buffer: Buffer,
    pub vertex_buffer: Buffer,
    pub uniform_buffer: Buffer,
    pub bind_group: BindGroup,
    pub render_pipeline: RenderPipeline,
    pub index_count: u32,
}

impl Trophy {
    pub fn new(ctx: &Context, mode: ColorMode) -> Result<Self, SetupError> {
        let module = shader::compile(SHADER_SOURCE)?;
        shader::verify_entry_points(&module, "vs_main", mode.fragment_entry_point())?;

        let shader_module = ctx
            .device
            .create_shader_module(&wgpu::ShaderModuleDescriptor {
                label: Some("trophy/trophy.wgsl"),
                source: ShaderSource::Wgsl(Cow::Borrowed(SHADER_SOURCE)),
            });

        let vertex_buffer = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Vertex Buffer"),
                contents: bytemuck::cast_slice(VERTICES),
                usage: BufferUsages::VERTEX,
            });

        let index_buffer = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Index Buffer"),
                contents: bytemuck::cast_slice(INDICES),
                usage: BufferUsages::INDEX,
            });

        let uniform_buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Uniform Buffer"),
            usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
            size: mem::size_of::<TrophyUniforms>() as u64,
            mapped_at_creation: false,
        });
        ctx.queue
            .write_buffer(&uniform_buffer, 0, bytemuck::bytes_of(&TrophyUniforms::at(0.0)));

        let bind_group_layout = ctx
            .device
            .create_bind_group_layout(&BindGroupLayoutDescriptor {
                label: None,
                entries: &[BindGroupLayoutEntry {
                    binding: 0,
                    visibility: ShaderStages::FRAGMENT,
                    ty: BindingType::Buffer {
                        ty: BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(
                            mem::size_of::<TrophyUniforms>() as u64
                        ),
                    },
                    count: None,
                }],
            });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
            label: None,
        });

        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&PipelineLayoutDescriptor {
                label: None,
                bind_group_layouts: &[&bind_group_layout],
                push_constant_ranges: &[],
            });

        let render_pipeline = ctx
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: None,
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader_module,
                    entry_point: "vs_main",
                    buffers: &[Self::vertex_buffer_layout()],
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader_module,
                    entry_point: mode.fragment_entry_point(),
                    targets: &[ctx.surface_config.format.into()],
                }),
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
            });

        log::info!(
            "trophy pipeline built ({} vertices, {} triangles, {:?})",
            VERTICES.len(),
            INDICES.len() / 3,
            mode
        );

        Ok(Self {
            index_buffer,
            vertex_buffer,
            uniform_buffer,
            bind_group,
            render_pipeline,
            index_count: INDICES.len() as u32,
        })
    }

    /// One tightly packed position attribute at location 0.
    fn vertex_buffer_layout() -> VertexBufferLayout<'static> {
        VertexBufferLayout {
            array_stride: mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            }],
        }
    }

    /// Writes both per-frame color uniforms. Only the one read by the entry
    /// point chosen at creation has a visible effect; the other is inert.
    pub fn update(&self, queue: &wgpu::Queue, elapsed_secs: f32) {
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&TrophyUniforms::at(elapsed_secs)),
        );
    }

    pub fn draw<'a>(&'a self, rpass: &mut wgpu::RenderPass<'a>) {
        rpass.set_pipeline(&self.render_pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_value_is_deterministic() {
        for t in [0.0_f32, 0.25, 1.0, 7.3, 1234.5] {
            assert_eq!(pulse_value(t).to_bits(), pulse_value(t).to_bits());
        }
    }

    #[test]
    fn pulse_value_doubles_the_tangent() {
        let t = 0.7_f32;
        assert_eq!(pulse_value(t), t.tan() / 0.5);
    }

    #[test]
    fn grayscale_uniform_has_equal_channels() {
        let u = TrophyUniforms::at(0.3);
        let [r, g, b, a] = u.white_color;
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert_eq!(a, 1.0);
    }

    #[test]
    fn red_uniform_only_carries_red() {
        let u = TrophyUniforms::at(0.3);
        let [r, g, b, a] = u.red_color;
        assert_eq!(r, pulse_value(0.3));
        assert_eq!(g, 0.0);
        assert_eq!(b, 0.0);
        assert_eq!(a, 1.0);
    }

    #[test]
    fn vertex_layout_has_no_gaps() {
        let layout = Trophy::vertex_buffer_layout();
        assert_eq!(layout.array_stride, 12);
        assert_eq!(layout.attributes.len(), 1);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[0].shader_location, 0);
        assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x3);
    }

    #[test]
    fn fragment_entry_points_are_distinct() {
        assert_ne!(
            ColorMode::Grayscale.fragment_entry_point(),
            ColorMode::RedTint.fragment_entry_point()
        );
    }
}
