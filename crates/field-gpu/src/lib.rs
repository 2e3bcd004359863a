use field_core::{
    Camera, FrameTransform, ParticleField, ProximityGraph, Renderer, Viewport, LINE_OPACITY,
    POINT_OPACITY, POINT_WORLD_SIZE,
};
use wgpu::util::DeviceExt;

mod helpers;

pub use helpers::ADDITIVE_BLENDING;

pub static FIELD_WGSL: &str = include_str!("../shaders/field.wgsl");

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    params: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointInstance {
    pub pos: [f32; 3],
    pub scale: f32,
    pub color: [f32; 3],
    pub _pad: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub pos: [f32; 3],
    pub color: [f32; 4],
}

/// One instance per particle, in field order.
pub fn point_instances(field: &ParticleField) -> Vec<PointInstance> {
    field
        .particles()
        .iter()
        .map(|p| PointInstance {
            pos: p.position.to_array(),
            scale: p.scale,
            color: p.color,
            _pad: 0.0,
        })
        .collect()
}

/// Two vertices per edge, colored by their particle and faded by the edge alpha.
pub fn line_vertices(field: &ParticleField, graph: &ProximityGraph) -> Vec<LineVertex> {
    let mut out = Vec::with_capacity(graph.len() * 2);
    for (a, b, edge) in graph.segments(field) {
        let ca = field.particles()[edge.a].color;
        let cb = field.particles()[edge.b].color;
        out.push(LineVertex {
            pos: a.to_array(),
            color: [ca[0], ca[1], ca[2], edge.alpha],
        });
        out.push(LineVertex {
            pos: b.to_array(),
            color: [cb[0], cb[1], cb[2], edge.alpha],
        });
    }
    out
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    points_pipeline: wgpu::RenderPipeline,
    lines_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    quad_vb: wgpu::Buffer,
    instance_vb: Option<wgpu::Buffer>,
    instance_count: u32,
    line_vb: Option<wgpu::Buffer>,
    line_vertex_count: u32,
    width: u32,
    height: u32,
    hidden: bool,
}

impl GpuState {
    pub async fn new(
        instance: &wgpu::Instance,
        surface: wgpu::Surface<'static>,
        width: u32,
        height: u32,
    ) -> anyhow::Result<Self> {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = helpers::pick_surface_format(&caps.formats)
            .ok_or_else(|| anyhow::anyhow!("surface reports no texture formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: helpers::pick_alpha_mode(&caps.alpha_modes),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[gpu] surface {}x{} format={:?} alpha={:?}",
            config.width,
            config.height,
            format,
            config.alpha_mode
        );

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("field_shader"),
            source: wgpu::ShaderSource::Wgsl(FIELD_WGSL.into()),
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("field_uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        // Quad vertex buffer (two triangles)
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("field_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("field_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("field_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let point_buffers = [
            // slot 0: quad corners
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: per-particle data
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<PointInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 12,
                        shader_location: 2,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 16,
                        shader_location: 3,
                    },
                ],
            },
        ];
        let line_buffers = [wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 12,
                    shader_location: 1,
                },
            ],
        }];

        let points_pipeline = helpers::make_field_pipeline(
            &device,
            "points_pipeline",
            &pipeline_layout,
            &shader,
            ("vs_point", "fs_point"),
            &point_buffers,
            wgpu::PrimitiveTopology::TriangleList,
            format,
        );
        let lines_pipeline = helpers::make_field_pipeline(
            &device,
            "lines_pipeline",
            &pipeline_layout,
            &shader,
            ("vs_line", "fs_line"),
            &line_buffers,
            wgpu::PrimitiveTopology::LineList,
            format,
        );

        Ok(Self {
            width: config.width,
            height: config.height,
            surface,
            device,
            queue,
            config,
            points_pipeline,
            lines_pipeline,
            uniform_buffer,
            bind_group,
            quad_vb,
            instance_vb: None,
            instance_count: 0,
            line_vb: None,
            line_vertex_count: 0,
            hidden: false,
        })
    }

    pub fn upload_scene(&mut self, field: &ParticleField, graph: &ProximityGraph) {
        let instances = point_instances(field);
        self.instance_count = instances.len() as u32;
        self.instance_vb = (!instances.is_empty()).then(|| {
            self.device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("points_vb"),
                    contents: bytemuck::cast_slice(&instances),
                    usage: wgpu::BufferUsages::VERTEX,
                })
        });
        let lines = line_vertices(field, graph);
        self.line_vertex_count = lines.len() as u32;
        self.line_vb = (!lines.is_empty()).then(|| {
            self.device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("lines_vb"),
                    contents: bytemuck::cast_slice(&lines),
                    usage: wgpu::BufferUsages::VERTEX,
                })
        });
        log::info!(
            "[gpu] uploaded {} points, {} line vertices",
            self.instance_count,
            self.line_vertex_count
        );
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn draw(
        &mut self,
        frame: &FrameTransform,
        camera: &Camera,
    ) -> Result<(), wgpu::SurfaceError> {
        if self.hidden {
            return Ok(());
        }
        let surface_tex = self.surface.get_current_texture()?;
        let view = surface_tex
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                view: camera.view_matrix().to_cols_array_2d(),
                proj: camera.projection_matrix().to_cols_array_2d(),
                model: frame.model_matrix().to_cols_array_2d(),
                params: [POINT_WORLD_SIZE, POINT_OPACITY, LINE_OPACITY, frame.elapsed],
            }),
        );
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("field_encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("field_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.bind_group, &[]);
            if let Some(lines) = &self.line_vb {
                rpass.set_pipeline(&self.lines_pipeline);
                rpass.set_vertex_buffer(0, lines.slice(..));
                rpass.draw(0..self.line_vertex_count, 0..1);
            }
            if let Some(points) = &self.instance_vb {
                rpass.set_pipeline(&self.points_pipeline);
                rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
                rpass.set_vertex_buffer(1, points.slice(..));
                rpass.draw(0..6, 0..self.instance_count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        surface_tex.present();
        Ok(())
    }
}

impl Renderer for GpuState {
    fn upload(&mut self, field: &ParticleField, graph: &ProximityGraph) {
        self.upload_scene(field, graph);
    }

    fn resize(&mut self, viewport: Viewport) {
        let (w, h) = viewport.backing_size();
        self.resize_if_needed(w, h);
    }

    fn render(&mut self, frame: &FrameTransform, camera: &Camera) -> anyhow::Result<()> {
        match self.draw(frame, camera) {
            Ok(()) => Ok(()),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost/outdated; reconfiguring");
                self.surface.configure(&self.device, &self.config);
                Ok(())
            }
            Err(wgpu::SurfaceError::Timeout) => Ok(()),
            Err(e) => Err(anyhow::anyhow!("render error: {:?}", e)),
        }
    }

    fn hide(&mut self) {
        self.hidden = true;
    }
}
