use crate::core::{Camera, Instance, Shape, SurfaceStyle};
use glam::Vec3;
use web_sys as web;
use wgpu::util::DeviceExt;

mod helpers;
pub mod meshes;

// ===================== WebGPU state =====================

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    light_dir: [f32; 4],
    fog: [f32; 4],
    fog_range: [f32; 4],
    eye: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct InstanceRaw {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    // x: 1 for emissive draws
    material: [f32; 4],
}

struct MeshBuffers {
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    _depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,

    // Indexed by `Shape::index`
    meshes: Vec<MeshBuffers>,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    staging: Vec<InstanceRaw>,

    width: u32,
    height: u32,
    style: SurfaceStyle,
    pub camera: Camera,
}

const INITIAL_INSTANCE_CAPACITY: usize = 64;

impl<'a> GpuState<'a> {
    /// The surface owns its own handle to `canvas`, so the borrow ends here.
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        camera: Camera,
        style: SurfaceStyle,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
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
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = if style.is_transparent()
            && caps
                .alpha_modes
                .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
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
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_scene_pipeline(&device, &pl, &shader, format);
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let meshes = Shape::ALL
            .iter()
            .map(|&shape| {
                let data = meshes::build_mesh(shape);
                let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("mesh_vertices"),
                    contents: bytemuck::cast_slice(&data.vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                });
                MeshBuffers {
                    vertex_buffer,
                    vertex_count: data.vertices.len() as u32,
                }
            })
            .collect();
        let instance_buffer = create_instance_buffer(&device, INITIAL_INSTANCE_CAPACITY);
        let (_depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);

        let mut camera = camera;
        camera.set_viewport(width, height);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            bind_group,
            _depth_tex,
            depth_view,
            meshes,
            instance_buffer,
            instance_capacity: INITIAL_INSTANCE_CAPACITY,
            staging: Vec::with_capacity(INITIAL_INSTANCE_CAPACITY),
            width,
            height,
            style,
            camera,
        })
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
            (self._depth_tex, self.depth_view) =
                helpers::create_depth_texture(&self.device, width, height);
            self.camera.set_viewport(width, height);
        }
    }

    /// Draw `instances`, batched by shape.
    pub fn render(&mut self, instances: &[Instance]) -> Result<(), wgpu::SurfaceError> {
        let ranges = self.stage_instances(instances);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let eye: Vec3 = self.camera.eye;
        let s = &self.style;
        let uniforms = SceneUniforms {
            view_proj: self.camera.view_projection().to_cols_array_2d(),
            light_dir: [0.5, 0.8, 0.6, s.ambient],
            fog: [s.fog_color[0], s.fog_color[1], s.fog_color[2], 1.0],
            fog_range: [s.fog_near, s.fog_far, 0.0, 0.0],
            eye: [eye.x, eye.y, eye.z, 1.0],
        };
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let [r, g, b, a] = self.style.clear;
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            for (shape_idx, range) in ranges.iter().enumerate() {
                if range.is_empty() {
                    continue;
                }
                let mesh = &self.meshes[shape_idx];
                rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                rpass.draw(0..mesh.vertex_count, range.clone());
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl<'a> GpuState<'a> {
    /// Pack instances grouped by shape into the instance buffer and return
    /// the instance range per shape.
    fn stage_instances(&mut self, instances: &[Instance]) -> Vec<std::ops::Range<u32>> {
        self.staging.clear();
        let mut ranges = Vec::with_capacity(Shape::ALL.len());
        for shape in Shape::ALL {
            let start = self.staging.len() as u32;
            self.staging.extend(
                instances
                    .iter()
                    .filter(|i| i.shape == shape)
                    .map(|i| InstanceRaw {
                        model: i.model.to_cols_array_2d(),
                        color: i.color,
                        material: [if i.emissive { 1.0 } else { 0.0 }, 0.0, 0.0, 0.0],
                    }),
            );
            ranges.push(start..self.staging.len() as u32);
        }
        if self.staging.len() > self.instance_capacity {
            self.instance_capacity = self.staging.len().next_power_of_two();
            self.instance_buffer = create_instance_buffer(&self.device, self.instance_capacity);
            log::info!("[gpu] instance buffer grown to {}", self.instance_capacity);
        }
        if !self.staging.is_empty() {
            self.queue.write_buffer(
                &self.instance_buffer,
                0,
                bytemuck::cast_slice(&self.staging),
            );
        }
        ranges
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("instances"),
        size: (capacity.max(1) * std::mem::size_of::<InstanceRaw>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
