use crate::constants::{CLEAR_COLOR, DEPTH_FORMAT};
use crate::core::{unit_box, unit_cylinder, Camera, PartRegistry, Primitive, CYLINDER_SEGMENTS};
use bytemuck::Zeroable;
use web_sys as web;

mod helpers;
mod scene;

use helpers::GpuMesh;
use scene::{create_scene_resources, CameraUniforms, InstanceRaw, SceneResources};

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    scene: SceneResources,
    box_mesh: GpuMesh,
    cylinder_mesh: GpuMesh,
    _depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,
    instances: Vec<InstanceRaw>,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    /// `part_count` sizes the instance buffer; the registry is fixed after startup.
    pub async fn new(canvas: &web::HtmlCanvasElement, part_count: usize) -> anyhow::Result<Self> {
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
            .ok_or_else(|| anyhow::anyhow!("surface reports no texture formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
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

        let (depth_tex, depth_view) =
            helpers::create_depth_texture(&device, width, height, DEPTH_FORMAT);
        let scene = create_scene_resources(&device, format, DEPTH_FORMAT, part_count);
        let box_mesh = helpers::upload_mesh(&device, "box_mesh", &unit_box());
        let cylinder_mesh =
            helpers::upload_mesh(&device, "cylinder_mesh", &unit_cylinder(CYLINDER_SEGMENTS));

        Ok(Self {
            surface,
            device,
            queue,
            config,
            instances: Vec::with_capacity(scene.instance_capacity),
            scene,
            box_mesh,
            cylinder_mesh,
            _depth_tex: depth_tex,
            depth_view,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        (self._depth_tex, self.depth_view) =
            helpers::create_depth_texture(&self.device, self.width, self.height, DEPTH_FORMAT);
    }

    /// Draw every part at its current color and scale. A lost or outdated surface is
    /// reconfigured and the frame skipped.
    pub fn render(&mut self, camera: &Camera, registry: &PartRegistry) -> Result<(), wgpu::SurfaceError> {
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.reconfigure();
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let cam = CameraUniforms {
            view_proj: camera.view_projection().to_cols_array_2d(),
            eye: camera.eye.extend(1.0).to_array(),
        };
        self.queue
            .write_buffer(&self.scene.camera_buffer, 0, bytemuck::bytes_of(&cam));

        self.instances.clear();
        self.instances
            .resize(registry.len().min(self.scene.instance_capacity), InstanceRaw::zeroed());
        for (_, part) in registry.iter() {
            if let Some(slot) = self.instances.get_mut(part.handle.0 as usize) {
                *slot = InstanceRaw {
                    model: part.model_matrix().to_cols_array_2d(),
                    color: [part.color[0], part.color[1], part.color[2], 1.0],
                };
            }
        }
        self.queue.write_buffer(
            &self.scene.instance_buffer,
            0,
            bytemuck::cast_slice(&self.instances),
        );

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
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
            rpass.set_pipeline(&self.scene.pipeline);
            rpass.set_bind_group(0, &self.scene.camera_bind_group, &[]);
            rpass.set_vertex_buffer(1, self.scene.instance_buffer.slice(..));
            for (_, part) in registry.iter() {
                let slot = part.handle.0;
                if slot as usize >= self.instances.len() {
                    continue;
                }
                let mesh = match part.primitive {
                    Primitive::Box { .. } => &self.box_mesh,
                    Primitive::Cylinder { .. } => &self.cylinder_mesh,
                };
                rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                rpass.draw_indexed(0..mesh.index_count, 0, slot..slot + 1);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
