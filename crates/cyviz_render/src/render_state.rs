//! GPU-side resources for the current mesh and surface size
//!
//! Mesh buffers and the depth target are replaced, never patched. Every
//! replacement goes through a [`ResourceSlot`], which destroys the previous
//! resource before the new one is installed, so nothing is left for the
//! allocator to reclaim later.

use cyviz_core::{Geometry, MeshParams};
use wgpu::util::DeviceExt;

use crate::pipeline::{
    ManifoldPipeline, ManifoldUniforms, ManifoldVertex, StarfieldPipeline, StarfieldUniforms,
    DEPTH_FORMAT,
};

/// A GPU resource that must be destroyed explicitly
pub trait GpuResource {
    fn release(&self);
}

/// Holds at most one live resource of a kind
#[derive(Debug)]
pub struct ResourceSlot<T: GpuResource> {
    current: Option<T>,
}

impl<T: GpuResource> Default for ResourceSlot<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T: GpuResource> ResourceSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Release the current resource, then install `next`
    pub fn replace(&mut self, next: T) -> &T {
        if let Some(old) = self.current.take() {
            old.release();
        }
        self.current.insert(next)
    }

    /// Release the current resource, leaving the slot empty
    pub fn clear(&mut self) {
        if let Some(old) = self.current.take() {
            old.release();
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.current.as_ref()
    }
}

/// Interleave positions and normals into the 24-byte vertex layout
pub fn interleave(geometry: &Geometry) -> Vec<ManifoldVertex> {
    geometry
        .positions()
        .iter()
        .zip(geometry.normals())
        .map(|(&position, &normal)| ManifoldVertex::new(position, normal))
        .collect()
}

/// Uploaded vertex and index buffers for one mesh
pub struct MeshBuffers {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
    pub vertex_count: u32,
    /// Inputs the mesh was built from
    pub params: MeshParams,
}

impl MeshBuffers {
    pub fn upload(device: &wgpu::Device, geometry: &Geometry, params: MeshParams) -> Self {
        let vertices = interleave(geometry);

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Manifold Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Manifold Index Buffer"),
            contents: bytemuck::cast_slice(geometry.indices()),
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: geometry.index_count() as u32,
            vertex_count: geometry.vertex_count() as u32,
            params,
        }
    }

    pub fn triangle_count(&self) -> u32 {
        self.index_count / 3
    }
}

impl GpuResource for MeshBuffers {
    fn release(&self) {
        self.vertex_buffer.destroy();
        self.index_buffer.destroy();
    }
}

/// Depth texture sized to the surface
pub struct DepthTarget {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    size: (u32, u32),
}

impl DepthTarget {
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let size = (width.max(1), height.max(1));
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: size.0,
                height: size.1,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self { texture, view, size }
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }
}

impl GpuResource for DepthTarget {
    fn release(&self) {
        self.texture.destroy();
    }
}

/// Everything needed to draw a frame: both pipelines, the mesh and the depth target
pub struct RenderState {
    manifold: ManifoldPipeline,
    starfield: StarfieldPipeline,
    mesh: ResourceSlot<MeshBuffers>,
    depth: ResourceSlot<DepthTarget>,
}

impl RenderState {
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        Self {
            manifold: ManifoldPipeline::new(device, surface_format),
            starfield: StarfieldPipeline::new(device, surface_format),
            mesh: ResourceSlot::new(),
            depth: ResourceSlot::new(),
        }
    }

    /// Upload `geometry`, destroying the previously installed buffers first
    pub fn install_mesh(
        &mut self,
        device: &wgpu::Device,
        geometry: &Geometry,
        params: MeshParams,
    ) -> &MeshBuffers {
        self.mesh.clear();
        self.mesh.replace(MeshBuffers::upload(device, geometry, params))
    }

    /// Parameters of the installed mesh, if any
    pub fn installed_params(&self) -> Option<&MeshParams> {
        self.mesh.get().map(|m| &m.params)
    }

    pub fn mesh(&self) -> Option<&MeshBuffers> {
        self.mesh.get()
    }

    /// Recreate the depth target if the size changed. Returns true when recreated.
    pub fn ensure_depth(&mut self, device: &wgpu::Device, width: u32, height: u32) -> bool {
        let wanted = (width.max(1), height.max(1));
        if self.depth.get().map(|d| d.size()) == Some(wanted) {
            return false;
        }
        self.depth.clear();
        self.depth.replace(DepthTarget::new(device, wanted.0, wanted.1));
        log::debug!("Depth target recreated at {}x{}", wanted.0, wanted.1);
        true
    }

    pub fn update_uniforms(
        &self,
        queue: &wgpu::Queue,
        manifold: &ManifoldUniforms,
        starfield: &StarfieldUniforms,
    ) {
        self.manifold.update_uniforms(queue, manifold);
        self.starfield.update_uniforms(queue, starfield);
    }

    /// Record the starfield pass, then the manifold pass if a mesh is installed
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        clear_color: wgpu::Color,
    ) {
        self.starfield.render(encoder, view, clear_color);

        if let (Some(mesh), Some(depth)) = (self.mesh.get(), self.depth.get()) {
            if mesh.index_count > 0 {
                self.manifold.render(
                    encoder,
                    view,
                    depth.view(),
                    &mesh.vertex_buffer,
                    &mesh.index_buffer,
                    mesh.index_count,
                );
            }
        }
    }

    /// Destroy every GPU resource this state owns
    pub fn release(&mut self) {
        self.mesh.clear();
        self.depth.clear();
        self.manifold.destroy();
        self.starfield.destroy();
    }
}
