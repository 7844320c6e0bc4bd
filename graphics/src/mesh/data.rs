//! Renderable mesh.

use std::sync::Arc;

use meshforge_core::math::{Mat4, Vec3, model_view_projection};
use meshforge_core::mesh::{ColorVertex, DEFAULT_COLOR, Primitive, VertexAccumulator, VertexLayout};

use crate::backend::{BufferHandle, GraphicsBackend, PolygonMode, VertexArrayHandle};
use crate::error::GraphicsError;
use crate::shader::ShaderRegistry;
use crate::style::RenderStyle;

use super::gpu::GpuMeshResources;

/// A generated or hand-built triangle list plus the GPU resources it was
/// uploaded to.
///
/// A mesh is *bound* once [`upload`](Self::upload) succeeds. A bound mesh is
/// immutable: the `add_*` methods are ignored until the mesh is released or
/// regenerated. Every `generate_*` call releases the previous state first, so
/// geometry never accumulates across generations.
///
/// # Example
///
/// ```ignore
/// let mut mesh = Mesh::new(backend, shaders);
/// mesh.generate_cylinder(1.0, 2.0, 16, Vec3::new(1.0, 0.5, 0.0))?;
/// mesh.render(&projection, &view, &Mat4::identity())?;
/// ```
pub struct Mesh {
    backend: Arc<dyn GraphicsBackend>,
    shaders: Arc<dyn ShaderRegistry>,
    style: RenderStyle,
    layout: Arc<VertexLayout>,
    geometry: VertexAccumulator,
    interleaved: Vec<ColorVertex>,
    source: Option<(Primitive, Vec3)>,
    gpu: Option<GpuMeshResources>,
}

impl Mesh {
    /// Create an empty mesh with the default [`RenderStyle`].
    pub fn new(backend: Arc<dyn GraphicsBackend>, shaders: Arc<dyn ShaderRegistry>) -> Self {
        Self::with_style(backend, shaders, RenderStyle::default())
    }

    /// Create an empty mesh with a custom [`RenderStyle`].
    pub fn with_style(
        backend: Arc<dyn GraphicsBackend>,
        shaders: Arc<dyn ShaderRegistry>,
        style: RenderStyle,
    ) -> Self {
        if shaders.resolve(&style.shader).is_none() {
            log::warn!("Shader '{}' is not registered; render will fail", style.shader);
        }

        Self {
            backend,
            shaders,
            style,
            layout: VertexLayout::position_color(),
            geometry: VertexAccumulator::new(),
            interleaved: Vec::new(),
            source: None,
            gpu: None,
        }
    }

    // === Custom geometry ===

    /// Append a position.
    pub fn add_position(&mut self, position: Vec3) {
        if self.reject_while_bound("add_position") {
            return;
        }
        self.source = None;
        self.geometry.add_position(position);
    }

    /// Append a color.
    pub fn add_color(&mut self, color: Vec3) {
        if self.reject_while_bound("add_color") {
            return;
        }
        self.source = None;
        self.geometry.add_color(color);
    }

    /// Append a triangle; see [`VertexAccumulator::add_triangle`].
    pub fn add_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        if self.reject_while_bound("add_triangle") {
            return;
        }
        self.source = None;
        self.geometry.add_triangle(a, b, c);
    }

    /// Append a quad; see [`VertexAccumulator::add_quad`].
    pub fn add_quad(&mut self, bl: Vec3, br: Vec3, tl: Vec3, tr: Vec3) {
        if self.reject_while_bound("add_quad") {
            return;
        }
        self.source = None;
        self.geometry.add_quad(bl, br, tl, tr);
    }

    /// Pad missing colors with `color`.
    pub fn complete_colors(&mut self, color: Vec3) {
        if self.reject_while_bound("complete_colors") {
            return;
        }
        self.geometry.complete_colors(color);
    }

    fn reject_while_bound(&self, operation: &str) -> bool {
        if self.is_bound() {
            log::warn!("Ignoring {} on a bound mesh; release it first", operation);
            return true;
        }
        false
    }

    // === Generation ===

    /// Release, regenerate from `primitive` and upload.
    pub fn generate(&mut self, primitive: Primitive, color: Vec3) -> Result<(), GraphicsError> {
        self.release();
        log::debug!("Generating {} mesh", primitive.label());
        self.geometry = primitive.generate(color);
        self.source = Some((primitive, color));
        self.upload()
    }

    pub fn generate_cube(&mut self, size: f32, color: Vec3) -> Result<(), GraphicsError> {
        self.generate(Primitive::Cube { size }, color)
    }

    pub fn generate_cuboid(&mut self, dimensions: Vec3, color: Vec3) -> Result<(), GraphicsError> {
        self.generate(Primitive::Cuboid { dimensions }, color)
    }

    pub fn generate_cone(
        &mut self,
        radius: f32,
        height: f32,
        subdivisions: u32,
        color: Vec3,
    ) -> Result<(), GraphicsError> {
        self.generate(
            Primitive::Cone {
                radius,
                height,
                subdivisions,
            },
            color,
        )
    }

    pub fn generate_cylinder(
        &mut self,
        radius: f32,
        height: f32,
        subdivisions: u32,
        color: Vec3,
    ) -> Result<(), GraphicsError> {
        self.generate(
            Primitive::Cylinder {
                radius,
                height,
                subdivisions,
            },
            color,
        )
    }

    pub fn generate_tube(
        &mut self,
        outer_radius: f32,
        inner_radius: f32,
        height: f32,
        subdivisions: u32,
        color: Vec3,
    ) -> Result<(), GraphicsError> {
        self.generate(
            Primitive::Tube {
                outer_radius,
                inner_radius,
                height,
                subdivisions,
            },
            color,
        )
    }

    /// Generate a torus. Currently produces a cube of side `2 * outer_radius`.
    pub fn generate_torus(
        &mut self,
        outer_radius: f32,
        inner_radius: f32,
        subdivisions_a: u32,
        subdivisions_b: u32,
        color: Vec3,
    ) -> Result<(), GraphicsError> {
        self.generate(
            Primitive::Torus {
                outer_radius,
                inner_radius,
                subdivisions_a,
                subdivisions_b,
            },
            color,
        )
    }

    pub fn generate_sphere(
        &mut self,
        radius: f32,
        subdivisions: u32,
        color: Vec3,
    ) -> Result<(), GraphicsError> {
        self.generate(
            Primitive::Sphere {
                radius,
                subdivisions,
            },
            color,
        )
    }

    // === Upload & Render ===

    /// Interleave the geometry and upload it to new GPU resources.
    ///
    /// Missing colors are completed with [`DEFAULT_COLOR`] first. Does nothing
    /// if the mesh is already bound or has no vertices.
    pub fn upload(&mut self) -> Result<(), GraphicsError> {
        if self.is_bound() {
            log::trace!("Mesh already bound, skipping upload");
            return Ok(());
        }
        if self.geometry.is_empty() {
            log::debug!("Mesh has no vertices, skipping upload");
            return Ok(());
        }

        self.geometry.complete_colors(Vec3::from(DEFAULT_COLOR));
        let interleaved = self.geometry.interleave()?;
        let gpu = GpuMeshResources::create(self.backend.clone(), &interleaved, &self.layout)?;

        self.interleaved = interleaved;
        self.gpu = Some(gpu);
        Ok(())
    }

    /// Draw the mesh twice: filled, then as a depth-offset wireframe.
    ///
    /// The uniform named by [`RenderStyle::mvp_uniform`] receives
    /// `projection * view * model`.
    ///
    /// # Errors
    ///
    /// [`GraphicsError::NotBound`] if the mesh has not been uploaded, and
    /// [`GraphicsError::ShaderNotFound`] if the style's shader is not
    /// registered. Nothing is drawn in either case.
    pub fn render(
        &self,
        projection: &Mat4,
        view: &Mat4,
        model: &Mat4,
    ) -> Result<(), GraphicsError> {
        let gpu = self.gpu.as_ref().ok_or(GraphicsError::NotBound)?;
        let shader = self
            .shaders
            .resolve(&self.style.shader)
            .ok_or_else(|| GraphicsError::ShaderNotFound(self.style.shader.clone()))?;

        let mvp = model_view_projection(projection, view, model);
        let vertices = 0..gpu.vertex_count();
        let backend = &self.backend;

        backend.use_shader(shader);
        backend.bind_vertex_array(Some(gpu.vertex_array()));
        backend.set_uniform_mat4(shader, &self.style.mvp_uniform, &mvp);

        // solid
        backend.set_uniform_vec3(shader, &self.style.wire_uniform, &self.style.solid_sentinel);
        backend.set_polygon_mode(PolygonMode::Fill);
        backend.draw(vertices.clone());

        // wireframe
        backend.set_uniform_vec3(shader, &self.style.wire_uniform, &self.style.wire_color);
        backend.set_polygon_mode(PolygonMode::Line);
        backend.set_depth_offset(Some(self.style.wire_depth_offset));
        backend.draw(vertices);

        backend.set_polygon_mode(PolygonMode::Fill);
        backend.set_depth_offset(None);
        backend.bind_vertex_array(None);
        Ok(())
    }

    /// Destroy GPU resources and clear all geometry.
    ///
    /// Safe to call on a mesh that was never uploaded or is already released.
    pub fn release(&mut self) {
        if let Some(gpu) = self.gpu.take() {
            log::debug!("Releasing mesh with {} vertices", gpu.vertex_count());
        }
        self.geometry.clear();
        self.interleaved.clear();
        self.source = None;
    }

    /// Build an independent mesh with the same geometry and fresh GPU
    /// resources.
    ///
    /// Generated meshes are regenerated from their [`Primitive`]; hand-built
    /// geometry is copied. The copy is uploaded only if `self` is bound.
    pub fn try_clone(&self) -> Result<Self, GraphicsError> {
        let mut mesh = Self::with_style(
            self.backend.clone(),
            self.shaders.clone(),
            self.style.clone(),
        );
        mesh.geometry = match self.source {
            Some((primitive, color)) => primitive.generate(color),
            None => self.geometry.clone(),
        };
        mesh.source = self.source;

        if self.is_bound() {
            mesh.upload()?;
        }
        Ok(mesh)
    }

    // === Accessors ===

    /// Check if the mesh owns uploaded GPU resources.
    pub fn is_bound(&self) -> bool {
        self.gpu.is_some()
    }

    /// Number of emitted vertices.
    pub fn vertex_count(&self) -> usize {
        self.geometry.vertex_count()
    }

    pub fn positions(&self) -> &[Vec3] {
        self.geometry.positions()
    }

    pub fn colors(&self) -> &[Vec3] {
        self.geometry.colors()
    }

    pub fn geometry(&self) -> &VertexAccumulator {
        &self.geometry
    }

    /// Interleaved vertices from the last successful upload.
    pub fn interleaved(&self) -> &[ColorVertex] {
        &self.interleaved
    }

    /// The primitive this mesh was generated from, if any.
    pub fn primitive(&self) -> Option<Primitive> {
        self.source.map(|(primitive, _)| primitive)
    }

    /// Vertex array and buffer handles while bound.
    pub fn gpu_handles(&self) -> Option<(VertexArrayHandle, BufferHandle)> {
        self.gpu
            .as_ref()
            .map(|gpu| (gpu.vertex_array(), gpu.buffer()))
    }

    pub fn layout(&self) -> &Arc<VertexLayout> {
        &self.layout
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }
}

impl std::fmt::Debug for Mesh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mesh")
            .field("primitive", &self.primitive().map(|p| p.label()))
            .field("vertex_count", &self.vertex_count())
            .field("gpu", &self.gpu)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Mesh: Send, Sync);
