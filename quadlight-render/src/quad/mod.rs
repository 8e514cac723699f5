//! Editable quad record
//!
//! [`MutableQuad`] is the canonical in-memory form every baked quad is
//! copied into before transformation, lighting and tessellation. It has no
//! way to emit new quads: it is edited in place and then handed to a sink.

use glam::Vec3;
use quadlight_common::{
    BakedQuad, CullFace, Direction, GeometryFlags, PackedVertex, VERTEX_COUNT,
    compute_geometry_flags, face_normal,
};

use crate::material::RenderMaterial;


/// Cached shape flags of a quad
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeCache {
    /// Geometry changed since the flags were last computed
    Unknown,
    Computed(GeometryFlags),
}

/// One quad open for editing
#[derive(Clone, Debug)]
pub struct MutableQuad {
    vertices: [PackedVertex; VERTEX_COUNT],
    material: RenderMaterial,
    color_index: i32,
    cull_face: CullFace,
    light_face: Direction,
    nominal_face: Direction,
    shape: ShapeCache,
}

impl MutableQuad {
    pub(crate) fn blank(material: RenderMaterial) -> Self {
        Self {
            vertices: [PackedVertex::default(); VERTEX_COUNT],
            material,
            color_index: -1,
            cull_face: CullFace::None,
            light_face: Direction::Up,
            nominal_face: Direction::Up,
            shape: ShapeCache::Unknown,
        }
    }

    /// Overwrite every field from a baked quad
    pub(crate) fn load(&mut self, raw: &BakedQuad, cull_face: CullFace, material: RenderMaterial) {
        self.vertices = bytemuck::cast(raw.vertex_data);
        self.cull_face = cull_face;
        self.light_face = raw.face;
        self.nominal_face = raw.face;
        self.color_index = raw.color_index;
        self.material = material;
        self.shape = ShapeCache::Unknown;
    }

    // ========================================================================
    // Vertex data
    // ========================================================================

    #[inline]
    pub fn vertices(&self) -> &[PackedVertex; VERTEX_COUNT] {
        &self.vertices
    }

    #[inline]
    pub fn pos(&self, vertex: usize) -> Vec3 {
        self.vertices[vertex].position()
    }

    pub fn positions(&self) -> [Vec3; VERTEX_COUNT] {
        self.vertices.map(|v| v.position())
    }

    /// Move one vertex. Invalidates the shape cache.
    pub fn set_pos(&mut self, vertex: usize, pos: Vec3) {
        self.vertices[vertex].pos = pos.to_array();
        self.shape = ShapeCache::Unknown;
    }

    /// Move every vertex by `offset` without touching the shape cache
    ///
    /// Positional offsets (block placement, model jitter) keep the shape the
    /// model was authored with, so flags computed before the move stay valid.
    pub fn translate(&mut self, offset: Vec3) {
        for vertex in &mut self.vertices {
            vertex.pos = (vertex.position() + offset).to_array();
        }
    }

    #[inline]
    pub fn color(&self, vertex: usize) -> u32 {
        self.vertices[vertex].color
    }

    pub fn set_color(&mut self, vertex: usize, color: u32) {
        self.vertices[vertex].color = color;
    }

    #[inline]
    pub fn uv(&self, vertex: usize) -> [f32; 2] {
        self.vertices[vertex].uv
    }

    pub fn set_uv(&mut self, vertex: usize, uv: [f32; 2]) {
        self.vertices[vertex].uv = uv;
    }

    #[inline]
    pub fn lightmap(&self, vertex: usize) -> u32 {
        self.vertices[vertex].light
    }

    pub fn set_lightmap(&mut self, vertex: usize, light: u32) {
        self.vertices[vertex].light = light;
    }

    pub fn face_normal(&self) -> Vec3 {
        face_normal(&self.positions())
    }

    // ========================================================================
    // Metadata
    // ========================================================================

    #[inline]
    pub fn material(&self) -> RenderMaterial {
        self.material
    }

    pub fn set_material(&mut self, material: RenderMaterial) {
        self.material = material;
    }

    #[inline]
    pub fn color_index(&self) -> i32 {
        self.color_index
    }

    pub fn set_color_index(&mut self, color_index: i32) {
        self.color_index = color_index;
    }

    #[inline]
    pub fn cull_face(&self) -> CullFace {
        self.cull_face
    }

    pub fn set_cull_face(&mut self, cull_face: CullFace) {
        self.cull_face = cull_face;
    }

    #[inline]
    pub fn light_face(&self) -> Direction {
        self.light_face
    }

    /// Change the light face. Cached flags are left as they are.
    pub fn set_light_face(&mut self, face: Direction) {
        self.light_face = face;
    }

    /// Anchor face for positional offsets and AO sampling
    #[inline]
    pub fn nominal_face(&self) -> Direction {
        self.nominal_face
    }

    pub fn set_nominal_face(&mut self, face: Direction) {
        self.nominal_face = face;
    }

    // ========================================================================
    // Shape cache
    // ========================================================================

    /// Shape flags, computing them first if the cache is stale
    pub fn geometry_flags(&mut self) -> GeometryFlags {
        match self.shape {
            ShapeCache::Computed(flags) => flags,
            ShapeCache::Unknown => self.compute_shape(),
        }
    }

    /// Cached flags without computing, `None` when stale
    pub fn cached_geometry_flags(&self) -> Option<GeometryFlags> {
        match self.shape {
            ShapeCache::Computed(flags) => Some(flags),
            ShapeCache::Unknown => None,
        }
    }

    #[inline]
    pub fn shape(&self) -> ShapeCache {
        self.shape
    }

    /// Mark the cached flags stale
    pub fn invalidate_shape(&mut self) {
        self.shape = ShapeCache::Unknown;
    }

    /// Compute the flags from current geometry now, replacing any cached value
    pub fn compute_shape(&mut self) -> GeometryFlags {
        let flags = compute_geometry_flags(&self.positions(), self.light_face);
        self.shape = ShapeCache::Computed(flags);
        flags
    }

    /// Replace the cached flags outright
    pub fn set_geometry_flags(&mut self, flags: GeometryFlags) {
        self.shape = ShapeCache::Computed(flags);
    }
}
