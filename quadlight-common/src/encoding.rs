//! Baked quad vertex encoding
//!
//! A baked quad is four vertices of seven 32-bit words each, POD, no header.
//! Metadata (face, tint) travels beside the words in [`BakedQuad`].
//!
//! # Vertex layout
//! ```text
//! word 0-2: position x, y, z (f32 bits)
//! word 3:   color (RGBA8, 0xRRGGBBAA)
//! word 4-5: texture u, v (f32 bits)
//! word 6:   lightmap (block light bits 0-15, sky light bits 16-31)
//! ```
//!
//! For color and lightmap word helpers, see [`crate::packing`].

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::direction::Direction;

/// Vertices per quad
pub const VERTEX_COUNT: usize = 4;
/// 32-bit words per vertex
pub const VERTEX_STRIDE: usize = 7;
/// 32-bit words per quad
pub const QUAD_STRIDE: usize = VERTEX_COUNT * VERTEX_STRIDE;

/// One vertex of a baked quad (28 bytes)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct PackedVertex {
    pub pos: [f32; 3],
    /// RGBA8, 0xRRGGBBAA
    pub color: u32,
    pub uv: [f32; 2],
    /// Block light in the low half, sky light in the high half
    pub light: u32,
}

const _: () = assert!(std::mem::size_of::<PackedVertex>() == VERTEX_STRIDE * 4);

impl PackedVertex {
    pub fn new(pos: Vec3, color: u32, uv: [f32; 2]) -> Self {
        Self {
            pos: pos.to_array(),
            color,
            uv,
            light: 0,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.pos)
    }
}

/// A quad as produced by the model-baking stage
///
/// Read-only input to the pipeline; the renderer copies it before editing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BakedQuad {
    /// Raw vertex words, [`QUAD_STRIDE`] long
    pub vertex_data: [u32; QUAD_STRIDE],
    /// Authored light face
    pub face: Direction,
    /// Tint selector, -1 for untinted
    pub color_index: i32,
}

impl BakedQuad {
    pub fn new(vertices: [PackedVertex; VERTEX_COUNT], face: Direction, color_index: i32) -> Self {
        Self {
            vertex_data: bytemuck::cast(vertices),
            face,
            color_index,
        }
    }

    /// Vertex view over the raw words
    #[inline]
    pub fn vertices(&self) -> &[PackedVertex; VERTEX_COUNT] {
        bytemuck::cast_ref(&self.vertex_data)
    }

    /// Unit square on `face` of the block, counter-clockwise seen from outside
    ///
    /// Convenience for tests and procedural models. Vertices are white,
    /// unlit, with UVs spanning the full texture.
    pub fn unit_face(face: Direction, color_index: i32) -> Self {
        let corners: [[f32; 3]; 4] = match face {
            Direction::Down => [[0., 0., 1.], [0., 0., 0.], [1., 0., 0.], [1., 0., 1.]],
            Direction::Up => [[0., 1., 0.], [0., 1., 1.], [1., 1., 1.], [1., 1., 0.]],
            Direction::North => [[1., 1., 0.], [1., 0., 0.], [0., 0., 0.], [0., 1., 0.]],
            Direction::South => [[0., 1., 1.], [0., 0., 1.], [1., 0., 1.], [1., 1., 1.]],
            Direction::West => [[0., 1., 0.], [0., 0., 0.], [0., 0., 1.], [0., 1., 1.]],
            Direction::East => [[1., 1., 1.], [1., 0., 1.], [1., 0., 0.], [1., 1., 0.]],
        };
        const UVS: [[f32; 2]; 4] = [[0., 0.], [0., 1.], [1., 1.], [1., 0.]];
        let vertices = std::array::from_fn(|i| {
            PackedVertex::new(Vec3::from_array(corners[i]), 0xFFFF_FFFF, UVS[i])
        });
        Self::new(vertices, face, color_index)
    }
}
