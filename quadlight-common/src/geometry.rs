//! Quad shape analysis
//!
//! Shape flags are derived from vertex positions relative to the unit block
//! and a light face. They are cheap but not free to compute, so the editable
//! quad caches them and callers invalidate the cache on geometry changes.

use glam::Vec3;

use crate::direction::Direction;
use crate::encoding::VERTEX_COUNT;

/// Positional tolerance for coplanarity and boundary tests
pub const EPSILON: f32 = 1.0e-4;

bitflags::bitflags! {
    /// Shape properties of a quad
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct GeometryFlags: u8 {
        /// All vertices share the light face's axis coordinate
        const AXIS_ALIGNED = 0b0000_0001;
        /// Lies on the block boundary of the light face; the light value
        /// comes from the neighbour on that side
        const LIGHT_FACE = 0b0000_0010;
        /// Covers the whole unit face
        const CUBIC = 0b0000_0100;
    }
}

/// Unit face normal of a quad
///
/// Uses the diagonals so slightly non-planar quads still give a stable
/// result. Degenerate quads give a zero vector.
pub fn face_normal(positions: &[Vec3; VERTEX_COUNT]) -> Vec3 {
    let a = positions[2] - positions[0];
    let b = positions[3] - positions[1];
    a.cross(b).normalize_or_zero()
}

/// Compute shape flags for `positions` against `light_face`
pub fn compute_geometry_flags(
    positions: &[Vec3; VERTEX_COUNT],
    light_face: Direction,
) -> GeometryFlags {
    let axis = light_face.axis().index();
    let depth = positions[0][axis];
    if positions.iter().any(|p| (p[axis] - depth).abs() > EPSILON) {
        return GeometryFlags::empty();
    }

    let mut flags = GeometryFlags::AXIS_ALIGNED;

    let boundary = if light_face.is_positive() { 1.0 } else { 0.0 };
    if (depth - boundary).abs() <= EPSILON {
        flags |= GeometryFlags::LIGHT_FACE;

        let (u, v) = light_face.axis().others();
        if spans_unit(positions, u.index()) && spans_unit(positions, v.index()) {
            flags |= GeometryFlags::CUBIC;
        }
    }

    flags
}

fn spans_unit(positions: &[Vec3; VERTEX_COUNT], axis: usize) -> bool {
    let (min, max) = positions
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p[axis]), hi.max(p[axis]))
        });
    min <= EPSILON && max >= 1.0 - EPSILON
}
