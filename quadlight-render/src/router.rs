//! Lighting router
//!
//! Decides per quad between smooth (ambient occlusion) and flat lighting and
//! runs the steps of the chosen path in order:
//!
//! ```text
//! normalized ──transform──► vetoed ─────────────────────────────► discarded
//!     │
//!     ├─ material has AO ─► invalidate shape ─► AO sample ─► settle shape ─┐
//!     │                                                smooth ◄─ offsets ◄─┘
//!     │
//!     └─ flat ─┬─ no cull face ─► invalidate + compute shape ─┐
//!              └─ cull face ────► shape = LIGHT_FACE,          ├─► offsets ─► flat
//!                                 light face = cull face ──────┘
//! ```
//!
//! Shape flags and AO are always settled before offsets move the vertices:
//! both reason about the block-local, grid-aligned positions the model was
//! authored with.

use quadlight_common::{CullFace, GeometryFlags};

use crate::material::BlendMode;
use crate::pipeline::{AoCalculator, OffsetPolicy, QuadTessellator};
use crate::quad::MutableQuad;
use crate::transform::QuadTransform;

/// The collaborators one quad passes through
pub struct QuadPipeline<'a> {
    pub transform: &'a mut dyn QuadTransform,
    pub ao: &'a mut dyn AoCalculator,
    pub offsets: &'a dyn OffsetPolicy,
    pub tessellator: &'a mut dyn QuadTessellator,
}

/// Where a quad ended up
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Vetoed by the transform hook
    Discarded,
    Smooth,
    Flat,
}

/// Transform, light, offset and tessellate one normalized quad
///
/// Every field is read after the transform hook runs, so a hook that swaps
/// the material or cull face changes the route.
pub fn route_quad(
    quad: &mut MutableQuad,
    layer: BlendMode,
    pipeline: &mut QuadPipeline<'_>,
) -> RouteOutcome {
    if !pipeline.transform.transform(quad) {
        tracing::trace!(face = ?quad.cull_face(), "quad vetoed by transform");
        return RouteOutcome::Discarded;
    }

    if quad.material().has_ao() {
        light_smooth(quad, layer, pipeline);
        RouteOutcome::Smooth
    } else {
        light_flat(quad, layer, pipeline);
        RouteOutcome::Flat
    }
}

fn light_smooth(quad: &mut MutableQuad, layer: BlendMode, pipeline: &mut QuadPipeline<'_>) {
    // The hook may have reshaped the quad
    quad.invalidate_shape();
    pipeline.ao.compute(quad, true);
    // Samplers may leave the flags unread; settle them from block-local positions
    quad.geometry_flags();
    pipeline.offsets.apply_offsets(quad);
    let color_index = quad.color_index();
    pipeline.tessellator.tessellate_smooth(quad, layer, color_index);
}

fn light_flat(quad: &mut MutableQuad, layer: BlendMode, pipeline: &mut QuadPipeline<'_>) {
    // For flat lighting the cull face decides the light value and the
    // authored light face is ignored.
    match quad.cull_face() {
        CullFace::None => {
            quad.invalidate_shape();
            // Tessellation cannot compute this lazily: it runs after offsets
            quad.compute_shape();
        }
        CullFace::Face(face) => {
            quad.set_geometry_flags(GeometryFlags::LIGHT_FACE);
            quad.set_light_face(face);
        }
    }
    pipeline.offsets.apply_offsets(quad);
    let color_index = quad.color_index();
    pipeline.tessellator.tessellate_flat(quad, layer, color_index);
}
