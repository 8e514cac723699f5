//! Collaborator seams of the fallback pipeline
//!
//! The renderer owns none of these. Model baking, ambient occlusion,
//! positional offsets, visibility and tessellation are supplied by the host;
//! each is called synchronously from the thread driving the renderer.

use quadlight_common::{BakedQuad, CullFace, Direction};

use crate::material::BlendMode;
use crate::quad::MutableQuad;

/// Random source handed to models when they select quads
pub type ModelRandom = rand_pcg::Pcg32;

/// A pre-baked model
pub trait BakedModel<S> {
    /// Quads of one bucket: a cull face, or [`CullFace::None`] for quads that
    /// are never culled
    fn quads(&self, state: &S, bucket: CullFace, random: &mut ModelRandom) -> &[BakedQuad];

    /// Whether the model wants smooth ambient-occlusion lighting
    fn use_ambient_occlusion(&self) -> bool;
}

/// Face-culling visibility policy
pub trait FaceVisibility {
    /// False when the face is hidden (e.g. by an opaque neighbour)
    fn should_draw_face(&self, face: Direction) -> bool;
}

impl<F> FaceVisibility for F
where
    F: Fn(Direction) -> bool,
{
    fn should_draw_face(&self, face: Direction) -> bool {
        self(face)
    }
}

/// Per-vertex ambient occlusion and light sampling
pub trait AoCalculator {
    /// Write per-vertex lighting into the quad's lightmap words
    ///
    /// Called before positional offsets, so vertex positions are still in
    /// block-local, grid-aligned coordinates.
    fn compute(&mut self, quad: &mut MutableQuad, smooth: bool);
}

/// Positional offsets applied after lighting and before tessellation
pub trait OffsetPolicy {
    /// Move the quad into place. Implementations key any face-dependent
    /// behaviour on [`MutableQuad::nominal_face`].
    fn apply_offsets(&self, quad: &mut MutableQuad);
}

impl<F> OffsetPolicy for F
where
    F: Fn(&mut MutableQuad),
{
    fn apply_offsets(&self, quad: &mut MutableQuad) {
        self(quad)
    }
}

/// Terminal sinks turning a lit quad into buffered vertices
///
/// Each call must fully consume the quad before returning; the scratch quad
/// is overwritten by the next one.
pub trait QuadTessellator {
    fn tessellate_smooth(&mut self, quad: &mut MutableQuad, layer: BlendMode, color_index: i32);

    fn tessellate_flat(&mut self, quad: &mut MutableQuad, layer: BlendMode, color_index: i32);
}
