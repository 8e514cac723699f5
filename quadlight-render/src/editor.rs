//! Scratch quad editor
//!
//! One [`MutableQuad`] is allocated per renderer and overwritten for every
//! incoming quad. [`QuadEditor::normalize`] hands out a borrow tied to the
//! editor, so nothing can hold on to the scratch quad past the call that
//! processes it.

use quadlight_common::{BakedQuad, CullFace};

use crate::material::RenderMaterial;
use crate::quad::MutableQuad;

/// Arena of one editable quad
#[derive(Debug)]
pub struct QuadEditor {
    quad: MutableQuad,
}

impl QuadEditor {
    pub fn new(material: RenderMaterial) -> Self {
        Self {
            quad: MutableQuad::blank(material),
        }
    }

    /// Copy `raw` into the scratch quad and stamp its metadata
    ///
    /// Vertex words are copied verbatim; light and nominal face both take
    /// the authored face; the tint comes from the raw quad and the material
    /// from `default_material`. Any state left by the previous quad is
    /// overwritten.
    pub fn normalize(
        &mut self,
        raw: &BakedQuad,
        cull_face: CullFace,
        default_material: RenderMaterial,
    ) -> &mut MutableQuad {
        self.quad.load(raw, cull_face, default_material);
        &mut self.quad
    }
}
