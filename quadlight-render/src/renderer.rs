//! Fallback renderer for pre-baked models
//!
//! Walks a model's quad buckets, copies each quad into the scratch editor
//! and routes it through the lighting pipeline. Quads from any model go down
//! the same path, so meshes from different sources shade consistently.

use quadlight_common::CullFace;

use crate::block_info::BlockRenderInfo;
use crate::config::RenderConfig;
use crate::editor::QuadEditor;
use crate::material::DefaultMaterials;
use crate::pipeline::{BakedModel, FaceVisibility};
use crate::router::{QuadPipeline, route_quad};
use crate::stats::RenderStats;

/// Renders baked models one block at a time
///
/// Owns the scratch quad; keep one per rendering thread.
#[derive(Debug)]
pub struct FallbackRenderer {
    editor: QuadEditor,
    materials: DefaultMaterials,
    ambient_occlusion: bool,
}

impl FallbackRenderer {
    pub fn new(config: &RenderConfig) -> Self {
        Self::with_materials(config, DefaultMaterials::standard())
    }

    pub fn with_materials(config: &RenderConfig, materials: DefaultMaterials) -> Self {
        Self {
            editor: QuadEditor::new(materials.shaded),
            materials,
            ambient_occlusion: config.lighting.ambient_occlusion,
        }
    }

    pub fn materials(&self) -> &DefaultMaterials {
        &self.materials
    }

    /// Global ambient occlusion setting
    pub fn ambient_occlusion(&self) -> bool {
        self.ambient_occlusion
    }

    pub fn set_ambient_occlusion(&mut self, enabled: bool) {
        self.ambient_occlusion = enabled;
    }

    /// Render every quad of `model` for `block`
    ///
    /// Directional buckets whose face is hidden are skipped before their
    /// quads are fetched. The generic bucket is always drawn.
    pub fn render_model<S, V, M>(
        &mut self,
        model: &M,
        block: &BlockRenderInfo<S, V>,
        pipeline: &mut QuadPipeline<'_>,
    ) -> RenderStats
    where
        V: FaceVisibility,
        M: BakedModel<S> + ?Sized,
    {
        let default_material = self
            .materials
            .select(self.ambient_occlusion, model.use_ambient_occlusion());
        let layer = block.default_layer();
        let mut stats = RenderStats::default();

        for bucket in CullFace::BUCKETS {
            if let CullFace::Face(face) = bucket {
                if !block.should_draw_face(face) {
                    tracing::trace!(face = ?face, "face culled");
                    stats.faces_culled += 1;
                    continue;
                }
            }

            let mut random = block.random();
            for raw in model.quads(block.state(), bucket, &mut random) {
                let quad = self.editor.normalize(raw, bucket, default_material);
                stats.record(route_quad(quad, layer, pipeline));
            }
        }

        tracing::trace!(
            quads = stats.quads,
            vetoed = stats.vetoed,
            smooth = stats.smooth,
            flat = stats.flat,
            faces_culled = stats.faces_culled,
            "model rendered"
        );
        stats
    }
}
