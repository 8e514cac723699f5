//! Lighting router and fallback renderer for pre-baked block model quads
//!
//! Baked quads from any source are copied into one scratch [`MutableQuad`],
//! run through a caller-supplied [`QuadTransform`], lit either smoothly
//! (ambient occlusion) or flat, offset into place and handed to a
//! [`QuadTessellator`].
//!
//! # Modules
//!
//! - [`renderer`] - Walks a model's quad buckets ([`FallbackRenderer`])
//! - [`router`] - Per-quad lighting decision and step ordering
//! - [`quad`] / [`editor`] - Scratch quad record and its editor
//! - [`material`] - Material descriptors and the default material pair
//! - [`pipeline`] - Traits for host-supplied collaborators
//! - [`config`] - TOML configuration

pub mod block_info;
pub mod config;
pub mod editor;
pub mod material;
pub mod offset;
pub mod pipeline;
pub mod quad;
pub mod renderer;
pub mod router;
pub mod stats;
pub mod transform;

pub use block_info::BlockRenderInfo;
pub use config::{ConfigError, LightingConfig, RenderConfig};
pub use editor::QuadEditor;
pub use material::{BlendMode, DefaultMaterials, MaterialFinder, MaterialFlags, RenderMaterial};
pub use offset::BlockOffset;
pub use pipeline::{
    AoCalculator, BakedModel, FaceVisibility, ModelRandom, OffsetPolicy, QuadTessellator,
};
pub use quad::{MutableQuad, ShapeCache};
pub use renderer::FallbackRenderer;
pub use router::{QuadPipeline, RouteOutcome, route_quad};
pub use stats::RenderStats;
pub use transform::{QuadTransform, TransformStack};

// Re-export the shared quad types
pub use quadlight_common::{
    BakedQuad, CullFace, Direction, GeometryFlags, PackedVertex, QUAD_STRIDE,
};
