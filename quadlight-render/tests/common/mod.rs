//! Shared recording stand-ins for integration tests
//!
//! Every collaborator appends to one [`Journal`] so tests can assert on the
//! exact order of calls across AO sampling, offsets and tessellation.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;
use quadlight::{
    AoCalculator, BakedModel, BakedQuad, BlendMode, BlockRenderInfo, CullFace, Direction,
    FaceVisibility, FallbackRenderer, GeometryFlags, ModelRandom, MutableQuad, OffsetPolicy,
    QuadPipeline, QuadTessellator, QuadTransform, RenderStats, ShapeCache,
};
use quadlight_common::{multiply_color, pack_lightmap};

/// Light the recording AO sampler writes to every vertex
pub const AO_BLOCK_LIGHT: u16 = 192;
pub const AO_SKY_LIGHT: u16 = 48;
/// Vertex color darkening applied by the recording AO sampler
pub const AO_SHADE: f32 = 0.8;

/// One observed collaborator call
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Model asked for the quads of a bucket
    Fetch(CullFace),
    /// AO sampler ran; `flags` is what the sampler read from the quad, if
    /// it read them at all
    Ao {
        smooth: bool,
        flags: Option<GeometryFlags>,
    },
    /// Offsets applied; `shape` is the cache state at that moment
    Offset {
        shape: ShapeCache,
        nominal_face: Direction,
    },
    Tessellate(Tessellated),
}

/// Snapshot of a quad as a tessellator saw it
#[derive(Clone, Debug, PartialEq)]
pub struct Tessellated {
    pub smooth: bool,
    pub layer: BlendMode,
    pub color_index: i32,
    pub cull_face: CullFace,
    pub light_face: Direction,
    pub nominal_face: Direction,
    /// Cache state on arrival
    pub shape: ShapeCache,
    /// Flags as a tessellator reading them lazily would get
    pub flags: GeometryFlags,
    pub lightmap: u32,
    pub color: u32,
    pub first_pos: Vec3,
}

#[derive(Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<Event>>>);

impl Journal {
    pub fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn tessellated(&self) -> Vec<Tessellated> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Tessellate(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.0.borrow().iter().filter(|e| pred(e)).count()
    }

    pub fn fetched(&self) -> Vec<CullFace> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Fetch(bucket) => Some(bucket),
                _ => None,
            })
            .collect()
    }
}

// ============================================================================
// Test Model
// ============================================================================

/// Model with fixed quads per bucket
pub struct TestModel {
    buckets: [Vec<BakedQuad>; 7],
    ambient_occlusion: bool,
    journal: Journal,
}

impl TestModel {
    pub fn new(journal: &Journal, ambient_occlusion: bool) -> Self {
        Self {
            buckets: Default::default(),
            ambient_occlusion,
            journal: journal.clone(),
        }
    }

    /// Add a quad to a bucket
    pub fn with_quad(mut self, bucket: CullFace, quad: BakedQuad) -> Self {
        self.buckets[bucket_index(bucket)].push(quad);
        self
    }

    /// Unit cube: one full face per direction, each in its own cull bucket
    pub fn cube(journal: &Journal, ambient_occlusion: bool) -> Self {
        Direction::ALL.iter().fold(Self::new(journal, ambient_occlusion), |model, &dir| {
            model.with_quad(CullFace::Face(dir), BakedQuad::unit_face(dir, -1))
        })
    }
}

fn bucket_index(bucket: CullFace) -> usize {
    match bucket {
        CullFace::Face(dir) => dir.index(),
        CullFace::None => 6,
    }
}

impl BakedModel<()> for TestModel {
    fn quads(&self, _state: &(), bucket: CullFace, _random: &mut ModelRandom) -> &[BakedQuad] {
        self.journal.push(Event::Fetch(bucket));
        &self.buckets[bucket_index(bucket)]
    }

    fn use_ambient_occlusion(&self) -> bool {
        self.ambient_occlusion
    }
}

/// Diagonal quad through the block, as plant models use
pub fn cross_quad(color_index: i32) -> BakedQuad {
    let mut quad = BakedQuad::unit_face(Direction::North, color_index);
    let mut vertices = *quad.vertices();
    vertices[0].pos = [0.0, 1.0, 0.0];
    vertices[1].pos = [0.0, 0.0, 0.0];
    vertices[2].pos = [1.0, 0.0, 1.0];
    vertices[3].pos = [1.0, 1.0, 1.0];
    quad.vertex_data = bytemuck::cast(vertices);
    quad
}

// ============================================================================
// Recording Collaborators
// ============================================================================

pub struct RecordingAo {
    journal: Journal,
    /// Whether the sampler consults the shape flags, as face-aware samplers do
    reads_flags: bool,
}

impl AoCalculator for RecordingAo {
    fn compute(&mut self, quad: &mut MutableQuad, smooth: bool) {
        let flags = self.reads_flags.then(|| quad.geometry_flags());
        self.journal.push(Event::Ao { smooth, flags });
        for i in 0..4 {
            quad.set_lightmap(i, pack_lightmap(AO_BLOCK_LIGHT, AO_SKY_LIGHT));
            quad.set_color(i, multiply_color(quad.color(i), AO_SHADE));
        }
    }
}

pub struct RecordingOffsets {
    journal: Journal,
    offset: Vec3,
}

impl OffsetPolicy for RecordingOffsets {
    fn apply_offsets(&self, quad: &mut MutableQuad) {
        self.journal.push(Event::Offset {
            shape: quad.shape(),
            nominal_face: quad.nominal_face(),
        });
        quad.translate(self.offset);
    }
}

pub struct RecordingTessellator {
    journal: Journal,
}

impl RecordingTessellator {
    fn record(&self, quad: &mut MutableQuad, smooth: bool, layer: BlendMode, color_index: i32) {
        let shape = quad.shape();
        self.journal.push(Event::Tessellate(Tessellated {
            smooth,
            layer,
            color_index,
            cull_face: quad.cull_face(),
            light_face: quad.light_face(),
            nominal_face: quad.nominal_face(),
            shape,
            flags: quad.geometry_flags(),
            lightmap: quad.lightmap(0),
            color: quad.color(0),
            first_pos: quad.pos(0),
        }));
    }
}

impl QuadTessellator for RecordingTessellator {
    fn tessellate_smooth(&mut self, quad: &mut MutableQuad, layer: BlendMode, color_index: i32) {
        self.record(quad, true, layer, color_index);
    }

    fn tessellate_flat(&mut self, quad: &mut MutableQuad, layer: BlendMode, color_index: i32) {
        self.record(quad, false, layer, color_index);
    }
}

/// Recording collaborators bundled for one test
pub struct Harness {
    pub journal: Journal,
    pub ao: RecordingAo,
    pub offsets: RecordingOffsets,
    pub tessellator: RecordingTessellator,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_offset(Vec3::ZERO)
    }

    pub fn with_offset(offset: Vec3) -> Self {
        Self::build(offset, true)
    }

    /// Harness whose AO sampler writes light without reading the shape flags
    pub fn lightmap_only(offset: Vec3) -> Self {
        Self::build(offset, false)
    }

    fn build(offset: Vec3, reads_flags: bool) -> Self {
        let journal = Journal::default();
        Self {
            ao: RecordingAo {
                journal: journal.clone(),
                reads_flags,
            },
            offsets: RecordingOffsets {
                journal: journal.clone(),
                offset,
            },
            tessellator: RecordingTessellator {
                journal: journal.clone(),
            },
            journal,
        }
    }

    pub fn render<V: FaceVisibility>(
        &mut self,
        renderer: &mut FallbackRenderer,
        model: &TestModel,
        block: &BlockRenderInfo<(), V>,
        transform: &mut dyn QuadTransform,
    ) -> RenderStats {
        let mut pipeline = QuadPipeline {
            transform,
            ao: &mut self.ao,
            offsets: &self.offsets,
            tessellator: &mut self.tessellator,
        };
        renderer.render_model(model, block, &mut pipeline)
    }
}

/// Transform that accepts every quad unchanged
pub fn accept_all() -> impl QuadTransform {
    |_: &mut MutableQuad| true
}

/// Block whose faces are all visible
pub fn open_block() -> BlockRenderInfo<(), impl FaceVisibility> {
    BlockRenderInfo::new((), 42, |_: Direction| true)
}
