//! Per-block render inputs

use std::cell::Cell;

use quadlight_common::Direction;
use rand::SeedableRng;

use crate::material::BlendMode;
use crate::pipeline::{FaceVisibility, ModelRandom};

/// Everything the renderer needs to know about the block being drawn
///
/// Lives for one block. Visibility answers are memoized per face, so the
/// host predicate runs at most once per face however many models the block
/// renders.
pub struct BlockRenderInfo<S, V> {
    state: S,
    seed: u64,
    default_layer: BlendMode,
    visibility: V,
    /// Bit per face: predicate already consulted
    cull_checked: Cell<u8>,
    /// Bit per face: face is drawn
    cull_drawn: Cell<u8>,
}

impl<S, V: FaceVisibility> BlockRenderInfo<S, V> {
    pub fn new(state: S, seed: u64, visibility: V) -> Self {
        Self {
            state,
            seed,
            default_layer: BlendMode::Solid,
            visibility,
            cull_checked: Cell::new(0),
            cull_drawn: Cell::new(0),
        }
    }

    /// Layer quads of this block are tessellated into
    pub fn with_default_layer(mut self, layer: BlendMode) -> Self {
        self.default_layer = layer;
        self
    }

    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn default_layer(&self) -> BlendMode {
        self.default_layer
    }

    /// Random source seeded from the block seed
    ///
    /// Every call starts the same sequence, so each bucket query made for
    /// the block sees identical randomness.
    pub fn random(&self) -> ModelRandom {
        ModelRandom::seed_from_u64(self.seed)
    }

    pub fn should_draw_face(&self, face: Direction) -> bool {
        let mask = 1u8 << face.index();
        if self.cull_checked.get() & mask == 0 {
            if self.visibility.should_draw_face(face) {
                self.cull_drawn.set(self.cull_drawn.get() | mask);
            }
            self.cull_checked.set(self.cull_checked.get() | mask);
        }
        self.cull_drawn.get() & mask != 0
    }
}
