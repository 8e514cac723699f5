//! Block placement offsets

use glam::Vec3;

use crate::pipeline::OffsetPolicy;
use crate::quad::MutableQuad;

/// Translates quads from block-local space into buffer space
///
/// `origin` is the block's position relative to the buffer origin; `jitter`
/// is the per-position model offset some blocks (grass, flowers) carry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BlockOffset {
    pub origin: Vec3,
    pub jitter: Vec3,
}

impl BlockOffset {
    pub fn new(origin: Vec3) -> Self {
        Self {
            origin,
            jitter: Vec3::ZERO,
        }
    }

    pub fn with_jitter(mut self, jitter: Vec3) -> Self {
        self.jitter = jitter;
        self
    }
}

impl OffsetPolicy for BlockOffset {
    fn apply_offsets(&self, quad: &mut MutableQuad) {
        let offset = self.origin + self.jitter;
        if offset != Vec3::ZERO {
            quad.translate(offset);
        }
    }
}
