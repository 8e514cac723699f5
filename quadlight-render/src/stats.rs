//! Render counters

use std::ops::AddAssign;

use crate::router::RouteOutcome;

/// Quad counts for one or more rendered models
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Quads copied into the editor
    pub quads: u32,
    /// Quads dropped by the transform hook
    pub vetoed: u32,
    /// Quads sent to the smooth tessellator
    pub smooth: u32,
    /// Quads sent to the flat tessellator
    pub flat: u32,
    /// Directional buckets skipped by visibility
    pub faces_culled: u32,
}

impl RenderStats {
    pub(crate) fn record(&mut self, outcome: RouteOutcome) {
        self.quads += 1;
        match outcome {
            RouteOutcome::Discarded => self.vetoed += 1,
            RouteOutcome::Smooth => self.smooth += 1,
            RouteOutcome::Flat => self.flat += 1,
        }
    }

    /// Quads that reached a tessellator
    pub fn tessellated(&self) -> u32 {
        self.smooth + self.flat
    }
}

impl AddAssign for RenderStats {
    fn add_assign(&mut self, rhs: Self) {
        self.quads += rhs.quads;
        self.vetoed += rhs.vetoed;
        self.smooth += rhs.smooth;
        self.flat += rhs.flat;
        self.faces_culled += rhs.faces_culled;
    }
}
