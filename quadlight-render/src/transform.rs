//! Per-quad transform hooks

use crate::quad::MutableQuad;

/// Hook run once per quad before lighting
///
/// May edit any field of the quad. Returning `false` drops the quad: it is
/// neither lit, offset nor tessellated.
pub trait QuadTransform {
    fn transform(&mut self, quad: &mut MutableQuad) -> bool;
}

impl<F> QuadTransform for F
where
    F: FnMut(&mut MutableQuad) -> bool,
{
    fn transform(&mut self, quad: &mut MutableQuad) -> bool {
        self(quad)
    }
}

/// Ordered stack of transforms
///
/// Transforms run in push order; the first veto stops the rest. An empty
/// stack keeps every quad unchanged.
#[derive(Default)]
pub struct TransformStack<'a> {
    transforms: Vec<Box<dyn QuadTransform + 'a>>,
}

impl<'a> TransformStack<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, transform: impl QuadTransform + 'a) {
        self.transforms.push(Box::new(transform));
    }

    /// Remove the most recently pushed transform
    pub fn pop(&mut self) -> Option<Box<dyn QuadTransform + 'a>> {
        self.transforms.pop()
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

impl QuadTransform for TransformStack<'_> {
    fn transform(&mut self, quad: &mut MutableQuad) -> bool {
        self.transforms.iter_mut().all(|t| t.transform(quad))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::MaterialFinder;
    use quadlight_common::{BakedQuad, CullFace, Direction};
    use std::cell::Cell;

    fn quad() -> MutableQuad {
        let material = MaterialFinder::new().find();
        let mut quad = MutableQuad::blank(material);
        quad.load(&BakedQuad::unit_face(Direction::Up, 0), CullFace::None, material);
        quad
    }

    #[test]
    fn test_empty_stack_accepts() {
        let mut stack = TransformStack::new();
        assert!(stack.is_empty());
        assert!(stack.transform(&mut quad()));
    }

    #[test]
    fn test_stack_runs_in_push_order() {
        let mut stack = TransformStack::new();
        stack.push(|q: &mut MutableQuad| {
            q.set_color_index(q.color_index() * 10 + 1);
            true
        });
        stack.push(|q: &mut MutableQuad| {
            q.set_color_index(q.color_index() * 10 + 2);
            true
        });
        let mut q = quad();
        assert!(stack.transform(&mut q));
        assert_eq!(q.color_index(), 12);
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_veto_short_circuits() {
        let later_calls = Cell::new(0);
        let mut stack = TransformStack::new();
        stack.push(|_: &mut MutableQuad| false);
        stack.push(|_: &mut MutableQuad| {
            later_calls.set(later_calls.get() + 1);
            true
        });
        assert!(!stack.transform(&mut quad()));
        assert_eq!(later_calls.get(), 0);
    }

    #[test]
    fn test_pop_removes_last() {
        let mut stack = TransformStack::new();
        stack.push(|_: &mut MutableQuad| true);
        stack.push(|_: &mut MutableQuad| false);
        assert!(!stack.transform(&mut quad()));
        assert!(stack.pop().is_some());
        assert!(stack.transform(&mut quad()));
        assert!(stack.pop().is_some());
        assert!(stack.pop().is_none());
    }
}
