//! Shared types and utilities for the quadlight pipeline
//!
//! This crate holds the pieces that are independent of lighting policy:
//! - [`direction`] - Axis directions and cull-face buckets
//! - [`encoding`] - Fixed-layout vertex words for one quad
//! - [`packing`] - Color and lightmap word packing
//! - [`geometry`] - Shape analysis producing [`GeometryFlags`]

pub mod direction;
pub mod encoding;
pub mod geometry;
pub mod packing;

pub use direction::{Axis, CullFace, Direction};
pub use encoding::{BakedQuad, PackedVertex, QUAD_STRIDE, VERTEX_COUNT, VERTEX_STRIDE};
pub use geometry::{GeometryFlags, compute_geometry_flags, face_normal};
pub use packing::{MAX_LIGHT, multiply_color, pack_lightmap, unpack_lightmap};
