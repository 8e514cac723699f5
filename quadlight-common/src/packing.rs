//! Vertex word packing utilities
//!
//! Provides functions to build and take apart the packed words of a
//! [`crate::PackedVertex`]:
//! - block/sky light ↔ lightmap u32
//! - color darkening for AO and diffuse shading

// ============================================================================
// Color Shading
// ============================================================================

/// Scale the RGB channels of a packed color by `shade`, keeping alpha
///
/// Used to bake ambient occlusion or directional diffuse into vertex color.
#[inline]
pub fn multiply_color(color: u32, shade: f32) -> u32 {
    let [r, g, b, a] = color.to_be_bytes();
    let scale = |c: u8| (c as f32 * shade.clamp(0.0, 1.0)).round() as u8;
    u32::from_be_bytes([scale(r), scale(g), scale(b), a])
}

// ============================================================================
// Lightmap Packing
// ============================================================================

/// Full brightness for one lightmap channel
pub const MAX_LIGHT: u16 = 240;

/// Pack block and sky light into a lightmap word
///
/// Each channel is clamped to [0, MAX_LIGHT]. Block light occupies bits
/// 0-15, sky light bits 16-31.
#[inline]
pub fn pack_lightmap(block: u16, sky: u16) -> u32 {
    (block.min(MAX_LIGHT) as u32) | ((sky.min(MAX_LIGHT) as u32) << 16)
}

/// Unpack a lightmap word to `(block, sky)`
#[inline]
pub fn unpack_lightmap(packed: u32) -> (u16, u16) {
    ((packed & 0xFFFF) as u16, (packed >> 16) as u16)
}
