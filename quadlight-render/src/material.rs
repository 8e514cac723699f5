//! Render materials
//!
//! A material is a small immutable value. The pipeline itself only reads
//! [`RenderMaterial::has_ao`]; everything else is passed through untouched
//! for the tessellators.

/// Render layer a quad is buffered into
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlendMode {
    /// Use the block's default layer
    #[default]
    Default = 0,
    Solid = 1,
    CutoutMipped = 2,
    Cutout = 3,
    Translucent = 4,
}

bitflags::bitflags! {
    /// Material switches
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MaterialFlags: u8 {
        /// Ignore the quad's color index (no tint)
        const DISABLE_COLOR_INDEX = 0b0000_0001;
        /// Full brightness regardless of lightmap
        const EMISSIVE = 0b0000_0010;
        /// Skip directional diffuse shading
        const DISABLE_DIFFUSE = 0b0000_0100;
        /// Flat per-face lighting instead of smooth ambient occlusion
        const DISABLE_AO = 0b0000_1000;
    }
}

/// Immutable material descriptor
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RenderMaterial {
    blend_mode: BlendMode,
    flags: MaterialFlags,
}

impl RenderMaterial {
    #[inline]
    pub const fn blend_mode(&self) -> BlendMode {
        self.blend_mode
    }

    #[inline]
    pub const fn flags(&self) -> MaterialFlags {
        self.flags
    }

    /// True when quads using this material take the smooth (AO) lighting path
    #[inline]
    pub const fn has_ao(&self) -> bool {
        !self.flags.contains(MaterialFlags::DISABLE_AO)
    }

    #[inline]
    pub const fn emissive(&self) -> bool {
        self.flags.contains(MaterialFlags::EMISSIVE)
    }

    #[inline]
    pub const fn disable_diffuse(&self) -> bool {
        self.flags.contains(MaterialFlags::DISABLE_DIFFUSE)
    }

    #[inline]
    pub const fn disable_color_index(&self) -> bool {
        self.flags.contains(MaterialFlags::DISABLE_COLOR_INDEX)
    }
}

/// Builder for [`RenderMaterial`] values
///
/// ```
/// use quadlight::{BlendMode, MaterialFinder};
///
/// let glass = MaterialFinder::new()
///     .blend_mode(BlendMode::Translucent)
///     .disable_ao(true)
///     .find();
/// assert!(!glass.has_ao());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct MaterialFinder {
    blend_mode: BlendMode,
    flags: MaterialFlags,
}

impl MaterialFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blend_mode(mut self, mode: BlendMode) -> Self {
        self.blend_mode = mode;
        self
    }

    pub fn disable_color_index(self, disable: bool) -> Self {
        self.with(MaterialFlags::DISABLE_COLOR_INDEX, disable)
    }

    pub fn emissive(self, emissive: bool) -> Self {
        self.with(MaterialFlags::EMISSIVE, emissive)
    }

    pub fn disable_diffuse(self, disable: bool) -> Self {
        self.with(MaterialFlags::DISABLE_DIFFUSE, disable)
    }

    pub fn disable_ao(self, disable: bool) -> Self {
        self.with(MaterialFlags::DISABLE_AO, disable)
    }

    /// Reset to the default material
    pub fn clear(self) -> Self {
        Self::default()
    }

    pub fn find(&self) -> RenderMaterial {
        RenderMaterial {
            blend_mode: self.blend_mode,
            flags: self.flags,
        }
    }

    fn with(mut self, flag: MaterialFlags, enabled: bool) -> Self {
        self.flags.set(flag, enabled);
        self
    }
}

/// The two canonical materials assigned to quads that carry no material
/// of their own
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DefaultMaterials {
    /// Smooth-lit (ambient occlusion enabled)
    pub shaded: RenderMaterial,
    /// Flat-lit
    pub flat: RenderMaterial,
}

impl DefaultMaterials {
    pub fn standard() -> Self {
        let finder = MaterialFinder::new();
        Self {
            shaded: finder.find(),
            flat: finder.disable_ao(true).find(),
        }
    }

    /// Default material for one model
    ///
    /// Shaded only when ambient occlusion is enabled globally and the model
    /// asks for it.
    pub fn select(&self, global_ao: bool, model_ao: bool) -> RenderMaterial {
        if global_ao && model_ao {
            self.shaded
        } else {
            self.flat
        }
    }
}

impl Default for DefaultMaterials {
    fn default() -> Self {
        Self::standard()
    }
}
