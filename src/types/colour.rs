//! Palette colour records and RGB triples.

use serde::{Deserialize, Serialize};

/// An RGB colour triple, serialized as `{"r": .., "g": .., "b": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a colour from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One `<color>` entry of a palette export, in document order.
///
/// `name` and `hex` are passed through exactly as written (after XML
/// unescaping) and are `None` when the attribute is absent. The hex value
/// is never checked against the channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteColour {
    pub name: Option<String>,
    pub hex: Option<String>,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PaletteColour {
    /// Create a palette colour with a name and hex label.
    pub fn new(name: impl Into<String>, hex: impl Into<String>, r: u8, g: u8, b: u8) -> Self {
        Self {
            name: Some(name.into()),
            hex: Some(hex.into()),
            r,
            g,
            b,
        }
    }

    /// The channel triple of this colour.
    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}
