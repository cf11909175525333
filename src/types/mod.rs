//! Core domain types for the converter.
//!
//! - `PaletteColour` - One named colour read from a palette export
//! - `Rgb` - The channel triple carried into a gradient stop
//! - `Colormap` / `GradientStop` - The evenly-spaced gradient that is written out

mod colormap;
mod colour;

pub use colormap::{build_colormap, stop_position, Colormap, GradientStop};
pub use colour::{PaletteColour, Rgb};
