//! coolors-colormap - Palette export to gradient converter
//!
//! A library for turning coolors.co palette XML exports into evenly-spaced
//! JSON colormaps.

pub mod cli;
pub mod convert;
pub mod error;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;

pub use convert::convert;
pub use error::{ConvertError, Result};
pub use parser::parse_palette_xml;
pub use render::{encode_colormap, write_colormap_json, JsonStyle};
pub use types::{build_colormap, stop_position, Colormap, GradientStop, PaletteColour, Rgb};
