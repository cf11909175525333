//! Palette-to-colormap pipeline.
//!
//! Ties the XML parser to the colormap builder. No I/O happens here.

use crate::error::Result;
use crate::parser::parse_palette_xml;
use crate::types::{build_colormap, Colormap};

/// Convert a palette export into a colormap.
///
/// `name` overrides the name derived from the palette's colours.
pub fn convert(source: &str, name: Option<&str>) -> Result<Colormap> {
    let colours = parse_palette_xml(source)?;
    build_colormap(&colours, name)
}
