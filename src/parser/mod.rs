//! Parser modules for palette exports.
//!
//! # Usage
//!
//! ```ignore
//! use coolors_colormap::parser::parse_palette_xml;
//!
//! let source = std::fs::read_to_string("palette.xml")?;
//! for colour in parse_palette_xml(&source)? {
//!     println!("{:?} {:?}", colour.name, colour.rgb());
//! }
//! ```

pub mod palette;

pub use palette::parse_palette_xml;
