//! Output rendering for colormaps.

mod json;

pub use json::{encode_colormap, write_colormap_json, JsonStyle};
