//! JSON output for colormaps.
//!
//! Produces the gradient format read by scala-chromatica:
//! `{"name": .., "stops": [{"position": .., "color": {"r": .., "g": .., "b": ..}}]}`.

use std::fs;
use std::path::Path;

use crate::error::{ConvertError, Result};
use crate::types::Colormap;

/// Textual layout of the JSON document. The data is identical either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// No whitespace between tokens.
    #[default]
    Compact,
    /// Two-space indentation.
    Pretty,
}

impl JsonStyle {
    pub fn from_pretty(pretty: bool) -> Self {
        if pretty {
            Self::Pretty
        } else {
            Self::Compact
        }
    }
}

/// Serialize a colormap as a single JSON document terminated by one newline.
pub fn encode_colormap(colormap: &Colormap, style: JsonStyle) -> Result<String> {
    let mut json = match style {
        JsonStyle::Compact => serde_json::to_string(colormap)?,
        JsonStyle::Pretty => serde_json::to_string_pretty(colormap)?,
    };
    json.push('\n');
    Ok(json)
}

/// Write a colormap JSON document to a file.
pub fn write_colormap_json(colormap: &Colormap, path: &Path, style: JsonStyle) -> Result<()> {
    let json = encode_colormap(colormap, style)?;
    fs::write(path, json).map_err(|e| ConvertError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write colormap: {}", e),
    })?;
    Ok(())
}
