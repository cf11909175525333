//! Colormap type and the palette-to-gradient mapping.

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};

use super::{PaletteColour, Rgb};

/// Decimal places kept for stop positions.
const POSITION_DECIMALS: i32 = 4;

/// One anchor point on the `[0.0, 1.0]` gradient axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub position: f64,
    pub color: Rgb,
}

impl GradientStop {
    pub fn new(position: f64, color: Rgb) -> Self {
        Self { position, color }
    }
}

/// A named, ordered sequence of gradient stops.
///
/// `name` is `None` only when a single unnamed colour was converted without
/// an explicit name; it is written out as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Colormap {
    pub name: Option<String>,
    pub stops: Vec<GradientStop>,
}

impl Colormap {
    /// Name used in status output.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// Map an ordered palette onto evenly-spaced gradient stops.
///
/// An explicit `name` always wins. Otherwise a single colour lends its own
/// name, and longer palettes are named `"<first> <last>"`.
pub fn build_colormap(colours: &[PaletteColour], name: Option<&str>) -> Result<Colormap> {
    let (first, last) = match (colours.first(), colours.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(ConvertError::EmptyPalette),
    };

    let name = match name {
        Some(name) => Some(name.to_string()),
        None if colours.len() == 1 => first.name.clone(),
        None => Some(format!(
            "{} {}",
            first.name.as_deref().unwrap_or(""),
            last.name.as_deref().unwrap_or("")
        )),
    };

    let count = colours.len();
    let stops = colours
        .iter()
        .enumerate()
        .map(|(i, colour)| GradientStop::new(stop_position(i, count), colour.rgb()))
        .collect();

    Ok(Colormap { name, stops })
}

/// Position of stop `index` out of `count`, rounded half away from zero to
/// four decimal places.
///
/// A lone stop sits at `0.0`; otherwise the first stop is exactly `0.0` and
/// the last exactly `1.0`.
pub fn stop_position(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return 0.0;
    }
    let raw = index as f64 / (count - 1) as f64;
    round_to(raw, POSITION_DECIMALS)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
