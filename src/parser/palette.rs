//! Palette export parser.
//!
//! Parses coolors.co XML exports into `PaletteColour` lists:
//!
//! ```xml
//! <palette>
//!   <color name="Coral" hex="ff7f50" r="255" g="127" b="80" />
//!   <color name="Teal" hex="008080" r="0" g="128" b="128" />
//! </palette>
//! ```

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{ConvertError, Result};
use crate::types::PaletteColour;

/// Element name of a palette entry.
const COLOUR_TAG: &[u8] = b"color";

/// Parse a palette export into its colours, in document order.
///
/// Only `<color>` elements that are direct children of the root element are
/// read; anything else is skipped. A root without colours yields an empty
/// list.
///
/// The whole document is checked for well-formedness before any colour error
/// is reported, so broken markup is always a `MalformedDocument`.
pub fn parse_palette_xml(source: &str) -> Result<Vec<PaletteColour>> {
    let mut reader = Reader::from_str(source);
    reader.config_mut().trim_text(true);

    let mut colours = Vec::new();
    let mut colour_count = 0usize;
    let mut colour_error: Option<ConvertError> = None;
    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        let event = reader.read_event().map_err(|e| ConvertError::MalformedDocument {
            message: e.to_string(),
            offset: reader.error_position() as u64,
        })?;
        let offset = reader.buffer_position() as u64;
        let malformed = |message: &str| ConvertError::MalformedDocument {
            message: message.to_string(),
            offset,
        };

        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let attributes = read_attributes(e, offset)?;
                if depth == 0 {
                    if seen_root {
                        return Err(malformed("junk after document element"));
                    }
                    seen_root = true;
                } else if depth == 1 && e.name().as_ref() == COLOUR_TAG {
                    colour_count += 1;
                    match parse_colour(&attributes, colour_count) {
                        Ok(colour) => colours.push(colour),
                        Err(err) => {
                            if colour_error.is_none() {
                                colour_error = Some(err);
                            }
                        }
                    }
                }
                if matches!(event, Event::Start(_)) {
                    depth += 1;
                }
            }
            Event::End(_) => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| malformed("unmatched closing tag"))?;
            }
            Event::Text(ref t) => {
                t.unescape().map_err(|e| ConvertError::MalformedDocument {
                    message: e.to_string(),
                    offset,
                })?;
                if depth == 0 && !t.is_empty() {
                    return Err(malformed("text outside of the root element"));
                }
            }
            Event::CData(_) if depth == 0 => {
                return Err(malformed("text outside of the root element"));
            }
            Event::Eof => {
                if depth > 0 {
                    return Err(malformed("unclosed element at end of input"));
                }
                if !seen_root {
                    return Err(malformed("no element found"));
                }
                break;
            }
            _ => {}
        }
    }

    match colour_error {
        Some(err) => Err(err),
        None => Ok(colours),
    }
}

/// Read and unescape every attribute of an element.
///
/// Attributes without a quoted value, duplicated names, unknown entities and
/// a raw `<` inside a value all make the document malformed.
fn read_attributes(element: &BytesStart<'_>, offset: u64) -> Result<Vec<(Vec<u8>, String)>> {
    let malformed = |message: String| ConvertError::MalformedDocument { message, offset };

    let mut attributes = Vec::new();
    for attr in element.attributes() {
        let attr = attr.map_err(|e| malformed(e.to_string()))?;
        if attr.value.contains(&b'<') {
            return Err(malformed(format!(
                "'<' not allowed in value of attribute `{}`",
                String::from_utf8_lossy(attr.key.as_ref())
            )));
        }
        let value = attr
            .unescape_value()
            .map_err(|e| malformed(e.to_string()))?
            .into_owned();
        attributes.push((attr.key.as_ref().to_vec(), value));
    }
    Ok(attributes)
}

/// Attributes of a single `<color>` element, before channel parsing.
#[derive(Default)]
struct RawColour<'a> {
    name: Option<&'a str>,
    hex: Option<&'a str>,
    r: Option<&'a str>,
    g: Option<&'a str>,
    b: Option<&'a str>,
}

/// Build one colour from its attributes. `index` is 1-based, for diagnostics.
fn parse_colour(attributes: &[(Vec<u8>, String)], index: usize) -> Result<PaletteColour> {
    let mut raw = RawColour::default();

    for (key, value) in attributes {
        let value = Some(value.as_str());
        match key.as_slice() {
            b"name" => raw.name = value,
            b"hex" => raw.hex = value,
            b"r" => raw.r = value,
            b"g" => raw.g = value,
            b"b" => raw.b = value,
            _ => {}
        }
    }

    Ok(PaletteColour {
        r: parse_channel(raw.r, "r", index)?,
        g: parse_channel(raw.g, "g", index)?,
        b: parse_channel(raw.b, "b", index)?,
        name: raw.name.map(str::to_string),
        hex: raw.hex.map(str::to_string),
    })
}

/// Parse a base-10 channel value. Surrounding whitespace is ignored.
fn parse_channel(value: Option<&str>, attribute: &str, index: usize) -> Result<u8> {
    let value = value.ok_or_else(|| ConvertError::MalformedColour {
        index,
        attribute: attribute.to_string(),
        message: format!("missing required attribute `{}`", attribute),
        help: Some(format!("Add {}=\"0\"..\"255\" to the <color> element", attribute)),
    })?;

    value
        .trim()
        .parse::<u8>()
        .map_err(|_| ConvertError::MalformedColour {
            index,
            attribute: attribute.to_string(),
            message: format!("attribute `{}` is not an integer in 0..=255: {:?}", attribute, value),
            help: Some("Channels must be base-10 integers between 0 and 255".to_string()),
        })
}
