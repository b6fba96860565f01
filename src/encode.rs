//! Trait encoder: turns each layer into a (trait_type, value, pixels)
//! record against a finalized palette.
//!
//! Tokens are 3 characters wide plus the two-digit index: column letter,
//! row letter, palette index. Coordinates use single-letter base-26
//! encoding ('a'..='z'), so images wider or taller than 26 pixels are out
//! of contract.

use serde::Serialize;

use crate::colour::Colour;
use crate::error::{PxError, Result};
use crate::palette::Palette;
use crate::workspace::Layer;

/// Largest coordinate the letter encoding can express, exclusive.
pub const MAX_DIMENSION: u32 = 26;

/// One encoded layer, serialized in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trait {
    pub trait_type: String,
    pub value: String,
    pub pixels: String,
}

/// Map a coordinate to its letter: 0→'a' … 25→'z'.
pub fn coord_letter(n: u32) -> Option<char> {
    (n < MAX_DIMENSION).then(|| (b'a' + n as u8) as char)
}

/// Python `str.title()` semantics: the first character of every alphabetic
/// run is uppercased, the rest lowercased. Non-alphabetic characters pass
/// through and start a new run.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

/// Title-case a layer name and split it on the literal `" - "` separator.
///
/// No whitespace trimming is performed; the name must contain exactly one
/// separator.
pub fn split_trait_name(name: &str) -> Result<(String, String)> {
    let titled = title_case(name);
    let mut parts = titled.split(" - ");

    match (parts.next(), parts.next(), parts.next()) {
        (Some(trait_type), Some(value), None) => {
            Ok((trait_type.to_string(), value.to_string()))
        }
        _ => Err(PxError::Input {
            message: format!(
                "Layer name '{}' must contain exactly one ' - ' separator",
                name
            ),
            help: Some("Expected the form '<Type> - <Value>'".to_string()),
        }),
    }
}

/// Encode one layer against the finalized palette.
///
/// Pixels are visited column-major (x outer ascending, y inner ascending),
/// the same raster order the palette scan used; transparent pixels emit
/// nothing. A colour absent from the palette is a consistency violation:
/// both stages scanned identical layer data.
pub fn encode_layer(layer: &Layer, palette: &Palette) -> Result<Trait> {
    let (trait_type, value) = split_trait_name(&layer.name)?;
    let img = layer.decode_image()?;

    if img.width() > MAX_DIMENSION || img.height() > MAX_DIMENSION {
        return Err(PxError::Capacity {
            message: format!(
                "Layer '{}': image is {}x{}, larger than the {}x{} letter-coordinate space",
                layer.name,
                img.width(),
                img.height(),
                MAX_DIMENSION,
                MAX_DIMENSION
            ),
            help: Some("Coordinates are encoded as single letters 'a'-'z'".to_string()),
        });
    }

    let mut pixels = String::new();

    for x in 0..img.width() {
        for y in 0..img.height() {
            let colour = Colour::from_rgba(img.get_pixel(x, y).0);
            if colour.is_transparent() {
                continue;
            }

            let index = palette.index_of(colour).ok_or_else(|| PxError::Consistency {
                message: format!(
                    "Layer '{}': colour {} at ({}, {}) is missing from the palette",
                    layer.name,
                    colour.hex(),
                    x,
                    y
                ),
            })?;

            // Dimensions checked above, both letters exist
            pixels.extend(coord_letter(x));
            pixels.extend(coord_letter(y));
            pixels.push_str(&index);
        }
    }

    Ok(Trait {
        trait_type,
        value,
        pixels,
    })
}

/// Encode every layer, preserving layer order.
pub fn encode_traits(layers: &[Layer], palette: &Palette) -> Result<Vec<Trait>> {
    layers
        .iter()
        .map(|layer| encode_layer(layer, palette))
        .collect()
}

/// Serialize the trait manifest with 4-space indentation.
pub fn traits_json(traits: &[Trait]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    traits.serialize(&mut ser)?;

    Ok(String::from_utf8(buf).expect("serde_json emits valid UTF-8"))
}
