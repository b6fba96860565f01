//! Shared test fixtures: synthetic layers built by PNG-encoding small
//! in-memory images.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::{ImageFormat, RgbaImage};

use crate::colour::Colour;
use crate::workspace::Layer;

/// Encode a synthetic image as a raw base64 PNG payload.
pub fn png_payload(width: u32, height: u32, colour_at: impl Fn(u32, u32) -> Colour) -> String {
    let mut img = RgbaImage::new(width, height);
    for x in 0..width {
        for y in 0..height {
            let c = colour_at(x, y);
            img.put_pixel(x, y, image::Rgba([c.r, c.g, c.b, c.a]));
        }
    }

    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    BASE64.encode(&bytes)
}

/// Encode a synthetic image as a data-URI style src.
pub fn png_data_uri(width: u32, height: u32, colour_at: impl Fn(u32, u32) -> Colour) -> String {
    format!(
        "data:image/png;base64,{}",
        png_payload(width, height, colour_at)
    )
}

/// Build a layer with a synthetic image.
pub fn layer(name: &str, width: u32, height: u32, colour_at: impl Fn(u32, u32) -> Colour) -> Layer {
    Layer {
        name: name.to_string(),
        src: png_data_uri(width, height, colour_at),
    }
}

/// Reference fixture: 2x2 with (0,0) and (1,0) red, (0,1) transparent,
/// (1,1) blue.
pub fn red_sky_layer() -> Layer {
    layer("Background - Red Sky", 2, 2, |x, y| match (x, y) {
        (0, 0) | (1, 0) => Colour::rgb(255, 0, 0),
        (0, 1) => Colour::TRANSPARENT,
        _ => Colour::rgb(0, 0, 255),
    })
}
