//! Workspace document parsing and layer image decoding.
//!
//! The input is a Pixil-style JSON document with a `frames` array; frame 0's
//! `layers` list is the sole input to the pipeline. Each layer embeds its
//! raster image as base64, optionally behind a data-URI style
//! `...base64,` prefix.

use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::RgbaImage;
use serde::Deserialize;

use crate::error::{PxError, Result};

/// Workspace document loaded from a `.pixil` file.
#[derive(Debug, Clone, Deserialize)]
pub struct Workspace {
    pub frames: Vec<Frame>,
}

/// One animation frame. Only frame 0 is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct Frame {
    #[serde(default)]
    pub layers: Vec<Layer>,
}

/// One named raster layer with a base64-embedded image.
#[derive(Debug, Clone, Deserialize)]
pub struct Layer {
    pub name: String,
    pub src: String,
}

impl Workspace {
    /// Load a workspace from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PxError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read workspace: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a workspace from a JSON string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| PxError::Input {
            message: format!("Invalid workspace document: {}", e),
            help: Some("Expected a JSON document with a frames array".to_string()),
        })
    }

    /// The first frame's layer list, in file order.
    ///
    /// A frame with zero layers is valid (the outputs are empty); a
    /// workspace with zero frames is not.
    pub fn layers(&self) -> Result<&[Layer]> {
        self.frames
            .first()
            .map(|f| f.layers.as_slice())
            .ok_or_else(|| PxError::Input {
                message: "Workspace has no frames".to_string(),
                help: None,
            })
    }
}

impl Layer {
    /// Decode the embedded image to an RGBA8 buffer.
    ///
    /// Accepts either a raw base64 payload or one behind a comma-delimited
    /// prefix (`data:image/png;base64,...`); everything after the last
    /// `base64,` is the payload.
    pub fn decode_image(&self) -> Result<RgbaImage> {
        let payload = self.src.rsplit("base64,").next().unwrap_or(&self.src);

        let bytes = BASE64.decode(payload).map_err(|e| PxError::Input {
            message: format!("Layer '{}': invalid base64 src: {}", self.name, e),
            help: None,
        })?;

        let img = image::load_from_memory(&bytes).map_err(|e| PxError::Input {
            message: format!("Layer '{}': undecodable image: {}", self.name, e),
            help: None,
        })?;

        Ok(img.to_rgba8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{png_data_uri, png_payload};
    use crate::Colour;

    #[test]
    fn test_parse_minimal() {
        let ws = Workspace::parse(
            r#"{"frames": [{"layers": [{"name": "Body - Base", "src": "abc"}]}]}"#,
        )
        .unwrap();

        let layers = ws.layers().unwrap();
        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].name, "Body - Base");
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let ws = Workspace::parse(
            r#"{"application": "pixil", "frames": [{"speed": 100, "layers": []}]}"#,
        )
        .unwrap();
        assert!(ws.layers().unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(Workspace::parse("not json").is_err());
        assert!(Workspace::parse(r#"{"frames": "nope"}"#).is_err());
    }

    #[test]
    fn test_no_frames_is_error() {
        let ws = Workspace::parse(r#"{"frames": []}"#).unwrap();
        assert!(ws.layers().is_err());
    }

    #[test]
    fn test_only_first_frame_used() {
        let ws = Workspace::parse(
            r#"{"frames": [{"layers": []}, {"layers": [{"name": "x", "src": "y"}]}]}"#,
        )
        .unwrap();
        assert!(ws.layers().unwrap().is_empty());
    }

    #[test]
    fn test_decode_image_with_prefix() {
        let layer = Layer {
            name: "Body - Base".to_string(),
            src: png_data_uri(2, 1, |x, _| {
                if x == 0 {
                    Colour::rgb(255, 0, 0)
                } else {
                    Colour::TRANSPARENT
                }
            }),
        };

        let img = layer.decode_image().unwrap();
        assert_eq!((img.width(), img.height()), (2, 1));
        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 0).0[3], 0);
    }

    #[test]
    fn test_decode_image_raw_base64() {
        let layer = Layer {
            name: "Body - Base".to_string(),
            src: png_payload(1, 1, |_, _| Colour::rgb(1, 2, 3)),
        };

        let img = layer.decode_image().unwrap();
        assert_eq!(img.get_pixel(0, 0).0, [1, 2, 3, 255]);
    }

    #[test]
    fn test_decode_image_bad_base64() {
        let layer = Layer {
            name: "Broken".to_string(),
            src: "data:image/png;base64,%%%".to_string(),
        };
        assert!(layer.decode_image().is_err());
    }

    #[test]
    fn test_decode_image_not_an_image() {
        let layer = Layer {
            name: "Broken".to_string(),
            src: BASE64.encode(b"definitely not a png"),
        };
        assert!(layer.decode_image().is_err());
    }
}
