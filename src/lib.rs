//! pxtraits - pixel-art workspace to trait-manifest converter
//!
//! A library for converting multi-layer pixel-art workspace documents into
//! a deduplicated fills stylesheet and a per-layer trait manifest of
//! encoded pixel tokens.

pub mod cli;
pub mod colour;
pub mod encode;
pub mod error;
pub mod manifest;
pub mod output;
pub mod palette;
pub mod workspace;

#[cfg(test)]
pub(crate) mod testutil;

pub use colour::Colour;
pub use encode::{
    coord_letter, encode_layer, encode_traits, split_trait_name, title_case, traits_json, Trait,
    MAX_DIMENSION,
};
pub use error::{PxError, Result};
pub use manifest::Manifest;
pub use palette::{Palette, MAX_COLOURS};
pub use workspace::{Frame, Layer, Workspace};
