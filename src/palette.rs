//! Palette builder: the deduplicated, indexed set of opaque colours across
//! all layers.
//!
//! Index assignment must be byte-for-byte reproducible run-to-run, because
//! the trait encoder embeds indices into pixel tokens and the fill
//! stylesheet lists colours by index. Deduplication uses a hash map for
//! membership but iteration and index order is an explicit first-seen
//! insertion order, never hash order.

use std::collections::HashMap;

use crate::colour::Colour;
use crate::error::{PxError, Result};
use crate::workspace::Layer;

/// Indices are zero-padded two-digit decimal strings, so the palette caps
/// out at 100 distinct colours.
pub const MAX_COLOURS: usize = 100;

/// Insertion-ordered set of unique opaque colours, indexed 0..len.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    order: Vec<Colour>,
    indices: HashMap<Colour, usize>,
}

impl Palette {
    /// Build a palette by scanning every layer.
    ///
    /// Visits layers in file order, then pixels column-major (x ascending
    /// outer, y ascending inner) — the same raster order the trait encoder
    /// uses, so both stages observe identical colour sequences.
    pub fn scan(layers: &[Layer]) -> Result<Self> {
        let mut palette = Self::default();

        for layer in layers {
            let img = layer.decode_image()?;

            for x in 0..img.width() {
                for y in 0..img.height() {
                    let colour = Colour::from_rgba(img.get_pixel(x, y).0);
                    if colour.is_transparent() {
                        continue;
                    }
                    palette.insert(colour, &layer.name)?;
                }
            }
        }

        Ok(palette)
    }

    /// Insert a colour, assigning the next index if it is new.
    fn insert(&mut self, colour: Colour, layer_name: &str) -> Result<()> {
        let key = Self::key(colour);
        if self.indices.contains_key(&key) {
            return Ok(());
        }

        if self.order.len() >= MAX_COLOURS {
            return Err(PxError::Capacity {
                message: format!(
                    "Layer '{}': colour {} would exceed the {}-colour palette limit",
                    layer_name,
                    colour.hex(),
                    MAX_COLOURS
                ),
                help: Some("Palette indices are two decimal digits (00-99)".to_string()),
            });
        }

        self.indices.insert(key, self.order.len());
        self.order.push(key);
        Ok(())
    }

    /// Look up a colour's two-digit index string ("00".."99").
    ///
    /// Alpha is ignored: any non-transparent pixel maps through its RGB
    /// channels alone, matching the hex form the palette deduplicates on.
    pub fn index_of(&self, colour: Colour) -> Option<String> {
        self.indices
            .get(&Self::key(colour))
            .map(|i| format!("{:02}", i))
    }

    /// Colours in index order.
    pub fn colours(&self) -> impl Iterator<Item = &Colour> {
        self.order.iter()
    }

    /// Number of unique colours.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Render the fills stylesheet: one `.c<NN> {fill: #rrggbb}` line per
    /// colour, in index order, each newline-terminated.
    pub fn fill_rules(&self) -> String {
        let mut out = String::new();
        for (i, colour) in self.order.iter().enumerate() {
            out.push_str(&format!(".c{:02} {{fill: {}}}\n", i, colour.hex()));
        }
        out
    }

    /// Colours compare by RGB only; alpha 255 is the canonical form.
    fn key(colour: Colour) -> Colour {
        Colour::rgb(colour.r, colour.g, colour.b)
    }
}
