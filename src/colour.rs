//! Colour type and hex formatting.

use std::fmt;

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Create a colour from an RGBA byte array (image crate pixel layout).
    pub const fn from_rgba(rgba: [u8; 4]) -> Self {
        Self::new(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    /// Check if the colour is fully transparent.
    ///
    /// Transparent pixels are treated as absent: they contribute no palette
    /// entry and no pixel token.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Canonical lowercase 6-digit hex form, `#rrggbb`.
    ///
    /// Alpha is never rendered: only opaque colours reach the palette, and
    /// the fill stylesheet and pixel tokens both key on the RGB channels.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_lowercase() {
        assert_eq!(Colour::rgb(255, 0, 0).hex(), "#ff0000");
        assert_eq!(Colour::rgb(0x1a, 0xb2, 0x2e).hex(), "#1ab22e");
    }

    #[test]
    fn test_hex_zero_padded() {
        assert_eq!(Colour::rgb(0, 1, 2).hex(), "#000102");
    }

    #[test]
    fn test_hex_ignores_alpha() {
        // Same RGB, different alpha: same hex form
        assert_eq!(Colour::new(3, 4, 5, 7).hex(), Colour::rgb(3, 4, 5).hex());
    }

    #[test]
    fn test_from_rgba() {
        let c = Colour::from_rgba([10, 20, 30, 40]);
        assert_eq!(c, Colour::new(10, 20, 30, 40));
    }

    #[test]
    fn test_is_transparent() {
        assert!(Colour::TRANSPARENT.is_transparent());
        assert!(Colour::new(255, 0, 0, 0).is_transparent());
        assert!(!Colour::new(255, 0, 0, 1).is_transparent());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Colour::rgb(255, 0, 255)), "#ff00ff");
    }
}
