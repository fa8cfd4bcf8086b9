use std::{fmt, str::FromStr};

use crate::error::{Result, TransferError};

/// Bundled brand fonts the ID lines can be drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BrandFont {
    Nike,
    Puma,
}

impl BrandFont {
    /// Font size the font was tuned for, in document units.
    pub fn default_font_size(self) -> f32 {
        match self {
            BrandFont::Nike => 26.0,
            BrandFont::Puma => 32.0,
        }
    }
}

/// A `#rgb` or `#rrggbb` color, stored lowercase.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    /// Returns the color as written into SVG attributes.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for HexColor {
    type Err = TransferError;

    fn from_str(s: &str) -> Result<Self> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| TransferError::InvalidStyle(format!("color {s:?} must start with '#'")))?;

        if !matches!(digits.len(), 3 | 6) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(TransferError::InvalidStyle(format!(
                "color {s:?} is not #rgb or #rrggbb"
            )));
        }

        Ok(Self(s.to_ascii_lowercase()))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stroke colors of an artwork.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferColors {
    /// Outer glyph outlines and the identifier line.
    pub glyph: HexColor,
    /// Counters (holes) inside ID glyphs.
    pub counter: HexColor,
    /// Perforation border.
    pub perforation: HexColor,
}

impl Default for TransferColors {
    fn default() -> Self {
        Self {
            glyph: HexColor("#ff0000".to_string()),
            counter: HexColor("#0000ff".to_string()),
            perforation: HexColor("#00ff00".to_string()),
        }
    }
}

/// Snapshot of the style inputs for one rendering call.
#[derive(Clone, Debug, PartialEq)]
pub struct TransferStyle {
    pub font: BrandFont,
    pub font_size: f32,
    pub colors: TransferColors,
}

impl Default for TransferStyle {
    fn default() -> Self {
        Self::for_font(BrandFont::Nike)
    }
}

impl TransferStyle {
    /// Default colors and the font's tuned size.
    pub fn for_font(font: BrandFont) -> Self {
        Self {
            font,
            font_size: font.default_font_size(),
            colors: TransferColors::default(),
        }
    }

    /// Checks that the font size is positive and finite.
    pub fn validate(&self) -> Result<()> {
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(TransferError::InvalidStyle(format!(
                "font size must be positive, got {}",
                self.font_size
            )));
        }
        Ok(())
    }
}

/// How an artwork is going to be used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// On-screen preview: thick strokes, document scales to its container.
    Preview,
    /// Cutter output: hairline strokes, exact document size.
    Production,
}
