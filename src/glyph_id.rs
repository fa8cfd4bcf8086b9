/// Font sizes are stored in 1/256 units so ids stay `Eq + Hash`.
pub const SIZE_QUANTIZE: f32 = 256f32;

/// One glyph of a loaded face at a given size.
///
/// Face ids come from `fontdb` and are only meaningful for the storage that
/// produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GlyphId {
    face: fontdb::ID,
    index: u16,
    quantized_size: u32,
}

impl GlyphId {
    /// Creates an id, rounding `font_size` to the nearest 1/256.
    pub fn new(face: fontdb::ID, index: u16, font_size: f32) -> Self {
        Self {
            face,
            index,
            quantized_size: (font_size * SIZE_QUANTIZE).round() as u32,
        }
    }

    /// Returns the face the glyph belongs to.
    pub fn face(&self) -> fontdb::ID {
        self.face
    }

    /// Returns the glyph index within the face.
    pub fn index(&self) -> u16 {
        self.index
    }

    /// Returns the quantized font size.
    pub fn font_size(&self) -> f32 {
        self.quantized_size as f32 / SIZE_QUANTIZE
    }

    /// Index 0 is the font's `.notdef` glyph, used for unmapped characters.
    pub fn is_notdef(&self) -> bool {
        self.index == 0
    }

    /// The same glyph as `ttf-parser` addresses it.
    pub fn outline_id(&self) -> ttf_parser::GlyphId {
        ttf_parser::GlyphId(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_is_quantized() {
        let a = GlyphId::new(fontdb::ID::dummy(), 36, 26.0);
        let b = GlyphId::new(fontdb::ID::dummy(), 36, 26.0 + 1.0 / 1024.0);
        assert_eq!(a, b);
        assert_eq!(a.font_size(), 26.0);
        assert_eq!(a.outline_id(), ttf_parser::GlyphId(36));
    }

    #[test]
    fn test_notdef() {
        assert!(GlyphId::new(fontdb::ID::dummy(), 0, 12.0).is_notdef());
        assert!(!GlyphId::new(fontdb::ID::dummy(), 1, 12.0).is_notdef());
    }
}
