use crate::glyph_id::GlyphId;

/// A glyph on the baseline, `x` measured from the line origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphPosition {
    pub ch: char,
    pub glyph_id: GlyphId,
    pub x: f32,
}

/// One line of text laid out left to right.
///
/// Lines never wrap: every character is placed on the same baseline, with
/// pair kerning applied between neighbouring glyphs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextLine {
    pub font_size: f32,
    /// Pen position after the last glyph.
    pub advance: f32,
    pub glyphs: Vec<GlyphPosition>,
}

impl TextLine {
    /// Lays `text` out with `font`, whose face is registered as `face`.
    ///
    /// Characters the font does not map fall back to `.notdef` and are
    /// reported with a warning.
    pub fn layout(font: &fontdue::Font, face: fontdb::ID, text: &str, font_size: f32) -> Self {
        let mut glyphs = Vec::with_capacity(text.len());
        let mut pen = 0.0;
        let mut previous: Option<u16> = None;

        for ch in text.chars() {
            let index = font.lookup_glyph_index(ch);
            if index == 0 && !ch.is_whitespace() {
                log::warn!("No glyph for {ch:?} (face {face:?}), using .notdef.");
            }

            if let Some(left) = previous {
                pen += font
                    .horizontal_kern_indexed(left, index, font_size)
                    .unwrap_or(0.0);
            }

            glyphs.push(GlyphPosition {
                ch,
                glyph_id: GlyphId::new(face, index, font_size),
                x: pen,
            });

            pen += font.metrics_indexed(index, font_size).advance_width;
            previous = Some(index);
        }

        Self {
            font_size,
            advance: pen,
            glyphs,
        }
    }

    /// Checks if the line holds no glyphs.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyphs that contribute an outline.
    ///
    /// Whitespace and `.notdef` fallbacks keep their advance but draw nothing.
    pub fn visible_glyphs(&self) -> impl Iterator<Item = &GlyphPosition> {
        self.glyphs
            .iter()
            .filter(|g| !g.ch.is_whitespace() && !g.glyph_id.is_notdef())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(ch: char, index: u16, x: f32) -> GlyphPosition {
        GlyphPosition {
            ch,
            glyph_id: GlyphId::new(fontdb::ID::dummy(), index, 26.0),
            x,
        }
    }

    #[test]
    fn test_unmapped_and_blank_glyphs_are_hidden() {
        let line = TextLine {
            font_size: 26.0,
            advance: 60.0,
            glyphs: vec![
                glyph('A', 36, 0.0),
                glyph(' ', 3, 15.0),
                glyph('\u{E000}', 0, 22.0),
                glyph('B', 37, 45.0),
            ],
        };

        let visible: Vec<char> = line.visible_glyphs().map(|g| g.ch).collect();
        assert_eq!(visible, ['A', 'B']);
        // the fallback still pushed `B` along
        assert_eq!(line.glyphs[3].x, 45.0);
    }
}
