//! Synthetic glyph geometry for unit tests.

use crate::{
    error::Result,
    outline::{GlyphOutlineSource, OutlineFont, PathCommand, Point},
};

/// A `size`-wide square with its lower-left corner on `(x, y)`.
///
/// Drawn the way a font's outer outline arrives after the y-flip unless
/// `reversed` is set, in which case it winds like a counter.
pub fn square(x: f32, y: f32, size: f32, reversed: bool) -> Vec<PathCommand> {
    let mut corners = [
        Point::new(x, y),
        Point::new(x, y - size),
        Point::new(x + size, y - size),
        Point::new(x + size, y),
    ];
    if reversed {
        corners.reverse();
    }

    let mut commands = vec![PathCommand::MoveTo(corners[0])];
    commands.extend(corners[1..].iter().map(|&p| PathCommand::LineTo(p)));
    commands.push(PathCommand::Close);
    commands
}

/// Monospaced block glyphs: every non-space character is a box, and
/// characters with a hole get a counter box inside it.
pub struct BlockOutlines;

impl BlockOutlines {
    /// Horizontal advance of every glyph.
    pub fn advance(font_size: f32) -> f32 {
        font_size * 0.6
    }

    fn has_counter(ch: char) -> bool {
        "04689ABDOPQRabdegopq".contains(ch)
    }
}

impl GlyphOutlineSource for BlockOutlines {
    fn text_path(
        &self,
        _font: OutlineFont,
        text: &str,
        origin: Point,
        font_size: f32,
    ) -> Result<Vec<PathCommand>> {
        let advance = Self::advance(font_size);
        let height = font_size * 0.7;
        let mut commands = Vec::new();

        for (i, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let left = origin.x + i as f32 * advance + advance * 0.1;
            let width = advance * 0.8;

            commands.extend([
                PathCommand::MoveTo(Point::new(left, origin.y)),
                PathCommand::LineTo(Point::new(left, origin.y - height)),
                PathCommand::LineTo(Point::new(left + width, origin.y - height)),
                PathCommand::LineTo(Point::new(left + width, origin.y)),
                PathCommand::Close,
            ]);

            if Self::has_counter(ch) {
                let inset = width * 0.25;
                let bottom = origin.y - inset;
                let top = origin.y - height + inset;
                commands.extend([
                    PathCommand::MoveTo(Point::new(left + inset, bottom)),
                    PathCommand::LineTo(Point::new(left + width - inset, bottom)),
                    PathCommand::LineTo(Point::new(left + width - inset, top)),
                    PathCommand::LineTo(Point::new(left + inset, top)),
                    PathCommand::Close,
                ]);
            }
        }

        Ok(commands)
    }
}
