use crate::{artwork::BrandFont, error::Result};

/// A point in document units. **Y-axis goes down.**
pub type Point = euclid::default::Point2D<f32>;

/// One path-drawing command, in the order a font renderer emits them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Cubic Bézier: two control points, then the end point.
    CurveTo(Point, Point, Point),
    /// Quadratic Bézier: one control point, then the end point.
    QuadTo(Point, Point),
    Close,
}

impl PathCommand {
    /// The anchor the command ends on. Control points are not included.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathCommand::MoveTo(p)
            | PathCommand::LineTo(p)
            | PathCommand::CurveTo(_, _, p)
            | PathCommand::QuadTo(_, p) => Some(p),
            PathCommand::Close => None,
        }
    }

    /// Returns the command name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            PathCommand::MoveTo(_) => "MoveTo",
            PathCommand::LineTo(_) => "LineTo",
            PathCommand::CurveTo(..) => "CurveTo",
            PathCommand::QuadTo(..) => "QuadTo",
            PathCommand::Close => "Close",
        }
    }

    /// Returns the command shifted by `(dx, dy)`.
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        let v = euclid::default::Vector2D::new(dx, dy);
        match *self {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(p + v),
            PathCommand::LineTo(p) => PathCommand::LineTo(p + v),
            PathCommand::CurveTo(c1, c2, p) => PathCommand::CurveTo(c1 + v, c2 + v, p + v),
            PathCommand::QuadTo(c, p) => PathCommand::QuadTo(c + v, p + v),
            PathCommand::Close => PathCommand::Close,
        }
    }
}

/// The font a line of text is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutlineFont {
    /// Condensed secondary font used for the identifier line.
    Condensed,
    /// Brand font used for the cuttable ID lines.
    Brand(BrandFont),
}

/// Provider of glyph outlines for whole strings.
///
/// Implementations lay `text` out on a single baseline starting at `origin`
/// and return the outline commands of every glyph, already scaled to
/// `font_size` and positioned in document coordinates.
pub trait GlyphOutlineSource {
    fn text_path(
        &self,
        font: OutlineFont,
        text: &str,
        origin: Point,
        font_size: f32,
    ) -> Result<Vec<PathCommand>>;
}

impl<S: GlyphOutlineSource + ?Sized> GlyphOutlineSource for &S {
    fn text_path(
        &self,
        font: OutlineFont,
        text: &str,
        origin: Point,
        font_size: f32,
    ) -> Result<Vec<PathCommand>> {
        (**self).text_path(font, text, origin, font_size)
    }
}

/// Collects `ttf-parser` outline callbacks as [`PathCommand`]s.
///
/// Font units are scaled by `scale`, offset by `origin`, and the Y axis is
/// flipped so that glyphs stand upright in document coordinates.
pub struct PathSink<'a> {
    commands: &'a mut Vec<PathCommand>,
    origin: Point,
    scale: f32,
}

impl<'a> PathSink<'a> {
    /// Creates a sink appending to `commands`.
    pub fn new(commands: &'a mut Vec<PathCommand>, origin: Point, scale: f32) -> Self {
        Self {
            commands,
            origin,
            scale,
        }
    }

    fn map(&self, x: f32, y: f32) -> Point {
        Point::new(self.origin.x + x * self.scale, self.origin.y - y * self.scale)
    }
}

impl ttf_parser::OutlineBuilder for PathSink<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.commands.push(PathCommand::MoveTo(p));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.commands.push(PathCommand::LineTo(p));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let c = self.map(x1, y1);
        let p = self.map(x, y);
        self.commands.push(PathCommand::QuadTo(c, p));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let c1 = self.map(x1, y1);
        let c2 = self.map(x2, y2);
        let p = self.map(x, y);
        self.commands.push(PathCommand::CurveTo(c1, c2, p));
    }

    fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }
}
