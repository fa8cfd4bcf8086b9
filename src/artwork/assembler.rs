use euclid::default::Box2D;
use svg::{
    Document,
    node::element::{Path, Rectangle},
};

use crate::{
    artwork::{Artwork, RenderMode, TransferRecord, TransferStyle, path_data::path_to_d},
    contour::{Contour, ContourRole, build_contours, classify},
    error::Result,
    outline::{GlyphOutlineSource, OutlineFont, Point},
};

/// Number of stacked copies of the ID line.
pub const ID_LINE_COUNT: usize = 4;

/// Layout constants for artwork assembly.
///
/// The defaults are tuned against the bundled font metrics; output stays
/// visually compatible only while they are unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct ArtworkConfig {
    /// Baseline origin of the identifier line.
    pub identifier_origin: Point,
    pub identifier_font_size: f32,
    /// X coordinate every ID line starts at.
    pub id_origin_x: f32,
    /// ID line pitch as a multiple of the ID font size.
    pub line_spacing_factor: f32,
    /// Added to the right edge of the bounding box.
    pub padding_x: f32,
    /// Added on the left, top and bottom of the bounding box.
    pub padding_y: f32,
    pub production_stroke_width: f32,
    pub preview_stroke_width: f32,
    /// Decimal places kept in path data.
    pub path_precision: usize,
}

impl Default for ArtworkConfig {
    fn default() -> Self {
        Self {
            identifier_origin: Point::new(0.0, 20.0),
            identifier_font_size: 20.0,
            id_origin_x: 90.0,
            line_spacing_factor: 1.5,
            padding_x: 90.0,
            padding_y: 10.0,
            production_stroke_width: 0.0002,
            preview_stroke_width: 1.0,
            path_precision: 2,
        }
    }
}

impl ArtworkConfig {
    /// Returns the stroke width used in `mode`.
    pub fn stroke_width(&self, mode: RenderMode) -> f32 {
        match mode {
            RenderMode::Preview => self.preview_stroke_width,
            RenderMode::Production => self.production_stroke_width,
        }
    }
}

/// Builds [`Artwork`]s from text using a [`GlyphOutlineSource`].
///
/// Each call is independent: nothing is cached between builds, so the
/// assembler can be shared across threads whenever the source can.
pub struct ArtworkAssembler<S> {
    source: S,
    config: ArtworkConfig,
}

impl<S: GlyphOutlineSource> ArtworkAssembler<S> {
    /// Creates an assembler with the default layout constants.
    pub fn new(source: S) -> Self {
        Self::with_config(source, ArtworkConfig::default())
    }

    /// Creates an assembler with custom layout constants.
    pub fn with_config(source: S, config: ArtworkConfig) -> Self {
        Self { source, config }
    }

    /// Returns the layout constants.
    pub fn config(&self) -> &ArtworkConfig {
        &self.config
    }

    /// Assembles an artwork from a record's identifier and ID text.
    pub fn assemble_record(
        &self,
        id: impl Into<String>,
        record: &TransferRecord,
        style: &TransferStyle,
        mode: RenderMode,
    ) -> Result<Artwork> {
        self.assemble(id, &record.identifier(), &record.id_text(), style, mode)
    }

    /// Assembles one artwork.
    ///
    /// `identifier` is drawn once in the condensed font using the glyph color
    /// only. `id_text` is drawn [`ID_LINE_COUNT`] times in the style's brand
    /// font, each contour colored by its winding.
    pub fn assemble(
        &self,
        id: impl Into<String>,
        identifier: &str,
        id_text: &str,
        style: &TransferStyle,
        mode: RenderMode,
    ) -> Result<Artwork> {
        style.validate()?;
        let config = &self.config;
        let id = id.into();

        let mut strokes: Vec<(Contour, ContourRole)> = Vec::new();

        let commands = self.source.text_path(
            OutlineFont::Condensed,
            identifier,
            config.identifier_origin,
            config.identifier_font_size,
        )?;
        strokes.extend(
            build_contours(&commands)?
                .into_iter()
                .map(|contour| (contour, ContourRole::Outer)),
        );

        let spacing = style.font_size * config.line_spacing_factor;
        let base_y = config.identifier_origin.y + spacing;
        for line in 0..ID_LINE_COUNT {
            let origin = Point::new(config.id_origin_x, base_y + line as f32 * spacing);
            let commands = self.source.text_path(
                OutlineFont::Brand(style.font),
                id_text,
                origin,
                style.font_size,
            )?;
            strokes.extend(build_contours(&commands)?.into_iter().map(|contour| {
                let role = classify(&contour);
                (contour, role)
            }));
        }

        let bounds = padded_bounds(&strokes, config);
        let document = build_document(&strokes, bounds, style, mode, config);

        log::trace!(
            "Assembled artwork {id}: {} contours, {}x{}",
            strokes.len(),
            bounds.width(),
            bounds.height()
        );

        Ok(Artwork {
            id,
            bounds,
            mode,
            document,
        })
    }
}

/// Box around every contour anchor, grown by the configured padding.
///
/// With no contours at all the unpadded box is empty at the origin.
pub(crate) fn padded_bounds(
    strokes: &[(Contour, ContourRole)],
    config: &ArtworkConfig,
) -> Box2D<f32> {
    let raw = Box2D::from_points(strokes.iter().flat_map(|(contour, _)| contour.vertices()));

    Box2D::new(
        Point::new(raw.min.x - config.padding_y, raw.min.y - config.padding_y),
        Point::new(raw.max.x + config.padding_x, raw.max.y + config.padding_y),
    )
}

fn build_document(
    strokes: &[(Contour, ContourRole)],
    bounds: Box2D<f32>,
    style: &TransferStyle,
    mode: RenderMode,
    config: &ArtworkConfig,
) -> Document {
    let width = bounds.width();
    let height = bounds.height();
    let stroke_width = config.stroke_width(mode);

    // border first so it renders beneath the glyph strokes
    let border = Rectangle::new()
        .set("x", bounds.min.x)
        .set("y", bounds.min.y)
        .set("width", width)
        .set("height", height)
        .set("fill", "none")
        .set("stroke", style.colors.perforation.as_str())
        .set("stroke-width", stroke_width);

    let mut document = Document::new()
        .set("viewBox", (bounds.min.x, bounds.min.y, width, height))
        .add(border);

    document = match mode {
        RenderMode::Preview => document.set("width", "100%").set("height", "100%"),
        RenderMode::Production => document.set("width", width).set("height", height),
    };

    for (contour, role) in strokes {
        let color = match role {
            ContourRole::Outer => &style.colors.glyph,
            ContourRole::Inner => &style.colors.counter,
        };

        document = document.add(
            Path::new()
                .set("d", path_to_d(contour.commands(), config.path_precision))
                .set("fill", "none")
                .set("stroke", color.as_str())
                .set("stroke-width", stroke_width),
        );
    }

    document
}
