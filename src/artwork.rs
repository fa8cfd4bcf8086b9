/// Combines text lines into one stroked document.
pub mod assembler;
/// SVG path data serialization.
pub mod path_data;
/// Per-transfer text fields.
pub mod record;
/// Fonts, sizes, colors and render modes.
pub mod style;

pub use assembler::{ArtworkAssembler, ArtworkConfig};
pub use record::{IdPlacement, IdSide, TransferRecord};
pub use style::{BrandFont, HexColor, RenderMode, TransferColors, TransferStyle};

use euclid::default::Box2D;

use crate::packer::TransferRectangle;

/// One assembled transfer: identifier line, four ID lines and a border.
///
/// Artworks are immutable; rebuilding with the same inputs yields the same
/// document.
#[derive(Clone, Debug)]
pub struct Artwork {
    id: String,
    bounds: Box2D<f32>,
    mode: RenderMode,
    document: svg::Document,
}

impl Artwork {
    /// Returns the artwork id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Padded bounding box, which is also the document's `viewBox`.
    pub fn bounds(&self) -> Box2D<f32> {
        self.bounds
    }

    /// Returns the padded width.
    pub fn width(&self) -> f32 {
        self.bounds.width()
    }

    /// Returns the padded height.
    pub fn height(&self) -> f32 {
        self.bounds.height()
    }

    /// Returns the mode the artwork was rendered in.
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Whether this artwork was built for cutter output.
    pub fn for_download(&self) -> bool {
        self.mode == RenderMode::Production
    }

    /// Returns the rendered document.
    pub fn document(&self) -> &svg::Document {
        &self.document
    }

    /// Serialized SVG markup.
    pub fn content(&self) -> String {
        self.document.to_string()
    }

    /// Turns the artwork into a packing input sized by its padded box.
    pub fn into_rectangle(self) -> TransferRectangle<svg::Document> {
        TransferRectangle {
            width: self.bounds.width(),
            height: self.bounds.height(),
            id: self.id,
            content: self.document,
        }
    }
}
