//! # Kirinuki
//!
//! Cuttable text transfers: glyph outlines in, packed SVG sheets out.
//!
//! ## Overview
//!
//! A transfer is a small decal carrying an identifier line and four ID lines.
//! Glyph outlines for each line come from a [`GlyphOutlineSource`] (usually a
//! [`FontSystem`]). They are split into contours, and every contour is
//! classified by winding as an outer edge or a counter. The assembled
//! artwork strokes each kind in its own color, so a cutter can treat the
//! two differently. Finished artworks are then packed onto fixed-size print
//! sheets.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kirinuki::{
//!     FontSystem, OutlineFont, TransferRecord, TransferStyle,
//!     artwork::{ArtworkConfig, BrandFont},
//!     batch::export_sheets,
//!     packer::PackingConfig,
//! };
//!
//! // 1. Register one font per role
//! let font_system = FontSystem::new();
//! font_system
//!     .load_font_file(OutlineFont::Condensed, "fonts/condensed.ttf".as_ref())
//!     .unwrap();
//! font_system
//!     .load_font_file(OutlineFont::Brand(BrandFont::Nike), "fonts/nike.ttf".as_ref())
//!     .unwrap();
//!
//! // 2. Build, pack and save
//! let records = vec![TransferRecord::template()];
//! let sheets = export_sheets(
//!     &font_system,
//!     &records,
//!     &TransferStyle::for_font(BrandFont::Nike),
//!     ArtworkConfig::default(),
//!     &PackingConfig::default(),
//! )
//! .unwrap();
//! for sheet in &sheets {
//!     sheet.save("out".as_ref()).unwrap();
//! }
//! ```
//!
//! ## Features
//!
//! *   **Winding classification**: Counters are detected from contour direction alone.
//! *   **Deterministic output**: The same inputs always produce the same documents.
//! *   **Sheet packing**: Largest-first placement with a guaranteed gap between pieces.
//! *   **Thread Safety**: `FontSystem` uses internal locking for shared use.

pub mod artwork;
pub mod batch;
pub mod contour;
pub mod error;
pub mod font_storage;
pub mod font_system;
pub mod glyph_id;
pub mod outline;
pub mod packer;
pub mod text;

#[cfg(test)]
mod test_support;

// common re-exports
pub use artwork::{Artwork, ArtworkAssembler, TransferRecord, TransferStyle};
pub use contour::{Contour, ContourRole};
pub use error::{Result, TransferError};
pub use font_storage::FontStorage;
pub use font_system::FontSystem;
pub use glyph_id::GlyphId;
pub use outline::{GlyphOutlineSource, OutlineFont, PathCommand, Point};
pub use packer::{Sheet, SheetDocument, TransferRectangle, pack};

// re-export dependencies
pub use fontdb;
pub use fontdue;
pub use parking_lot;
pub use svg;
