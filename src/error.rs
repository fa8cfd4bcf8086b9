//! Error types shared by every stage of the transfer pipeline.

use thiserror::Error;

/// Errors produced while turning text into artwork or packing artworks.
///
/// All variants are recoverable at the call site: the caller can retry with
/// different fonts, inputs or sheet settings.
#[derive(Debug, Error)]
pub enum TransferError {
    /// Glyph outlines could not be obtained (missing or corrupt font data).
    #[error("failed to load glyph outlines: {0}")]
    OutlineLoad(String),

    /// A drawing command arrived without a current point.
    #[error("malformed path: `{command}` at command {index} has no current point")]
    Geometry { index: usize, command: &'static str },

    /// A rectangle is larger than the sheet and can never be placed.
    #[error(
        "transfer `{id}` ({width}x{height}) does not fit on a {sheet_width}x{sheet_height} sheet"
    )]
    PackingOverflow {
        id: String,
        width: f32,
        height: f32,
        sheet_width: f32,
        sheet_height: f32,
    },

    /// Packing needed more sheets than the configured limit.
    #[error("packing needs more than {0} sheets")]
    SheetLimit(usize),

    /// Style parameters are out of range or malformed.
    #[error("invalid style: {0}")]
    InvalidStyle(String),

    /// Sheet or rectangle dimensions are unusable.
    #[error("invalid packing input: {0}")]
    InvalidPacking(String),
}

/// Result type for transfer operations.
pub type Result<T> = std::result::Result<T, TransferError>;
