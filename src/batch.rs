//! End-to-end export: records to artworks to packed sheet documents.

use crate::{
    artwork::{ArtworkAssembler, ArtworkConfig, RenderMode, TransferRecord, TransferStyle},
    error::Result,
    outline::GlyphOutlineSource,
    packer::{PackingConfig, Sheet, SheetDocument, TransferRectangle, pack},
};

/// Assembles every record for production and packs the results.
///
/// Artwork ids are `transfer-<index>` in input order.
pub fn pack_records<S: GlyphOutlineSource>(
    source: S,
    records: &[TransferRecord],
    style: &TransferStyle,
    artwork_config: ArtworkConfig,
    packing_config: &PackingConfig,
) -> Result<Vec<Sheet<svg::Document>>> {
    let assembler = ArtworkAssembler::with_config(source, artwork_config);

    let rectangles = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            assembler
                .assemble_record(
                    format!("transfer-{index}"),
                    record,
                    style,
                    RenderMode::Production,
                )
                .map(|artwork| artwork.into_rectangle())
        })
        .collect::<Result<Vec<TransferRectangle<svg::Document>>>>()?;

    pack(&rectangles, packing_config)
}

/// Runs the whole flow and renders one document per sheet.
pub fn export_sheets<S: GlyphOutlineSource>(
    source: S,
    records: &[TransferRecord],
    style: &TransferStyle,
    artwork_config: ArtworkConfig,
    packing_config: &PackingConfig,
) -> Result<Vec<SheetDocument>> {
    let sheets = pack_records(source, records, style, artwork_config, packing_config)?;

    Ok(sheets
        .iter()
        .enumerate()
        .map(|(index, sheet)| SheetDocument::new(index, sheet))
        .collect())
}
