/// Sheets, placements and sheet export.
pub mod sheet;

pub use sheet::{PlacedRectangle, Sheet, SheetDocument};

use crate::error::{Result, TransferError};

/// Upper bound on candidate anchors per sheet scan.
pub const MAX_SCAN_ANCHORS: f32 = 4_000_000.0;

/// Sheet and spacing settings for [`pack`].
#[derive(Clone, Debug, PartialEq)]
pub struct PackingConfig {
    pub sheet_width: f32,
    pub sheet_height: f32,
    /// Minimum gap between placed rectangles, also the scan step.
    ///
    /// `3` units is roughly 1mm vertically and 1.23mm horizontally.
    pub spacing: f32,
    /// Upper bound on the number of sheets a run may produce.
    pub max_sheets: Option<usize>,
}

impl Default for PackingConfig {
    fn default() -> Self {
        Self {
            sheet_width: 2520.0,
            sheet_height: 1770.0,
            spacing: 3.0,
            max_sheets: None,
        }
    }
}

impl PackingConfig {
    fn validate(&self) -> Result<()> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(self.sheet_width) || !positive(self.sheet_height) {
            return Err(TransferError::InvalidPacking(format!(
                "sheet must have a positive size, got {}x{}",
                self.sheet_width, self.sheet_height
            )));
        }
        if !positive(self.spacing) {
            return Err(TransferError::InvalidPacking(format!(
                "spacing must be positive, got {}",
                self.spacing
            )));
        }

        let anchors =
            (self.sheet_width / self.spacing + 1.0) * (self.sheet_height / self.spacing + 1.0);
        if anchors > MAX_SCAN_ANCHORS {
            return Err(TransferError::InvalidPacking(format!(
                "spacing {} is too fine for a {}x{} sheet",
                self.spacing, self.sheet_width, self.sheet_height
            )));
        }

        if self.max_sheets == Some(0) {
            return Err(TransferError::InvalidPacking(
                "max_sheets must allow at least one sheet".to_string(),
            ));
        }
        Ok(())
    }
}

/// A piece to be packed.
#[derive(Clone, Debug, PartialEq)]
pub struct TransferRectangle<T> {
    pub id: String,
    pub width: f32,
    pub height: f32,
    pub content: T,
}

impl<T> TransferRectangle<T> {
    /// Returns `width * height`, the packing sort key.
    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

/// Packs `rectangles` onto as many sheets as needed.
///
/// Rectangles are placed largest area first (ties keep input order). Each
/// one goes to the first free anchor of the current sheet, scanning rows top
/// to bottom in steps of `spacing`; when none is free the sheet is closed and
/// a fresh one is opened. Placed rectangles keep at least `spacing` between
/// each other; no gap is kept to the sheet edge.
///
/// Every rectangle must fit an empty sheet, otherwise
/// [`TransferError::PackingOverflow`] is returned before anything is placed.
pub fn pack<T: Clone>(
    rectangles: &[TransferRectangle<T>],
    config: &PackingConfig,
) -> Result<Vec<Sheet<T>>> {
    config.validate()?;

    for rect in rectangles {
        if !rect.width.is_finite()
            || !rect.height.is_finite()
            || rect.width < 0.0
            || rect.height < 0.0
        {
            return Err(TransferError::InvalidPacking(format!(
                "transfer `{}` has invalid size {}x{}",
                rect.id, rect.width, rect.height
            )));
        }
        if rect.width > config.sheet_width || rect.height > config.sheet_height {
            return Err(TransferError::PackingOverflow {
                id: rect.id.clone(),
                width: rect.width,
                height: rect.height,
                sheet_width: config.sheet_width,
                sheet_height: config.sheet_height,
            });
        }
    }

    let mut sorted: Vec<&TransferRectangle<T>> = rectangles.iter().collect();
    // stable: equal areas keep their input order
    sorted.sort_by(|a, b| b.area().total_cmp(&a.area()));

    let mut sheets = Vec::new();
    let mut current = Sheet::new(config.sheet_width, config.sheet_height);

    for rect in sorted {
        if current.try_place(rect, config.spacing) {
            continue;
        }

        if let Some(limit) = config.max_sheets
            && sheets.len() + 1 >= limit
        {
            return Err(TransferError::SheetLimit(limit));
        }

        log::debug!(
            "Sheet {} full with {} transfers, opening a new one for `{}`.",
            sheets.len() + 1,
            current.len(),
            rect.id
        );
        let full = std::mem::replace(
            &mut current,
            Sheet::new(config.sheet_width, config.sheet_height),
        );
        if !full.is_empty() {
            sheets.push(full);
        }

        // the size check above guarantees the origin of an empty sheet
        if !current.try_place(rect, config.spacing) {
            return Err(TransferError::PackingOverflow {
                id: rect.id.clone(),
                width: rect.width,
                height: rect.height,
                sheet_width: config.sheet_width,
                sheet_height: config.sheet_height,
            });
        }
    }

    if !current.is_empty() {
        sheets.push(current);
    }

    log::debug!(
        "Packed {} transfers onto {} sheets.",
        rectangles.len(),
        sheets.len()
    );

    Ok(sheets)
}
