use std::path::{Path, PathBuf};

use svg::{Document, Node, node::element::Group};

use crate::packer::TransferRectangle;

/// A rectangle with its top-left offset on a sheet.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedRectangle<T> {
    pub rect: TransferRectangle<T>,
    pub x: f32,
    pub y: f32,
}

/// A fixed-size canvas holding placed rectangles.
#[derive(Clone, Debug, PartialEq)]
pub struct Sheet<T> {
    width: f32,
    height: f32,
    placed: Vec<PlacedRectangle<T>>,
}

impl<T> Sheet<T> {
    /// Creates an empty sheet.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            placed: Vec::new(),
        }
    }

    /// Returns the sheet width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the sheet height.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns the placements in the order they were made.
    pub fn placed(&self) -> &[PlacedRectangle<T>] {
        &self.placed
    }

    /// Returns the number of placed rectangles.
    pub fn len(&self) -> usize {
        self.placed.len()
    }

    /// Checks if nothing has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }
}

impl<T: Clone> Sheet<T> {

    /// Places `rect` at the first free anchor, if any.
    pub(crate) fn try_place(&mut self, rect: &TransferRectangle<T>, spacing: f32) -> bool {
        let Some((x, y)) = self.find_anchor(rect, spacing) else {
            return false;
        };

        log::trace!("Placing `{}` at ({x}, {y}).", rect.id);
        self.placed.push(PlacedRectangle {
            rect: rect.clone(),
            x,
            y,
        });
        true
    }

    /// Row-major scan of candidate anchors in steps of `spacing`.
    fn find_anchor(&self, rect: &TransferRectangle<T>, spacing: f32) -> Option<(f32, f32)> {
        let max_x = self.width - rect.width;
        let max_y = self.height - rect.height;
        if max_x < 0.0 || max_y < 0.0 {
            return None;
        }

        let columns = (max_x / spacing).floor() as usize;
        let rows = (max_y / spacing).floor() as usize;

        for row in 0..=rows {
            // clamp so accumulated rounding never pushes past the edge
            let y = (row as f32 * spacing).min(max_y);
            for column in 0..=columns {
                let x = (column as f32 * spacing).min(max_x);
                if self.is_free(x, y, rect.width, rect.height, spacing) {
                    return Some((x, y));
                }
            }
        }

        None
    }

    /// Axis-aligned overlap test with `spacing` added to the candidate.
    fn is_free(&self, x: f32, y: f32, width: f32, height: f32, spacing: f32) -> bool {
        self.placed.iter().all(|p| {
            let overlaps = x < p.x + p.rect.width + spacing
                && x + width + spacing > p.x
                && y < p.y + p.rect.height + spacing
                && y + height + spacing > p.y;
            !overlaps
        })
    }
}

impl<T: Node + Clone> Sheet<T> {
    /// Renders the sheet with every placed piece translated to its offset.
    pub fn to_document(&self) -> Document {
        self.placed.iter().fold(
            Document::new()
                .set("width", self.width)
                .set("height", self.height),
            |document, placed| {
                document.add(
                    Group::new()
                        .set("transform", format!("translate({}, {})", placed.x, placed.y))
                        .add(Clone::clone(&placed.rect.content)),
                )
            },
        )
    }
}

/// A rendered sheet ready to be written out.
#[derive(Clone, Debug)]
pub struct SheetDocument {
    pub file_name: String,
    pub document: Document,
}

impl SheetDocument {
    /// `index` is zero-based; file names count from 1.
    pub fn new<T: Node + Clone>(index: usize, sheet: &Sheet<T>) -> Self {
        Self {
            file_name: sheet_file_name(index),
            document: sheet.to_document(),
        }
    }

    /// Writes the document into `dir` under its file name.
    pub fn save(&self, dir: &Path) -> std::io::Result<PathBuf> {
        let path = dir.join(&self.file_name);
        svg::save(&path, &self.document)?;
        Ok(path)
    }
}

/// `packed_sheet_<n>_<suffix>.svg` with a random 4-character hex suffix.
pub fn sheet_file_name(index: usize) -> String {
    let suffix: String = uuid::Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(4)
        .collect();
    format!("packed_sheet_{}_{suffix}.svg", index + 1)
}
