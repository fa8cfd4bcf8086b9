use std::{collections::HashMap, path::Path, sync::Arc};

use crate::error::{Result, TransferError};

/// A face parsed for outline work.
///
/// `fontdue` answers metric queries (glyph lookup, advances, kerning); the
/// raw bytes are kept so `ttf-parser` can walk glyph outlines on demand.
pub struct LoadedFace {
    font: fontdue::Font,
    data: Arc<[u8]>,
    index: u32,
}

impl LoadedFace {
    fn from_bytes(data: &[u8], index: u32) -> std::result::Result<Self, String> {
        let font = fontdue::Font::from_bytes(
            data,
            fontdue::FontSettings {
                collection_index: index,
                scale: 40.0,
                load_substitutions: true,
            },
        )
        .map_err(str::to_string)?;

        // fail early rather than on the first outline request
        ttf_parser::Face::parse(data, index).map_err(|e| e.to_string())?;

        Ok(Self {
            font,
            data: Arc::from(data),
            index,
        })
    }

    /// Returns the metrics font.
    pub fn font(&self) -> &fontdue::Font {
        &self.font
    }

    /// Returns the design units per em, the outline scale base.
    pub fn units_per_em(&self) -> f32 {
        self.font.units_per_em()
    }

    /// Re-parses the face tables for outline extraction.
    pub fn outlines(&self) -> Result<ttf_parser::Face<'_>> {
        ttf_parser::Face::parse(&self.data, self.index)
            .map_err(|e| TransferError::OutlineLoad(e.to_string()))
    }
}

/// Font database plus a cache of faces parsed on first use.
pub struct FontStorage {
    font_db: fontdb::Database,
    /// Not every face in `font_db` is parsed; only the ones asked for.
    loaded_face: HashMap<fontdb::ID, Arc<LoadedFace>, fxhash::FxBuildHasher>,
}

impl Default for FontStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl FontStorage {
    /// Creates a new empty font storage.
    pub fn new() -> Self {
        Self {
            font_db: fontdb::Database::new(),
            loaded_face: HashMap::with_hasher(fxhash::FxBuildHasher::default()),
        }
    }
}

/// Loading fonts into fontdb.
impl FontStorage {
    /// Loads font data and returns the id of its first face.
    pub fn load_font_binary(&mut self, data: impl Into<Vec<u8>>) -> Result<fontdb::ID> {
        let ids = self
            .font_db
            .load_font_source(fontdb::Source::Binary(Arc::new(data.into())));

        ids.first().copied().ok_or_else(|| {
            log::error!("Font data contains no usable face.");
            TransferError::OutlineLoad("font data contains no usable face".to_string())
        })
    }

    /// Reads and loads a font file, returning the id of its first face.
    pub fn load_font_file(&mut self, path: &Path) -> Result<fontdb::ID> {
        let data = std::fs::read(path).map_err(|e| {
            log::error!("Failed to read font file {}: {}", path.display(), e);
            TransferError::OutlineLoad(format!("{}: {e}", path.display()))
        })?;
        self.load_font_binary(data)
    }

    /// Loads the system fonts.
    pub fn load_system_fonts(&mut self) {
        self.font_db.load_system_fonts();
    }

    /// Removes a face by ID, dropping its parsed copy.
    pub fn remove_face(&mut self, id: fontdb::ID) {
        self.font_db.remove_face(id);
        self.loaded_face.remove(&id);
    }

    /// Checks if the storage is empty.
    pub fn is_empty(&self) -> bool {
        self.font_db.is_empty()
    }

    /// Returns the number of loaded faces.
    pub fn len(&self) -> usize {
        self.font_db.len()
    }

    /// Queries for a face matching the description.
    pub fn query(&self, query: &fontdb::Query) -> Option<fontdb::ID> {
        self.font_db.query(query)
    }

    /// Returns an iterator over all available faces.
    pub fn faces(&self) -> impl Iterator<Item = &fontdb::FaceInfo> {
        self.font_db.faces()
    }
}

/// Get `LoadedFace`
impl FontStorage {
    /// Returns the parsed face for `id`, parsing it on first use.
    pub fn face(&mut self, id: fontdb::ID) -> Result<Arc<LoadedFace>> {
        use std::collections::hash_map::Entry;

        match self.loaded_face.entry(id) {
            Entry::Occupied(entry) => Ok(Arc::clone(entry.get())),
            Entry::Vacant(entry) => {
                let parsed = self
                    .font_db
                    .with_face_data(id, LoadedFace::from_bytes)
                    .ok_or_else(|| TransferError::OutlineLoad(format!("unknown face {id:?}")))?;

                match parsed {
                    Ok(face) => Ok(Arc::clone(entry.insert(Arc::new(face)))),
                    Err(e) => {
                        log::error!("Failed to load font (id: {:?}): {}", id, e);
                        Err(TransferError::OutlineLoad(e))
                    }
                }
            }
        }
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_is_rejected() {
        let mut storage = FontStorage::new();
        let err = storage.load_font_binary(vec![0u8; 64]).unwrap_err();
        assert!(matches!(err, TransferError::OutlineLoad(_)));
        assert!(storage.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let mut storage = FontStorage::new();
        let err = storage
            .load_font_file(Path::new("/nonexistent/brand-font.ttf"))
            .unwrap_err();
        assert!(err.to_string().contains("brand-font.ttf"));
    }

    #[test]
    fn test_unknown_face() {
        let mut storage = FontStorage::new();
        assert!(matches!(
            storage.face(fontdb::ID::dummy()),
            Err(TransferError::OutlineLoad(_))
        ));
    }
}
