use std::{collections::HashMap, path::Path, sync::Arc};

use parking_lot::Mutex;

use crate::{
    error::{Result, TransferError},
    font_storage::{FontStorage, LoadedFace},
    outline::{GlyphOutlineSource, OutlineFont, PathCommand, PathSink, Point},
    text::TextLine,
};

/// Glyph outline provider backed by real font files.
///
/// Each [`OutlineFont`] role is bound to one face of the storage. Both
/// the storage and the role table sit behind `Mutex`es so one system can be
/// shared between threads assembling artworks.
pub struct FontSystem {
    /// The underlying font storage.
    pub font_storage: Mutex<FontStorage>,
    roles: Mutex<HashMap<OutlineFont, fontdb::ID, fxhash::FxBuildHasher>>,
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FontSystem {
    /// Creates a font system with no fonts and no role bindings.
    pub fn new() -> Self {
        Self {
            font_storage: Mutex::new(FontStorage::new()),
            roles: Mutex::new(HashMap::with_hasher(fxhash::FxBuildHasher::default())),
        }
    }
}

/// font registration
impl FontSystem {
    /// Loads font data and binds its first face to `role`.
    pub fn load_font_binary(
        &self,
        role: OutlineFont,
        data: impl Into<Vec<u8>>,
    ) -> Result<fontdb::ID> {
        let id = self.font_storage.lock().load_font_binary(data)?;
        self.assign(role, id);
        Ok(id)
    }

    /// Loads a font file and binds its first face to `role`.
    pub fn load_font_file(&self, role: OutlineFont, path: &Path) -> Result<fontdb::ID> {
        let id = self.font_storage.lock().load_font_file(path)?;
        self.assign(role, id);
        Ok(id)
    }

    /// Binds an already loaded face to `role`, replacing any previous one.
    pub fn assign(&self, role: OutlineFont, id: fontdb::ID) {
        if let Some(previous) = self.roles.lock().insert(role, id)
            && previous != id
        {
            log::debug!("Rebinding {role:?} from {previous:?} to {id:?}.");
        }
    }

    /// Loads the system fonts, for use with [`Self::query`] and [`Self::assign`].
    pub fn load_system_fonts(&self) {
        self.font_storage.lock().load_system_fonts();
    }

    /// Queries for a face matching the description.
    pub fn query(&self, query: &fontdb::Query) -> Option<fontdb::ID> {
        self.font_storage.lock().query(query)
    }

    /// Returns the face bound to `role`, if any.
    pub fn font_id(&self, role: OutlineFont) -> Option<fontdb::ID> {
        self.roles.lock().get(&role).copied()
    }
}

/// layout
impl FontSystem {
    fn loaded_face(&self, role: OutlineFont) -> Result<(fontdb::ID, Arc<LoadedFace>)> {
        let id = self.font_id(role).ok_or_else(|| {
            log::warn!("No font registered for {role:?}.");
            TransferError::OutlineLoad(format!("no font registered for {role:?}"))
        })?;
        let face = self.font_storage.lock().face(id)?;
        Ok((id, face))
    }

    /// Lays `text` out on one line with the font bound to `role`.
    pub fn layout_line(&self, role: OutlineFont, text: &str, font_size: f32) -> Result<TextLine> {
        let (id, face) = self.loaded_face(role)?;
        Ok(TextLine::layout(face.font(), id, text, font_size))
    }
}

impl GlyphOutlineSource for FontSystem {
    fn text_path(
        &self,
        font: OutlineFont,
        text: &str,
        origin: Point,
        font_size: f32,
    ) -> Result<Vec<PathCommand>> {
        let (id, face) = self.loaded_face(font)?;
        let line = TextLine::layout(face.font(), id, text, font_size);
        let outlines = face.outlines()?;
        let scale = font_size / face.units_per_em();

        let mut commands = Vec::new();
        for glyph in line.visible_glyphs() {
            let pen = Point::new(origin.x + glyph.x, origin.y);
            // glyphs without contours add nothing
            let _ = outlines.outline_glyph(
                glyph.glyph_id.outline_id(),
                &mut PathSink::new(&mut commands, pen, scale),
            );
        }

        Ok(commands)
    }
}
