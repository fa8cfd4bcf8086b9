/// Shoe side an ID is printed for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IdSide {
    Left,
    Right,
}

/// Which face of the shoe an ID goes on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IdPlacement {
    Inside,
    Outside,
}

/// Text fields of one transfer.
///
/// Missing fields are empty strings, never absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransferRecord {
    pub name: String,
    pub team: String,
    pub left_inside: String,
    pub left_outside: String,
    pub right_inside: String,
    pub right_outside: String,
}

impl TransferRecord {
    /// Placeholder values for a freshly added transfer.
    pub fn template() -> Self {
        Self {
            name: "NAME".to_string(),
            team: "COUNTRY - CLUB".to_string(),
            left_inside: "LEFT-IN".to_string(),
            left_outside: "LEFT-OUT".to_string(),
            right_inside: "RIGHT-IN".to_string(),
            right_outside: "RIGHT-OUT".to_string(),
        }
    }

    /// Builds a record from spreadsheet-style `(column, value)` pairs.
    ///
    /// Column names are matched case-insensitively after trimming. Unknown
    /// columns are ignored.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut record = Self::default();

        for (key, value) in fields {
            let key = key.as_ref().trim().to_ascii_uppercase();
            let value = value.as_ref().to_string();
            let slot = match key.as_str() {
                "ASSET NAME" => &mut record.name,
                "TEAM" | "TEAM NAME" => &mut record.team,
                "ID LEFT INSIDE" => &mut record.left_inside,
                "ID LEFT OUTSIDE" => &mut record.left_outside,
                "ID RIGHT INSIDE" => &mut record.right_inside,
                "ID RIGHT OUTSIDE" => &mut record.right_outside,
                _ => {
                    log::trace!("Ignoring unknown transfer column {key:?}.");
                    continue;
                }
            };
            *slot = value;
        }

        record
    }

    /// Returns one of the four IDs.
    pub fn id(&self, side: IdSide, placement: IdPlacement) -> &str {
        match (side, placement) {
            (IdSide::Left, IdPlacement::Inside) => &self.left_inside,
            (IdSide::Left, IdPlacement::Outside) => &self.left_outside,
            (IdSide::Right, IdPlacement::Inside) => &self.right_inside,
            (IdSide::Right, IdPlacement::Outside) => &self.right_outside,
        }
    }

    /// Explanatory line printed above the IDs: `"{name} - {team}"`.
    pub fn identifier(&self) -> String {
        format!("{} - {}", self.name, self.team)
    }

    /// The four IDs on one line, left inside first.
    pub fn id_text(&self) -> String {
        [
            self.id(IdSide::Left, IdPlacement::Inside),
            self.id(IdSide::Left, IdPlacement::Outside),
            self.id(IdSide::Right, IdPlacement::Inside),
            self.id(IdSide::Right, IdPlacement::Outside),
        ]
        .join(" ")
    }
}
