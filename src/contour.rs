/// Splits a command stream into closed contours.
pub mod builder;
/// Winding-based role assignment for contours.
pub mod winding;

pub use builder::build_contours;
pub use winding::{ContourRole, classify, orientation_sum};

use crate::outline::{PathCommand, Point};

/// One closed sub-path of an outline.
///
/// `commands` always begins with the `MoveTo` that opened the contour and,
/// when the source closed it explicitly, ends with `Close`. The contour is
/// implicitly closed back to `start` either way.
#[derive(Clone, Debug, PartialEq)]
pub struct Contour {
    start: Point,
    commands: Vec<PathCommand>,
}

impl Contour {
    pub(crate) fn new(start: Point, commands: Vec<PathCommand>) -> Self {
        Self { start, commands }
    }

    /// The point the contour was opened at.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Returns the contour's commands, starting with its `MoveTo`.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Anchor points of every command, in order. Curve controls are skipped.
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(PathCommand::end_point)
    }
}
