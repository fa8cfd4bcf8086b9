use crate::{
    contour::Contour,
    error::{Result, TransferError},
    outline::{PathCommand, Point},
};

/// Fold state: finished contours plus the one being drawn.
#[derive(Default)]
struct Accumulator {
    contours: Vec<Contour>,
    current: Vec<PathCommand>,
    start: Option<Point>,
}

impl Accumulator {
    fn push(mut self, index: usize, command: PathCommand) -> Result<Self> {
        match command {
            PathCommand::MoveTo(p) => {
                self.finalize();
                self.current.push(command);
                self.start = Some(p);
            }
            PathCommand::Close => {
                if self.start.is_none() {
                    return Err(no_current_point(index, &command));
                }
                self.current.push(command);
                self.finalize();
            }
            _ => {
                if self.start.is_none() {
                    return Err(no_current_point(index, &command));
                }
                self.current.push(command);
            }
        }

        Ok(self)
    }

    /// Moves the in-progress contour (if it has any commands) to the output.
    fn finalize(&mut self) {
        let commands = std::mem::take(&mut self.current);
        if let Some(start) = self.start.take()
            && !commands.is_empty()
        {
            self.contours.push(Contour::new(start, commands));
        }
    }

    fn finish(mut self) -> Vec<Contour> {
        self.finalize();
        self.contours
    }
}

fn no_current_point(index: usize, command: &PathCommand) -> TransferError {
    TransferError::Geometry {
        index,
        command: command.name(),
    }
}

/// Partitions `commands` into contours.
///
/// A contour ends at `Close` or at the next `MoveTo`; a trailing open
/// contour is kept. Every command lands in exactly one contour, in the
/// original order. A drawing command or `Close` with no open contour is a
/// [`TransferError::Geometry`] error.
pub fn build_contours(commands: &[PathCommand]) -> Result<Vec<Contour>> {
    commands
        .iter()
        .enumerate()
        .try_fold(Accumulator::default(), |acc, (index, command)| {
            acc.push(index, *command)
        })
        .map(Accumulator::finish)
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_split_on_close_and_move() {
        let commands = vec![
            PathCommand::MoveTo(p(0.0, 0.0)),
            PathCommand::LineTo(p(10.0, 0.0)),
            PathCommand::LineTo(p(10.0, 10.0)),
            PathCommand::Close,
            PathCommand::MoveTo(p(20.0, 0.0)),
            PathCommand::QuadTo(p(25.0, 5.0), p(30.0, 0.0)),
            // implicit close by the next MoveTo
            PathCommand::MoveTo(p(40.0, 0.0)),
            PathCommand::LineTo(p(50.0, 0.0)),
        ];

        let contours = build_contours(&commands).unwrap();
        assert_eq!(contours.len(), 3);
        assert_eq!(contours[0].start(), p(0.0, 0.0));
        assert_eq!(contours[0].commands().len(), 4);
        assert_eq!(contours[1].start(), p(20.0, 0.0));
        assert_eq!(contours[1].commands().len(), 2);
        assert_eq!(contours[2].start(), p(40.0, 0.0));
        assert_eq!(contours[2].commands().len(), 2);
    }

    #[test]
    fn test_partition_is_lossless() {
        let commands = vec![
            PathCommand::MoveTo(p(1.0, 1.0)),
            PathCommand::CurveTo(p(2.0, 0.0), p(3.0, 0.0), p(4.0, 1.0)),
            PathCommand::LineTo(p(4.0, 4.0)),
            PathCommand::Close,
            PathCommand::MoveTo(p(5.0, 5.0)),
            PathCommand::Close,
            PathCommand::MoveTo(p(6.0, 6.0)),
            PathCommand::LineTo(p(7.0, 6.0)),
        ];

        let contours = build_contours(&commands).unwrap();
        let rejoined: Vec<PathCommand> = contours
            .iter()
            .flat_map(|c| c.commands().iter().copied())
            .collect();
        assert_eq!(rejoined, commands);
    }

    #[test]
    fn test_move_then_close_is_degenerate_contour() {
        let commands = vec![PathCommand::MoveTo(p(3.0, 3.0)), PathCommand::Close];
        let contours = build_contours(&commands).unwrap();
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].vertices().count(), 1);
    }

    #[test]
    fn test_consecutive_moves_drop_nothing() {
        // A bare MoveTo still counts as a command and is kept.
        let commands = vec![
            PathCommand::MoveTo(p(0.0, 0.0)),
            PathCommand::MoveTo(p(1.0, 1.0)),
            PathCommand::LineTo(p(2.0, 1.0)),
        ];
        let contours = build_contours(&commands).unwrap();
        assert_eq!(contours.len(), 2);
        assert_eq!(contours[0].commands(), &[PathCommand::MoveTo(p(0.0, 0.0))]);
    }

    #[test]
    fn test_empty_input() {
        assert!(build_contours(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_draw_before_move_fails() {
        let commands = vec![
            PathCommand::CurveTo(p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)),
            PathCommand::MoveTo(p(0.0, 0.0)),
        ];
        let err = build_contours(&commands).unwrap_err();
        assert!(matches!(
            err,
            TransferError::Geometry {
                index: 0,
                command: "CurveTo"
            }
        ));
    }

    #[test]
    fn test_draw_after_close_fails() {
        let commands = vec![
            PathCommand::MoveTo(p(0.0, 0.0)),
            PathCommand::LineTo(p(1.0, 0.0)),
            PathCommand::Close,
            PathCommand::LineTo(p(2.0, 0.0)),
        ];
        let err = build_contours(&commands).unwrap_err();
        assert!(matches!(
            err,
            TransferError::Geometry {
                index: 3,
                command: "LineTo"
            }
        ));
    }

    #[test]
    fn test_stray_close_fails() {
        let commands = vec![PathCommand::Close];
        assert!(matches!(
            build_contours(&commands),
            Err(TransferError::Geometry {
                index: 0,
                command: "Close"
            })
        ));
    }
}
