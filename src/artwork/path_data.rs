use std::fmt::Write;

use crate::outline::{PathCommand, Point};

/// Serializes commands as an SVG `d` attribute with absolute commands.
pub fn path_to_d(commands: &[PathCommand], precision: usize) -> String {
    let mut d = String::with_capacity(commands.len() * 24);

    for command in commands {
        match *command {
            PathCommand::MoveTo(p) => {
                d.push('M');
                write_point(&mut d, p, precision);
            }
            PathCommand::LineTo(p) => {
                d.push('L');
                write_point(&mut d, p, precision);
            }
            PathCommand::CurveTo(c1, c2, p) => {
                d.push('C');
                write_point(&mut d, c1, precision);
                d.push(' ');
                write_point(&mut d, c2, precision);
                d.push(' ');
                write_point(&mut d, p, precision);
            }
            PathCommand::QuadTo(c, p) => {
                d.push('Q');
                write_point(&mut d, c, precision);
                d.push(' ');
                write_point(&mut d, p, precision);
            }
            PathCommand::Close => d.push('Z'),
        }
    }

    d
}

fn write_point(d: &mut String, p: Point, precision: usize) {
    // writing into a String cannot fail
    let _ = write!(
        d,
        "{} {}",
        fmt_scalar(p.x, precision),
        fmt_scalar(p.y, precision)
    );
}

/// Fixed precision with trailing zeros stripped.
pub fn fmt_scalar(v: f32, precision: usize) -> String {
    let s = format!("{v:.precision$}");
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        s
    };

    if s == "-0" { "0".to_owned() } else { s }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_scalar() {
        assert_eq!(fmt_scalar(1.0, 2), "1");
        assert_eq!(fmt_scalar(1.255, 2), "1.25");
        assert_eq!(fmt_scalar(0.5, 2), "0.5");
        assert_eq!(fmt_scalar(-0.001, 2), "0");
        assert_eq!(fmt_scalar(90.0, 0), "90");
    }

    #[test]
    fn test_path_to_d() {
        let commands = [
            PathCommand::MoveTo(Point::new(0.0, 10.0)),
            PathCommand::LineTo(Point::new(5.5, 10.0)),
            PathCommand::QuadTo(Point::new(7.0, 12.0), Point::new(8.0, 10.0)),
            PathCommand::CurveTo(
                Point::new(9.0, 9.0),
                Point::new(10.0, 8.25),
                Point::new(11.0, 0.126),
            ),
            PathCommand::Close,
        ];

        assert_eq!(
            path_to_d(&commands, 2),
            "M0 10L5.5 10Q7 12 8 10C9 9 10 8.25 11 0.13Z"
        );
    }
}
