use crate::contour::Contour;

/// Stroke role of a contour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContourRole {
    /// Outer glyph outline, stroked with the glyph color.
    Outer,
    /// Counter (hole) inside a glyph, stroked with the counter color.
    Inner,
}

/// Signed doubled-area sum over the contour's anchor points.
///
/// Accumulates `(x_i - x_{i-1}) * (y_i + y_{i-1})` starting from the contour's
/// start point, then adds the closing edge back to the start. Only command
/// anchors take part; curve control points are ignored.
pub fn orientation_sum(contour: &Contour) -> f64 {
    let start = contour.start();
    let (x0, y0) = (f64::from(start.x), f64::from(start.y));

    let (sum, (last_x, last_y)) =
        contour
            .vertices()
            .fold((0.0, (x0, y0)), |(sum, (px, py)), vertex| {
                let (x, y) = (f64::from(vertex.x), f64::from(vertex.y));
                (sum + (x - px) * (y + py), (x, y))
            });

    sum + (x0 - last_x) * (y0 + last_y)
}

/// Positive sums are counters; zero and negative sums are outer outlines.
pub fn classify(contour: &Contour) -> ContourRole {
    if orientation_sum(contour) > 0.0 {
        ContourRole::Inner
    } else {
        ContourRole::Outer
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::contour::build_contours;
    use crate::outline::{PathCommand, Point};

    fn polygon(points: &[(f32, f32)]) -> Vec<PathCommand> {
        let mut commands = Vec::with_capacity(points.len() + 1);
        for (i, &(x, y)) in points.iter().enumerate() {
            let p = Point::new(x, y);
            commands.push(if i == 0 {
                PathCommand::MoveTo(p)
            } else {
                PathCommand::LineTo(p)
            });
        }
        commands.push(PathCommand::Close);
        commands
    }

    fn single(points: &[(f32, f32)]) -> Contour {
        build_contours(&polygon(points)).unwrap().remove(0)
    }

    const SQUARE: [(f32, f32); 4] = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];

    #[test]
    fn test_square_direction_flips_role() {
        let forward = single(&SQUARE);
        assert_eq!(orientation_sum(&forward), -200.0);
        assert_eq!(classify(&forward), ContourRole::Outer);

        let mut reversed = SQUARE;
        reversed.reverse();
        let backward = single(&reversed);
        assert_eq!(orientation_sum(&backward), 200.0);
        assert_eq!(classify(&backward), ContourRole::Inner);
    }

    #[test]
    fn test_translation_keeps_role() {
        let base = single(&SQUARE);
        let moved: Vec<(f32, f32)> = SQUARE.iter().map(|&(x, y)| (x + 250.0, y - 75.0)).collect();
        assert_eq!(classify(&single(&moved)), classify(&base));

        let mut reversed = SQUARE;
        reversed.reverse();
        let moved: Vec<(f32, f32)> = reversed
            .iter()
            .map(|&(x, y)| (x - 13.5, y + 1000.0))
            .collect();
        assert_eq!(classify(&single(&moved)), ContourRole::Inner);
    }

    #[test]
    fn test_ring_glyph_has_opposite_roles() {
        // An "O" as two nested rings, outer and counter drawn in opposite
        // directions the way font outlines are.
        let mut commands = polygon(&[(0.0, 0.0), (0.0, -20.0), (16.0, -20.0), (16.0, 0.0)]);
        commands.extend(polygon(&[(4.0, -4.0), (12.0, -4.0), (12.0, -16.0), (4.0, -16.0)]));

        let contours = build_contours(&commands).unwrap();
        assert_eq!(contours.len(), 2);
        assert_eq!(classify(&contours[0]), ContourRole::Outer);
        assert_eq!(classify(&contours[1]), ContourRole::Inner);
    }

    #[test]
    fn test_curve_controls_are_ignored() {
        // Same anchors as the forward square; wild controls must not matter.
        let commands = vec![
            PathCommand::MoveTo(Point::new(0.0, 0.0)),
            PathCommand::CurveTo(
                Point::new(5.0, 500.0),
                Point::new(5.0, 500.0),
                Point::new(10.0, 0.0),
            ),
            PathCommand::QuadTo(Point::new(-400.0, 5.0), Point::new(10.0, 10.0)),
            PathCommand::LineTo(Point::new(0.0, 10.0)),
            PathCommand::Close,
        ];
        let contour = build_contours(&commands).unwrap().remove(0);
        assert_eq!(orientation_sum(&contour), -200.0);
        assert_eq!(classify(&contour), ContourRole::Outer);
    }

    #[test]
    fn test_degenerate_contour_is_outer() {
        let commands = vec![PathCommand::MoveTo(Point::new(5.0, 5.0)), PathCommand::Close];
        let contour = build_contours(&commands).unwrap().remove(0);
        assert_eq!(orientation_sum(&contour), 0.0);
        assert_eq!(classify(&contour), ContourRole::Outer);
    }

    #[test]
    fn test_open_contour_closes_to_start() {
        // Open triangle; the closing edge still contributes.
        let commands = vec![
            PathCommand::MoveTo(Point::new(0.0, 0.0)),
            PathCommand::LineTo(Point::new(0.0, 10.0)),
            PathCommand::LineTo(Point::new(10.0, 10.0)),
        ];
        let contour = build_contours(&commands).unwrap().remove(0);
        // 0 + (10 - 0) * (10 + 10) + (0 - 10) * (0 + 10)
        assert_eq!(orientation_sum(&contour), 100.0);
        assert_eq!(classify(&contour), ContourRole::Inner);
    }
}
