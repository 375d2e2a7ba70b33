//! Hit testing: point -> shape lookup.
//!
//! Walks the scene front-to-back and tests each shape in its own
//! unrotated frame, so rotated shapes are hit exactly where they are drawn.

use crate::shapes::Shape;
use kurbo::{Point, Rect};

/// Inclusive containment on all four edges.
///
/// `kurbo::Rect::contains` excludes the far edges; a click on the right or
/// bottom border of a shape still has to select it.
fn contains_inclusive(rect: Rect, p: Point) -> bool {
    p.x >= rect.x0 && p.x <= rect.x1 && p.y >= rect.y0 && p.y <= rect.y1
}

/// Check if a canvas point lies inside `shape`, accounting for rotation.
pub fn contains(shape: &Shape, point: Point) -> bool {
    contains_inclusive(shape.local_bounds(), shape.to_local(point))
}

/// Find the topmost shape at `point`.
/// Returns `None` if the point hits the background.
pub fn hit_test(shapes: &[Shape], point: Point) -> Option<usize> {
    // Last painted = topmost
    shapes
        .iter()
        .enumerate()
        .rev()
        .find(|(_, shape)| contains(shape, point))
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::TextMetrics;
    use crate::shapes::{Rectangle, Text};
    use kurbo::Vec2;
    use std::f64::consts::{FRAC_PI_4, PI};

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Shape {
        Shape::Rectangle(Rectangle::new(Point::new(x, y), w, h))
    }

    fn measured_text(x: f64, y: f64, w: f64, h: f64) -> Shape {
        let mut text = Text::new(Point::new(x, y), "label".to_string());
        text.apply_metrics(TextMetrics::new(w, h));
        Shape::Text(text)
    }

    #[test]
    fn test_hit_basic() {
        let shapes = vec![rect(0.0, 0.0, 100.0, 100.0)];
        assert_eq!(hit_test(&shapes, Point::new(50.0, 50.0)), Some(0));
        assert_eq!(hit_test(&shapes, Point::new(150.0, 50.0)), None);
    }

    #[test]
    fn test_edges_are_inclusive() {
        let shapes = vec![rect(10.0, 10.0, 20.0, 20.0)];
        for p in [(10.0, 10.0), (30.0, 30.0), (30.0, 10.0), (10.0, 30.0)] {
            assert_eq!(hit_test(&shapes, Point::new(p.0, p.1)), Some(0), "{p:?}");
        }
        assert_eq!(hit_test(&shapes, Point::new(30.01, 20.0)), None);
    }

    #[test]
    fn test_topmost_wins() {
        let shapes = vec![rect(0.0, 0.0, 100.0, 100.0), rect(50.0, 50.0, 100.0, 100.0)];
        assert_eq!(hit_test(&shapes, Point::new(75.0, 75.0)), Some(1));
        assert_eq!(hit_test(&shapes, Point::new(25.0, 25.0)), Some(0));
    }

    #[test]
    fn test_text_box_above_baseline() {
        let shapes = vec![measured_text(200.0, 200.0, 80.0, 20.0)];
        assert_eq!(hit_test(&shapes, Point::new(220.0, 190.0)), Some(0));
        assert_eq!(hit_test(&shapes, Point::new(220.0, 205.0)), None);
    }

    #[test]
    fn test_unmeasured_text_only_hits_origin() {
        let shapes = vec![Shape::Text(Text::default())];
        assert_eq!(hit_test(&shapes, Point::new(200.0, 200.0)), Some(0));
        assert_eq!(hit_test(&shapes, Point::new(201.0, 199.0)), None);
    }

    #[test]
    fn test_rotated_rectangle() {
        // 100x20 bar rotated a quarter turn about (100, 100) now hangs downward
        let mut bar = rect(100.0, 100.0, 100.0, 20.0);
        bar.set_rotation(PI / 2.0);
        let shapes = vec![bar];
        assert_eq!(hit_test(&shapes, Point::new(90.0, 150.0)), Some(0));
        // Where the unrotated bar would have been
        assert_eq!(hit_test(&shapes, Point::new(150.0, 110.0)), None);
    }

    #[test]
    fn test_rotated_local_points_hit() {
        for angle in [0.3, FRAC_PI_4, 2.0, -1.2, PI] {
            let mut shape = rect(300.0, 200.0, 80.0, 40.0);
            shape.set_rotation(angle);
            let shapes = vec![shape];
            for local in [(1.0, 1.0), (40.0, 20.0), (79.0, 39.0), (5.0, 35.0)] {
                let world = shapes[0].to_world(Vec2::new(local.0, local.1));
                assert_eq!(hit_test(&shapes, world), Some(0), "angle {angle} local {local:?}");
            }
        }
    }

    #[test]
    fn test_rotated_text() {
        let mut shape = measured_text(100.0, 100.0, 60.0, 20.0);
        shape.set_rotation(FRAC_PI_4);
        let inside = shape.to_world(Vec2::new(30.0, -10.0));
        let below = shape.to_world(Vec2::new(30.0, 10.0));
        let shapes = vec![shape];
        assert_eq!(hit_test(&shapes, inside), Some(0));
        assert_eq!(hit_test(&shapes, below), None);
    }

    #[test]
    fn test_empty_scene() {
        assert_eq!(hit_test(&[], Point::new(1.0, 1.0)), None);
    }
}
