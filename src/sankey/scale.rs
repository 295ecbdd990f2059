use serde::Serialize;

use super::layout::{Point, Size};

/// Per-axis factor from design units to viewport units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ViewScale {
    pub x: f64,
    pub y: f64,
}

impl ViewScale {
    pub fn fit(reference: Size, viewport: Size) -> Self {
        let axis = |view: f64, design: f64| {
            if design == 0.0 || !design.is_finite() {
                1.0
            } else {
                view / design
            }
        };

        Self {
            x: axis(viewport.width, reference.width),
            y: axis(viewport.height, reference.height),
        }
    }

    pub fn apply(self, point: Point) -> Point {
        Point::new(point.x * self.x, point.y * self.y)
    }

    /// Band thickness runs vertically, so it follows the y factor.
    pub fn stroke(self, width: f64) -> f64 {
        width * self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_viewport_is_identity() {
        assert_eq!(
            ViewScale::fit(Size::REFERENCE, Size::REFERENCE),
            ViewScale { x: 1.0, y: 1.0 }
        );
    }

    #[test]
    fn axes_scale_independently() {
        let scale = ViewScale::fit(Size::REFERENCE, Size::new(500.0, 1400.0));
        assert_eq!(scale, ViewScale { x: 0.5, y: 2.0 });
        assert_eq!(scale.apply(Point::new(700.0, 50.0)), Point::new(350.0, 100.0));
        assert_eq!(scale.stroke(35.0), 70.0);
    }

    #[test]
    fn degenerate_reference_falls_back_to_unit_scale() {
        let scale = ViewScale::fit(Size::new(0.0, 700.0), Size::new(300.0, 350.0));
        assert_eq!(scale, ViewScale { x: 1.0, y: 0.5 });
    }
}
