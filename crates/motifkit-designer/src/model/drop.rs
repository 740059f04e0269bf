use super::{BasicShape, Point, Transformable};

/// Teardrop drawn as a single cubic curve from `center_top` through the two
/// bottom control points and back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drop {
    pub center: Point,
    pub width: f64,
    pub height: f64,
    pub center_top: Point,
    pub left_bottom: Point,
    pub right_bottom: Point,
}

impl Drop {
    pub fn new(center: Point, width: f64, height: f64) -> Self {
        let half_h = height / 2.0;
        Self {
            center,
            width,
            height,
            center_top: Point::new(center.x, center.y - half_h),
            left_bottom: Point::new(center.x - width / 2.0, center.y + half_h),
            right_bottom: Point::new(center.x + width / 2.0, center.y + half_h),
        }
    }

    fn map_points(&self, f: impl Fn(Point) -> Point) -> Self {
        Self {
            center: f(self.center),
            center_top: f(self.center_top),
            left_bottom: f(self.left_bottom),
            right_bottom: f(self.right_bottom),
            ..*self
        }
    }
}

impl Transformable for Drop {
    fn rotate(&self, pivot: Point, angle: f64) -> Self {
        self.map_points(|p| p.rotate(pivot, angle))
    }

    fn scale(&self, pivot: Point, factor: f64) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
            ..self.map_points(|p| p.scale(pivot, factor))
        }
    }

    fn move_to(&self, new_center: Point) -> Self {
        let old_center = self.center;
        self.map_points(|p| p.move_by(old_center, new_center))
    }

    fn center(&self) -> Point {
        self.center
    }
}

impl BasicShape for Drop {
    fn boundary(&self) -> Vec<Point> {
        vec![self.center_top, self.left_bottom, self.right_bottom]
    }
}
