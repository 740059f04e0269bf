use super::{BasicShape, Point, Transformable};

/// Upper half of a circle, closed by the diameter between its two base anchors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfCircle {
    pub center: Point,
    pub radius: f64,
    pub left_bottom: Point,
    pub right_bottom: Point,
}

impl HalfCircle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius,
            left_bottom: Point::new(center.x - radius, center.y),
            right_bottom: Point::new(center.x + radius, center.y),
        }
    }

    /// Highest point of the arc, derived from the current anchors so it
    /// follows every rotation and mirror.
    pub fn apex(&self) -> Point {
        let dx = self.right_bottom.x - self.center.x;
        let dy = self.right_bottom.y - self.center.y;
        Point::new(self.center.x + dy, self.center.y - dx)
    }
}

impl Transformable for HalfCircle {
    fn rotate(&self, pivot: Point, angle: f64) -> Self {
        Self {
            center: self.center.rotate(pivot, angle),
            radius: self.radius,
            left_bottom: self.left_bottom.rotate(pivot, angle),
            right_bottom: self.right_bottom.rotate(pivot, angle),
        }
    }

    fn scale(&self, pivot: Point, factor: f64) -> Self {
        Self {
            center: self.center.scale(pivot, factor),
            radius: self.radius * factor,
            left_bottom: self.left_bottom.scale(pivot, factor),
            right_bottom: self.right_bottom.scale(pivot, factor),
        }
    }

    fn move_to(&self, new_center: Point) -> Self {
        Self {
            center: new_center,
            radius: self.radius,
            left_bottom: self.left_bottom.move_by(self.center, new_center),
            right_bottom: self.right_bottom.move_by(self.center, new_center),
        }
    }

    fn center(&self) -> Point {
        self.center
    }
}

impl BasicShape for HalfCircle {
    fn boundary(&self) -> Vec<Point> {
        vec![self.left_bottom, self.apex(), self.right_bottom]
    }
}
