use super::{BasicShape, Point, Transformable};

/// Annulus between `inner_radius` and `outer_radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub center: Point,
    pub inner_radius: f64,
    pub width: f64,
    pub outer_radius: f64,
}

impl Ring {
    pub fn new(center: Point, inner_radius: f64, width: f64) -> Self {
        Self {
            center,
            inner_radius,
            width,
            outer_radius: inner_radius + width,
        }
    }
}

impl Transformable for Ring {
    fn rotate(&self, pivot: Point, angle: f64) -> Self {
        Self {
            center: self.center.rotate(pivot, angle),
            ..*self
        }
    }

    fn scale(&self, pivot: Point, factor: f64) -> Self {
        Self {
            center: self.center.scale(pivot, factor),
            inner_radius: self.inner_radius * factor,
            width: self.width * factor,
            outer_radius: self.outer_radius * factor,
        }
    }

    fn move_to(&self, new_center: Point) -> Self {
        Self {
            center: new_center,
            ..*self
        }
    }

    fn center(&self) -> Point {
        self.center
    }
}

impl BasicShape for Ring {
    fn boundary(&self) -> Vec<Point> {
        let Point { x, y } = self.center;
        let r = self.outer_radius;
        vec![
            Point::new(x - r, y - r),
            Point::new(x + r, y - r),
            Point::new(x + r, y + r),
            Point::new(x - r, y + r),
        ]
    }
}
