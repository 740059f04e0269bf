use super::{BasicShape, Point, Transformable};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl Transformable for Circle {
    fn rotate(&self, pivot: Point, angle: f64) -> Self {
        Self {
            center: self.center.rotate(pivot, angle),
            ..*self
        }
    }

    fn scale(&self, pivot: Point, factor: f64) -> Self {
        Self {
            center: self.center.scale(pivot, factor),
            radius: self.radius * factor,
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

impl BasicShape for Circle {
    fn boundary(&self) -> Vec<Point> {
        let Point { x, y } = self.center;
        let r = self.radius;
        vec![
            Point::new(x - r, y - r), // left top
            Point::new(x + r, y - r), // right top
            Point::new(x + r, y + r), // right bottom
            Point::new(x - r, y + r), // left bottom
        ]
    }
}
