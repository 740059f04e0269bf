use super::{distinct_centroid, BasicShape, Point, Transformable};

/// Lens shape made of two quadratic curves between `start` and `end`, bulging
/// towards `middle_left` and `middle_right`.
///
/// There is no stored center; it is derived from the four anchors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Petal {
    pub height: f64,
    pub width: f64,
    pub start: Point,
    pub end: Point,
    pub middle_left: Point,
    pub middle_right: Point,
}

impl Petal {
    pub fn new(center: Point, height: f64, width: f64) -> Self {
        Self {
            height,
            width,
            start: Point::new(center.x, center.y - height / 2.0),
            end: Point::new(center.x, center.y + height / 2.0),
            middle_left: Point::new(center.x - width / 2.0, center.y),
            middle_right: Point::new(center.x + width / 2.0, center.y),
        }
    }

    fn anchors(&self) -> [Point; 4] {
        [self.start, self.middle_left, self.middle_right, self.end]
    }

    fn map_points(&self, f: impl Fn(Point) -> Point) -> Self {
        Self {
            start: f(self.start),
            end: f(self.end),
            middle_left: f(self.middle_left),
            middle_right: f(self.middle_right),
            ..*self
        }
    }
}

impl Transformable for Petal {
    fn rotate(&self, pivot: Point, angle: f64) -> Self {
        self.map_points(|p| p.rotate(pivot, angle))
    }

    fn scale(&self, pivot: Point, factor: f64) -> Self {
        Self {
            height: self.height * factor,
            width: self.width * factor,
            ..self.map_points(|p| p.scale(pivot, factor))
        }
    }

    fn move_to(&self, new_center: Point) -> Self {
        let center = self.center();
        self.map_points(|p| p.move_by(center, new_center))
    }

    fn center(&self) -> Point {
        distinct_centroid(self.anchors())
    }
}

impl BasicShape for Petal {
    fn boundary(&self) -> Vec<Point> {
        vec![self.start, self.middle_left, self.end, self.middle_right]
    }
}
