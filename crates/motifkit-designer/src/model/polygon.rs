use super::{distinct_centroid, BasicShape, Point, Transformable};

/// Free-form polyline. Closed outlines repeat their first point at the end.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point>,
    pub fill: bool,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points, fill: true }
    }

    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when the last point repeats the first.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first == last,
            _ => false,
        }
    }
}

impl Transformable for Polygon {
    fn rotate(&self, pivot: Point, angle: f64) -> Self {
        Self {
            points: self.points.iter().map(|p| p.rotate(pivot, angle)).collect(),
            fill: self.fill,
        }
    }

    fn scale(&self, pivot: Point, factor: f64) -> Self {
        Self {
            points: self.points.iter().map(|p| p.scale(pivot, factor)).collect(),
            fill: self.fill,
        }
    }

    fn move_to(&self, new_center: Point) -> Self {
        let center = self.center();
        Self {
            points: self
                .points
                .iter()
                .map(|p| p.move_by(center, new_center))
                .collect(),
            fill: self.fill,
        }
    }

    fn center(&self) -> Point {
        distinct_centroid(self.points.iter().copied())
    }
}

impl BasicShape for Polygon {
    fn boundary(&self) -> Vec<Point> {
        self.points.clone()
    }
}
