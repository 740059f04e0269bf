use super::{distinct_centroid, Point, Shape, Transformable};

/// An ordered group of shapes moved, rotated and scaled as one rigid body.
///
/// Order is z-order: later children are drawn on top.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompositeShape {
    pub shapes: Vec<Shape>,
}

impl CompositeShape {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    /// Children's boundaries concatenated in z-order.
    pub fn boundary(&self) -> Vec<Point> {
        self.shapes.iter().flat_map(Shape::boundary).collect()
    }
}

impl Transformable for CompositeShape {
    fn rotate(&self, pivot: Point, angle: f64) -> Self {
        Self {
            shapes: self.shapes.iter().map(|s| s.rotate(pivot, angle)).collect(),
        }
    }

    fn scale(&self, pivot: Point, factor: f64) -> Self {
        Self {
            shapes: self.shapes.iter().map(|s| s.scale(pivot, factor)).collect(),
        }
    }

    /// Translates every child by the same delta, keeping their layout.
    fn move_to(&self, new_center: Point) -> Self {
        let current = self.center();
        Self {
            shapes: self
                .shapes
                .iter()
                .map(|s| s.move_to(s.center().move_by(current, new_center)))
                .collect(),
        }
    }

    fn center(&self) -> Point {
        distinct_centroid(self.shapes.iter().map(Shape::center))
    }
}

impl FromIterator<Shape> for CompositeShape {
    fn from_iter<T: IntoIterator<Item = Shape>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CompositeShape {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
