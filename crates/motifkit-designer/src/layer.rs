use crate::model::Shape;

/// An ordered collection of shapes rendered together as one group.
///
/// Layers carry no transform of their own; shapes are appended in z-order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layer {
    pub name: Option<String>,
    pub shapes: Vec<Shape>,
}

impl Layer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            shapes: Vec::new(),
        }
    }

    /// Appends a shape on top of the existing ones.
    pub fn push(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
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
}

impl<S: Into<Shape>> Extend<S> for Layer {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        self.shapes.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a Layer {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
