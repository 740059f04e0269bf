//! Repetition of a single shape along a vertical line.

use tracing::debug;

use crate::model::{CompositeShape, Point, Shape, Transformable};

/// Builds composite patterns out of copies of one shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternGenerator;

impl PatternGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Stacks `repetitions` copies of `shape` upwards from `center`.
    ///
    /// Copy `k` is centered on `(center.x, center.y - k * distance)`.
    pub fn repeat_shape(
        &self,
        center: Point,
        shape: &Shape,
        repetitions: u32,
        distance: f64,
    ) -> CompositeShape {
        debug!(repetitions, distance, kind = %shape.shape_type(), "repeating shape");
        (0..repetitions)
            .map(|k| shape.move_to(Point::new(center.x, center.y - k as f64 * distance)))
            .collect()
    }
}
