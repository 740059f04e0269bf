//! Showcase scene: every shape kind laid out on a two row grid.
//!
//! The first row shows each shape as built. The second row shows the same
//! shape rotated by 45 degrees and scaled to half size about its new center,
//! with a small marker disc on that center.

use motifkit_designer::{Layer, Point, Shape, ShapeGenerator, Transformable};
use rand::Rng;
use tracing::debug;

/// Horizontal distance between grid cells, and the canvas padding unit.
pub const CELL_SIZE: f64 = 150.0;

const RADIUS: f64 = 60.0;
const HEIGHT: f64 = 120.0;
const FIRST_ROW_Y: f64 = 100.0;
const SECOND_ROW_Y: f64 = 250.0;
const CANVAS_HEIGHT: f64 = 350.0;
const MARKER_RADIUS: f64 = 5.0;

/// A rendered-ready scene and its natural canvas size.
#[derive(Debug, Clone)]
pub struct Showcase {
    pub layers: Vec<Layer>,
    pub width: f64,
    pub height: f64,
}

/// The showcase shapes, in grid order, all built around the same point.
pub fn showcase_shapes<R: Rng>(generator: &mut ShapeGenerator<R>) -> Vec<Shape> {
    let zero = Point::new(100.0, 100.0);
    vec![
        generator.circle(zero, RADIUS).into(),
        generator.half_circle(zero, RADIUS).into(),
        generator.ring(zero, RADIUS - 20.0, 10.0).into(),
        generator.triangle(zero, 120.0, HEIGHT).into(),
        generator.diamond_default(zero, 60.0, 120.0).into(),
        generator.diamond(zero, 60.0, 120.0, 0.25).into(),
        generator.rectangle(zero, HEIGHT, 80.0).into(),
        generator.trapeze(zero, HEIGHT, 60.0, 120.0).into(),
        generator.star_default(zero, 5, RADIUS).into(),
        generator.petal(zero, 80.0, HEIGHT).into(),
        generator.drop(zero, 100.0, HEIGHT).into(),
        generator.random_flower(zero, RADIUS, 9).into(),
    ]
}

/// Builds the showcase scene on a single layer.
pub fn build_showcase<R: Rng>(generator: &mut ShapeGenerator<R>) -> Showcase {
    let shapes = showcase_shapes(generator);
    let mut layer = Layer::named("showcase");

    let cell = |i: usize, y: f64| Point::new(100.0 + i as f64 * CELL_SIZE, y);

    for (i, shape) in shapes.iter().enumerate() {
        layer.push(shape.move_to(cell(i, FIRST_ROW_Y)));
    }

    for (i, shape) in shapes.iter().enumerate() {
        let target = cell(i, SECOND_ROW_Y);
        layer.push(
            shape
                .move_to(target)
                .rotate(target, 45.0)
                .scale(target, 0.5),
        );
        layer.push(generator.circle(target, MARKER_RADIUS));
    }

    let width = (1 + shapes.len()) as f64 * CELL_SIZE;
    debug!(shapes = layer.len(), width, "built showcase scene");

    Showcase {
        layers: vec![layer],
        width,
        height: CANVAS_HEIGHT,
    }
}
