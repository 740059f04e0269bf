//! # Shape Generator
//!
//! Factory for basic and composite shapes built from high level parameters.
//!
//! Supports:
//! - Direct constructors for every basic shape
//! - Stars and triangles as closed polygons
//! - Flower motifs: rotated petals around a small center disc
//!
//! Inputs are not validated. Negative sizes are accepted and mirror the shape.
//! The only randomness is the petal style picked by [`ShapeGenerator::flower`],
//! and it comes from the generator's own random source so callers can seed it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::model::{
    Circle, CompositeShape, Diamond, Drop, HalfCircle, Petal, Point, Polygon, Ring, Shape,
    Transformable, Trapeze,
};

/// Ratio of inner to outer radius used by [`ShapeGenerator::star_default`].
pub const DEFAULT_STAR_INNER_RATIO: f64 = 0.45;

/// Ratio of the flower's center disc to its radius.
pub const FLOWER_CENTER_RATIO: f64 = 0.2;

/// Default petal width factor for [`ShapeGenerator::flower`].
pub const DEFAULT_PETAL_WIDTH_FACTOR: f64 = 0.5;

/// Petal shapes available to flower motifs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetalStyle {
    /// A drop turned upside down, pointing away from the center.
    FlippedDrop,
    Drop,
    Petal,
}

impl PetalStyle {
    pub const ALL: [PetalStyle; 3] = [PetalStyle::FlippedDrop, PetalStyle::Drop, PetalStyle::Petal];

    /// Picks one style uniformly.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// Shape factory with an injectable random source.
#[derive(Debug, Clone)]
pub struct ShapeGenerator<R = StdRng> {
    rng: R,
}

impl ShapeGenerator<StdRng> {
    /// Creates a generator seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a generator whose random choices are reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for ShapeGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ShapeGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Closed star polygon alternating `count` outer and `count` inner points.
    ///
    /// Outer point `i` sits at `i * 360 / count` degrees from vertical and each
    /// inner point half a step further. The first outer point is repeated at
    /// the end, so the polygon holds `2 * count + 1` points.
    pub fn star(&self, center: Point, count: u32, outer_radius: f64, inner_radius: f64) -> Polygon {
        let angle = 360.0 / count as f64;
        let outer = Point::new(center.x, center.y - outer_radius);
        let inner = Point::new(center.x, center.y - inner_radius);

        let mut points = Vec::with_capacity(2 * count as usize + 1);
        for i in 0..count {
            let step = i as f64 * angle;
            points.push(outer.rotate(center, step));
            points.push(inner.rotate(center, step + angle / 2.0));
        }
        points.push(outer);

        debug!(count, outer_radius, inner_radius, "generated star");
        Polygon::new(points)
    }

    /// Star with the inner radius at [`DEFAULT_STAR_INNER_RATIO`] of the outer.
    pub fn star_default(&self, center: Point, count: u32, outer_radius: f64) -> Polygon {
        self.star(
            center,
            count,
            outer_radius,
            outer_radius * DEFAULT_STAR_INNER_RATIO,
        )
    }

    /// Flower motif with a randomly chosen petal style.
    pub fn flower(
        &mut self,
        center: Point,
        radius: f64,
        petal_count: u32,
        petal_width_factor: f64,
    ) -> CompositeShape {
        let style = PetalStyle::random(&mut self.rng);
        self.flower_with_style(center, radius, petal_count, petal_width_factor, style)
    }

    /// Flower motif with a random petal style and a petal width factor drawn
    /// from `[0.5, 1.0)`.
    pub fn random_flower(&mut self, center: Point, radius: f64, petal_count: u32) -> CompositeShape {
        let factor = self.rng.gen_range(0.5..1.0);
        self.flower(center, radius, petal_count, factor)
    }

    /// Flower motif with an explicit petal style.
    ///
    /// One petal `radius * petal_width_factor` wide and `radius` tall is placed
    /// `radius / 2` above `center`, then copied `petal_count` times around
    /// `center` at even angular steps. A disc of `radius * 0.2` sits on top.
    pub fn flower_with_style(
        &self,
        center: Point,
        radius: f64,
        petal_count: u32,
        petal_width_factor: f64,
        style: PetalStyle,
    ) -> CompositeShape {
        let angle = 360.0 / petal_count as f64;
        let petal_center = Point::new(center.x, center.y - radius / 2.0);
        let petal_width = radius * petal_width_factor;

        let petal: Shape = match style {
            PetalStyle::FlippedDrop => self
                .drop(petal_center, petal_width, radius)
                .rotate(petal_center, 180.0)
                .into(),
            PetalStyle::Drop => self.drop(petal_center, petal_width, radius).into(),
            PetalStyle::Petal => self.petal(petal_center, petal_width, radius).into(),
        };

        let mut shapes: Vec<Shape> = (0..petal_count)
            .map(|i| petal.rotate(center, angle * i as f64))
            .collect();
        shapes.push(self.circle(center, radius * FLOWER_CENTER_RATIO).into());

        debug!(petal_count, ?style, radius, "generated flower");
        CompositeShape::new(shapes)
    }

    /// Isosceles triangle, apex up, closed back onto its first point.
    pub fn triangle(&self, center: Point, width: f64, height: f64) -> Polygon {
        let left_bottom = Point::new(center.x - width / 2.0, center.y + height / 2.0);
        Polygon::new(vec![
            left_bottom,
            Point::new(center.x, center.y - height / 2.0),
            Point::new(center.x + width / 2.0, center.y + height / 2.0),
            left_bottom,
        ])
    }

    pub fn diamond(&self, center: Point, width: f64, height: f64, factor: f64) -> Diamond {
        Diamond::new(center, width, height, factor)
    }

    /// Symmetric diamond with its side corners level with the center.
    pub fn diamond_default(&self, center: Point, width: f64, height: f64) -> Diamond {
        self.diamond(center, width, height, 0.0)
    }

    pub fn drop(&self, center: Point, width: f64, height: f64) -> Drop {
        Drop::new(center, width, height)
    }

    pub fn petal(&self, center: Point, width: f64, height: f64) -> Petal {
        Petal::new(center, height, width)
    }

    pub fn trapeze(&self, center: Point, height: f64, upper_width: f64, lower_width: f64) -> Trapeze {
        Trapeze::new(center, height, lower_width, upper_width)
    }

    /// Trapeze whose upper and lower edges have the same width.
    pub fn rectangle(&self, center: Point, height: f64, width: f64) -> Trapeze {
        Trapeze::new(center, height, width, width)
    }

    pub fn ring(&self, center: Point, inner_radius: f64, width: f64) -> Ring {
        Ring::new(center, inner_radius, width)
    }

    pub fn circle(&self, center: Point, radius: f64) -> Circle {
        Circle::new(center, radius)
    }

    pub fn half_circle(&self, center: Point, radius: f64) -> HalfCircle {
        HalfCircle::new(center, radius)
    }
}
