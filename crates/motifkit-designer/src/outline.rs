//! Vector outlines of shapes as `lyon` paths, and their bounds.
//!
//! Each basic shape converts to one path in the same coordinate space as the
//! model. Composites expand into their children's paths in z-order. Bounds
//! are taken over these paths and are used to fit a canvas around a scene.

use lyon::algorithms::aabb::bounding_box;
use lyon::math::point;
use lyon::path::{Path, Winding};

use crate::layer::Layer;
use crate::model::{
    Circle, Diamond, Drop, HalfCircle, Petal, Point, Polygon, Ring, Shape, Trapeze,
};

/// Control distance for a cubic Bézier approximating a quarter circle.
const QUARTER_ARC_KAPPA: f64 = 0.552_284_749_830_793_4;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Grows the box by `margin` on every side.
    pub fn expand(&self, margin: f64) -> Bounds {
        Bounds {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }
}

fn pt(p: Point) -> lyon::math::Point {
    point(p.x as f32, p.y as f32)
}

/// Point `from + kappa * (dir - origin)`, the control point of a quarter arc.
fn arc_control(from: Point, toward: Point, origin: Point) -> lyon::math::Point {
    pt(Point::new(
        from.x + QUARTER_ARC_KAPPA * (toward.x - origin.x),
        from.y + QUARTER_ARC_KAPPA * (toward.y - origin.y),
    ))
}

fn circle_path(circle: &Circle) -> Path {
    let mut builder = Path::builder();
    builder.add_circle(
        pt(circle.center),
        circle.radius.abs() as f32,
        Winding::Positive,
    );
    builder.build()
}

fn ring_path(ring: &Ring) -> Path {
    let mut builder = Path::builder();
    builder.add_circle(
        pt(ring.center),
        ring.outer_radius.abs() as f32,
        Winding::Positive,
    );
    builder.add_circle(
        pt(ring.center),
        ring.inner_radius.abs() as f32,
        Winding::Negative,
    );
    builder.build()
}

fn half_circle_path(half: &HalfCircle) -> Path {
    let c = half.center;
    let apex = half.apex();
    let (lb, rb) = (half.left_bottom, half.right_bottom);

    let mut builder = Path::builder();
    builder.begin(pt(lb));
    builder.cubic_bezier_to(arc_control(lb, apex, c), arc_control(apex, lb, c), pt(apex));
    builder.cubic_bezier_to(arc_control(apex, rb, c), arc_control(rb, apex, c), pt(rb));
    builder.close();
    builder.build()
}

fn polyline_path(points: &[Point], close: bool) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut builder = Path::builder();
    builder.begin(pt(*first));
    for p in rest {
        builder.line_to(pt(*p));
    }
    builder.end(close);
    Some(builder.build())
}

fn polygon_path(polygon: &Polygon) -> Option<Path> {
    polyline_path(&polygon.points, polygon.is_closed())
}

fn trapeze_path(trapeze: &Trapeze) -> Option<Path> {
    polyline_path(
        &[
            trapeze.left_top,
            trapeze.right_top,
            trapeze.right_bottom,
            trapeze.left_bottom,
        ],
        true,
    )
}

fn diamond_path(diamond: &Diamond) -> Option<Path> {
    polyline_path(
        &[
            diamond.center_top,
            diamond.right_center,
            diamond.center_bottom,
            diamond.left_center,
        ],
        true,
    )
}

fn drop_path(drop: &Drop) -> Path {
    let mut builder = Path::builder();
    builder.begin(pt(drop.center_top));
    builder.cubic_bezier_to(pt(drop.left_bottom), pt(drop.right_bottom), pt(drop.center_top));
    builder.close();
    builder.build()
}

fn petal_path(petal: &Petal) -> Path {
    let mut builder = Path::builder();
    builder.begin(pt(petal.start));
    builder.quadratic_bezier_to(pt(petal.middle_left), pt(petal.end));
    builder.quadratic_bezier_to(pt(petal.middle_right), pt(petal.start));
    builder.close();
    builder.build()
}

fn collect_paths(shape: &Shape, out: &mut Vec<Path>) {
    match shape {
        Shape::Circle(s) => out.push(circle_path(s)),
        Shape::HalfCircle(s) => out.push(half_circle_path(s)),
        Shape::Ring(s) => out.push(ring_path(s)),
        Shape::Polygon(s) => out.extend(polygon_path(s)),
        Shape::Trapeze(s) => out.extend(trapeze_path(s)),
        Shape::Diamond(s) => out.extend(diamond_path(s)),
        Shape::Drop(s) => out.push(drop_path(s)),
        Shape::Petal(s) => out.push(petal_path(s)),
        Shape::Composite(s) => {
            for child in s {
                collect_paths(child, out);
            }
        }
    }
}

impl Shape {
    /// One path per basic shape, in drawing order. Empty polygons contribute
    /// nothing.
    pub fn outline_paths(&self) -> Vec<Path> {
        let mut paths = Vec::new();
        collect_paths(self, &mut paths);
        paths
    }

    /// Bounds of the drawn outline, or `None` when nothing would be drawn.
    pub fn bounding_box(&self) -> Option<Bounds> {
        self.outline_paths()
            .iter()
            .map(|path| {
                let bb = bounding_box(path.iter());
                Bounds::new(
                    bb.min.x as f64,
                    bb.min.y as f64,
                    bb.max.x as f64,
                    bb.max.y as f64,
                )
            })
            .reduce(|a, b| a.union(&b))
    }
}

/// Bounds of every shape on every layer.
pub fn layers_bounding_box(layers: &[Layer]) -> Option<Bounds> {
    layers
        .iter()
        .flat_map(Layer::iter)
        .filter_map(Shape::bounding_box)
        .reduce(|a, b| a.union(&b))
}
