mod circle;
mod composite;
mod diamond;
mod drop;
mod half_circle;
mod petal;
mod polygon;
mod ring;
mod trapeze;

pub use circle::Circle;
pub use composite::CompositeShape;
pub use diamond::Diamond;
pub use drop::Drop;
pub use half_circle::HalfCircle;
pub use petal::Petal;
pub use polygon::Polygon;
pub use ring::Ring;
pub use trapeze::Trapeze;

/// Represents a 2D point with X and Y coordinates.
///
/// Points are values: every transform returns a new point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Translates the point by the delta between `old_center` and `new_center`.
    ///
    /// Shapes use this for their anchors: an anchor follows its shape's center,
    /// so the delta comes from the shape and not from the anchor itself.
    pub fn move_by(&self, old_center: Point, new_center: Point) -> Point {
        Point {
            x: self.x + (new_center.x - old_center.x),
            y: self.y + (new_center.y - old_center.y),
        }
    }

    /// Uniformly scales the offset from `pivot` by `factor`.
    pub fn scale(&self, pivot: Point, factor: f64) -> Point {
        if (factor - 1.0).abs() < f64::EPSILON {
            return *self;
        }
        Point {
            x: (self.x - pivot.x) * factor + pivot.x,
            y: (self.y - pivot.y) * factor + pivot.y,
        }
    }

    /// Rotates the point about `pivot` by `angle_deg` degrees.
    ///
    /// Positive angles are counterclockwise in math convention, which reads as
    /// clockwise on a y-down canvas.
    pub fn rotate(&self, pivot: Point, angle_deg: f64) -> Point {
        if angle_deg.abs() < 1e-6 {
            return *self;
        }
        let angle_rad = angle_deg.to_radians();
        let cos_a = angle_rad.cos();
        let sin_a = angle_rad.sin();
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;
        Point {
            x: pivot.x + dx * cos_a - dy * sin_a,
            y: pivot.y + dx * sin_a + dy * cos_a,
        }
    }
}

/// Relative distance below which two coordinates are the same value.
pub const COINCIDENT_TOLERANCE: f64 = 1e-9;

fn coincident(a: f64, b: f64) -> bool {
    (a - b).abs() <= COINCIDENT_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

/// Averages the distinct x values and the distinct y values of `points`
/// independently.
///
/// Coincident coordinates count once, so a cluster sharing an axis value does
/// not pull the result towards it. Values within [`COINCIDENT_TOLERANCE`] of
/// each other (relative to their magnitude, absolute below 1) are coincident,
/// so rounding from a translation never splits or merges them. An empty set
/// yields the origin.
pub(crate) fn distinct_centroid<I>(points: I) -> Point
where
    I: IntoIterator<Item = Point>,
{
    let mut xs: Vec<f64> = Vec::new();
    let mut ys: Vec<f64> = Vec::new();
    for p in points {
        if !xs.iter().any(|&x| coincident(x, p.x)) {
            xs.push(p.x);
        }
        if !ys.iter().any(|&y| coincident(y, p.y)) {
            ys.push(p.y);
        }
    }
    if xs.is_empty() || ys.is_empty() {
        return Point::ORIGIN;
    }
    Point {
        x: xs.iter().sum::<f64>() / xs.len() as f64,
        y: ys.iter().sum::<f64>() / ys.len() as f64,
    }
}

/// Transform contract shared by every drawable entity.
///
/// All operations are pure: the receiver is left untouched and a transformed
/// copy is returned.
pub trait Transformable: Sized {
    /// Rotates about `pivot` by `angle` degrees.
    fn rotate(&self, pivot: Point, angle: f64) -> Self;

    /// Scales uniformly about `pivot`.
    fn scale(&self, pivot: Point, factor: f64) -> Self;

    /// Moves the shape so that its center lands on `new_center`, keeping its
    /// internal geometry.
    fn move_to(&self, new_center: Point) -> Self;

    fn center(&self) -> Point;
}

/// A primitive shape that can describe its own outline.
pub trait BasicShape: Transformable {
    /// Ordered outline or extremal points used by renderers.
    fn boundary(&self) -> Vec<Point>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeType {
    Circle,
    HalfCircle,
    Ring,
    Polygon,
    Trapeze,
    Diamond,
    Drop,
    Petal,
    Composite,
}

impl ShapeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeType::Circle => "circle",
            ShapeType::HalfCircle => "half-circle",
            ShapeType::Ring => "ring",
            ShapeType::Polygon => "polygon",
            ShapeType::Trapeze => "trapeze",
            ShapeType::Diamond => "diamond",
            ShapeType::Drop => "drop",
            ShapeType::Petal => "petal",
            ShapeType::Composite => "composite",
        }
    }
}

impl std::fmt::Display for ShapeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Enum wrapper for all drawable shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    HalfCircle(HalfCircle),
    Ring(Ring),
    Polygon(Polygon),
    Trapeze(Trapeze),
    Diamond(Diamond),
    Drop(Drop),
    Petal(Petal),
    Composite(CompositeShape),
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Circle(_) => ShapeType::Circle,
            Shape::HalfCircle(_) => ShapeType::HalfCircle,
            Shape::Ring(_) => ShapeType::Ring,
            Shape::Polygon(_) => ShapeType::Polygon,
            Shape::Trapeze(_) => ShapeType::Trapeze,
            Shape::Diamond(_) => ShapeType::Diamond,
            Shape::Drop(_) => ShapeType::Drop,
            Shape::Petal(_) => ShapeType::Petal,
            Shape::Composite(_) => ShapeType::Composite,
        }
    }

    /// Outline points of the shape; composites concatenate their children in
    /// z-order.
    pub fn boundary(&self) -> Vec<Point> {
        match self {
            Shape::Circle(s) => s.boundary(),
            Shape::HalfCircle(s) => s.boundary(),
            Shape::Ring(s) => s.boundary(),
            Shape::Polygon(s) => s.boundary(),
            Shape::Trapeze(s) => s.boundary(),
            Shape::Diamond(s) => s.boundary(),
            Shape::Drop(s) => s.boundary(),
            Shape::Petal(s) => s.boundary(),
            Shape::Composite(s) => s.boundary(),
        }
    }
}

impl Transformable for Shape {
    fn rotate(&self, pivot: Point, angle: f64) -> Self {
        match self {
            Shape::Circle(s) => Shape::Circle(s.rotate(pivot, angle)),
            Shape::HalfCircle(s) => Shape::HalfCircle(s.rotate(pivot, angle)),
            Shape::Ring(s) => Shape::Ring(s.rotate(pivot, angle)),
            Shape::Polygon(s) => Shape::Polygon(s.rotate(pivot, angle)),
            Shape::Trapeze(s) => Shape::Trapeze(s.rotate(pivot, angle)),
            Shape::Diamond(s) => Shape::Diamond(s.rotate(pivot, angle)),
            Shape::Drop(s) => Shape::Drop(s.rotate(pivot, angle)),
            Shape::Petal(s) => Shape::Petal(s.rotate(pivot, angle)),
            Shape::Composite(s) => Shape::Composite(s.rotate(pivot, angle)),
        }
    }

    fn scale(&self, pivot: Point, factor: f64) -> Self {
        match self {
            Shape::Circle(s) => Shape::Circle(s.scale(pivot, factor)),
            Shape::HalfCircle(s) => Shape::HalfCircle(s.scale(pivot, factor)),
            Shape::Ring(s) => Shape::Ring(s.scale(pivot, factor)),
            Shape::Polygon(s) => Shape::Polygon(s.scale(pivot, factor)),
            Shape::Trapeze(s) => Shape::Trapeze(s.scale(pivot, factor)),
            Shape::Diamond(s) => Shape::Diamond(s.scale(pivot, factor)),
            Shape::Drop(s) => Shape::Drop(s.scale(pivot, factor)),
            Shape::Petal(s) => Shape::Petal(s.scale(pivot, factor)),
            Shape::Composite(s) => Shape::Composite(s.scale(pivot, factor)),
        }
    }

    fn move_to(&self, new_center: Point) -> Self {
        match self {
            Shape::Circle(s) => Shape::Circle(s.move_to(new_center)),
            Shape::HalfCircle(s) => Shape::HalfCircle(s.move_to(new_center)),
            Shape::Ring(s) => Shape::Ring(s.move_to(new_center)),
            Shape::Polygon(s) => Shape::Polygon(s.move_to(new_center)),
            Shape::Trapeze(s) => Shape::Trapeze(s.move_to(new_center)),
            Shape::Diamond(s) => Shape::Diamond(s.move_to(new_center)),
            Shape::Drop(s) => Shape::Drop(s.move_to(new_center)),
            Shape::Petal(s) => Shape::Petal(s.move_to(new_center)),
            Shape::Composite(s) => Shape::Composite(s.move_to(new_center)),
        }
    }

    fn center(&self) -> Point {
        match self {
            Shape::Circle(s) => s.center(),
            Shape::HalfCircle(s) => s.center(),
            Shape::Ring(s) => s.center(),
            Shape::Polygon(s) => s.center(),
            Shape::Trapeze(s) => s.center(),
            Shape::Diamond(s) => s.center(),
            Shape::Drop(s) => s.center(),
            Shape::Petal(s) => s.center(),
            Shape::Composite(s) => s.center(),
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Shape {
                fn from(shape: $variant) -> Self {
                    Shape::$variant(shape)
                }
            }
        )*
    };
}

impl_from_variant!(Circle, HalfCircle, Ring, Polygon, Trapeze, Diamond, Drop, Petal);

impl From<CompositeShape> for Shape {
    fn from(shape: CompositeShape) -> Self {
        Shape::Composite(shape)
    }
}
