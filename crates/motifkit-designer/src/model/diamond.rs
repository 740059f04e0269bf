use super::{BasicShape, Point, Transformable};

/// Four-point rhombus. `vertical_offset_factor` lifts the side corners by
/// `height * factor` above the center, giving a kite when non-zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diamond {
    pub center: Point,
    pub width: f64,
    pub height: f64,
    pub vertical_offset_factor: f64,
    pub center_top: Point,
    pub left_center: Point,
    pub right_center: Point,
    pub center_bottom: Point,
}

impl Diamond {
    pub fn new(center: Point, width: f64, height: f64, vertical_offset_factor: f64) -> Self {
        let side_y = center.y - height * vertical_offset_factor;
        Self {
            center,
            width,
            height,
            vertical_offset_factor,
            center_top: Point::new(center.x, center.y - height / 2.0),
            left_center: Point::new(center.x - width / 2.0, side_y),
            right_center: Point::new(center.x + width / 2.0, side_y),
            center_bottom: Point::new(center.x, center.y + height / 2.0),
        }
    }

    fn map_points(&self, f: impl Fn(Point) -> Point) -> Self {
        Self {
            center: f(self.center),
            center_top: f(self.center_top),
            left_center: f(self.left_center),
            right_center: f(self.right_center),
            center_bottom: f(self.center_bottom),
            ..*self
        }
    }
}

impl Transformable for Diamond {
    fn rotate(&self, pivot: Point, angle: f64) -> Self {
        self.map_points(|p| p.rotate(pivot, angle))
    }

    fn scale(&self, pivot: Point, factor: f64) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
            ..self.map_points(|p| p.scale(pivot, factor))
        }
    }

    fn move_to(&self, new_center: Point) -> Self {
        let old_center = self.center;
        self.map_points(|p| p.move_by(old_center, new_center))
    }

    fn center(&self) -> Point {
        self.center
    }
}

impl BasicShape for Diamond {
    fn boundary(&self) -> Vec<Point> {
        vec![
            self.center_top,
            self.left_center,
            self.center_bottom,
            self.right_center,
        ]
    }
}
