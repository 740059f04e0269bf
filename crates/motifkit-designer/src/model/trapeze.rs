use super::{BasicShape, Point, Transformable};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trapeze {
    pub center: Point,
    pub height: f64,
    pub lower_width: f64,
    pub upper_width: f64,
    pub left_top: Point,
    pub right_top: Point,
    pub right_bottom: Point,
    pub left_bottom: Point,
}

impl Trapeze {
    pub fn new(center: Point, height: f64, lower_width: f64, upper_width: f64) -> Self {
        let half_h = height / 2.0;
        Self {
            center,
            height,
            lower_width,
            upper_width,
            left_top: Point::new(center.x - upper_width / 2.0, center.y - half_h),
            right_top: Point::new(center.x + upper_width / 2.0, center.y - half_h),
            right_bottom: Point::new(center.x + lower_width / 2.0, center.y + half_h),
            left_bottom: Point::new(center.x - lower_width / 2.0, center.y + half_h),
        }
    }

    fn map_points(&self, f: impl Fn(Point) -> Point) -> Self {
        Self {
            center: f(self.center),
            left_top: f(self.left_top),
            right_top: f(self.right_top),
            right_bottom: f(self.right_bottom),
            left_bottom: f(self.left_bottom),
            ..*self
        }
    }
}

impl Transformable for Trapeze {
    fn rotate(&self, pivot: Point, angle: f64) -> Self {
        self.map_points(|p| p.rotate(pivot, angle))
    }

    fn scale(&self, pivot: Point, factor: f64) -> Self {
        Self {
            height: self.height * factor,
            lower_width: self.lower_width * factor,
            upper_width: self.upper_width * factor,
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

impl BasicShape for Trapeze {
    fn boundary(&self) -> Vec<Point> {
        vec![
            self.left_top,
            self.right_top,
            self.right_bottom,
            self.left_bottom,
        ]
    }
}
