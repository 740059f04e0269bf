use motifkit_designer::{
    BasicShape, Circle, Diamond, Drop, HalfCircle, Petal, Point, Polygon, Ring, Shape,
    Transformable, Trapeze,
};

fn assert_point_eq(actual: Point, expected: Point) {
    assert!(
        (actual.x - expected.x).abs() < 1e-9 && (actual.y - expected.y).abs() < 1e-9,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

fn all_basic_shapes() -> Vec<Shape> {
    let c = Point::new(100.0, 100.0);
    vec![
        Circle::new(c, 60.0).into(),
        HalfCircle::new(c, 60.0).into(),
        Ring::new(c, 40.0, 10.0).into(),
        Polygon::new(vec![
            Point::new(40.0, 160.0),
            Point::new(100.0, 40.0),
            Point::new(160.0, 160.0),
            Point::new(40.0, 160.0),
        ])
        .into(),
        Trapeze::new(c, 120.0, 120.0, 60.0).into(),
        Diamond::new(c, 60.0, 120.0, 0.25).into(),
        Drop::new(c, 100.0, 120.0).into(),
        Petal::new(c, 120.0, 80.0).into(),
    ]
}

#[test]
fn test_move_lands_center_on_target() {
    let target = Point::new(-35.5, 410.25);
    for shape in all_basic_shapes() {
        assert_point_eq(shape.move_to(target).center(), target);
    }
}

#[test]
fn test_identity_transforms_are_exact() {
    let pivot = Point::new(13.0, -7.0);
    for shape in all_basic_shapes() {
        assert_eq!(shape.rotate(pivot, 0.0), shape);
        assert_eq!(shape.scale(pivot, 1.0), shape);
    }
}

#[test]
fn test_transforms_do_not_touch_receiver() {
    let trapeze = Trapeze::new(Point::new(0.0, 0.0), 10.0, 20.0, 10.0);
    let before = trapeze;
    let _ = trapeze.rotate(Point::new(1.0, 1.0), 33.0);
    let _ = trapeze.scale(Point::new(1.0, 1.0), 3.0);
    let _ = trapeze.move_to(Point::new(50.0, 50.0));
    assert_eq!(trapeze, before);
}

#[test]
fn test_circle_scale_doubles_radius() {
    let center = Point::new(100.0, 100.0);
    let circle = Circle::new(center, 10.0).scale(center, 2.0);
    assert_eq!(circle.radius, 20.0);
    assert_eq!(circle.center, center);
}

#[test]
fn test_circle_scale_about_external_pivot_moves_center() {
    let circle = Circle::new(Point::new(10.0, 0.0), 5.0).scale(Point::new(0.0, 0.0), 3.0);
    assert_eq!(circle.center, Point::new(30.0, 0.0));
    assert_eq!(circle.radius, 15.0);
}

#[test]
fn test_ring_derives_outer_radius() {
    let ring = Ring::new(Point::new(0.0, 0.0), 40.0, 10.0);
    assert_eq!(ring.outer_radius, 50.0);

    let scaled = ring.scale(Point::new(0.0, 0.0), 0.5);
    assert_eq!(scaled.inner_radius, 20.0);
    assert_eq!(scaled.width, 5.0);
    assert_eq!(scaled.outer_radius, 25.0);
}

#[test]
fn test_half_circle_anchors_follow_move() {
    let half = HalfCircle::new(Point::new(0.0, 0.0), 10.0).move_to(Point::new(50.0, 20.0));
    assert_eq!(half.left_bottom, Point::new(40.0, 20.0));
    assert_eq!(half.right_bottom, Point::new(60.0, 20.0));
    assert_eq!(half.boundary()[1], Point::new(50.0, 10.0));
}

#[test]
fn test_trapeze_corners() {
    let trapeze = Trapeze::new(Point::new(100.0, 100.0), 120.0, 120.0, 60.0);
    assert_eq!(
        trapeze.boundary(),
        vec![
            Point::new(70.0, 40.0),
            Point::new(130.0, 40.0),
            Point::new(160.0, 160.0),
            Point::new(40.0, 160.0),
        ]
    );
}

#[test]
fn test_trapeze_rotation_moves_every_corner() {
    let pivot = Point::new(0.0, 0.0);
    let trapeze = Trapeze::new(Point::new(10.0, 0.0), 2.0, 2.0, 2.0).rotate(pivot, 90.0);
    assert_point_eq(trapeze.center, Point::new(0.0, 10.0));
    assert_point_eq(trapeze.left_top, Point::new(1.0, 9.0));
    assert_point_eq(trapeze.right_bottom, Point::new(-1.0, 11.0));
}

#[test]
fn test_drop_scale_keeps_anchors_consistent() {
    let center = Point::new(0.0, 0.0);
    let drop = Drop::new(center, 10.0, 20.0).scale(Point::new(10.0, 10.0), 2.0);
    assert_eq!(drop.center, Point::new(-10.0, -10.0));
    assert_eq!(drop.center_top, Point::new(-10.0, -30.0));
    assert_eq!(drop.left_bottom, Point::new(-20.0, 10.0));
    assert_eq!(drop.width, 20.0);
}

#[test]
fn test_petal_move_translates_all_anchors() {
    let petal = Petal::new(Point::new(0.0, 0.0), 20.0, 10.0).move_to(Point::new(5.0, 5.0));
    assert_eq!(petal.start, Point::new(5.0, -5.0));
    assert_eq!(petal.end, Point::new(5.0, 15.0));
    assert_eq!(petal.middle_left, Point::new(0.0, 5.0));
    assert_eq!(petal.middle_right, Point::new(10.0, 5.0));
}

#[test]
fn test_polygon_center_uses_distinct_coordinates() {
    // Three points share y = 10; they count once.
    let polygon = Polygon::new(vec![
        Point::new(0.0, 10.0),
        Point::new(5.0, 10.0),
        Point::new(10.0, 10.0),
        Point::new(5.0, 40.0),
    ]);
    assert_eq!(polygon.center(), Point::new(5.0, 25.0));
}

#[test]
fn test_boundary_of_basic_shapes() {
    let c = Point::new(0.0, 0.0);
    assert_eq!(Circle::new(c, 1.0).boundary().len(), 4);
    assert_eq!(Ring::new(c, 1.0, 1.0).boundary()[0], Point::new(-2.0, -2.0));
    assert_eq!(
        Drop::new(c, 2.0, 4.0).boundary(),
        vec![Point::new(0.0, -2.0), Point::new(-1.0, 2.0), Point::new(1.0, 2.0)]
    );
    assert_eq!(
        Diamond::new(c, 2.0, 4.0, 0.0).boundary(),
        vec![
            Point::new(0.0, -2.0),
            Point::new(-1.0, 0.0),
            Point::new(0.0, 2.0),
            Point::new(1.0, 0.0),
        ]
    );
}
