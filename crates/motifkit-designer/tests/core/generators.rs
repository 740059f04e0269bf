use motifkit_designer::{
    PatternGenerator, PetalStyle, Point, Shape, ShapeGenerator, Transformable,
};

#[test]
fn test_star_point_count() {
    let generator = ShapeGenerator::seeded(1);
    let star = generator.star_default(Point::new(100.0, 100.0), 5, 60.0);
    assert_eq!(star.points.len(), 11);
    assert!(star.is_closed());
    assert_eq!(star.points[0], Point::new(100.0, 40.0));
}

#[test]
fn test_star_inner_points_use_inner_radius() {
    let center = Point::new(0.0, 0.0);
    let star = ShapeGenerator::seeded(1).star(center, 4, 10.0, 3.0);
    for (i, p) in star.points.iter().enumerate() {
        let expected = if i % 2 == 0 { 10.0 } else { 3.0 };
        assert!((p.distance_to(&center) - expected).abs() < 1e-9);
    }
}

#[test]
fn test_triangle_is_closed() {
    let triangle = ShapeGenerator::seeded(1).triangle(Point::new(100.0, 100.0), 120.0, 120.0);
    assert_eq!(triangle.points.len(), 4);
    assert_eq!(triangle.points.first(), triangle.points.last());
    assert_eq!(triangle.points[1], Point::new(100.0, 40.0));
    assert_eq!(triangle.points[2], Point::new(160.0, 160.0));
}

#[test]
fn test_rectangle_is_trapeze_with_equal_widths() {
    let rect = ShapeGenerator::seeded(1).rectangle(Point::new(0.0, 0.0), 120.0, 80.0);
    assert_eq!(rect.lower_width, rect.upper_width);
    assert_eq!(rect.left_top, Point::new(-40.0, -60.0));
    assert_eq!(rect.right_bottom, Point::new(40.0, 60.0));
}

#[test]
fn test_trapeze_argument_order() {
    let trapeze = ShapeGenerator::seeded(1).trapeze(Point::new(0.0, 0.0), 10.0, 6.0, 12.0);
    assert_eq!(trapeze.upper_width, 6.0);
    assert_eq!(trapeze.lower_width, 12.0);
}

#[test]
fn test_petal_factory_swaps_to_height_width() {
    let petal = ShapeGenerator::seeded(1).petal(Point::new(0.0, 0.0), 80.0, 120.0);
    assert_eq!(petal.width, 80.0);
    assert_eq!(petal.height, 120.0);
    assert_eq!(petal.start, Point::new(0.0, -60.0));
}

#[test]
fn test_flower_layout() {
    let center = Point::new(100.0, 100.0);
    let flower = ShapeGenerator::seeded(3).flower_with_style(center, 60.0, 9, 0.5, PetalStyle::Drop);

    assert_eq!(flower.len(), 10);
    match flower.shapes.last() {
        Some(Shape::Circle(disc)) => {
            assert_eq!(disc.center, center);
            assert!((disc.radius - 12.0).abs() < 1e-9);
        }
        other => panic!("expected center disc, got {:?}", other),
    }
    match &flower.shapes[0] {
        Shape::Drop(drop) => {
            assert_eq!(drop.center, Point::new(100.0, 70.0));
            assert_eq!(drop.width, 30.0);
            assert_eq!(drop.height, 60.0);
        }
        other => panic!("expected drop petal, got {:?}", other),
    }
    for petal in &flower.shapes[..9] {
        assert!((petal.center().distance_to(&center) - 30.0).abs() < 1e-9);
    }
}

#[test]
fn test_flower_flipped_drop_points_outward() {
    let center = Point::new(0.0, 0.0);
    let flower =
        ShapeGenerator::seeded(3).flower_with_style(center, 60.0, 1, 0.5, PetalStyle::FlippedDrop);
    match &flower.shapes[0] {
        Shape::Drop(drop) => {
            // Tip now below the petal center, towards the flower center.
            assert!((drop.center_top.y - 0.0).abs() < 1e-9);
            assert!((drop.left_bottom.y + 60.0).abs() < 1e-9);
        }
        other => panic!("expected drop petal, got {:?}", other),
    }
}

#[test]
fn test_flower_uses_random_source() {
    let center = Point::new(0.0, 0.0);
    let mut generator = ShapeGenerator::seeded(11);
    let flower = generator.flower(center, 40.0, 6, 0.5);
    assert_eq!(flower.len(), 7);
    let first = flower.shapes[0].shape_type();
    assert!(flower.shapes[..6].iter().all(|s| s.shape_type() == first));
}

#[test]
fn test_repeat_shape_stacks_upwards() {
    let generator = ShapeGenerator::seeded(1);
    let shape: Shape = generator.triangle(Point::new(10.0, 10.0), 20.0, 20.0).into();
    let pattern = PatternGenerator::new().repeat_shape(Point::new(0.0, 0.0), &shape, 3, 50.0);

    assert_eq!(pattern.len(), 3);
    let expected_y = [0.0, -50.0, -100.0];
    for (child, y) in pattern.iter().zip(expected_y) {
        let c = child.center();
        assert!((c.x - 0.0).abs() < 1e-9);
        assert!((c.y - y).abs() < 1e-9);
    }
}
