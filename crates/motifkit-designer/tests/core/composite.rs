use motifkit_designer::{
    Circle, CompositeShape, Drop, Petal, Point, Polygon, Shape, Transformable, Trapeze,
};

fn circle_at(x: f64, y: f64) -> Shape {
    Circle::new(Point::new(x, y), 5.0).into()
}

#[test]
fn test_composite_center_deduplicates_coordinates() {
    let group = CompositeShape::new(vec![
        circle_at(0.0, 0.0),
        circle_at(0.0, 0.0),
        circle_at(10.0, 10.0),
    ]);
    assert_eq!(group.center(), Point::new(5.0, 5.0));
}

#[test]
fn test_composite_move_is_rigid() {
    let group = CompositeShape::new(vec![
        circle_at(0.0, 0.0),
        Trapeze::new(Point::new(30.0, 10.0), 10.0, 10.0, 10.0).into(),
        Petal::new(Point::new(-20.0, 40.0), 30.0, 10.0).into(),
        Drop::new(Point::new(5.0, -15.0), 10.0, 20.0).into(),
    ]);
    let moved = group.move_to(Point::new(500.0, -250.0));

    assert!((moved.center().x - 500.0).abs() < 1e-9);
    assert!((moved.center().y + 250.0).abs() < 1e-9);

    let before: Vec<Point> = group.iter().map(Shape::center).collect();
    let after: Vec<Point> = moved.iter().map(Shape::center).collect();
    for i in 0..before.len() {
        for j in 0..before.len() {
            let dx_before = before[i].x - before[j].x;
            let dy_before = before[i].y - before[j].y;
            let dx_after = after[i].x - after[j].x;
            let dy_after = after[i].y - after[j].y;
            assert!((dx_before - dx_after).abs() < 1e-9);
            assert!((dy_before - dy_after).abs() < 1e-9);
        }
    }
}

#[test]
fn test_composite_rotate_uses_shared_pivot() {
    let pivot = Point::new(0.0, 0.0);
    let group = CompositeShape::new(vec![circle_at(10.0, 0.0), circle_at(0.0, 10.0)]);
    let rotated = group.rotate(pivot, 90.0);

    let centers: Vec<Point> = rotated.iter().map(Shape::center).collect();
    assert!((centers[0].x - 0.0).abs() < 1e-9 && (centers[0].y - 10.0).abs() < 1e-9);
    assert!((centers[1].x + 10.0).abs() < 1e-9 && (centers[1].y - 0.0).abs() < 1e-9);
}

#[test]
fn test_composite_scale_maps_children() {
    let pivot = Point::new(0.0, 0.0);
    let group = CompositeShape::new(vec![circle_at(10.0, 0.0)]).scale(pivot, 2.0);
    match &group.shapes[0] {
        Shape::Circle(c) => {
            assert_eq!(c.center, Point::new(20.0, 0.0));
            assert_eq!(c.radius, 10.0);
        }
        other => panic!("unexpected child {:?}", other),
    }
}

#[test]
fn test_composite_preserves_order() {
    let group: CompositeShape = vec![
        circle_at(0.0, 0.0),
        Polygon::new(vec![Point::new(0.0, 0.0)]).into(),
    ]
    .into_iter()
    .collect();
    let moved = group.move_to(Point::new(3.0, 3.0));
    assert!(matches!(moved.shapes[0], Shape::Circle(_)));
    assert!(matches!(moved.shapes[1], Shape::Polygon(_)));
}

#[test]
fn test_nested_composites_move_together() {
    let inner = CompositeShape::new(vec![circle_at(0.0, 0.0), circle_at(10.0, 0.0)]);
    let outer = CompositeShape::new(vec![inner.into(), circle_at(0.0, 20.0)]);
    let moved = outer.move_to(Point::new(100.0, 100.0));
    let c = moved.center();
    assert!((c.x - 100.0).abs() < 1e-9);
    assert!((c.y - 100.0).abs() < 1e-9);
}

#[test]
fn test_composite_boundary_concatenates_children() {
    let group = CompositeShape::new(vec![
        circle_at(0.0, 0.0),
        Polygon::new(vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)]).into(),
    ]);
    let boundary = group.boundary();
    assert_eq!(boundary.len(), 6);
    assert_eq!(boundary[4], Point::new(1.0, 1.0));
}

#[test]
fn test_move_lands_center_despite_near_coincident_children() {
    let group = CompositeShape::new(vec![
        circle_at(0.0, 0.0),
        circle_at(1e-14, 0.0),
        circle_at(10.0, 0.0),
    ]);
    let moved = group.move_to(Point::new(500.0, 0.0));
    assert!((moved.center().x - 500.0).abs() < 1e-9);
    assert!(moved.center().y.abs() < 1e-9);
}
