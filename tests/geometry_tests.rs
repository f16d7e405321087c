use shape_raster::geometry::*;

#[test]
fn equality_is_an_open_interval() {
    // 0.25 is exactly representable, so these comparisons are free of rounding noise
    let comparer = TolerantComparer::new(0.25);

    assert!(!comparer.are_equal(1.0, 1.25), "Values exactly an epsilon apart are not equal");
    assert!(!comparer.are_equal(1.25, 1.0), "Values exactly an epsilon apart are not equal");
    assert!(comparer.are_equal(1.0, 1.125), "Values less than an epsilon apart are equal");
    assert!(comparer.are_equal(1.125, 1.0), "Values less than an epsilon apart are equal");
}

#[test]
fn sign_is_three_way() {
    let comparer = TolerantComparer::new(0.25);

    assert!(comparer.sign(1.0) == 1);
    assert!(comparer.sign(-1.0) == -1);
    assert!(comparer.sign(0.1) == 0);
    assert!(comparer.sign(-0.1) == 0);
    assert!(comparer.sign(0.25) == 1, "Sign at exactly epsilon is decided");
}

#[test]
fn point_equality_is_per_axis() {
    let comparer = TolerantComparer::new(0.25);

    // Each axis within epsilon, even though the Euclidean distance exceeds it
    let a = Point::new(0.0, 0.0);
    let b = Point::new(0.2, 0.2);

    assert!(comparer.points_equal(&a, &b));
    assert!(!comparer.points_equal(&a, &Point::new(0.2, 0.3)));
}

#[test]
fn orientation_signs_are_opposite_for_reversed_polygons() {
    let comparer = TolerantComparer::default();

    let mut square = vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ];

    let forward = polygon_orientation(&square, &comparer);
    square.reverse();
    let backward = polygon_orientation(&square, &comparer);

    assert!(forward != 0 && backward == -forward, "Found {} and {}", forward, backward);
}

#[test]
fn zero_area_polygon_has_no_orientation() {
    let comparer = TolerantComparer::default();

    let collinear = vec![
        Point::new(0.0, 0.0),
        Point::new(5.0, 5.0),
        Point::new(10.0, 10.0),
    ];

    assert!(polygon_orientation(&collinear, &comparer) == 0);
}

#[test]
fn repeated_final_point_does_not_change_orientation() {
    let comparer = TolerantComparer::default();

    let square = vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ];
    let mut repeated = square.clone();
    repeated.push(square[0]);

    assert!(polygon_orientation(&square, &comparer) == polygon_orientation(&repeated, &comparer));
}

#[test]
fn ensure_orientation_reverses_when_needed() {
    let comparer = TolerantComparer::default();

    let mut square = vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ];

    let sign = polygon_orientation(&square, &comparer);
    ensure_orientation(&mut square, -sign, &comparer);

    assert!(polygon_orientation(&square, &comparer) == -sign);
}

#[test]
fn bounds_round_outwards() {
    let points = vec![
        Point::new(0.5, 0.25),
        Point::new(9.5, 9.75),
    ];

    let bounds = PathBounds::from_points(points.iter());

    assert!(bounds == PathBounds { min_x: 0, min_y: 0, max_x: 10, max_y: 10 }, "Found {:?}", bounds);
}

#[test]
fn transforms_compose_and_apply() {
    let transform = Transform2D::translate(10.0, 0.0) * Transform2D::scale(2.0, 2.0);
    let point     = transform.apply(Point::new(3.0, 4.0));

    // Scale first, then translate
    assert!(point == Point::new(16.0, 8.0), "Found {:?}", point);
}
