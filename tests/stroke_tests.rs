use shape_raster::geometry::*;
use shape_raster::path::*;
use shape_raster::stroke::*;

fn signed_area_doubled(points: &[Point]) -> f32 {
    let mut sum = 0.0;

    for idx in 0..points.len() {
        let current = points[idx];
        let next    = points[(idx + 1) % points.len()];

        sum += current.x * next.y - next.x * current.y;
    }

    sum
}

fn ring_area(points: &[Point]) -> f32 {
    signed_area_doubled(points).abs() / 2.0
}

fn contains_point(ring: &[Point], expected: Point, tolerance: f32) -> bool {
    ring.iter().any(|point| point.distance(&expected) <= tolerance)
}

#[test]
fn butt_stroke_of_a_segment_is_a_rectangle() {
    let stroker = PolygonStroker::new(StrokeOptions::default().with_width(2.0));

    let ring = stroker.process_path(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0)], false);

    assert!(ring.len() == 4, "Butt-capped segment strokes to a rectangle, found {:?}", ring);
    assert!((ring_area(&ring) - 20.0).abs() < 0.001, "Found area {}", ring_area(&ring));

    for expected in [
        Point::new(0.0, 1.0),
        Point::new(0.0, -1.0),
        Point::new(10.0, -1.0),
        Point::new(10.0, 1.0),
    ].iter() {
        assert!(contains_point(&ring, *expected, 0.001), "Missing corner {:?} in {:?}", expected, ring);
    }
}

#[test]
fn square_caps_extend_past_the_ends() {
    let stroker = PolygonStroker::new(StrokeOptions::default().with_width(2.0).with_cap(LineCap::Square));

    let ring = stroker.process_path(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0)], false);

    assert!((ring_area(&ring) - 24.0).abs() < 0.001, "Found area {}", ring_area(&ring));
    assert!(contains_point(&ring, Point::new(-1.0, 1.0), 0.001), "Found {:?}", ring);
    assert!(contains_point(&ring, Point::new(11.0, -1.0), 0.001), "Found {:?}", ring);
}

#[test]
fn round_caps_approximate_semicircles() {
    let stroker = PolygonStroker::new(StrokeOptions::default().with_width(2.0).with_cap(LineCap::Round));

    let ring = stroker.process_path(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0)], false);

    assert!(ring.len() > 4, "Round caps add arc points, found {:?}", ring);

    // Band of 20 plus two inscribed semicircle approximations of radius 1
    let area = ring_area(&ring);
    assert!(area > 22.0 && area < 23.3, "Found area {}", area);

    // Every arc point stays on the stroke radius around its end vertex
    for point in ring.iter().filter(|point| point.x < 0.0) {
        let distance = point.distance(&Point::new(0.0, 0.0));
        assert!((distance - 1.0).abs() < 0.001, "Cap point off radius: {:?}", point);
    }
}

#[test]
fn right_angle_miter_meets_at_the_corner_point() {
    let stroker = PolygonStroker::new(StrokeOptions::default().with_width(2.0));

    let ring = stroker.process_path(
        &[Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)],
        false,
    );

    assert!(contains_point(&ring, Point::new(11.0, -1.0), 0.001), "Missing miter point, found {:?}", ring);
}

#[test]
fn sharp_spikes_fall_back_to_bevel() {
    let options = StrokeOptions::default().with_width(2.0).with_miter_limit(4.0);
    let stroker = PolygonStroker::new(options);

    // A nearly-reversing corner at (10, 0): the miter would extend tens of units
    let ring = stroker.process_path(
        &[Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(0.0, 1.0)],
        false,
    );

    assert!(!ring.is_empty());

    for point in ring.iter() {
        assert!(point.x <= 14.0, "Join exceeded the miter limit: {:?}", point);
    }
}

#[test]
fn round_joins_stay_on_the_stroke_radius() {
    let stroker = PolygonStroker::new(StrokeOptions::default().with_width(2.0).with_join(LineJoin::Round));

    let corner = Point::new(10.0, 0.0);
    let ring   = stroker.process_path(&[Point::new(0.0, 0.0), corner, Point::new(10.0, 10.0)], false);

    // Arc points around the outer corner sit at half-width from the vertex
    let arc_points = ring.iter()
        .filter(|point| point.x > 10.0 && point.y < 0.0)
        .collect::<Vec<_>>();

    assert!(!arc_points.is_empty(), "Round join should emit arc points, found {:?}", ring);

    for point in arc_points {
        assert!((point.distance(&corner) - 1.0).abs() < 0.01, "Join point off radius: {:?}", point);
    }
}

#[test]
fn zero_width_stroke_is_empty() {
    let stroker = PolygonStroker::new(StrokeOptions::default().with_width(0.0));

    let rectangle = [
        Point::new(0.0, 0.0),
        Point::new(20.0, 0.0),
        Point::new(20.0, 10.0),
        Point::new(0.0, 10.0),
    ];

    assert!(stroker.process_path(&rectangle, true).is_empty());
    assert!(stroker.process_path(&rectangle, false).is_empty());
}

#[test]
fn negative_width_stroke_is_empty_with_or_without_dashes() {
    // Regression guard: a non-positive width with a dash pattern must complete
    // quickly and quietly rather than spinning
    let rectangle = rect_path_set();

    let mut plain = StrokeOutlineGenerator::new(StrokeOptions::default());
    assert!(plain.generate_stroked_shapes(&rectangle, -5.0).is_empty());

    let mut dashed = StrokeOutlineGenerator::new(StrokeOptions::default().with_dash_pattern(vec![4.0, 2.0]));
    assert!(dashed.generate_stroked_shapes(&rectangle, 0.0).is_empty());
}

fn rect_path_set() -> PathSet {
    let mut builder = PathBuilder::new();
    builder.add_rect(Point::new(0.0, 0.0), Point::new(20.0, 10.0));
    builder.build()
}

#[test]
fn self_touching_polyline_keeps_every_vertex() {
    // Point 0 and point 3 coincide; the stroke outline must show the influence of
    // all five literal vertices
    let touch = Point::new(0.0, 0.0);
    let path  = [
        touch,
        Point::new(20.0, 0.0),
        Point::new(20.0, 20.0),
        touch,
        Point::new(0.0, -20.0),
    ];

    let stroker = PolygonStroker::new(StrokeOptions::default().with_width(2.0));
    let ring    = stroker.process_path(&path, false);

    assert!(!ring.is_empty());

    for vertex in path.iter() {
        let nearest = ring.iter()
            .map(|point| point.distance(vertex))
            .fold(f32::MAX, f32::min);

        assert!(nearest <= 2.0, "No outline point near vertex {:?} (nearest {})", vertex, nearest);
    }
}

#[test]
fn closed_centerline_strokes_to_an_annulus() {
    let mut builder = PathBuilder::new();
    builder.add_rect(Point::new(0.0, 0.0), Point::new(10.0, 10.0));

    let mut generator = StrokeOutlineGenerator::new(StrokeOptions::default().with_width(2.0));
    let results       = generator.generate_stroked_shapes(&builder.build(), 2.0);

    assert!(results.len() == 2, "A stroked ring is an outer boundary plus a hole, found {}", results.len());

    let outer = results.iter().find(|path| ring_area(path.points()) > 100.0).expect("No outer ring");
    let hole  = results.iter().find(|path| ring_area(path.points()) < 100.0).expect("No hole ring");

    assert!((ring_area(outer.points()) - 144.0).abs() < 0.01, "Found {}", ring_area(outer.points()));
    assert!((ring_area(hole.points()) - 64.0).abs() < 0.01, "Found {}", ring_area(hole.points()));
    assert!(signed_area_doubled(outer.points()) * signed_area_doubled(hole.points()) < 0.0, "Hole winds opposite to outer");
}

#[test]
fn dashed_line_strokes_to_disjoint_rectangles() {
    let mut builder = PathBuilder::new();
    builder.add_line(Point::new(0.0, 0.0), Point::new(100.0, 0.0));

    let options       = StrokeOptions::default().with_dash_pattern(vec![5.0, 5.0]);
    let mut generator = StrokeOutlineGenerator::new(options);

    let results = generator.generate_stroked_shapes(&builder.build(), 2.0);

    assert!(results.len() == 10, "A 5-on/5-off pattern over 100 units makes 10 dashes, found {}", results.len());

    let total: f32 = results.iter().map(|path| ring_area(path.points())).sum();
    assert!((total - 100.0).abs() < 0.1, "Found total area {}", total);
}

#[test]
fn crossing_strokes_merge_into_one_outline() {
    let spans = vec![
        vec![Point::new(0.0, 0.0), Point::new(20.0, 0.0)],
        vec![Point::new(10.0, -10.0), Point::new(10.0, 10.0)],
    ];

    let mut generator = StrokeOutlineGenerator::new(StrokeOptions::default());
    let results       = generator.generate_from_spans(&spans, 2.0);

    assert!(results.len() == 1, "Crossing strokes union into one outline, found {}", results.len());

    // Two 20x2 bands minus the doubly-counted 2x2 crossing
    let area = ring_area(results[0].points());
    assert!((area - 76.0).abs() < 0.01, "Found area {}", area);
}

#[test]
fn single_ring_is_returned_unmodified() {
    let spans = vec![vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]];

    let mut generator = StrokeOutlineGenerator::new(StrokeOptions::default());
    let results       = generator.generate_from_spans(&spans, 2.0);

    assert!(results.len() == 1);
    assert!(results[0].len() == 4, "A lone ring passes through untouched, found {:?}", results[0].points());
}

#[test]
fn degenerate_spans_are_skipped_silently() {
    let spans = vec![
        vec![],
        vec![Point::new(5.0, 5.0)],
        vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
    ];

    let mut generator = StrokeOutlineGenerator::new(StrokeOptions::default());
    let results       = generator.generate_from_spans(&spans, 2.0);

    assert!(results.len() == 1, "Only the real span strokes, found {}", results.len());
}
