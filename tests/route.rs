use route_wind_analyzer::geo::coord::Coordinate;
use route_wind_analyzer::route::Route;

#[test]
fn cardinal_segment_headings() {
    let route = Route::new(vec![
        Coordinate::new(0.0, 0.0),
        Coordinate::new(1.0, 0.0),
        Coordinate::new(1.0, 1.0),
        Coordinate::new(0.0, 0.0),
    ]);
    let headings = route.segment_headings();
    assert_eq!(headings.len(), 3);
    assert_eq!(headings[0], 0); // due north
    assert_eq!(headings[1], 90); // due east at low latitude
    assert_eq!(headings[2], 225); // back to the southwest
}

#[test]
fn headings_fall_in_compass_range() {
    let route = Route::new(vec![
        Coordinate::new(59.91, 10.75),
        Coordinate::new(59.95, 10.60),
        Coordinate::new(60.00, 10.80),
        Coordinate::new(59.90, 10.90),
    ]);
    for heading in route.segment_headings() {
        assert!((0..360).contains(&heading), "heading={heading}");
    }
}

#[test]
fn representative_coordinate_is_polyline_midpoint() {
    let points = vec![
        Coordinate::new(59.0, 10.0),
        Coordinate::new(59.1, 10.1),
        Coordinate::new(59.2, 10.2),
    ];
    let route = Route::new(points.clone());
    assert_eq!(route.points().len(), 3);
    assert_eq!(route.representative_coordinate(), Some(points[1]));
    assert_eq!(Route::new(vec![]).representative_coordinate(), None);
}

#[test]
fn short_routes_have_no_segments() {
    assert_eq!(Route::new(vec![]).segment_count(), 0);
    assert!(Route::new(vec![]).segment_headings().is_empty());

    let single = Route::new(vec![Coordinate::new(0.0, 0.0)]);
    assert_eq!(single.segment_count(), 0);
    assert!(single.segment_headings().is_empty());
    // A single point still yields a representative location.
    assert!(single.representative_coordinate().is_some());
}
