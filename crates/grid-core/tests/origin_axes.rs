// File: crates/grid-core/tests/origin_axes.rs
// Purpose: Construction, bounding rectangle, origin setting modes and axis derivation.

use grid_core::{Grid, GridError, OriginMode, OriginSpec, Point, Rect};

fn square() -> Grid {
    Grid::new(100.0, 100.0, 500.0, 500.0).unwrap()
}

#[test]
fn bounding_rectangle_returns_constructor_values() {
    for (x, y, w, h) in [(100.0, 100.0, 500.0, 500.0), (-3.5, 7.25, 0.0, 12.0), (0.0, 0.0, 1e6, 1e-3)] {
        let g = Grid::new(x, y, w, h).unwrap();
        assert_eq!(g.bounding_rectangle(), Rect::from_xywh(x, y, w, h));
        assert_eq!(g.xmax(), x + w);
        assert_eq!(g.ymax(), y + h);
        assert!(!g.origin_set());
    }
}

#[test]
fn invalid_geometry_is_rejected() {
    assert!(matches!(Grid::new(0.0, 0.0, -1.0, 10.0), Err(GridError::InvalidGeometry(_))));
    assert!(matches!(Grid::new(0.0, 0.0, 10.0, -0.5), Err(GridError::InvalidGeometry(_))));
    assert!(matches!(Grid::new(f64::NAN, 0.0, 10.0, 10.0), Err(GridError::InvalidGeometry(_))));
    assert!(matches!(Grid::new(0.0, 0.0, f64::INFINITY, 10.0), Err(GridError::InvalidGeometry(_))));
}

#[test]
fn axes_unavailable_until_origin_set() {
    let mut g = square();
    assert!(g.axes().is_none());
    g.set_origin(Point::new(350.0, 350.0));
    let axes = g.axes().expect("origin set");
    assert_eq!(axes.horizontal.to_array(), [100.0, 350.0, 600.0, 350.0]);
    assert_eq!(axes.vertical.to_array(), [350.0, 100.0, 350.0, 600.0]);
    assert_eq!(axes.segments(), [axes.horizontal, axes.vertical]);
}

#[test]
fn anchor_center_maps_to_midpoint() {
    let mut g = square();
    g.anchor_origin(Point::new(0.5, 0.5));
    assert_eq!(g.origin(), Some(Point::new(350.0, 350.0)));
    assert!(g.origin_set());
}

#[test]
fn anchor_outside_unit_range_extrapolates() {
    let mut g = square();
    g.anchor_origin(Point::new(1.5, -0.5));
    assert_eq!(g.origin(), Some(Point::new(850.0, -150.0)));
    let axes = g.axes().unwrap();
    assert_eq!(axes.horizontal.to_array(), [100.0, -150.0, 600.0, -150.0]);
}

#[test]
fn origin_outside_rectangle_is_stored_verbatim() {
    let mut g = square();
    g.set_origin(Point::new(-10.0, 9000.0));
    assert_eq!(g.origin(), Some(Point::new(-10.0, 9000.0)));
}

#[test]
fn last_origin_wins() {
    let mut g = square();
    g.set_origin(Point::new(200.0, 200.0));
    g.set_origin(Point::new(350.0, 400.0));
    assert_eq!(g.origin(), Some(Point::new(350.0, 400.0)));
    g.anchor_origin(Point::new(0.0, 1.0));
    assert_eq!(g.origin(), Some(Point::new(100.0, 600.0)));
}

#[test]
fn origin_requests_apply_by_mode() {
    let mut g = square();
    assert!(g.apply_origin(&OriginSpec::set(350.0, 350.0)));
    assert_eq!(g.origin(), Some(Point::new(350.0, 350.0)));
    assert!(g.apply_origin(&OriginSpec::anchor(0.0, 0.0)));
    assert_eq!(g.origin(), Some(Point::new(100.0, 100.0)));
}

#[test]
fn incomplete_origin_requests_are_ignored() {
    let mut g = square();
    let missing_y = OriginSpec { mode: Some(OriginMode::Set), x: Some(1.0), y: None };
    let missing_mode = OriginSpec { mode: None, x: Some(1.0), y: Some(2.0) };
    assert!(!g.apply_origin(&missing_y));
    assert!(!g.apply_origin(&missing_mode));
    assert!(!g.origin_set());

    g.set_origin(Point::new(300.0, 300.0));
    assert!(!g.apply_origin(&OriginSpec::default()));
    assert_eq!(g.origin(), Some(Point::new(300.0, 300.0)));
}

#[test]
fn derivations_do_not_touch_origin_state() {
    let mut g = square();
    g.set_origin(Point::new(350.0, 350.0));
    let before = g.clone();
    let _ = g.majors(50.0, true, true, grid_core::Direction::X).unwrap();
    let _ = g.minors(4, 50.0, grid_core::Direction::Y).unwrap();
    let _ = g.axes();
    assert_eq!(g, before);
}
