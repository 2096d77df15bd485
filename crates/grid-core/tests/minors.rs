// File: crates/grid-core/tests/minors.rs
// Purpose: Minor subdivision between unskipped majors and its line projection.

use grid_core::{Direction, Grid, GridError, MinorSpacing, Point};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn four_minors_per_fifty_unit_interval() {
    let g = Grid::new(100.0, 100.0, 500.0, 500.0).unwrap();
    let xs = g.minors(4, 50.0, Direction::X).unwrap();
    assert_eq!(&xs[..4], &[110.0, 120.0, 130.0, 140.0]);
    assert_eq!(xs.len(), 10 * 4);
    assert_eq!(*xs.last().unwrap(), 590.0);
    assert!(xs.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn zero_minors_is_empty() {
    let g = Grid::new(0.0, 0.0, 100.0, 100.0).unwrap();
    assert!(g.minors(0, 10.0, Direction::X).unwrap().is_empty());
    assert!(g.minor_lines(0, 10.0, Direction::Y).unwrap().is_empty());
}

#[test]
fn non_integral_subdivision_is_evenly_spaced() {
    let g = Grid::new(0.0, 0.0, 100.0, 100.0).unwrap();
    let xs = g.minors(2, 50.0, Direction::X).unwrap();
    let want = [50.0 / 3.0, 100.0 / 3.0, 50.0 + 50.0 / 3.0, 50.0 + 100.0 / 3.0];
    assert_eq!(xs.len(), want.len());
    for (got, want) in xs.iter().zip(want) {
        assert!(close(*got, want), "{got} != {want}");
    }
}

#[test]
fn minors_ignore_origin_and_fill_every_interval() {
    let mut g = Grid::new(100.0, 100.0, 500.0, 500.0).unwrap();
    g.set_origin(Point::new(350.0, 350.0));
    let xs = g.minors(4, 50.0, Direction::X).unwrap();
    for v in [310.0, 340.0, 360.0, 390.0] {
        assert!(xs.contains(&v), "missing {v}");
    }
    assert_eq!(xs.len(), 40);
}

#[test]
fn single_major_has_no_interval() {
    let g = Grid::new(0.0, 0.0, 30.0, 30.0).unwrap();
    assert!(g.minors(3, 50.0, Direction::X).unwrap().is_empty());
}

#[test]
fn minors_reject_bad_distance_even_with_zero_count() {
    let g = Grid::new(0.0, 0.0, 30.0, 30.0).unwrap();
    assert!(matches!(g.minors(0, 0.0, Direction::X), Err(GridError::InvalidDistance(_))));
    assert!(matches!(g.minors(3, -1.0, Direction::Y), Err(GridError::InvalidDistance(_))));
}

#[test]
fn minor_lines_run_across_the_full_width_for_y() {
    let g = Grid::new(10.0, 20.0, 200.0, 100.0).unwrap();
    let lines = g.minor_lines(1, 50.0, Direction::Y).unwrap();
    let arrays: Vec<[f64; 4]> = lines.iter().map(|s| s.to_array()).collect();
    assert_eq!(arrays, vec![[10.0, 45.0, 210.0, 45.0], [10.0, 95.0, 210.0, 95.0]]);
}

#[test]
fn minors_with_spacing_and_named_lines_agree() {
    let g = Grid::new(0.0, 0.0, 100.0, 100.0).unwrap();
    let spacing = MinorSpacing { number: 3, distance: 20.0 };
    let xs = g.minors_with(&spacing, Direction::X).unwrap();
    assert_eq!(xs, g.minors(3, 20.0, Direction::X).unwrap());
    assert_eq!(g.minor_lines_named(3, 20.0, "x").unwrap().len(), xs.len());
    assert!(g.minor_lines_named(3, 20.0, "horizontal").unwrap().is_empty());
}
