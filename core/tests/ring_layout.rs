use std::f32::consts::TAU;

use kururin_core::game::{normalize_angle, scramble_rotations, scramble_seed, PUZZLE_SEED};
use kururin_core::{LayoutError, PuzzleModel, PuzzleRules, Ring, RingLayout};

#[test]
fn rim_points_belong_to_no_ring() {
    let ring = Ring::new(0.0, 0.0, 10.0, (), 0.0);
    assert!(!ring.contains_point(10.0, 0.0));
    assert!(ring.contains_point(9.999, 0.0));
    assert!(!ring.contains_point(10.001, 0.0));
    assert!(ring.contains_point(0.0, -9.999));
}

#[test]
fn radii_decrease_from_max_radius() {
    let layout = RingLayout::compute(400.0, 400.0, 400.0, 400.0, 5).expect("valid layout");
    assert_eq!(layout.max_radius, 200.0);
    assert_eq!(layout.radius_step, 40.0);
    let radii: Vec<f32> = (0..5).map(|index| layout.radius_of(index)).collect();
    assert_eq!(radii, vec![200.0, 160.0, 120.0, 80.0, 40.0]);
    for pair in radii.windows(2) {
        assert!(pair[1] < pair[0]);
    }
}

#[test]
fn rings_share_the_viewport_center() {
    let model = PuzzleModel::new(
        400.0,
        400.0,
        400.0,
        400.0,
        5,
        (),
        scramble_seed(PUZZLE_SEED, 1, 5),
        PuzzleRules::default(),
    )
    .expect("valid layout");
    assert_eq!(model.rings().len(), 5);
    assert_eq!(model.layout().max_radius, 200.0);
    for ring in model.rings() {
        assert_eq!(ring.center_x, 200.0);
        assert_eq!(ring.center_y, 200.0);
    }
}

#[test]
fn smallest_dimension_bounds_the_radius() {
    let layout = RingLayout::compute(400.0, 300.0, 500.0, 600.0, 3).expect("valid layout");
    assert_eq!(layout.max_radius, 150.0);
    assert_eq!(layout.center_x, 200.0);
    assert_eq!(layout.center_y, 150.0);
}

#[test]
fn zero_ring_count_is_rejected() {
    let result = RingLayout::compute(400.0, 400.0, 400.0, 400.0, 0);
    assert_eq!(result, Err(LayoutError::ZeroRingCount));
}

#[test]
fn empty_viewport_is_rejected() {
    let result = RingLayout::compute(0.0, 400.0, 400.0, 400.0, 3);
    assert!(matches!(result, Err(LayoutError::EmptyViewport { .. })));

    let flat_image = PuzzleModel::new(
        400.0,
        400.0,
        400.0,
        0.0,
        3,
        (),
        0,
        PuzzleRules::default(),
    );
    assert!(matches!(
        flat_image,
        Err(LayoutError::EmptyViewport { .. })
    ));
}

#[test]
fn scramble_is_seeded_and_bounded() {
    let first = scramble_rotations(0xC0FF_EE00, 16);
    let second = scramble_rotations(0xC0FF_EE00, 16);
    assert_eq!(first, second);
    for rotation in &first {
        assert!(*rotation >= 0.0 && *rotation < TAU);
    }

    let other = scramble_rotations(0xC0FF_EE01, 16);
    assert_ne!(first, other);
}

#[test]
fn normalize_angle_wraps_into_one_turn() {
    let wrapped = normalize_angle(3.0 * TAU + 0.25);
    assert!((wrapped - 0.25).abs() <= 1e-5);
    let negative = normalize_angle(-0.25);
    assert!((negative - (TAU - 0.25)).abs() <= 1e-5);
    assert_eq!(normalize_angle(0.0), 0.0);
}
