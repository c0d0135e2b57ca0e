//! Unit tests for the camera panner.

use glam::Vec2;
use pancam::camera::CameraPanner;
use pancam::{DragDirection, PanConfig, PanSmoothing};

fn immediate_config(direction: DragDirection) -> PanConfig {
    PanConfig {
        smoothing: PanSmoothing::Immediate,
        direction,
        ..PanConfig::default()
    }
}

#[test]
fn test_immediate_inverted_pan_applies_full_delta() {
    let mut panner = CameraPanner::new(immediate_config(DragDirection::Inverted), Vec2::ZERO);
    panner.begin_frame(0.016);
    panner.apply_drag(Vec2::new(2.0, -1.0));
    assert_eq!(panner.position(), Vec2::new(2.0, -1.0));
}

#[test]
fn test_natural_direction_moves_opposite_to_drag() {
    let mut panner = CameraPanner::new(immediate_config(DragDirection::Natural), Vec2::ZERO);
    panner.begin_frame(0.016);
    panner.apply_drag(Vec2::new(2.0, -1.0));
    assert_eq!(panner.position(), Vec2::new(-2.0, 1.0));
}

#[test]
fn test_smoothed_pan_moves_toward_target() {
    let config = PanConfig {
        speed: 5.0,
        smoothing: PanSmoothing::Smoothed,
        direction: DragDirection::Inverted,
        ..PanConfig::default()
    };
    let mut panner = CameraPanner::new(config, Vec2::ZERO);
    panner.begin_frame(0.1); // factor = 0.1 * 5.0 = 0.5
    panner.apply_drag(Vec2::new(4.0, 0.0));
    assert!((panner.position() - Vec2::new(2.0, 0.0)).length() < 1e-5);
}

#[test]
fn test_smoothing_factor_never_overshoots() {
    let config = PanConfig {
        speed: 100.0,
        smoothing: PanSmoothing::Smoothed,
        direction: DragDirection::Inverted,
        ..PanConfig::default()
    };
    let mut panner = CameraPanner::new(config, Vec2::ZERO);
    panner.begin_frame(1.0); // factor would be 100, clamped to 1
    panner.apply_drag(Vec2::new(1.0, 1.0));
    assert_eq!(panner.position(), Vec2::new(1.0, 1.0));
}

#[test]
fn test_clamp_keeps_position_in_bounds() {
    let config = PanConfig {
        extra_border: Vec2::new(1.0, 1.0),
        ..immediate_config(DragDirection::Inverted)
    };
    let mut panner = CameraPanner::new(config, Vec2::ZERO);
    panner.set_scene_nodes(&[Vec2::new(0.0, 0.0), Vec2::new(5.0, 5.0), Vec2::new(-2.0, 3.0)]);
    let bounds = panner.bounds().unwrap();
    assert_eq!(bounds.min, Vec2::new(-3.0, -1.0));
    assert_eq!(bounds.max, Vec2::new(6.0, 6.0));

    panner.begin_frame(0.016);
    panner.apply_drag(Vec2::new(100.0, 100.0));
    assert_eq!(panner.position(), Vec2::new(6.0, 6.0));

    panner.apply_drag(Vec2::new(-100.0, -100.0));
    assert_eq!(panner.position(), Vec2::new(-3.0, -1.0));
}

#[test]
fn test_no_bounds_means_no_clamping() {
    let mut panner = CameraPanner::new(immediate_config(DragDirection::Inverted), Vec2::ZERO);
    panner.begin_frame(0.016);
    panner.apply_drag(Vec2::new(1000.0, 0.0));
    assert_eq!(panner.position(), Vec2::new(1000.0, 0.0));
}

#[test]
fn test_empty_node_set_disables_clamping() {
    let mut panner = CameraPanner::new(immediate_config(DragDirection::Inverted), Vec2::ZERO);
    panner.set_scene_nodes(&[Vec2::ONE]);
    assert!(panner.bounds().is_some());

    panner.set_scene_nodes(&[]);
    assert!(panner.bounds().is_none());

    panner.begin_frame(0.016);
    panner.apply_drag(Vec2::new(50.0, 50.0));
    assert_eq!(panner.position(), Vec2::new(50.0, 50.0));
}

#[test]
fn test_reset_restores_start_position_exactly() {
    let start = Vec2::new(1.25, -0.75);
    let mut panner = CameraPanner::new(immediate_config(DragDirection::Inverted), start);
    panner.begin_frame(0.016);
    panner.apply_drag(Vec2::new(3.0, 3.0));
    assert_ne!(panner.position(), start);

    panner.reset();
    assert_eq!(panner.position(), start);
}

#[test]
fn test_suspended_pan_ignores_drag() {
    let mut panner = CameraPanner::new(immediate_config(DragDirection::Inverted), Vec2::ZERO);
    panner.set_pan_allowed(false);
    panner.begin_frame(0.016);
    panner.apply_drag(Vec2::new(1.0, 1.0));
    assert_eq!(panner.position(), Vec2::ZERO);

    panner.set_pan_allowed(true);
    panner.apply_drag(Vec2::new(1.0, 1.0));
    assert_eq!(panner.position(), Vec2::new(1.0, 1.0));
}
