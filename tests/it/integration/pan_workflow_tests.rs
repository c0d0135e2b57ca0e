//! End-to-end workflows through [`CameraRig`].

use glam::Vec2;
use pancam::rig::CameraRig;
use pancam::types::{FrameInput, GameplayEvent, GestureEvent, SceneEvent};
use pancam::{Config, DragDirection, GestureConfig, PanConfig, PanSmoothing};

use crate::helpers::{EventLog, IdentityProjection};

const DT: f32 = 0.1;

/// Deterministic rig: drag threshold one frame, no smoothing, camera moves
/// with the drag delta.
fn test_rig(start: Vec2) -> CameraRig {
    pancam::logging::init();
    CameraRig::new(
        Config {
            gesture: GestureConfig {
                click_to_drag_duration: 0.1,
            },
            pan: PanConfig {
                smoothing: PanSmoothing::Immediate,
                direction: DragDirection::Inverted,
                ..PanConfig::default()
            },
        },
        start,
    )
}

fn tick_pressed(rig: &mut CameraRig, position: Vec2) {
    rig.tick(FrameInput::mouse(position, true), &IdentityProjection, DT);
}

fn tick_released(rig: &mut CameraRig, position: Vec2) {
    rig.tick(FrameInput::mouse(position, false), &IdentityProjection, DT);
}

#[test]
fn test_drag_moves_camera_within_the_frame() {
    let start = Vec2::new(10.0, 10.0);
    let mut rig = test_rig(start);

    tick_pressed(&mut rig, Vec2::ZERO); // promoted to drag this frame
    assert_eq!(rig.camera_position(), start);

    tick_pressed(&mut rig, Vec2::new(1.0, 0.0));
    assert_eq!(rig.camera_position(), start + Vec2::new(1.0, 0.0));

    tick_pressed(&mut rig, Vec2::new(1.0, 2.0));
    assert_eq!(rig.camera_position(), start + Vec2::new(1.0, 2.0));

    tick_released(&mut rig, Vec2::new(1.0, 2.0));
    assert_eq!(rig.camera_position(), start + Vec2::new(1.0, 2.0));
}

#[test]
fn test_click_does_not_move_camera() {
    let start = Vec2::new(-3.0, 2.0);
    let mut rig = CameraRig::new(
        Config {
            gesture: GestureConfig {
                click_to_drag_duration: 0.5,
            },
            ..Config::default()
        },
        start,
    );

    tick_pressed(&mut rig, Vec2::new(4.0, 4.0));
    tick_released(&mut rig, Vec2::new(4.0, 4.0));

    assert_eq!(rig.camera_position(), start);
}

#[test]
fn test_gesture_events_observable_by_host() {
    let mut rig = test_rig(Vec2::ZERO);
    let log = EventLog::new();
    let _sub = log.attach(&rig.events().gestures);

    tick_pressed(&mut rig, Vec2::ZERO);
    tick_pressed(&mut rig, Vec2::new(1.0, 0.0));
    tick_released(&mut rig, Vec2::new(1.0, 0.0));

    assert_eq!(
        log.events(),
        vec![
            GestureEvent::PointerDown(Vec2::ZERO),
            GestureEvent::DragStart(Vec2::ZERO),
            GestureEvent::Drag(Vec2::new(1.0, 0.0)),
            GestureEvent::DragEnd(Vec2::new(1.0, 0.0)),
            GestureEvent::PointerUp(Vec2::new(1.0, 0.0)),
        ]
    );
}

#[test]
fn test_node_tap_suspends_panning_until_pointer_released() {
    let mut rig = test_rig(Vec2::ZERO);

    rig.events()
        .gameplay
        .emit(&GameplayEvent::NodeTapped(Vec2::ZERO));

    tick_pressed(&mut rig, Vec2::ZERO);
    tick_pressed(&mut rig, Vec2::new(5.0, 0.0));
    assert_eq!(rig.camera_position(), Vec2::ZERO);

    assert!(!rig.panner().lock().pan_allowed());
    rig.events().gameplay.emit(&GameplayEvent::PointerReleased);
    assert!(rig.panner().lock().pan_allowed());

    tick_pressed(&mut rig, Vec2::new(5.0, 1.0));
    assert_eq!(rig.camera_position(), Vec2::new(0.0, 1.0));
}

#[test]
fn test_scene_loaded_resets_camera_to_start() {
    let start = Vec2::new(2.0, 2.0);
    let mut rig = test_rig(start);

    tick_pressed(&mut rig, Vec2::ZERO);
    tick_pressed(&mut rig, Vec2::new(3.0, 3.0));
    assert_ne!(rig.camera_position(), start);

    rig.events().scene.emit(&SceneEvent::Loaded);
    assert_eq!(rig.camera_position(), start);
}

#[test]
fn test_nodes_ready_bounds_clamp_the_pan() {
    let mut rig = test_rig(Vec2::ZERO);
    rig.events().scene.emit(&SceneEvent::NodesReady(vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(5.0, 5.0),
        Vec2::new(-2.0, 3.0),
    ]));

    tick_pressed(&mut rig, Vec2::ZERO);
    tick_pressed(&mut rig, Vec2::new(100.0, 100.0));
    assert_eq!(rig.camera_position(), Vec2::new(6.0, 6.0));

    tick_pressed(&mut rig, Vec2::new(-200.0, -200.0));
    assert_eq!(rig.camera_position(), Vec2::new(-3.0, -1.0));
}

#[test]
fn test_dropping_rig_releases_subscriptions() {
    let rig = test_rig(Vec2::ZERO);
    let events = rig.events().clone();
    assert!(events.gestures.listener_count() > 0);

    drop(rig);
    assert_eq!(events.gestures.listener_count(), 0);
    assert_eq!(events.scene.listener_count(), 0);
    assert_eq!(events.gameplay.listener_count(), 0);

    // Emitting after teardown is harmless.
    events.gestures.emit(&GestureEvent::Drag(Vec2::ONE));
}

#[test]
fn test_frame_stats_track_ticks() {
    let mut rig = test_rig(Vec2::ZERO);
    for _ in 0..4 {
        rig.tick(FrameInput::idle(), &IdentityProjection, 0.02);
    }
    assert_eq!(rig.frame_stats().frame_count(), 4);
    let avg = rig.frame_stats().average_frame_ms().unwrap();
    assert!((avg - 20.0).abs() < 1e-6);
    let fps = rig.frame_stats().fps().unwrap();
    assert!((fps - 50.0).abs() < 1e-6);
}
