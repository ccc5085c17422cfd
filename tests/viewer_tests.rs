//! Viewer Lifecycle & Scheduler Tests
//!
//! Tests for:
//! - initialize/teardown lifecycle transitions and idempotence
//! - Initialization retry and the Error fallback path
//! - Scheduler start/stop, tick ordering and cancellation
//! - selectStroke semantics (effective next tick, clock untouched)
//! - Viewport resize adapter and its fallback height

use strokeviz::kinematics::{Joint, StrokeType, compute_pose};
use strokeviz::render::HeadlessBackend;
use strokeviz::scene::SceneContext;
use strokeviz::{
    FALLBACK_MESSAGE, FRAME_STEP, Lifecycle, MountSurface, RenderScheduler, StrokeViewer,
    TickDriver, TickHandle,
};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ============================================================================
// Test Doubles
// ============================================================================

/// Manual stand-in for the host's frame-callback source.
#[derive(Default)]
struct ManualDriver {
    next_id: u64,
    requests: Vec<TickHandle>,
    cancelled: Vec<TickHandle>,
}

impl TickDriver for ManualDriver {
    fn request_tick(&mut self) -> TickHandle {
        self.next_id += 1;
        let handle = TickHandle(self.next_id);
        self.requests.push(handle);
        handle
    }

    fn cancel_tick(&mut self, handle: TickHandle) {
        self.cancelled.push(handle);
    }
}

struct FixedMount {
    width: u32,
    height: u32,
    fallback: Option<String>,
}

impl FixedMount {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            fallback: None,
        }
    }
}

impl MountSurface for FixedMount {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn show_fallback(&mut self, message: &str) {
        self.fallback = Some(message.to_string());
    }
}

fn running_viewer() -> (StrokeViewer<HeadlessBackend, ManualDriver>, FixedMount) {
    init_logging();
    let mut viewer = StrokeViewer::new(HeadlessBackend::default(), ManualDriver::default());
    let mut mount = FixedMount::new(800, 600);
    assert_eq!(viewer.initialize(&mut mount), Lifecycle::Running);
    (viewer, mount)
}

// ============================================================================
// Initialization & Lifecycle
// ============================================================================

#[test]
fn initialize_starts_the_frame_loop() {
    let (viewer, mount) = running_viewer();
    assert_eq!(viewer.lifecycle(), Lifecycle::Running);
    assert!(viewer.scheduler().is_running());
    assert_eq!(viewer.driver().requests.len(), 1, "first tick scheduled");
    assert_eq!(viewer.backend().size(), (800, 600));
    assert!(mount.fallback.is_none());
}

#[test]
fn initialize_twice_is_ignored() {
    let (mut viewer, mut mount) = running_viewer();
    assert_eq!(viewer.initialize(&mut mount), Lifecycle::Running);
    assert_eq!(viewer.backend().mesh_count(), 7, "no duplicate resources");
}

#[test]
fn initialize_unavailable_backend_ends_in_error() {
    init_logging();
    let mut viewer = StrokeViewer::new(HeadlessBackend::unavailable(), ManualDriver::default());
    let mut mount = FixedMount::new(800, 600);

    // Both the first attempt and the single retry fail.
    assert_eq!(viewer.initialize(&mut mount), Lifecycle::Error);
    assert_eq!(viewer.lifecycle(), Lifecycle::Error);
    assert_eq!(mount.fallback.as_deref(), Some(FALLBACK_MESSAGE));
    assert!(viewer.driver().requests.is_empty(), "start() never invoked");
    assert_eq!(viewer.backend().frames_rendered(), 0);
}

#[test]
fn initialize_zero_extent_mount_ends_in_error() {
    let mut viewer = StrokeViewer::new(HeadlessBackend::default(), ManualDriver::default());
    let mut mount = FixedMount::new(0, 0);

    assert_eq!(viewer.initialize(&mut mount), Lifecycle::Error);
    assert!(mount.fallback.is_some());
}

#[test]
fn initialize_recovers_on_retry() {
    let mut backend = HeadlessBackend::default();
    backend.fail_next_creations(1);
    let mut viewer = StrokeViewer::new(backend, ManualDriver::default());
    let mut mount = FixedMount::new(800, 600);

    assert_eq!(viewer.initialize(&mut mount), Lifecycle::Running);
    assert!(mount.fallback.is_none());
    assert_eq!(viewer.backend().mesh_count(), 7);
}

#[test]
fn teardown_is_idempotent() {
    let (mut viewer, _mount) = running_viewer();
    viewer.teardown();
    assert_eq!(viewer.lifecycle(), Lifecycle::Disposed);
    assert_eq!(viewer.backend().disposals(), 1);

    viewer.teardown();
    assert_eq!(viewer.lifecycle(), Lifecycle::Disposed);
    assert_eq!(viewer.backend().disposals(), 1);
}

#[test]
fn teardown_cancels_the_pending_tick() {
    let (mut viewer, _mount) = running_viewer();
    viewer.tick();
    let pending = *viewer.driver().requests.last().unwrap();

    viewer.teardown();
    assert!(!viewer.scheduler().is_running());
    assert_eq!(viewer.driver().cancelled, vec![pending]);
}

#[test]
fn initialize_after_teardown_is_ignored() {
    let (mut viewer, mut mount) = running_viewer();
    viewer.teardown();
    assert_eq!(viewer.initialize(&mut mount), Lifecycle::Disposed);
    assert_eq!(viewer.lifecycle(), Lifecycle::Disposed);
}

// ============================================================================
// Ticking
// ============================================================================

#[test]
fn tick_advances_clock_and_renders() {
    let (mut viewer, _mount) = running_viewer();
    viewer.tick();

    assert!(approx(viewer.scheduler().clock().elapsed(), FRAME_STEP));
    assert_eq!(viewer.backend().frames_rendered(), 1);
    assert_eq!(viewer.driver().requests.len(), 2, "next tick scheduled");
}

#[test]
fn tick_updates_pose_surface_and_camera_before_render() {
    let (mut viewer, _mount) = running_viewer();
    viewer.tick();
    let t = viewer.scheduler().clock().elapsed();

    // The rig carries the pose for the post-advance clock value.
    let expected = compute_pose(StrokeType::Freestyle, t);
    assert_eq!(viewer.scene().rig.pose(), &expected);

    // What the backend drew matches the scene state for the same t.
    let body = viewer.backend().mesh_by_name("body").unwrap();
    assert!(
        body.transform
            .abs_diff_eq(viewer.scene().rig.part_transform(Joint::Body), 1e-6)
    );
    let water = viewer.backend().mesh_by_name("water_surface").unwrap();
    assert_eq!(water.vertex_uploads, 1);
    assert_eq!(water.positions.as_slice(), viewer.scene().surface.positions());
}

#[test]
fn failed_render_does_not_stall_the_loop() {
    let (mut viewer, _mount) = running_viewer();
    viewer.backend_mut().fail_next_renders(1);

    // The failed frame is logged and the loop keeps going.
    viewer.tick();
    assert!(viewer.scheduler().is_running());
    assert_eq!(viewer.backend().frames_rendered(), 0);
    assert_eq!(viewer.driver().requests.len(), 2, "next tick still scheduled");

    viewer.tick();
    assert_eq!(viewer.backend().frames_rendered(), 1);
    assert_eq!(viewer.driver().requests.len(), 3);
}

#[test]
fn tick_after_teardown_does_nothing() {
    let (mut viewer, _mount) = running_viewer();
    viewer.tick();
    viewer.teardown();
    viewer.tick();
    assert_eq!(viewer.backend().frames_rendered(), 1);
}

// ============================================================================
// Stroke Selection
// ============================================================================

#[test]
fn select_stroke_takes_effect_next_tick_without_resetting_clock() {
    let (mut viewer, _mount) = running_viewer();
    viewer.tick();
    viewer.tick();
    let before = viewer.scheduler().clock().elapsed();

    viewer.select_stroke(StrokeType::Butterfly);
    assert!(
        approx(viewer.scheduler().clock().elapsed(), before),
        "selection must not touch the clock"
    );

    viewer.tick();
    let t = viewer.scheduler().clock().elapsed();
    assert!(approx(t, before + FRAME_STEP));
    assert_eq!(
        viewer.scene().rig.pose(),
        &compute_pose(StrokeType::Butterfly, t)
    );
}

#[test]
fn stroke_changes_survive_many_switches() {
    let (mut viewer, _mount) = running_viewer();
    for stroke in StrokeType::ALL {
        viewer.select_stroke(stroke);
        viewer.tick();
    }
    // Four ticks regardless of how often the stroke changed.
    assert!(approx(
        viewer.scheduler().clock().elapsed(),
        4.0 * FRAME_STEP
    ));
}

// ============================================================================
// Scheduler State Machine
// ============================================================================

#[test]
fn scheduler_start_is_idempotent() {
    let mut driver = ManualDriver::default();
    let mut scheduler = RenderScheduler::new();

    scheduler.start(&mut driver);
    scheduler.start(&mut driver);

    assert!(scheduler.is_running());
    assert_eq!(driver.requests.len(), 1, "second start must not reschedule");
}

#[test]
fn scheduler_stop_before_start_is_safe() {
    let mut driver = ManualDriver::default();
    let mut scheduler = RenderScheduler::new();

    scheduler.stop(&mut driver);
    scheduler.stop(&mut driver);

    assert!(!scheduler.is_running());
    assert!(driver.cancelled.is_empty());
}

#[test]
fn scheduler_tick_while_stopped_is_dropped() {
    let mut driver = ManualDriver::default();
    let mut scheduler = RenderScheduler::new();
    let mut scene = SceneContext::new();
    let mut backend = HeadlessBackend::default();

    scheduler
        .tick(StrokeType::Freestyle, &mut scene, &mut backend, &mut driver)
        .unwrap();

    assert!(approx(scheduler.clock().elapsed(), 0.0));
    assert_eq!(backend.frames_rendered(), 0);
    assert!(driver.requests.is_empty());
}

// ============================================================================
// Resize
// ============================================================================

#[test]
fn resize_updates_aspect_and_output() {
    let (mut viewer, _mount) = running_viewer();
    let grown = FixedMount::new(1200, 900);
    viewer.handle_resize(&grown);

    assert!(approx(viewer.scene().camera.aspect, 1200.0 / 900.0));
    assert_eq!(viewer.backend().size(), (1200, 900));
}

#[test]
fn resize_with_zero_height_uses_fallback() {
    let mut viewer = StrokeViewer::new(HeadlessBackend::default(), ManualDriver::default());
    let mut mount = FixedMount::new(1000, 500);
    assert_eq!(viewer.initialize(&mut mount), Lifecycle::Running);
    assert!(approx(viewer.scene().camera.aspect, 2.0));

    let degenerate = FixedMount::new(800, 0);
    viewer.handle_resize(&degenerate);

    assert!(approx(viewer.scene().camera.aspect, 800.0 / 600.0));
    assert_eq!(viewer.backend().size(), (800, 600));
}

#[test]
fn resize_before_initialize_is_ignored() {
    let mut viewer = StrokeViewer::new(HeadlessBackend::default(), ManualDriver::default());
    let mount = FixedMount::new(1024, 768);
    viewer.handle_resize(&mount);

    assert_eq!(viewer.backend().size(), (0, 0));
    assert!(approx(viewer.scene().camera.aspect, 1.0));
}
