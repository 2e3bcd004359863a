mod common;

use common::{approx, FakePlatform};
use field_core::*;
use glam::{Vec2, Vec3};

#[test]
fn rotation_and_bob_follow_elapsed_time() {
    let mut s = RenderLoopScheduler::new(CAMERA_SMOOTHING);
    let f = s.advance(10.0, Vec2::ZERO);
    assert!(approx(f.yaw, 0.4, 1e-5));
    assert!(approx(f.pitch, 0.15, 1e-5));
    assert!(approx(f.bob, (3.0f32).sin() * 5.0, 1e-4));

    let f0 = s.advance(0.0, Vec2::ZERO);
    assert_eq!((f0.yaw, f0.pitch, f0.bob), (0.0, 0.0, 0.0));
    assert_eq!(f0.model_matrix(), glam::Mat4::IDENTITY);
}

#[test]
fn bob_stays_within_amplitude() {
    let mut s = RenderLoopScheduler::new(CAMERA_SMOOTHING);
    for i in 0..1_000 {
        let f = s.advance(i as f32 * 0.1, Vec2::ZERO);
        assert!(f.bob.abs() <= BOB_AMPLITUDE + 1e-4);
    }
}

#[test]
fn model_matrix_translates_by_bob() {
    let f = FrameTransform {
        bob: 3.0,
        ..FrameTransform::default()
    };
    let p = f.model_matrix().transform_point3(Vec3::new(1.0, 2.0, 3.0));
    assert!((p - Vec3::new(1.0, 2.0, 6.0)).length() < 1e-5);
}

#[test]
fn camera_eases_toward_target_without_overshoot() {
    let mut s = RenderLoopScheduler::new(CAMERA_SMOOTHING);
    let target = Vec2::new(25.0, -20.0);
    let mut prev_residual = target.length();
    for _ in 0..200 {
        s.advance(0.0, target);
        let residual = (target - s.camera_offset()).length();
        assert!(residual < prev_residual);
        assert!(approx(residual / prev_residual, 1.0 - CAMERA_SMOOTHING, 1e-3));
        assert!(s.camera_offset().x <= target.x && s.camera_offset().y >= target.y);
        prev_residual = residual;
    }
    assert!(prev_residual < 0.05);
    assert_eq!(s.frames(), 200);
}

#[test]
fn first_step_moves_four_percent() {
    let mut s = RenderLoopScheduler::new(0.04);
    let f = s.advance(0.0, Vec2::new(25.0, 0.0));
    assert!(approx(f.camera_offset.x, 1.0, 1e-5));
}

#[test]
fn start_requests_one_frame_and_stop_cancels_it() {
    let mut p = FakePlatform::desktop();
    let mut s = RenderLoopScheduler::new(CAMERA_SMOOTHING);
    s.start(&mut p);
    s.start(&mut p);
    assert_eq!(p.requested.len(), 1);
    let handle = s.pending().unwrap();
    s.stop(&mut p);
    assert_eq!(p.cancelled, vec![handle]);
    assert!(s.pending().is_none());
    s.stop(&mut p);
    assert_eq!(p.cancelled.len(), 1);
}

#[test]
fn elapsed_is_measured_from_first_start() {
    let mut p = FakePlatform::desktop();
    p.now = 100.0;
    let mut s = RenderLoopScheduler::new(CAMERA_SMOOTHING);
    s.start(&mut p);
    let f = s.tick(102.5, Vec2::ZERO);
    assert!(approx(f.elapsed, 2.5, 1e-6));

    s.stop(&mut p);
    p.now = 110.0;
    s.start(&mut p);
    let f = s.tick(110.0, Vec2::ZERO);
    assert!(approx(f.elapsed, 10.0, 1e-6));
}

#[test]
fn tick_clears_pending_so_next_frame_can_be_requested() {
    let mut p = FakePlatform::desktop();
    let mut s = RenderLoopScheduler::new(CAMERA_SMOOTHING);
    s.start(&mut p);
    s.tick(0.016, Vec2::ZERO);
    assert!(s.pending().is_none());
    s.schedule_next(&mut p);
    assert_eq!(p.requested.len(), 2);
}

#[test]
fn refused_request_leaves_nothing_pending() {
    let mut p = FakePlatform::desktop();
    p.refuse_frames = true;
    let mut s = RenderLoopScheduler::new(CAMERA_SMOOTHING);
    s.start(&mut p);
    assert!(s.pending().is_none());
    s.stop(&mut p);
    assert!(p.cancelled.is_empty());
}
