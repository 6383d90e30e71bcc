use super::*;
use crate::foundation::core::{Hsva, Point};

fn linear(t: f64) -> f64 {
    t
}

fn frame(x: f64) -> Drawing {
    Drawing::new(vec![Stroke::new(
        Hsva::BLACK,
        vec![Point::new(x, 0.0), Point::new(x, 10.0)],
    )])
}

fn three_frames() -> Vec<Drawing> {
    vec![frame(0.0), frame(10.0), frame(20.0)]
}

fn tween_of(i: RenderInstruction) -> (usize, f64) {
    match i {
        RenderInstruction::Tween { segment, local_t } => (segment, local_t),
        other => panic!("expected tween, got {other:?}"),
    }
}

#[test]
fn starts_idle_and_runs_after_start() {
    let mut clock = AnimationClock::new();
    assert_eq!(clock.state(), ClockState::Idle);
    clock.start(1000.0, 0.0);
    assert!(clock.is_running());
    clock.stop();
    assert_eq!(clock.state(), ClockState::Idle);
}

#[test]
fn bad_duration_falls_back_to_ten_seconds() {
    let mut clock = AnimationClock::new();
    for d in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        clock.start(d, 0.0);
        assert_eq!(clock.duration_ms(), 10_000.0);
    }
}

#[test]
fn segment_splits_three_keyframes() {
    // 3 keyframes, 900 ms.
    let at = |ms: f64| AnimationClock::segment(3, linear, ms / 900.0);

    let (seg, t) = tween_of(at(0.0));
    assert_eq!((seg, t), (0, 0.0));

    let (seg, t) = tween_of(at(300.0));
    assert_eq!(seg, 0);
    assert!((t - 2.0 / 3.0).abs() < 1e-12);

    // segT lands exactly on 1.0: start of the second segment.
    let (seg, t) = tween_of(at(450.0));
    assert_eq!((seg, t), (1, 0.0));

    let (seg, t) = tween_of(at(675.0));
    assert_eq!(seg, 1);
    assert!((t - 0.5).abs() < 1e-12);

    assert_eq!(at(900.0), RenderInstruction::Final { index: 2 });
    assert_eq!(at(5000.0), RenderInstruction::Final { index: 2 });
}

#[test]
fn segment_requires_two_keyframes() {
    assert_eq!(AnimationClock::segment(0, linear, 0.5), RenderInstruction::Nothing);
    assert_eq!(AnimationClock::segment(1, linear, 0.5), RenderInstruction::Nothing);
}

#[test]
fn overshooting_curves_are_clamped() {
    let wild: EaseFn = |t| t * 3.0 - 1.0;
    let (_, lo) = tween_of(AnimationClock::segment(2, wild, 0.1));
    let (_, hi) = tween_of(AnimationClock::segment(2, wild, 0.9));
    assert_eq!(lo, 0.0);
    assert_eq!(hi, 1.0);
}

#[test]
fn advance_tweens_then_finishes_with_last_keyframe() {
    let frames = three_frames();
    let reg = EasingRegistry::builtin();
    let cfg = TweenConfig::default();
    let mut clock = AnimationClock::new();
    clock.start(1000.0, 100.0);

    let mut drawn = Vec::new();
    let i = clock.advance(&frames, "Linear", &reg, &cfg, 350.0, |s| drawn = s.to_vec());
    let (seg, t) = tween_of(i);
    assert_eq!(seg, 0);
    assert!((t - 0.5).abs() < 1e-12);
    assert_eq!(drawn.len(), 1);
    assert!((drawn[0].points[0].x - 5.0).abs() < 1e-9);
    assert!(clock.is_running());

    let i = clock.advance(&frames, "Linear", &reg, &cfg, 1100.0, |s| drawn = s.to_vec());
    assert_eq!(i, RenderInstruction::Final { index: 2 });
    assert_eq!(drawn, frames[2].strokes);
    assert_eq!(clock.state(), ClockState::Complete);

    let mut called = false;
    let i = clock.advance(&frames, "Linear", &reg, &cfg, 1200.0, |_| called = true);
    assert_eq!(i, RenderInstruction::Nothing);
    assert!(!called);
}

#[test]
fn final_frame_is_verbatim_even_with_erasers() {
    let mut frames = three_frames();
    let eraser = frames[2].strokes[0].clone().as_eraser();
    frames[2].strokes.push(eraser);
    let mut clock = AnimationClock::new();
    clock.start(1000.0, 0.0);
    let mut drawn = Vec::new();
    clock.advance(
        &frames,
        "Linear",
        &EasingRegistry::builtin(),
        &TweenConfig::default(),
        1000.0,
        |s| drawn = s.to_vec(),
    );
    assert_eq!(drawn, frames[2].strokes);
}

#[test]
fn advance_is_a_no_op_below_two_keyframes() {
    let mut clock = AnimationClock::new();
    clock.start(1000.0, 0.0);
    let mut called = false;
    let one = vec![frame(0.0)];
    let i = clock.advance(
        &one,
        "Linear",
        &EasingRegistry::builtin(),
        &TweenConfig::default(),
        500.0,
        |_| called = true,
    );
    assert_eq!(i, RenderInstruction::Nothing);
    assert!(!called);
    assert!(clock.is_running());
}

#[test]
fn advance_does_nothing_while_idle() {
    let mut clock = AnimationClock::new();
    let i = clock.advance(
        &three_frames(),
        "Linear",
        &EasingRegistry::builtin(),
        &TweenConfig::default(),
        500.0,
        |_| panic!("idle clock must not render"),
    );
    assert_eq!(i, RenderInstruction::Nothing);
}

#[test]
fn unknown_easing_behaves_like_in_out_cubic() {
    let frames = three_frames();
    let reg = EasingRegistry::builtin();
    let cfg = TweenConfig::default();
    for now in [0.0, 130.0, 260.0, 499.0, 500.0, 777.0, 999.0, 1000.0] {
        let mut a = AnimationClock::new();
        let mut b = AnimationClock::new();
        a.start(1000.0, 0.0);
        b.start(1000.0, 0.0);
        let mut sa = Vec::new();
        let mut sb = Vec::new();
        let ia = a.advance(&frames, "nonexistent", &reg, &cfg, now, |s| sa = s.to_vec());
        let ib = b.advance(&frames, "EaseInOutCubic", &reg, &cfg, now, |s| sb = s.to_vec());
        assert_eq!(ia, ib);
        assert_eq!(sa, sb);
    }
}

#[test]
fn restart_supersedes_running_animation() {
    let frames = three_frames();
    let reg = EasingRegistry::builtin();
    let cfg = TweenConfig::default();
    let mut clock = AnimationClock::new();
    clock.start(1000.0, 0.0);
    clock.start(1000.0, 900.0);
    let i = clock.advance(&frames, "Linear", &reg, &cfg, 1000.0, |_| {});
    let (seg, t) = tween_of(i);
    assert_eq!(seg, 0);
    assert!((t - 0.2).abs() < 1e-12);
}

#[test]
fn manual_time_moves_by_hand() {
    let t = ManualTime::new(5.0);
    assert_eq!(t.now_ms(), 5.0);
    t.advance(10.0);
    assert_eq!(t.now_ms(), 15.0);
    t.set(1.0);
    assert_eq!(t.now_ms(), 1.0);
}

#[test]
fn monotonic_time_never_goes_backwards() {
    let t = MonotonicTime::new();
    let a = t.now_ms();
    let b = t.now_ms();
    assert!(b >= a);
}
