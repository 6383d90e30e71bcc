use super::*;

#[test]
fn endpoints_are_stable() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in Ease::ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn in_out_curves_match_reference_values() {
    assert_eq!(Ease::InOutQuad.apply(0.25), 0.125);
    assert_eq!(Ease::InOutQuad.apply(0.75), 0.875);
    assert_eq!(Ease::InOutCubic.apply(0.25), 0.0625);
    assert_eq!(Ease::InOutCubic.apply(0.75), 0.9375);
    assert_eq!(Ease::InOutCubic.apply(0.5), 0.5);
}

#[test]
fn apply_clamps_input() {
    assert_eq!(Ease::Linear.apply(-1.0), 0.0);
    assert_eq!(Ease::Linear.apply(3.0), 1.0);
}

#[test]
fn names_round_trip() {
    for ease in Ease::ALL {
        assert_eq!(Ease::from_name(ease.name()), Some(ease));
    }
    assert_eq!(Ease::from_name("Bouncy"), None);
    assert_eq!(Ease::default(), Ease::InOutCubic);
}

#[test]
fn registry_resolves_builtins() {
    let reg = EasingRegistry::builtin();
    for name in ["Linear", "EaseInOutQuad", "EaseInOutCubic"] {
        assert!(reg.contains(name));
    }
    assert_eq!((reg.resolve("Linear"))(0.3), 0.3);
    assert_eq!((reg.resolve("EaseInOutQuad"))(0.25), 0.125);
}

#[test]
fn unknown_name_falls_back_to_in_out_cubic() {
    let reg = EasingRegistry::builtin();
    let fallback = reg.resolve("nonexistent");
    let cubic = reg.resolve("EaseInOutCubic");
    for t in [0.0, 0.1, 0.33, 0.5, 0.8, 1.0] {
        assert_eq!(fallback(t), cubic(t));
    }
}

#[test]
fn custom_curves_can_be_registered() {
    let mut reg = EasingRegistry::builtin();
    reg.register("Step", |t| if t < 0.5 { 0.0 } else { 1.0 });
    assert!(reg.contains("Step"));
    assert_eq!((reg.resolve("Step"))(0.7), 1.0);
    assert!(reg.names().any(|n| n == "Step"));
}
