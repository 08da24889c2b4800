use super::*;

#[test]
fn attribute_animation_serializes_as_animate() {
    let a = Animation::attribute(
        "opacity",
        num_values(&[0.0, 1.0, 0.0]),
        Timing::looping(5.0),
    );
    let s = a.to_node().to_string();
    assert!(s.starts_with("<animate"), "{s}");
    assert!(s.contains(r#"attributeName="opacity""#), "{s}");
    assert!(s.contains(r#"values="0;1;0""#), "{s}");
    assert!(s.contains(r#"dur="5s""#), "{s}");
    assert!(s.contains(r#"repeatCount="indefinite""#), "{s}");
    assert!(!s.contains("calcMode"), "{s}");
}

#[test]
fn transform_animation_carries_type() {
    let a = Animation::transform(
        TransformKind::Rotate,
        num_values(&[0.0, 360.0]),
        Timing::looping(5.0),
    );
    let s = a.to_node().to_string();
    assert!(s.starts_with("<animateTransform"), "{s}");
    assert!(s.contains(r#"attributeName="transform""#), "{s}");
    assert!(s.contains(r#"type="rotate""#), "{s}");
    assert!(s.contains(r#"values="0;360""#), "{s}");
}

#[test]
fn eased_animation_emits_spline_timing() {
    let a = Animation::transform(
        TransformKind::Scale,
        num_values(&[1.0, 1.25, 1.0]),
        Timing::looping(5.0),
    )
    .eased(Ease::InOutSine);
    let s = a.to_node().to_string();
    assert!(s.contains(r#"calcMode="spline""#), "{s}");
    assert!(s.contains(r#"keyTimes="0;0.5;1""#), "{s}");
    assert!(s.contains("keySplines="), "{s}");
}

#[test]
fn finite_repeat_is_a_count() {
    let a = Animation::attribute(
        "x",
        num_values(&[50.0, 100.0]),
        Timing {
            dur_secs: 2.5,
            repeat: Repeat::Count(3),
        },
    );
    let s = a.to_node().to_string();
    assert!(s.contains(r#"repeatCount="3""#), "{s}");
    assert!(s.contains(r#"dur="2.5s""#), "{s}");
}

#[test]
fn targets_display_readably() {
    assert_eq!(Target::Attribute("fill".into()).to_string(), "fill");
    assert_eq!(
        Target::Transform(TransformKind::Scale).to_string(),
        "transform(scale)"
    );
}
