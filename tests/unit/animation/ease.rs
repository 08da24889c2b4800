use super::*;

const ALL: [Ease; 8] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::InOutSine,
];

#[test]
fn control_points_stay_in_unit_x_range() {
    for ease in ALL {
        if let Some([x1, _, x2, _]) = ease.key_spline() {
            assert!((0.0..=1.0).contains(&x1), "{ease:?}");
            assert!((0.0..=1.0).contains(&x2), "{ease:?}");
        }
    }
}

#[test]
fn linear_has_no_splines() {
    assert_eq!(Ease::Linear.key_splines(2), None);
}

#[test]
fn splines_repeat_per_segment() {
    assert_eq!(
        Ease::InOutSine.key_splines(2).unwrap(),
        "0.445 0.05 0.55 0.95;0.445 0.05 0.55 0.95"
    );
}

#[test]
fn serde_names_are_snake_case() {
    let v = serde_json::to_string(&Ease::InOutSine).unwrap();
    assert_eq!(v, "\"in_out_sine\"");
}
