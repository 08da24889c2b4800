use super::*;
use crate::foundation::core::Size;
use rand::{SeedableRng, rngs::StdRng};

fn canvas() -> Canvas {
    Canvas::new(Size::new(800.0, 800.0))
}

#[test]
fn wave_path_matches_reference_tile() {
    assert_eq!(wave_path(60.0), "M 0 30 Q 30 60 60 30 T 120 30");
}

#[test]
fn fill_displays_color_or_reference() {
    assert_eq!(Fill::Solid(Color::rgb(0, 0x10, 0xff)).to_string(), "#0010ff");
    assert_eq!(Fill::Def(DefId::new(IdScope::default(), 4)).to_string(), "url(#fill4)");
}

#[test]
fn patterns_use_configured_tile_sizes() {
    let mut c = canvas();
    let mut rng = StdRng::seed_from_u64(5);
    let tiles = TileSizes::default();
    let fills = [
        create_pattern(&mut c, &mut rng, &tiles),
        create_stripe_pattern(&mut c, &mut rng, &tiles),
        create_wave_pattern(&mut c, &mut rng, &tiles),
    ];
    let sizes: Vec<f64> = fills
        .iter()
        .map(|f| match c.def(f.def_id().unwrap()) {
            Some(FillDef::Pattern(tile)) => tile.size,
            other => panic!("expected pattern, got {other:?}"),
        })
        .collect();
    assert_eq!(sizes, vec![20.0, 40.0, 60.0]);
}

#[test]
fn gradient_node_has_two_stops() {
    let mut c = canvas();
    let mut rng = StdRng::seed_from_u64(6);
    let fill = create_gradient(&mut c, &mut rng);
    let id = fill.def_id().unwrap();
    let s = c.def(id).unwrap().to_node(id).to_string();
    assert!(s.starts_with("<linearGradient"), "{s}");
    assert_eq!(s.matches("<stop").count(), 2);
    assert!(s.contains(r#"offset="0""#) && s.contains(r#"offset="1""#), "{s}");
}

#[test]
fn pattern_node_is_user_space_tile() {
    let tile = FillDef::Pattern(PatternTile {
        size: 20.0,
        background: Color::rgb(0, 0, 0),
        motif: Motif::Dot {
            color: Color::rgb(255, 255, 255),
        },
    });
    let s = tile.to_node(DefId::new(IdScope::default(), 2)).to_string();
    assert!(s.contains(r#"id="fill2""#), "{s}");
    assert!(s.contains(r#"patternUnits="userSpaceOnUse""#), "{s}");
    assert!(s.contains(r#"cx="5""#) && s.contains(r#"r="5""#), "{s}");
}

#[test]
fn solid_strategy_registers_nothing() {
    let mut c = canvas();
    let mut rng = StdRng::seed_from_u64(7);
    let fill = FillStrategy::Solid.apply(&mut c, &mut rng, &TileSizes::default());
    assert!(fill.def_id().is_none());
    assert_eq!(c.defs().count(), 0);
}

#[test]
fn random_fill_reaches_every_strategy() {
    let mut c = canvas();
    let mut rng = StdRng::seed_from_u64(8);
    let tiles = TileSizes::default();
    let (mut solid, mut grad, mut pat) = (0, 0, 0);
    for _ in 0..500 {
        match random_fill(&mut c, &mut rng, &tiles) {
            Fill::Solid(_) => solid += 1,
            Fill::Def(id) => match c.def(id) {
                Some(FillDef::LinearGradient { .. }) => grad += 1,
                Some(FillDef::Pattern(_)) => pat += 1,
                None => panic!("dangling {id}"),
            },
        }
    }
    assert!(solid > 0 && grad > 0 && pat > 0);
    assert_eq!(c.defs().count(), grad + pat);
}
