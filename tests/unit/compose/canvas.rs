use super::*;
use crate::foundation::core::Point;
use crate::paint::color::Color;
use crate::paint::fill::Fill;
use crate::shapes::element::{Geometry, ShapeKind};

fn dot() -> Element {
    Element::new(
        ShapeKind::Circle,
        Geometry::Circle {
            center: Point::new(5.0, 5.0),
            radius: 5.0,
        },
    )
}

#[test]
fn ids_are_unique_across_defs_and_shapes() {
    let mut canvas = Canvas::new(Size::new(100.0, 100.0));
    let g = canvas.register_def(FillDef::LinearGradient {
        from: Color::rgb(0, 0, 0),
        to: Color::rgb(255, 255, 255),
    });
    let mut el = dot();
    el.fill = Some(Fill::Def(g));
    let s = canvas.push(el).unwrap();
    assert_eq!(g, DefId::new(IdScope(0), 1));
    assert_eq!(s, ElementId::new(IdScope(0), 2));
    assert_eq!(canvas.shape_count(), 1);
}

#[test]
fn push_rejects_reference_from_another_canvas() {
    let mut other = Canvas::new(Size::new(100.0, 100.0));
    let foreign = other.register_def(FillDef::LinearGradient {
        from: Color::rgb(1, 1, 1),
        to: Color::rgb(2, 2, 2),
    });

    let mut canvas = Canvas::new(Size::new(100.0, 100.0));
    let mut el = dot();
    el.fill = Some(Fill::Def(foreign));
    let err = canvas.push(el).unwrap_err();
    assert!(err.to_string().contains("not defined on this canvas"));
    assert_eq!(canvas.shape_count(), 0);
}

#[test]
fn document_layers_base_then_defs_then_shapes() {
    let base = BaseImage::from_markup(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"><rect width="10" height="10" fill="#123456"/></svg>"##,
    )
    .unwrap();

    let mut canvas = Canvas::with_base(Size::new(800.0, 800.0), &base);
    let g = canvas.register_def(FillDef::LinearGradient {
        from: Color::rgb(0, 0, 0),
        to: Color::rgb(255, 0, 0),
    });
    let mut el = dot();
    el.fill = Some(Fill::Def(g));
    canvas.push(el).unwrap();

    let s = canvas.into_markup();
    let base_at = s.find(base.markup()).expect("base embedded verbatim");
    let defs_at = s.find("<defs>").expect("defs present");
    let shape_at = s.find(r#"id="shape2""#).expect("shape present");
    assert!(base_at < defs_at && defs_at < shape_at, "{s}");
    assert!(s.contains(r#"fill="url(#fill1)""#), "{s}");
    assert!(s.contains(r#"viewBox="0 0 800 800""#), "{s}");
}

#[test]
fn empty_canvas_has_no_defs() {
    let s = Canvas::new(Size::new(10.0, 10.0)).into_markup();
    assert!(!s.contains("<defs"));
    assert!(s.contains("<svg"));
}

#[test]
fn scope_skips_ids_taken_by_the_base() {
    let taken: BTreeSet<String> = ["fill1", "b1-shape12", "logo", "fillet"]
        .into_iter()
        .map(str::to_owned)
        .collect();
    assert_eq!(IdScope::first_free(&BTreeSet::new()), IdScope(0));
    assert_eq!(IdScope::first_free(&taken), IdScope(2));
    assert_eq!(IdScope(2).to_string(), "b2-");
}

#[test]
fn references_never_resolve_into_the_base() {
    let base = BaseImage::from_markup(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"><defs><linearGradient id="fill1"/></defs><rect id="shape2" width="10" height="10" fill="url(#fill1)"/></svg>"##,
    )
    .unwrap();

    let mut canvas = Canvas::with_base(Size::new(100.0, 100.0), &base);
    assert_eq!(canvas.scope(), IdScope(1));
    let g = canvas.register_def(FillDef::LinearGradient {
        from: Color::rgb(0, 0, 0),
        to: Color::rgb(9, 9, 9),
    });
    let mut el = dot();
    el.fill = Some(Fill::Def(g));
    canvas.push(el).unwrap();

    let s = canvas.into_markup();
    assert!(s.contains(r#"id="b1-fill1""#), "{s}");
    assert!(s.contains(r#"fill="url(#b1-fill1)""#), "{s}");
    assert!(s.contains(r#"id="b1-shape2""#), "{s}");
    assert_eq!(s.matches(r#"id="fill1""#).count(), 1);
}
