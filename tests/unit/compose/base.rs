use super::*;

#[test]
fn strips_declaration_and_doctype() {
    let base = BaseImage::from_markup(concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
        "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n",
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"4\" height=\"4\"><circle r=\"2\" cx=\"2\" cy=\"2\"/></svg>\n",
    ))
    .unwrap();
    assert!(base.markup().starts_with("<svg"));
    assert!(base.markup().ends_with("</svg>"));
    assert!(!base.markup().contains("DOCTYPE"));
}

#[test]
fn rejects_non_svg() {
    let err = BaseImage::from_markup("this is not markup").unwrap_err();
    assert!(matches!(err, BurstError::BaseImage(_)));
}

#[test]
fn load_reports_missing_file() {
    let err = BaseImage::load(Path::new("target/no/such/base.svg")).unwrap_err();
    assert!(err.to_string().contains("base image error"));
    assert!(err.to_string().contains("base.svg"));
}

#[test]
fn byte_order_mark_is_accepted() {
    let src = "\u{feff}<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"4\" height=\"4\"/>\n";
    let base = BaseImage::from_markup(src).unwrap();
    assert!(base.markup().starts_with("<svg"), "{:?}", base.markup());
}

#[test]
fn rejects_doctype_entities() {
    let src = concat!(
        "<?xml version=\"1.0\"?>\n",
        "<!DOCTYPE svg [\n",
        "  <!ENTITY ns_svg \"http://www.w3.org/2000/svg\">\n",
        "]>\n",
        "<svg xmlns=\"&ns_svg;\" width=\"4\" height=\"4\"><rect width=\"4\" height=\"4\"/></svg>\n",
    );
    let err = BaseImage::from_markup(src).unwrap_err();
    assert!(matches!(err, BurstError::BaseImage(_)));
    assert!(err.to_string().contains("ns_svg"), "{err}");
}

#[test]
fn collects_element_ids() {
    let base = BaseImage::from_markup(
        r#"<svg xmlns="http://www.w3.org/2000/svg" id="root" width="4" height="4"><g id="fill1"><rect width="4" height="4"/></g></svg>"#,
    )
    .unwrap();
    let ids: Vec<&str> = base.ids().iter().map(String::as_str).collect();
    assert_eq!(ids, vec!["fill1", "root"]);
}
