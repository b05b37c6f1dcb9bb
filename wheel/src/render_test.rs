use super::*;
use crate::labels::{Labels, default_labels};

fn drawn(labels: &Labels) -> SvgSurface {
    let layout = WheelLayout::compute(labels, WheelGeometry::default());
    let mut surface = SvgSurface::new();
    draw(&mut surface, &layout);
    surface
}

#[test]
fn draw_emits_slice_and_label_per_entry() {
    let surface = drawn(&default_labels());
    let slices = surface.elements().iter().filter(|e| matches!(e, SvgElement::Slice { .. })).count();
    let labels = surface.elements().iter().filter(|e| matches!(e, SvgElement::Label { .. })).count();
    assert_eq!(slices, 24);
    assert_eq!(labels, 24);
}

#[test]
fn draw_replaces_previous_contents() {
    let mut surface = drawn(&default_labels());
    let small = Labels::new(["A", "B", "C"]).unwrap();
    draw(&mut surface, &WheelLayout::compute(&small, WheelGeometry::default()));
    assert_eq!(surface.elements().len(), 6);
}

#[test]
fn draw_twice_is_identical() {
    let labels = default_labels();
    let layout = WheelLayout::compute(&labels, WheelGeometry::default());
    let mut surface = SvgSurface::new();
    draw(&mut surface, &layout);
    let first = surface.clone();
    draw(&mut surface, &layout);
    assert_eq!(surface, first);
}

#[test]
fn single_label_draws_a_disc() {
    let surface = drawn(&Labels::new(["Alt"]).unwrap());
    assert!(matches!(surface.elements()[0], SvgElement::Disc { radius, .. } if (radius - 250.0).abs() < 1e-9));
}

#[test]
fn slice_markup_matches_layout() {
    let surface = drawn(&default_labels());
    assert_eq!(
        surface.elements()[0].to_string(),
        r##"<path d="M 250 250 L 314.705 8.519 A 250 250 0 0 0 250 0 Z" fill="hsl(0, 80%, 60%)" stroke="#fff" stroke-width="2"/>"##
    );
}

#[test]
fn label_markup_is_rotated_about_anchor() {
    let surface = drawn(&Labels::new(["Topp", "Bunn"]).unwrap());
    // First slice spans 0..180, mid 90: anchor right of centre at 65% radius.
    assert_eq!(
        surface.elements()[1].to_string(),
        r##"<text x="412.5" y="250" text-anchor="middle" dominant-baseline="middle" fill="#000" font-size="16" font-family="'Bubblegum Sans', cursive" transform="rotate(360 412.5 250)">Topp</text>"##
    );
}

#[test]
fn resting_document_rotates_wheel_group() {
    let doc = drawn(&default_labels()).to_document(Orientation::Resting { rotation_deg: 2152.5 });
    assert!(doc.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 500 500">"#));
    assert!(doc.contains(r#"<g id="wheel" transform="rotate(2152.5 250 250)">"#));
    assert!(doc.contains(r#"<polygon id="pointer" points="235,0 265,0 250,30""#));
    assert!(!doc.contains("animateTransform"));
    assert!(doc.ends_with("</svg>"));
}

#[test]
fn spinning_document_animates_between_rotations() {
    let doc = drawn(&default_labels()).to_document(Orientation::Spinning {
        from_deg: 0.0,
        to_deg: 1972.5,
        duration: Duration::from_millis(4000),
    });
    assert!(doc.contains(r#"from="0 250 250" to="1972.5 250 250" dur="4000ms" fill="freeze""#));
}

#[test]
fn label_text_is_escaped() {
    let surface = drawn(&Labels::new(["Mot & <vilje>", "B"]).unwrap());
    assert!(surface.elements()[1].to_string().contains(">Mot &amp; &lt;vilje&gt;</text>"));
    assert_eq!(escape_xml(r#"a"b'c"#), "a&quot;b&apos;c");
}
