#![allow(clippy::float_cmp)]

use super::*;
use crate::labels::default_labels;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Slice ---

#[test]
fn slices_partition_the_circle_for_many_counts() {
    for count in 1..=97 {
        let all = slices(count).collect::<Vec<_>>();
        assert_eq!(all.len(), count);
        assert_eq!(all[0].start_angle, 0.0);
        assert_eq!(all[count - 1].end_angle, 360.0, "count={count}");
        for pair in all.windows(2) {
            assert_eq!(pair[0].end_angle, pair[1].start_angle, "count={count}");
        }
        let total: f64 = all.iter().map(Slice::span).sum();
        assert!(approx_eq(total, 360.0), "count={count}: total={total}");
        #[allow(clippy::cast_precision_loss)]
        let expected_span = 360.0 / count as f64;
        for slice in &all {
            assert!(approx_eq(slice.span(), expected_span), "count={count}");
            assert!(slice.start_angle < slice.mid_angle && slice.mid_angle < slice.end_angle);
        }
    }
}

#[test]
fn twenty_four_slices_are_fifteen_degrees() {
    let first = Slice::nth(0, 24);
    assert_eq!((first.start_angle, first.end_angle, first.mid_angle), (0.0, 15.0, 7.5));
    let middle = Slice::nth(12, 24);
    assert_eq!((middle.start_angle, middle.end_angle, middle.mid_angle), (180.0, 195.0, 187.5));
}

// --- label_rotation ---

#[test]
fn label_rotation_is_never_upside_down() {
    let mut mid = -720.0;
    while mid <= 720.0 {
        let rotation = normalize_degrees_360(label_rotation(mid));
        assert!(!(rotation > 90.0 && rotation < 270.0), "mid={mid} rotation={rotation}");
        mid += 0.25;
    }
}

#[test]
fn label_rotation_keeps_text_upright() {
    // Top of the wheel: tangent is horizontal.
    assert_eq!(label_rotation(0.0), 90.0);
    // Right side: tangent would be 180, flipped to 360.
    assert_eq!(label_rotation(90.0), 360.0);
    assert_eq!(label_rotation(7.5), 97.5 + 180.0);
    assert_eq!(label_rotation(187.5), 277.5);
    assert_eq!(label_rotation(180.0), 270.0);
}

// --- HslColor ---

#[test]
fn hues_are_evenly_spread() {
    assert_eq!(HslColor::for_slice(0, 24).to_string(), "hsl(0, 80%, 60%)");
    assert_eq!(HslColor::for_slice(1, 24).to_string(), "hsl(15, 80%, 60%)");
    assert_eq!(HslColor::for_slice(23, 24).to_string(), "hsl(345, 80%, 60%)");
    assert_eq!(HslColor::for_slice(1, 7).to_string(), "hsl(51.429, 80%, 60%)");
}

// --- WheelLayout ---

#[test]
fn layout_has_one_placement_per_label() {
    let labels = default_labels();
    let layout = WheelLayout::compute(&labels, WheelGeometry::default());
    assert_eq!(layout.len(), 24);
    assert!(!layout.is_empty());
    for (i, placement) in layout.slices.iter().enumerate() {
        assert_eq!(placement.slice.index, i);
        assert_eq!(Some(&placement.label.text), labels.get(i));
    }
}

#[test]
fn layout_anchors_labels_at_sixty_five_percent_radius() {
    let layout = WheelLayout::compute(&default_labels(), WheelGeometry::default());
    let center = layout.geometry.center;
    for placement in &layout.slices {
        let dx = placement.label.anchor.x - center.x;
        let dy = placement.label.anchor.y - center.y;
        assert!(approx_eq(dx.hypot(dy), 162.5));
    }
}

#[test]
fn layout_outlines_use_full_radius_and_minor_arcs() {
    let layout = WheelLayout::compute(&default_labels(), WheelGeometry::default());
    for placement in &layout.slices {
        assert_eq!(placement.outline.radius, 250.0);
        assert_eq!(placement.outline.large_arc, crate::geometry::LargeArc::Minor);
    }
    assert_eq!(
        layout.slices[0].outline.to_path_data(),
        "M 250 250 L 314.705 8.519 A 250 250 0 0 0 250 0 Z"
    );
}

#[test]
fn two_slice_layout_uses_half_circles() {
    let labels = Labels::new(["Ja", "Nei"]).unwrap();
    let layout = WheelLayout::compute(&labels, WheelGeometry::default());
    assert_eq!(layout.slices[1].slice.start_angle, 180.0);
    assert_eq!(layout.slices[1].slice.end_angle, 360.0);
    assert_eq!(layout.slices[1].outline.large_arc, crate::geometry::LargeArc::Minor);
}

#[test]
fn layout_is_idempotent() {
    let labels = default_labels();
    let a = WheelLayout::compute(&labels, WheelGeometry::default());
    let b = WheelLayout::compute(&labels, WheelGeometry::default());
    assert_eq!(a, b);
}
