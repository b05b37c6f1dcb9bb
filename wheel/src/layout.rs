//! Wheel layout: slice angles, outlines, fills, and label placement.
//!
//! Everything here is pure and reproducible from `(index, count)` alone, so a
//! layout can be recomputed on every draw and compared in tests without any
//! render target.

use std::fmt;

use tracing::debug;

use crate::consts::{
    LABEL_RADIUS_RATIO, SLICE_LIGHTNESS_PCT, SLICE_SATURATION_PCT, WHEEL_CENTER, WHEEL_RADIUS,
};
use crate::geometry::{ArcPath, Point, describe_arc, fmt_num, normalize_degrees_360, polar_to_cartesian};
use crate::labels::{Label, Labels};

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// Angular extent of one slice, in degrees clockwise from the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    pub mid_angle: f64,
}

impl Slice {
    /// Slice `index` of `count` equal slices.
    ///
    /// Boundaries are computed as `360·i / count`, so slice `i`'s end is
    /// bit-identical to slice `i + 1`'s start and the last slice ends at 360.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn nth(index: usize, count: usize) -> Self {
        let count = count.max(1) as f64;
        let start_angle = 360.0 * index as f64 / count;
        let end_angle = 360.0 * (index + 1) as f64 / count;
        let mid_angle = start_angle + (360.0 / count) / 2.0;
        Self { index, start_angle, end_angle, mid_angle }
    }

    #[must_use]
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// Iterate the `count` slices covering the full circle.
pub fn slices(count: usize) -> impl Iterator<Item = Slice> {
    (0..count).map(move |index| Slice::nth(index, count))
}

/// Text rotation that keeps a label tangent to the wheel and right side up.
///
/// The tangent is `mid + 90`; when that would leave the text upside down
/// (normalized angle strictly inside `(90, 270)`) it is flipped by 180.
#[must_use]
pub fn label_rotation(mid_angle: f64) -> f64 {
    let tangent = mid_angle + 90.0;
    let normalized = normalize_degrees_360(tangent);
    if normalized > 90.0 && normalized < 270.0 { tangent + 180.0 } else { tangent }
}

/// An HSL fill color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslColor {
    pub hue: f64,
    pub saturation_pct: f64,
    pub lightness_pct: f64,
}

impl HslColor {
    /// Fill for slice `index` of `count`: hues spread evenly around the circle.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn for_slice(index: usize, count: usize) -> Self {
        let count = count.max(1) as f64;
        Self {
            hue: index as f64 * (360.0 / count),
            saturation_pct: SLICE_SATURATION_PCT,
            lightness_pct: SLICE_LIGHTNESS_PCT,
        }
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            fmt_num(self.hue),
            fmt_num(self.saturation_pct),
            fmt_num(self.lightness_pct)
        )
    }
}

/// Where and how a slice's label is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPlacement {
    pub text: Label,
    pub anchor: Point,
    pub rotation_deg: f64,
}

/// Everything needed to draw one slice.
#[derive(Debug, Clone, PartialEq)]
pub struct SlicePlacement {
    pub slice: Slice,
    pub outline: ArcPath,
    pub fill: HslColor,
    pub label: LabelPlacement,
}

/// Centre and outer radius of the wheel on the render surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    pub center: Point,
    pub radius: f64,
}

impl Default for WheelGeometry {
    fn default() -> Self {
        Self { center: Point::new(WHEEL_CENTER, WHEEL_CENTER), radius: WHEEL_RADIUS }
    }
}

/// Computed placement for every slice of a wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelLayout {
    pub geometry: WheelGeometry,
    pub slices: Vec<SlicePlacement>,
}

impl WheelLayout {
    #[must_use]
    pub fn compute(labels: &Labels, geometry: WheelGeometry) -> Self {
        let count = labels.len();
        let label_radius = geometry.radius * LABEL_RADIUS_RATIO;
        let slices = labels
            .iter()
            .zip(slices(count))
            .map(|(label, slice)| SlicePlacement {
                slice,
                outline: describe_arc(geometry.center, geometry.radius, slice.start_angle, slice.end_angle),
                fill: HslColor::for_slice(slice.index, count),
                label: LabelPlacement {
                    text: label.clone(),
                    anchor: polar_to_cartesian(geometry.center, label_radius, slice.mid_angle),
                    rotation_deg: label_rotation(slice.mid_angle),
                },
            })
            .collect::<Vec<_>>();
        debug!(slices = slices.len(), radius = geometry.radius, "wheel layout computed");
        Self { geometry, slices }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}
