//! Shared numeric constants for the wheel crate.

use std::time::Duration;

// ── Surface ─────────────────────────────────────────────────────

/// Logical width and height of the SVG viewbox.
pub const VIEWBOX_SIZE: f64 = 500.0;

/// Wheel centre, in viewbox units (both axes).
pub const WHEEL_CENTER: f64 = 250.0;

/// Outer radius of the wheel, in viewbox units.
pub const WHEEL_RADIUS: f64 = 250.0;

// ── Slices ──────────────────────────────────────────────────────

/// Fraction of the outer radius at which label text is anchored.
pub const LABEL_RADIUS_RATIO: f64 = 0.65;

/// Saturation (percent) shared by every slice fill.
pub const SLICE_SATURATION_PCT: f64 = 80.0;

/// Lightness (percent) shared by every slice fill.
pub const SLICE_LIGHTNESS_PCT: f64 = 60.0;

pub const SLICE_STROKE: &str = "#fff";
pub const SLICE_STROKE_WIDTH: f64 = 2.0;

pub const LABEL_FILL: &str = "#000";
pub const LABEL_FONT_SIZE: f64 = 16.0;
pub const LABEL_FONT_FAMILY: &str = "'Bubblegum Sans', cursive";

// ── Spin ────────────────────────────────────────────────────────

/// Extra full turns added to every spin before the corrective amount.
pub const EXTRA_FULL_TURNS: u32 = 5;

/// Corrections shorter than this get one more full turn.
pub const MIN_CORRECTION_DEG: f64 = 45.0;

/// Length of the spin animation; the result is revealed when it ends.
pub const SPIN_ANIMATION: Duration = Duration::from_millis(4000);
