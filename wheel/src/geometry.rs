//! Polar geometry for the wheel: points, pie-slice outlines, angle helpers.
//!
//! Angles are in degrees, measured clockwise from 12 o'clock, which matches
//! how the pointer and the slices are laid out on screen (y grows downward).

use std::fmt;

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// A point in viewbox coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Wrap any angle into `[0, 360)`.
#[must_use]
pub fn normalize_degrees_360(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Point on the circle of `radius` around `center` at `angle_deg`.
///
/// `0` is the topmost point and `90` the rightmost one.
#[must_use]
pub fn polar_to_cartesian(center: Point, radius: f64, angle_deg: f64) -> Point {
    let rad = (angle_deg - 90.0).to_radians();
    Point { x: center.x + radius * rad.cos(), y: center.y + radius * rad.sin() }
}

/// Which of the two arcs between two circle points an outline follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LargeArc {
    /// Span of at most 180°.
    Minor,
    /// Span above 180°.
    Major,
}

impl LargeArc {
    #[must_use]
    pub fn for_span(span_deg: f64) -> Self {
        if span_deg <= 180.0 { Self::Minor } else { Self::Major }
    }

    /// SVG `large-arc-flag` value.
    #[must_use]
    pub fn flag(self) -> char {
        match self {
            Self::Minor => '0',
            Self::Major => '1',
        }
    }
}

/// Closed outline of one pie slice.
///
/// The outline runs centre → `from` → arc → `to` → centre, where `from` is the
/// point at the slice's *end* angle and `to` the point at its *start* angle.
/// Keeping the endpoints in that order with sweep flag `0` makes every slice a
/// simple wedge, including spans above 180°.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPath {
    pub center: Point,
    pub radius: f64,
    pub from: Point,
    pub to: Point,
    pub large_arc: LargeArc,
}

impl ArcPath {
    /// SVG path data (`d` attribute).
    #[must_use]
    pub fn to_path_data(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ArcPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "M {} {} L {} {} A {r} {r} 0 {} 0 {} {} Z",
            fmt_num(self.center.x),
            fmt_num(self.center.y),
            fmt_num(self.from.x),
            fmt_num(self.from.y),
            self.large_arc.flag(),
            fmt_num(self.to.x),
            fmt_num(self.to.y),
            r = fmt_num(self.radius),
        )
    }
}

/// Outline of the pie slice spanning `[start_deg, end_deg)`.
///
/// Expects `0 <= end_deg - start_deg <= 360`.
#[must_use]
pub fn describe_arc(center: Point, radius: f64, start_deg: f64, end_deg: f64) -> ArcPath {
    ArcPath {
        center,
        radius,
        from: polar_to_cartesian(center, radius, end_deg),
        to: polar_to_cartesian(center, radius, start_deg),
        large_arc: LargeArc::for_span(end_deg - start_deg),
    }
}

/// Format a coordinate for SVG output: three decimals, trailing zeros dropped.
#[must_use]
pub fn fmt_num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    // Adding zero turns -0 into 0.
    let rounded = rounded + 0.0;
    let text = format!("{rounded:.3}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    text.to_owned()
}
