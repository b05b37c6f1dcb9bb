//! Rendering: draws a computed [`WheelLayout`] onto an SVG surface.
//!
//! This module is the only place that knows about SVG elements. It receives a
//! read-only layout and produces markup; it never touches session state.
//! Every [`draw`] clears the surface and rebuilds it from scratch.

use std::fmt;
use std::time::Duration;

use crate::consts::{
    LABEL_FILL, LABEL_FONT_FAMILY, LABEL_FONT_SIZE, SLICE_STROKE, SLICE_STROKE_WIDTH, VIEWBOX_SIZE,
};
use crate::geometry::{Point, fmt_num};
use crate::layout::{HslColor, WheelGeometry, WheelLayout};

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

/// Pointer triangle half-width and height, in viewbox units.
const POINTER_HALF_WIDTH: f64 = 15.0;
const POINTER_HEIGHT: f64 = 30.0;
const POINTER_FILL: &str = "#333";

/// Ease-out curve for the spin, as SVG `keySplines`.
const SPIN_EASING: &str = "0.17 0.67 0.12 0.99";

/// One drawn element of the wheel.
#[derive(Debug, Clone, PartialEq)]
pub enum SvgElement {
    Slice { d: String, fill: HslColor },
    /// A lone slice covering the full circle.
    Disc { center: Point, radius: f64, fill: HslColor },
    Label { anchor: Point, rotation_deg: f64, text: String },
}

/// In-memory SVG render target with a fixed `500 × 500` viewbox.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgSurface {
    elements: Vec<SvgElement>,
    geometry: Option<WheelGeometry>,
}

/// Orientation of the wheel group when the document is written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Orientation {
    Resting { rotation_deg: f64 },
    /// Animate from `from_deg` to `to_deg` over `duration`, then hold.
    Spinning { from_deg: f64, to_deg: f64, duration: Duration },
}

/// Clear `surface` and draw every slice and label of `layout`.
pub fn draw(surface: &mut SvgSurface, layout: &WheelLayout) {
    surface.elements.clear();
    surface.geometry = Some(layout.geometry);

    let single = layout.len() == 1;
    for placement in &layout.slices {
        if single {
            surface.elements.push(SvgElement::Disc {
                center: layout.geometry.center,
                radius: layout.geometry.radius,
                fill: placement.fill,
            });
        } else {
            surface
                .elements
                .push(SvgElement::Slice { d: placement.outline.to_path_data(), fill: placement.fill });
        }
        surface.elements.push(SvgElement::Label {
            anchor: placement.label.anchor,
            rotation_deg: placement.label.rotation_deg,
            text: placement.label.text.as_str().to_owned(),
        });
    }
}

impl SvgSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn elements(&self) -> &[SvgElement] {
        &self.elements
    }

    /// Standalone SVG document: the wheel group plus a fixed pointer on top.
    #[must_use]
    pub fn to_document(&self, orientation: Orientation) -> String {
        SvgDocument { surface: self, orientation }.to_string()
    }
}

struct SvgDocument<'a> {
    surface: &'a SvgSurface,
    orientation: Orientation,
}

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let geometry = self.surface.geometry.unwrap_or_default();
        let cx = fmt_num(geometry.center.x);
        let cy = fmt_num(geometry.center.y);
        let size = fmt_num(VIEWBOX_SIZE);

        writeln!(f, r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {size} {size}">"#)?;
        match self.orientation {
            Orientation::Resting { rotation_deg } => {
                writeln!(f, r#"<g id="wheel" transform="rotate({} {cx} {cy})">"#, fmt_num(rotation_deg))?;
            }
            Orientation::Spinning { from_deg, to_deg, duration } => {
                writeln!(f, r#"<g id="wheel" transform="rotate({} {cx} {cy})">"#, fmt_num(from_deg))?;
                writeln!(
                    f,
                    r#"<animateTransform attributeName="transform" type="rotate" from="{} {cx} {cy}" to="{} {cx} {cy}" dur="{}ms" fill="freeze" calcMode="spline" keyTimes="0;1" keySplines="{SPIN_EASING}"/>"#,
                    fmt_num(from_deg),
                    fmt_num(to_deg),
                    duration.as_millis(),
                )?;
            }
        }
        for element in &self.surface.elements {
            writeln!(f, "{element}")?;
        }
        writeln!(f, "</g>")?;

        let top = geometry.center.y - geometry.radius;
        writeln!(
            f,
            r#"<polygon id="pointer" points="{},{} {},{} {},{}" fill="{POINTER_FILL}"/>"#,
            fmt_num(geometry.center.x - POINTER_HALF_WIDTH),
            fmt_num(top),
            fmt_num(geometry.center.x + POINTER_HALF_WIDTH),
            fmt_num(top),
            cx,
            fmt_num(top + POINTER_HEIGHT),
        )?;
        write!(f, "</svg>")
    }
}

impl fmt::Display for SvgElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slice { d, fill } => write!(
                f,
                r#"<path d="{d}" fill="{fill}" stroke="{SLICE_STROKE}" stroke-width="{}"/>"#,
                fmt_num(SLICE_STROKE_WIDTH)
            ),
            Self::Disc { center, radius, fill } => write!(
                f,
                r#"<circle cx="{}" cy="{}" r="{}" fill="{fill}" stroke="{SLICE_STROKE}" stroke-width="{}"/>"#,
                fmt_num(center.x),
                fmt_num(center.y),
                fmt_num(*radius),
                fmt_num(SLICE_STROKE_WIDTH)
            ),
            Self::Label { anchor, rotation_deg, text } => {
                let x = fmt_num(anchor.x);
                let y = fmt_num(anchor.y);
                write!(
                    f,
                    r#"<text x="{x}" y="{y}" text-anchor="middle" dominant-baseline="middle" fill="{LABEL_FILL}" font-size="{}" font-family="{LABEL_FONT_FAMILY}" transform="rotate({} {x} {y})">{}</text>"#,
                    fmt_num(LABEL_FONT_SIZE),
                    fmt_num(*rotation_deg),
                    escape_xml(text),
                )
            }
        }
    }
}

/// Escape text for use in SVG character data and attribute values.
#[must_use]
pub fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
