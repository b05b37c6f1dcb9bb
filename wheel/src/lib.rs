//! Wheel of strengths: layout, spin scheduling, and the daily gate.
//!
//! This crate holds every part of the wheel that does not depend on a live
//! render target or a timer. The host (the `styrkehjul` binary, or a browser
//! shell) draws [`render::SvgSurface`] output, persists the gate's
//! [`gate::SpinRecord`], and fires the [`session::PendingReveal`] after its
//! delay.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | Points, polar conversion, pie-slice outlines |
//! | [`layout`] | Slice angles, fills, and label placement for a label list |
//! | [`render`] | Draws a layout onto an SVG surface |
//! | [`spin`] | Cumulative rotation and spin planning |
//! | [`gate`] | One-spin-per-calendar-day policy, stores, clocks |
//! | [`session`] | Trigger, result surface, and deferred reveal for one page load |
//! | [`labels`] | Default strengths and localized texts |
//! | [`consts`] | Shared numeric constants |

pub mod consts;
pub mod gate;
pub mod geometry;
pub mod labels;
pub mod layout;
pub mod render;
pub mod session;
pub mod spin;

#[derive(Debug, thiserror::Error)]
pub enum WheelError {
    #[error("a wheel needs at least one label")]
    EmptyLabels,
    #[error("label {index} is blank")]
    BlankLabel { index: usize },
}
