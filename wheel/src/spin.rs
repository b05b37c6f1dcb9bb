//! Spin scheduling: which slice wins and how far the wheel turns to show it.
//!
//! The pointer sits at angle 0 (top) of the unrotated frame. Rotating the
//! wheel clockwise by `θ` moves a slice centred at `m` to `m + θ`, so the
//! winner is under the pointer once `(m + θ) mod 360 == 0`.

use rand::Rng;
use tracing::info;

use crate::consts::{EXTRA_FULL_TURNS, MIN_CORRECTION_DEG};
use crate::geometry::normalize_degrees_360;
use crate::layout::Slice;

#[cfg(test)]
#[path = "spin_test.rs"]
mod spin_test;

/// Rotation state owned by one session.
///
/// `cumulative_rotation` is the total clockwise rotation applied since the
/// session began. It only ever grows.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WheelState {
    pub cumulative_rotation: f64,
}

/// Outcome of one spin computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    pub chosen_index: usize,
    /// Centre angle of the chosen slice in the unrotated frame.
    pub mid_angle: f64,
    /// Corrective rotation after the extra full turns, in `[45, 405)`.
    pub rotation_needed: f64,
    pub previous_rotation: f64,
    pub new_rotation: f64,
}

impl SpinPlan {
    /// Total degrees travelled by this spin.
    #[must_use]
    pub fn travel(&self) -> f64 {
        self.new_rotation - self.previous_rotation
    }

    /// Where the chosen slice centre rests relative to the pointer, in
    /// `[0, 360)`. Zero (up to float noise) for every valid plan.
    #[must_use]
    pub fn resting_offset(&self) -> f64 {
        normalize_degrees_360(self.mid_angle + self.new_rotation)
    }
}

/// Compute the rotation that lands slice `chosen_index` of `slice_count`
/// under the pointer, starting from `current_rotation`.
#[must_use]
pub fn plan_spin(current_rotation: f64, chosen_index: usize, slice_count: usize) -> SpinPlan {
    let mid_angle = Slice::nth(chosen_index, slice_count).mid_angle;
    let normalized_current = normalize_degrees_360(current_rotation);
    let mut rotation_needed = normalize_degrees_360(360.0 - normalize_degrees_360(normalized_current + mid_angle));
    if rotation_needed < MIN_CORRECTION_DEG {
        rotation_needed += 360.0;
    }
    let extra = f64::from(EXTRA_FULL_TURNS) * 360.0;
    SpinPlan {
        chosen_index,
        mid_angle,
        rotation_needed,
        previous_rotation: current_rotation,
        new_rotation: current_rotation + extra + rotation_needed,
    }
}

/// Pick a slice uniformly at random.
///
/// `slice_count` must be at least 1.
pub fn choose_index<R: Rng + ?Sized>(rng: &mut R, slice_count: usize) -> usize {
    rng.random_range(0..slice_count.max(1))
}

impl WheelState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spin to `chosen_index` and store the new cumulative rotation.
    pub fn spin_to(&mut self, chosen_index: usize, slice_count: usize) -> SpinPlan {
        let plan = plan_spin(self.cumulative_rotation, chosen_index, slice_count);
        self.cumulative_rotation = plan.new_rotation;
        info!(
            chosen_index,
            rotation_needed = plan.rotation_needed,
            new_rotation = plan.new_rotation,
            "wheel spun"
        );
        plan
    }

    /// Spin to a uniformly random slice.
    pub fn spin<R: Rng + ?Sized>(&mut self, rng: &mut R, slice_count: usize) -> SpinPlan {
        let chosen_index = choose_index(rng, slice_count);
        self.spin_to(chosen_index, slice_count)
    }
}
