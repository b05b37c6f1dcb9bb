//! Spin session: trigger control, result surface, and the deferred reveal.
//!
//! SYSTEM CONTEXT
//! ==============
//! A session is one page load. It owns the wheel's cumulative rotation, the
//! trigger's enabled state, and the result text, and consults the daily gate
//! before every spin. Timing is left to the host: a successful trigger
//! returns a [`PendingReveal`] that the host fires (or cancels) after its
//! delay.

use std::time::Duration;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::consts::SPIN_ANIMATION;
use crate::gate::{Clock, DailyGate, RecordStore};
use crate::labels::{ALREADY_SPUN_NOTICE, ALREADY_SPUN_TODAY, Labels, result_message};
use crate::layout::{WheelGeometry, WheelLayout};
use crate::spin::{SpinPlan, WheelState};

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    Enabled,
    Disabled,
}

/// Session-scoped identifier of a scheduled reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevealHandle(u64);

impl RevealHandle {
    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// A spin whose result is waiting for its animation to finish.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingReveal {
    pub handle: RevealHandle,
    pub plan: SpinPlan,
    pub delay: Duration,
}

impl PendingReveal {
    #[must_use]
    pub fn chosen_index(&self) -> usize {
        self.plan.chosen_index
    }
}

/// What a trigger activation did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinAttempt {
    Started(PendingReveal),
    /// Today's spin is used up; `notice` is shown to the user.
    AlreadySpun { notice: &'static str },
}

pub struct SpinSession<S, C> {
    labels: Labels,
    layout: WheelLayout,
    gate: DailyGate<S, C>,
    wheel: WheelState,
    trigger: TriggerState,
    result: Option<String>,
    reveal_delay: Duration,
    next_handle: u64,
    outstanding: Option<RevealHandle>,
}

impl<S: RecordStore, C: Clock> SpinSession<S, C> {
    /// Start a session: lay out the wheel once and check the daily gate.
    pub fn start(labels: Labels, gate: DailyGate<S, C>) -> Self {
        let layout = WheelLayout::compute(&labels, WheelGeometry::default());
        let (trigger, result) = if gate.has_spun_today() {
            info!("already spun today; trigger starts disabled");
            (TriggerState::Disabled, Some(ALREADY_SPUN_TODAY.to_owned()))
        } else {
            (TriggerState::Enabled, None)
        };
        Self {
            labels,
            layout,
            gate,
            wheel: WheelState::new(),
            trigger,
            result,
            reveal_delay: SPIN_ANIMATION,
            next_handle: 0,
            outstanding: None,
        }
    }

    /// Override the reveal delay (defaults to the spin animation length).
    #[must_use]
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    /// Activate the trigger control.
    pub fn trigger<R: Rng + ?Sized>(&mut self, rng: &mut R) -> SpinAttempt {
        if self.trigger == TriggerState::Disabled || self.gate.has_spun_today() {
            self.trigger = TriggerState::Disabled;
            debug!("spin rejected by daily gate");
            return SpinAttempt::AlreadySpun { notice: ALREADY_SPUN_NOTICE };
        }

        let plan = self.wheel.spin(rng, self.labels.len());
        if let Err(e) = self.gate.set_spin_today() {
            warn!(error = %e, "spin not persisted; only this session stays locked");
        }
        self.trigger = TriggerState::Disabled;

        let handle = RevealHandle(self.next_handle);
        self.next_handle += 1;
        self.outstanding = Some(handle);
        SpinAttempt::Started(PendingReveal { handle, plan, delay: self.reveal_delay })
    }

    /// Show the chosen label on the result surface.
    ///
    /// Returns the new result text, or `None` when `pending` is not this
    /// session's outstanding reveal (already revealed, cancelled, or foreign).
    pub fn reveal(&mut self, pending: &PendingReveal) -> Option<&str> {
        if self.outstanding != Some(pending.handle) {
            debug!(handle = pending.handle.id(), "ignoring stale reveal");
            return None;
        }
        let label = self.labels.get(pending.chosen_index())?;
        self.outstanding = None;
        info!(handle = pending.handle.id(), label = %label, "spin result revealed");
        self.result = Some(result_message(label));
        self.result.as_deref()
    }

    /// Drop an outstanding reveal without showing it. Returns whether
    /// `handle` was outstanding.
    pub fn cancel_reveal(&mut self, handle: RevealHandle) -> bool {
        if self.outstanding == Some(handle) {
            self.outstanding = None;
            info!(handle = handle.id(), "reveal cancelled");
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn trigger_state(&self) -> TriggerState {
        self.trigger
    }

    #[must_use]
    pub fn result_text(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Current cumulative rotation, in degrees.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.wheel.cumulative_rotation
    }

    #[must_use]
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    #[must_use]
    pub fn layout(&self) -> &WheelLayout {
        &self.layout
    }

    #[must_use]
    pub fn gate(&self) -> &DailyGate<S, C> {
        &self.gate
    }
}
