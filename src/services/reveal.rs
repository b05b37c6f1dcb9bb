//! Reveal service: fires a spin's result once its animation has played.
//!
//! DESIGN
//! ======
//! Each reveal is a one-shot `tokio` task keyed by the session's
//! [`RevealHandle`]. The task sleeps for the pending reveal's delay and then
//! runs the callback. A `oneshot` channel acts as the cancellation token:
//! sending on it stops the reveal, while dropping it leaves the reveal to
//! complete on schedule.

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use wheel::session::{PendingReveal, RevealHandle};

/// A reveal waiting on its timer.
pub struct ScheduledReveal<T> {
    handle: RevealHandle,
    cancel: Option<oneshot::Sender<()>>,
    task: JoinHandle<Option<T>>,
}

/// Schedule `on_reveal` to run with `pending` after `pending.delay`.
pub fn schedule<F, T>(pending: PendingReveal, on_reveal: F) -> ScheduledReveal<T>
where
    F: FnOnce(PendingReveal) -> T + Send + 'static,
    T: Send + 'static,
{
    let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();
    let handle = pending.handle;
    info!(handle = handle.id(), delay_ms = pending.delay.as_millis(), "reveal scheduled");

    let task = tokio::spawn(async move {
        let timer = tokio::time::sleep(pending.delay);
        tokio::pin!(timer);
        tokio::select! {
            () = &mut timer => {}
            cancelled = &mut cancel_rx => {
                if cancelled.is_ok() {
                    info!(handle = handle.id(), "reveal cancelled before firing");
                    return None;
                }
                // Token dropped without cancelling: keep the appointment.
                timer.await;
            }
        }
        Some(on_reveal(pending))
    });

    ScheduledReveal { handle, cancel: Some(cancel_tx), task }
}

impl<T> ScheduledReveal<T> {
    #[must_use]
    pub fn handle(&self) -> RevealHandle {
        self.handle
    }

    /// Stop the reveal if it has not fired yet. Returns whether a
    /// cancellation was delivered.
    pub fn cancel(&mut self) -> bool {
        self.cancel.take().is_some_and(|tx| tx.send(()).is_ok())
    }

    /// Wait for the reveal. `Some` with the callback's value when it fired,
    /// `None` when it was cancelled or its task failed.
    ///
    /// Borrows mutably so a caller can race it against an interrupt and
    /// still [`cancel`](Self::cancel) afterwards. Await it to completion once.
    pub async fn outcome(&mut self) -> Option<T> {
        match (&mut self.task).await {
            Ok(value) => value,
            Err(e) => {
                warn!(handle = self.handle.id(), error = %e, "reveal task failed");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "reveal_test.rs"]
mod tests;
