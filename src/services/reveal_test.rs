use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use time::macros::datetime;
use tokio::time::Instant;
use wheel::gate::{DailyGate, FixedClock, MemoryStore};
use wheel::labels::default_labels;
use wheel::session::{SpinAttempt, SpinSession};

use super::*;

fn pending_reveal() -> PendingReveal {
    let gate = DailyGate::new(MemoryStore::new(), FixedClock(datetime!(2026-10-18 12:00 +2)));
    let mut session = SpinSession::start(default_labels(), gate);
    let mut rng = StdRng::seed_from_u64(21);
    match session.trigger(&mut rng) {
        SpinAttempt::Started(pending) => pending,
        SpinAttempt::AlreadySpun { notice } => panic!("unexpected notice: {notice}"),
    }
}

#[tokio::test(start_paused = true)]
async fn reveal_fires_after_delay() {
    let pending = pending_reveal();
    let started = Instant::now();
    let mut scheduled = schedule(pending, |p| p.chosen_index());
    assert_eq!(scheduled.handle(), pending.handle);

    let fired = scheduled.outcome().await;
    assert_eq!(fired, Some(pending.chosen_index()));
    assert!(started.elapsed() >= Duration::from_millis(4000));
}

#[tokio::test(start_paused = true)]
async fn reveal_does_not_fire_early() {
    let flag = Arc::new(AtomicBool::new(false));
    let seen = Arc::clone(&flag);
    let mut scheduled = schedule(pending_reveal(), move |_| seen.store(true, Ordering::SeqCst));

    tokio::time::sleep(Duration::from_millis(3999)).await;
    assert!(!flag.load(Ordering::SeqCst));
    assert_eq!(scheduled.outcome().await, Some(()));
    assert!(flag.load(Ordering::SeqCst));
}

#[tokio::test(start_paused = true)]
async fn cancelled_reveal_never_runs_callback() {
    let flag = Arc::new(AtomicBool::new(false));
    let seen = Arc::clone(&flag);
    let mut scheduled = schedule(pending_reveal(), move |_| seen.store(true, Ordering::SeqCst));

    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert!(scheduled.cancel());
    assert!(!scheduled.cancel());
    assert_eq!(scheduled.outcome().await, None);
    assert!(!flag.load(Ordering::SeqCst));
}

#[tokio::test(start_paused = true)]
async fn dropped_token_still_fires() {
    let pending = pending_reveal();
    let mut scheduled = schedule(pending, |p| p.handle);
    // Drop the sender without cancelling.
    drop(scheduled.cancel.take());
    assert_eq!(scheduled.outcome().await, Some(pending.handle));
}
