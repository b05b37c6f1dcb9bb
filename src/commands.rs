//! CLI command bodies, generic over store, clock, RNG, and output so they can
//! run against in-memory fakes in tests.

use std::fs;
use std::io::Write;
use std::path::Path;

use rand::Rng;
use time::format_description::well_known::Rfc3339;
use tracing::{info, warn};
use wheel::gate::{Clock, RecordStore};
use wheel::labels::ALREADY_SPUN_TODAY;
use wheel::layout::WheelLayout;
use wheel::render::{Orientation, SvgSurface, draw};
use wheel::session::{SpinAttempt, SpinSession, TriggerState};

use crate::CliError;
use crate::services::reveal;

const CAN_SPIN_TODAY: &str = "Du kan spinne hjulet i dag.";
const LAST_SPIN_PREFIX: &str = "Siste spinn: ";

/// What `spin` ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinOutcome {
    /// Spun and revealed; carries the result text.
    Revealed(String),
    /// Today's spin was already used; carries the notice shown.
    AlreadySpun(String),
    /// Spun but the reveal was cancelled before it fired.
    Unrevealed,
}

/// Write `layout` to `path` as an SVG document.
fn write_svg(path: &Path, layout: &WheelLayout, orientation: Orientation) -> Result<(), CliError> {
    let mut surface = SvgSurface::new();
    draw(&mut surface, layout);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, surface.to_document(orientation))?;
    info!(path = %path.display(), "wheel written");
    Ok(())
}

/// Write the wheel at rest.
///
/// # Errors
///
/// Returns [`CliError::Io`] when the SVG cannot be written.
pub fn render<S: RecordStore, C: Clock>(session: &SpinSession<S, C>, svg_path: &Path) -> Result<(), CliError> {
    write_svg(svg_path, session.layout(), Orientation::Resting { rotation_deg: session.rotation() })
}

/// Trigger one spin, write the animated wheel, and reveal the result after
/// the session's reveal delay.
///
/// Once the trigger has consumed today's spin the reveal always runs: a failed
/// SVG write is logged and skipped. Completing `interrupt` before the reveal
/// fires cancels it.
///
/// # Errors
///
/// Returns [`CliError::Io`] when the output cannot be written.
pub async fn spin<S, C, R, W, I>(
    session: &mut SpinSession<S, C>,
    rng: &mut R,
    svg_path: &Path,
    out: &mut W,
    interrupt: I,
) -> Result<SpinOutcome, CliError>
where
    S: RecordStore,
    C: Clock,
    R: Rng + ?Sized,
    W: Write,
    I: Future<Output = ()>,
{
    let pending = match session.trigger(rng) {
        SpinAttempt::Started(pending) => pending,
        SpinAttempt::AlreadySpun { notice } => {
            writeln!(out, "{notice}")?;
            return Ok(SpinOutcome::AlreadySpun(notice.to_owned()));
        }
    };

    let orientation = Orientation::Spinning {
        from_deg: pending.plan.previous_rotation,
        to_deg: pending.plan.new_rotation,
        duration: pending.delay,
    };
    if let Err(e) = write_svg(svg_path, session.layout(), orientation) {
        warn!(path = %svg_path.display(), error = %e, "animated wheel not written; revealing anyway");
    }

    let mut scheduled = reveal::schedule(pending, |fired| fired);
    tokio::pin!(interrupt);
    let fired = tokio::select! {
        fired = scheduled.outcome() => fired,
        () = &mut interrupt => {
            info!(handle = scheduled.handle().id(), "spin interrupted");
            if scheduled.cancel() {
                session.cancel_reveal(scheduled.handle());
            }
            scheduled.outcome().await
        }
    };

    let Some(fired) = fired else {
        return Ok(SpinOutcome::Unrevealed);
    };
    let Some(text) = session.reveal(&fired) else {
        return Ok(SpinOutcome::Unrevealed);
    };
    let text = text.to_owned();
    writeln!(out, "{text}")?;
    Ok(SpinOutcome::Revealed(text))
}

/// Print whether today's spin is still available.
///
/// # Errors
///
/// Returns [`CliError::Io`] when the output cannot be written, or
/// [`CliError::Format`] when the last spin instant cannot be formatted.
pub fn status<S, C, W>(session: &SpinSession<S, C>, out: &mut W) -> Result<(), CliError>
where
    S: RecordStore,
    C: Clock,
    W: Write,
{
    if session.trigger_state() == TriggerState::Disabled {
        writeln!(out, "{ALREADY_SPUN_TODAY}")?;
    } else {
        writeln!(out, "{CAN_SPIN_TODAY}")?;
    }
    if let Some(last_spin) = session.gate().last_spin() {
        writeln!(out, "{LAST_SPIN_PREFIX}{}", last_spin.format(&Rfc3339)?)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;
