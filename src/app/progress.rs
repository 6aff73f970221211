use std::io::{IsTerminal, Write};
use std::time::Duration;

use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use tokio::sync::watch;
use tokio::time::Instant;

use g0::metrics::ProgressSnapshot;
use g0::shutdown::{ShutdownReceiver, wait_for_shutdown};

const PROGRESS_TICK: Duration = Duration::from_millis(100);
const BAR_WIDTH: u128 = 50;

/// Redraws a one-line progress bar on stderr until `done_rx` fires, then
/// clears it. Does nothing when stderr is not a terminal.
pub(crate) fn setup_progress_indicator(
    progress_rx: watch::Receiver<ProgressSnapshot>,
    run_start: Instant,
    target: Duration,
    no_color: bool,
    mut done_rx: ShutdownReceiver,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        if !std::io::stderr().is_terminal() {
            return;
        }

        let mut ticker = tokio::time::interval(PROGRESS_TICK);
        loop {
            tokio::select! {
                () = wait_for_shutdown(&mut done_rx) => {
                    drop(clear_progress_line());
                    break;
                }
                _ = ticker.tick() => {
                    let snapshot = *progress_rx.borrow();
                    let line = build_progress_line(snapshot, run_start.elapsed(), target);
                    if render_progress_line(&line, no_color).is_err() {
                        break;
                    }
                }
            }
        }
    })
}

fn render_progress_line(line: &[ProgressSegment], no_color: bool) -> Result<(), std::io::Error> {
    let mut out = std::io::stderr();
    queue!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine))?;
    for segment in line {
        match segment.color {
            Some(color) if !no_color => {
                queue!(
                    out,
                    SetForegroundColor(color),
                    Print(&segment.text),
                    ResetColor
                )?;
            }
            Some(_) | None => queue!(out, Print(&segment.text))?,
        }
    }
    out.flush()
}

fn clear_progress_line() -> Result<(), std::io::Error> {
    let mut out = std::io::stderr();
    queue!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine))?;
    out.flush()
}

fn build_progress_line(
    snapshot: ProgressSnapshot,
    elapsed: Duration,
    target: Duration,
) -> Vec<ProgressSegment> {
    let elapsed_ms = elapsed.as_millis();
    let target_ms = target.as_millis().max(1);
    let permille = elapsed_ms
        .saturating_mul(1_000)
        .checked_div(target_ms)
        .unwrap_or(0)
        .min(1_000);

    let filled = permille
        .saturating_mul(BAR_WIDTH)
        .checked_div(1_000)
        .unwrap_or(0);
    let filled = usize::try_from(filled).unwrap_or(0);
    let empty = usize::try_from(BAR_WIDTH)
        .unwrap_or(0)
        .saturating_sub(filled);
    let bar = format!("[{}{}]", "█".repeat(filled), "░".repeat(empty));

    let percent_text = format!(
        " {}.{}%",
        permille.checked_div(10).unwrap_or(0),
        permille.checked_rem(10).unwrap_or(0)
    );
    let remaining = target.saturating_sub(elapsed);
    let time_text = format!(
        " | Elapsed: {} | Remaining: {}",
        format_short(elapsed),
        format_short(remaining)
    );

    let rps_x10 = u128::from(snapshot.total_requests)
        .saturating_mul(10_000)
        .checked_div(elapsed_ms)
        .unwrap_or(0);
    let counts_text = format!(
        " | Requests: {} | Success: {} | Failed: {}",
        snapshot.total_requests, snapshot.successful_requests, snapshot.failed_requests
    );
    let rps_text = format!(
        " | RPS: {}.{}",
        rps_x10.checked_div(10).unwrap_or(0),
        rps_x10.checked_rem(10).unwrap_or(0)
    );

    vec![
        ProgressSegment::plain(bar),
        ProgressSegment::colored(percent_text, Color::Cyan),
        ProgressSegment::colored(time_text, Color::Yellow),
        ProgressSegment::plain(counts_text),
        ProgressSegment::colored(rps_text, Color::Green),
    ]
}

/// `350ms`, `12.3s`, or `2m5s`.
fn format_short(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1_000 {
        return format!("{}ms", millis);
    }
    let secs = duration.as_secs();
    if secs < 60 {
        let tenths = millis.checked_div(100).unwrap_or(0);
        return format!(
            "{}.{}s",
            tenths.checked_div(10).unwrap_or(0),
            tenths.checked_rem(10).unwrap_or(0)
        );
    }
    format!(
        "{}m{}s",
        secs.checked_div(60).unwrap_or(0),
        secs.checked_rem(60).unwrap_or(0)
    )
}

struct ProgressSegment {
    text: String,
    color: Option<Color>,
}

impl ProgressSegment {
    const fn plain(text: String) -> Self {
        Self { text, color: None }
    }

    const fn colored(text: String, color: Color) -> Self {
        Self {
            text,
            color: Some(color),
        }
    }
}
