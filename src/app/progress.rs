use std::io::Write;

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use tokio::sync::watch;

/// Prints `Progress: i/N requests completed.` to stderr every `max(N/10, 1)`
/// completions and once more when the run finishes.
pub(crate) fn spawn_progress_printer(
    mut progress: watch::Receiver<u64>,
    total: u64,
    no_color: bool,
) -> tokio::task::JoinHandle<()> {
    let step = progress_step(total);

    tokio::spawn(async move {
        let mut last_printed = 0u64;
        while progress.changed().await.is_ok() {
            let completed = *progress.borrow_and_update();
            if should_print(last_printed, completed, step, total) {
                if print_progress_line(completed, total, no_color).is_err() {
                    break;
                }
                last_printed = completed;
            }
            if completed >= total {
                break;
            }
        }
    })
}

pub(super) fn progress_step(total: u64) -> u64 {
    (total / 10).max(1)
}

/// True when `completed` crossed a step boundary since the last printed
/// value, or reached the total.
pub(super) fn should_print(last_printed: u64, completed: u64, step: u64, total: u64) -> bool {
    if completed <= last_printed {
        return false;
    }
    if completed >= total {
        return true;
    }
    completed / step > last_printed / step
}

pub(super) fn progress_line(completed: u64, total: u64) -> String {
    format!("Progress: {}/{} requests completed.", completed, total)
}

fn print_progress_line(completed: u64, total: u64, no_color: bool) -> Result<(), std::io::Error> {
    let mut out = std::io::stderr();
    if no_color {
        queue!(out, Print(progress_line(completed, total)), Print("\n"))?;
    } else {
        queue!(
            out,
            Print("Progress: "),
            SetForegroundColor(Color::Cyan),
            Print(format!("{}/{}", completed, total)),
            ResetColor,
            Print(" requests completed.\n")
        )?;
    }
    out.flush()
}
