mod progress;
mod summary;

pub(crate) use progress::spawn_progress_printer;
pub(crate) use summary::{print_banner, print_report};
