//! Study log interactive entry point.
//!
//! # Responsibility
//! - Bring up logging and pick the color mode for the current terminal.
//! - Own the record store for the process lifetime and hand it to the loop.

mod app;

use is_terminal::IsTerminal;
use log::error;
use std::io;
use studylog_core::{ColorMode, InMemoryStudyLog, Palette, Presenter};

fn main() {
    let log_dir = std::env::temp_dir().join("studylog").join("logs");
    if let Err(err) = studylog_core::init_logging(studylog_core::default_log_level(), &log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }

    let stdout = io::stdout();
    let mode = if stdout.is_terminal() {
        ColorMode::Always
    } else {
        ColorMode::Never
    };
    let presenter = Presenter::new(Palette::new(mode));
    let mut service = InMemoryStudyLog::default();
    let mut console = app::Console::new(io::stdin().lock(), stdout.lock());

    if let Err(err) = app::run(&mut console, &mut service, &presenter) {
        error!("event=terminal_io module=cli status=error error={err}");
        eprintln!("error: {err}");
    }
}
