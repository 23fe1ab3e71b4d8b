//! Interactive menu loop.
//!
//! # Responsibility
//! - Read menu choices and dispatch add/list/filter/total/exit.
//! - Run the add sub-protocol with duration re-prompting.
//!
//! # Invariants
//! - Every state except `Exit` returns to the menu.
//! - Invalid input never mutates the store.
//! - End of input stops the loop; an add interrupted by it creates nothing.

use log::{debug, info};
use std::io::{self, BufRead, Write};
use studylog_core::{parse_duration_input, InMemoryStudyLog, Presenter};

const MENU_PROMPT: &str = "Choose a menu option (1-5): ";
const INVALID_CHOICE_MESSAGE: &str = "Invalid choice. Enter a number from 1 to 5.";
const FAREWELL_MESSAGE: &str = "See you next time! 👋";

/// One menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Filter,
    Total,
    Exit,
}

impl MenuChoice {
    /// Maps a trimmed token `1`..`5`; anything else is `None`.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::List),
            "3" => Some(Self::Filter),
            "4" => Some(Self::Total),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Line-oriented terminal wrapper.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `prompt` and reads one line; `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 become replacement characters, so a
    /// garbled line is handled like any other unrecognized input.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")
    }

    fn println(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}

/// Runs the menu loop until Exit or end of input.
///
/// The store is owned by the caller and borrowed for the whole session.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    service: &mut InMemoryStudyLog,
    presenter: &Presenter,
) -> io::Result<()> {
    loop {
        console.print(&presenter.render_menu())?;
        let Some(token) = console.prompt(MENU_PROMPT)? else {
            info!("event=input_closed module=cli status=ok");
            return Ok(());
        };

        let Some(choice) = MenuChoice::parse(&token) else {
            console.println(INVALID_CHOICE_MESSAGE)?;
            continue;
        };
        debug!("event=menu_choice module=cli choice={choice:?}");

        let keep_going = match choice {
            MenuChoice::Add => add_record(console, service, presenter)?,
            MenuChoice::List => {
                console.print(&presenter.render_listing(service.records()))?;
                true
            }
            MenuChoice::Filter => filter_records(console, service, presenter)?,
            MenuChoice::Total => {
                console.print(&presenter.render_total(service.total_duration()))?;
                true
            }
            MenuChoice::Exit => {
                console.println(FAREWELL_MESSAGE)?;
                info!(
                    "event=app_exit module=cli status=ok records={} total_minutes={}",
                    service.count(),
                    service.total_duration()
                );
                return Ok(());
            }
        };
        if !keep_going {
            info!("event=input_closed module=cli status=ok");
            return Ok(());
        }
    }
}

/// Add sub-protocol. Returns `false` when input ended mid-way.
fn add_record<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    service: &mut InMemoryStudyLog,
    presenter: &Presenter,
) -> io::Result<bool> {
    let Some(subject) = console.prompt("Enter subject: ")? else {
        return Ok(false);
    };
    let Some(topic) = console.prompt("Enter topic: ")? else {
        return Ok(false);
    };

    let duration = loop {
        let Some(raw) = console.prompt("Enter study duration (minutes): ")? else {
            return Ok(false);
        };
        match parse_duration_input(&raw) {
            Ok(minutes) => break minutes,
            Err(err) => {
                debug!("event=duration_rejected module=cli reason={err:?}");
                console.println(&err.to_string())?;
            }
        }
    };

    match service.add(subject, topic, duration) {
        Ok(_) => console.print(&presenter.render_added())?,
        // parse_duration_input only yields positive minutes.
        Err(err) => console.println(&err.to_string())?,
    }
    Ok(true)
}

/// Filter view. Returns `false` when input ended at the prompt.
fn filter_records<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    service: &InMemoryStudyLog,
    presenter: &Presenter,
) -> io::Result<bool> {
    if service.is_empty() {
        console.print(&presenter.render_filter_unavailable())?;
        return Ok(true);
    }
    let Some(query) = console.prompt("Enter the subject to filter by: ")? else {
        return Ok(false);
    };
    console.print(&presenter.render_filtered(service, &query))?;
    Ok(true)
}
