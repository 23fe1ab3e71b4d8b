//! Table rendering for the listing, filter and menu views.
//!
//! # Responsibility
//! - Turn records into fixed-column text tables for a monospaced terminal.
//! - Own every user-facing message of the list/filter/total views.
//!
//! # Invariants
//! - Rendering is a pure function of its inputs: same records, same output.
//! - Rendering never fails or panics, whatever the text length.
//! - Subject/topic cells are clipped on the right; the duration value is
//!   never clipped.

use crate::model::record::Record;
use crate::present::cell::{fit_left, pad_left, pad_right};
use crate::repo::record_repo::RecordRepository;
use crate::service::study_log_service::{FilterSummary, StudyLogService};
use crate::style::decoration::decoration_for;
use crate::style::palette::{Palette, Style};

const LIST_NO_WIDTH: usize = 4;
const LIST_SUBJECT_WIDTH: usize = 20;
const LIST_TOPIC_WIDTH: usize = 34;
const LIST_DURATION_WIDTH: usize = 13;

const FILTER_NO_WIDTH: usize = 4;
const FILTER_TOPIC_WIDTH: usize = 30;
const FILTER_DURATION_WIDTH: usize = 8;
const FILTER_RULE_WIDTH: usize = 55;

const MENU_NO_WIDTH: usize = 4;
const MENU_TEXT_WIDTH: usize = 40;

/// Entries of the main menu: token, label, icon.
pub const MENU_ITEMS: [(&str, &str, &str); 5] = [
    ("1", "Add record", "📝"),
    ("2", "List all records", "📋"),
    ("3", "Filter by subject", "🔎"),
    ("4", "Total study time", "⏱️"),
    ("5", "Exit", "🚪"),
];

/// Message shown by the listing view when nothing has been logged.
pub const EMPTY_LIST_MESSAGE: &str = "No study records yet. Add a new record first! 📝";

/// Formats records into terminal tables.
#[derive(Debug, Clone, Copy)]
pub struct Presenter {
    palette: Palette,
}

impl Presenter {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Renders the full listing, or the empty-state message when there are
    /// no records.
    pub fn render_listing(&self, records: &[Record]) -> String {
        if records.is_empty() {
            return format!("{}\n", self.palette.paint(EMPTY_LIST_MESSAGE, Style::Yellow));
        }

        let border = border(&[
            LIST_NO_WIDTH,
            LIST_SUBJECT_WIDTH,
            LIST_TOPIC_WIDTH,
            LIST_DURATION_WIDTH,
        ]);
        let header = format!(
            "| {}| {}| {}| {}|",
            pad_right("No", LIST_NO_WIDTH - 1),
            self.palette
                .paint(&pad_right("Subject 📚", LIST_SUBJECT_WIDTH - 1), Style::Bright),
            self.palette
                .paint(&pad_right("Topic 🧾", LIST_TOPIC_WIDTH - 1), Style::Bright),
            self.palette
                .paint(&pad_left("Duration ⏱️", LIST_DURATION_WIDTH - 1), Style::Bright),
        );

        let mut lines = vec![
            String::new(),
            self.palette.paint("Study Records:", Style::Magenta),
            border.clone(),
            header,
            border.clone(),
        ];

        for (index, record) in records.iter().enumerate() {
            let number = index + 1;
            let decorated_subject = format!(
                "{} {}",
                decoration_for(record.subject()),
                record.subject()
            );
            let row = format!(
                "| {}| {}| {}| {}|",
                pad_right(&number.to_string(), LIST_NO_WIDTH - 1),
                fit_left(&decorated_subject, LIST_SUBJECT_WIDTH - 1),
                fit_left(record.topic(), LIST_TOPIC_WIDTH - 1),
                pad_left(
                    &format_minutes(record.duration_minutes()),
                    LIST_DURATION_WIDTH - 1
                ),
            );
            lines.push(self.palette.paint(&row, row_style(number)));
        }

        lines.push(border);
        let summary = FilterSummary::of(records);
        lines.push(self.palette.paint(
            &format!(
                "Total records: {}   |   Total duration: {}",
                summary.count,
                format_minutes(summary.total_minutes)
            ),
            Style::Green,
        ));
        lines.push(String::new());

        join_lines(lines)
    }

    /// Message shown instead of the filter prompt when the store is empty.
    pub fn render_filter_unavailable(&self) -> String {
        "No records to filter yet. Add a record first.\n".to_string()
    }

    /// Runs a subject filter against `service` and renders the outcome.
    ///
    /// Handles the empty-store, blank-query and no-match branches with a
    /// message instead of a table.
    pub fn render_filtered<R: RecordRepository>(
        &self,
        service: &StudyLogService<R>,
        query: &str,
    ) -> String {
        if service.is_empty() {
            return self.render_filter_unavailable();
        }
        let query = query.trim();
        if query.is_empty() {
            return "Subject name is empty. Cancelled.\n".to_string();
        }

        let matches = service.filter_by_subject(query);
        if matches.is_empty() {
            return format!("No records found for subject '{query}'.\n");
        }

        let mut lines = vec![
            String::new(),
            format!("Records for subject: {query}"),
            format!(
                "{} {} {}",
                pad_right("No.", FILTER_NO_WIDTH),
                pad_right("Topic", FILTER_TOPIC_WIDTH),
                pad_left("Duration", FILTER_DURATION_WIDTH),
            ),
            "-".repeat(FILTER_RULE_WIDTH),
        ];
        for (index, record) in matches.iter().enumerate() {
            lines.push(format!(
                "{} {} {} minutes",
                pad_right(&(index + 1).to_string(), FILTER_NO_WIDTH),
                fit_left(record.topic(), FILTER_TOPIC_WIDTH),
                pad_left(
                    &record.duration_minutes().to_string(),
                    FILTER_DURATION_WIDTH - 2
                ),
            ));
        }
        lines.push("-".repeat(FILTER_RULE_WIDTH));

        let summary = FilterSummary::of(&matches);
        lines.push(format!(
            "Total: {} records, total duration: {}",
            summary.count,
            format_minutes(summary.total_minutes)
        ));
        lines.push(String::new());

        join_lines(lines)
    }

    pub fn render_total(&self, total_minutes: u64) -> String {
        format!("Total study time: {}\n", format_minutes(total_minutes))
    }

    /// Renders the boxed main menu.
    pub fn render_menu(&self) -> String {
        let border = border(&[MENU_NO_WIDTH, MENU_TEXT_WIDTH]);
        let mut lines = vec![
            String::new(),
            self.palette.paint("=== Study Log ===", Style::Bright),
            border.clone(),
        ];
        for (token, label, icon) in MENU_ITEMS {
            let text = format!("{icon} {label}");
            lines.push(format!(
                "| {}| {}|",
                pad_right(token, MENU_NO_WIDTH - 1),
                self.palette
                    .paint(&pad_right(&text, MENU_TEXT_WIDTH - 1), Style::Blue),
            ));
        }
        lines.push(border);
        join_lines(lines)
    }

    pub fn render_added(&self) -> String {
        format!(
            "{}\n",
            self.palette.paint("Record added successfully. ✅", Style::Green)
        )
    }
}

/// Odd rows cyan, even rows dim.
fn row_style(number: usize) -> Style {
    if number % 2 == 1 {
        Style::Cyan
    } else {
        Style::Dim
    }
}

fn border(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(*width));
        line.push('+');
    }
    line
}

fn format_minutes(minutes: u64) -> String {
    format!("{minutes} minutes")
}

fn join_lines(lines: Vec<String>) -> String {
    let mut output = lines.join("\n");
    output.push('\n');
    output
}
