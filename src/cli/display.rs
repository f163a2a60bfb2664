//! Formatting for note output.

use crate::cli::ui::{selection_prefix, truncate};
use crate::models::Note;

const TITLE_WIDTH: usize = 32;
const TAGS_WIDTH: usize = 24;

/// Print a full note: header fields, then content.
pub fn print_full_note(note: &Note) {
    println!("{}", note.title);
    println!("  id: {}", note.id);
    if !note.tags.is_empty() {
        println!("  tags: {}", note.tags.join(", "));
    }
    if let Some(date) = &note.event_date {
        match &note.event_time {
            Some(time) => println!("  event: {} {}", date, time),
            None => println!("  event: {}", date),
        }
    }
    println!("  updated: {}", note.updated_at_display());
    println!();
    if note.content.is_empty() {
        println!("(no content)");
    } else {
        println!("{}", note.content);
    }
}

pub fn print_table_header() {
    println!(
        "    {:<title$} {:<tags$} {}",
        "TITLE",
        "TAGS",
        "UPDATED",
        title = TITLE_WIDTH,
        tags = TAGS_WIDTH,
    );
}

pub fn print_note_row(note: &Note, selected: bool) {
    println!(
        "{:>4}{}{:<title$} {:<tags$} {}",
        note.id,
        selection_prefix(selected),
        truncate(&note.title, TITLE_WIDTH),
        truncate(&note.tags.join(","), TAGS_WIDTH),
        note.updated_at_display(),
        title = TITLE_WIDTH,
        tags = TAGS_WIDTH,
    );
}
