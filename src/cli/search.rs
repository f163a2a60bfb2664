//! Search command: server-side search with a silent local fallback.

use anyhow::Result;

use crate::cli::display::{print_note_row, print_table_header};
use crate::cli::ui::error;
use crate::store::{NoteStore, SearchOutcome};

pub fn run_search(store: &mut NoteStore, query: &str) -> Result<()> {
    if !store.load() {
        error(store.error().unwrap_or("load failed"));
        return Ok(());
    }

    let outcome = store.set_search_query(query);

    let notes = store.filtered();
    if notes.is_empty() {
        println!("No matches for \"{}\".", query.trim());
        return Ok(());
    }

    print_table_header();
    for note in notes {
        print_note_row(note, false);
    }

    if outcome == SearchOutcome::LocalFallback {
        println!("\n(server search unavailable, showing local matches)");
    }
    Ok(())
}
