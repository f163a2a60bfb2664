//! Generate-note dialog: the backend turns a free-text description into
//! a structured note (title, content, tags, optional event date/time).

use anyhow::Result;

use crate::cli::display::print_full_note;
use crate::cli::ui::{error, select, text_input};
use crate::models::Language;
use crate::store::NoteStore;

/// Execute the generate command.
pub fn run_generate(
    store: &mut NoteStore,
    input: Option<String>,
    language: Option<String>,
) -> Result<()> {
    if !store.load() {
        error(store.error().unwrap_or("load failed"));
        return Ok(());
    }

    let language = match language.as_deref() {
        Some(code) => match Language::from_code(code) {
            Some(lang) => Some(lang),
            None => {
                error(&format!("unknown language \"{}\"", code));
                return Ok(());
            }
        },
        None => None,
    };

    match input {
        Some(input) if !input.trim().is_empty() => generate(store, &input, language),
        _ => prompt_and_generate(store),
    }
}

/// Interactive dialog: pick a language, describe the note.
pub fn prompt_and_generate(store: &mut NoteStore) -> Result<()> {
    let Some(idx) = select("language: ", Language::all())? else {
        println!("Cancelled.");
        return Ok(());
    };
    let language = Language::all()[idx];

    let Some(input) = text_input("describe the note: ", None)? else {
        println!("Cancelled.");
        return Ok(());
    };
    if input.trim().is_empty() {
        println!("Cancelled.");
        return Ok(());
    }

    generate(store, &input, Some(language))
}

fn generate(store: &mut NoteStore, input: &str, language: Option<Language>) -> Result<()> {
    println!("Generating...");
    if store.generate(input, language) {
        println!();
        if let Some(note) = store.selected_note() {
            print_full_note(note);
        }
    } else {
        error(store.error().unwrap_or("generation failed"));
    }
    Ok(())
}
