//! List, show, delete, translate, and the raw-mode browse loop.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::io::{self, IsTerminal, Write};

use crate::cli::display::{print_full_note, print_note_row, print_table_header};
use crate::cli::editor::run_editor;
use crate::cli::generate::prompt_and_generate;
use crate::cli::ui::{clear_screen, confirm, error, select, status_line, text_input, RawModeGuard};
use crate::models::{Language, NoteDraft};
use crate::store::{NoteStore, SaveCommand, SaveOutcome};

/// Execute the list command.
pub fn run_list(store: &mut NoteStore, all: bool) -> Result<()> {
    if !store.load() {
        error(store.error().unwrap_or("load failed"));
        return Ok(());
    }

    let notes = store.filtered();
    if notes.is_empty() {
        println!("No notes.");
        return Ok(());
    }

    if all || !io::stdout().is_terminal() {
        println!("Notes ({} total)\n", notes.len());
        print_table_header();
        for note in notes {
            print_note_row(note, false);
        }
        return Ok(());
    }

    print_table_header();
    for note in notes {
        print_note_row(note, store.selected_id() == Some(note.id));
    }
    Ok(())
}

/// Execute the show command.
pub fn run_show(store: &mut NoteStore, id: i64) -> Result<()> {
    if !store.load() {
        error(store.error().unwrap_or("load failed"));
        return Ok(());
    }
    match store.note(id) {
        Some(note) => print_full_note(note),
        None => println!("Note {} not found.", id),
    }
    Ok(())
}

/// Execute the delete command.
pub fn run_delete(store: &mut NoteStore, id: i64, yes: bool) -> Result<()> {
    if !store.load() {
        error(store.error().unwrap_or("load failed"));
        return Ok(());
    }

    let Some(note) = store.note(id) else {
        println!("Note {} not found.", id);
        return Ok(());
    };
    let title = note.title.clone();

    if !yes && io::stdin().is_terminal() && !confirm(&format!("delete \"{}\"?", title))? {
        println!("Cancelled.");
        return Ok(());
    }

    if store.delete(id) {
        println!("Deleted: {}", title);
    } else {
        error(store.error().unwrap_or("delete failed"));
    }
    Ok(())
}

/// Execute the translate command: print a preview, offer to save it.
pub fn run_translate(store: &mut NoteStore, id: i64, lang: &str) -> Result<()> {
    let Some(language) = Language::from_code(lang) else {
        let codes: Vec<&str> = Language::all().iter().map(|l| l.code()).collect();
        error(&format!(
            "unknown language \"{}\" (expected one of: {})",
            lang,
            codes.join(", ")
        ));
        return Ok(());
    };

    if !store.load() {
        error(store.error().unwrap_or("load failed"));
        return Ok(());
    }
    let Some(note) = store.note(id) else {
        println!("Note {} not found.", id);
        return Ok(());
    };
    let tags = note.tags.clone();

    println!("Translating...");
    let Some(translated) = store.translate(id, language) else {
        error(store.error().unwrap_or("translation failed"));
        return Ok(());
    };

    println!();
    println!("{}", translated.title);
    println!("{}", translated.content);
    println!();

    // Preview by default; persisting the translation is an explicit step.
    if io::stdin().is_terminal() && confirm("save translation to this note?")? {
        let draft = NoteDraft {
            title: translated.title,
            content: translated.content,
            tags,
        };
        match store.save(SaveCommand::Update(id, draft)) {
            SaveOutcome::Saved => println!("Saved."),
            SaveOutcome::Skipped => println!("Nothing to save."),
            SaveOutcome::Failed => error(store.error().unwrap_or("save failed")),
        }
    }
    Ok(())
}

/// Interactive browse: one note per screen, single-key actions.
pub fn run_browse_mode(store: &mut NoteStore) -> Result<()> {
    if !store.load() {
        error(store.error().unwrap_or("load failed"));
        return Ok(());
    }

    let mut index: usize = 0;

    loop {
        let total = store.filtered().len();
        if total == 0 {
            clear_screen()?;
            if store.search_query().trim().is_empty() {
                println!("No notes. [n]ew [g]enerate [q]uit");
            } else {
                println!(
                    "No matches for \"{}\". [/] search [n]ew [q]uit",
                    store.search_query().trim()
                );
            }
        } else {
            index = index.min(total - 1);
            let note = &store.filtered()[index];
            let id = note.id;
            store.select(id);

            clear_screen()?;
            print_full_note(&store.filtered()[index]);
            print!(
                "\n{}",
                status_line(
                    index + 1,
                    total,
                    "[e]dit [d]elete [t]ranslate [n]ew [g]enerate [/] search [←/→] [q]uit: "
                )
            );
            io::stdout().flush()?;
        }

        // Raw mode only for the keypress; everything else prints cooked.
        let action = {
            let _guard = RawModeGuard::new()?;
            match event::read()? {
                Event::Key(KeyEvent { code, .. }) => code,
                _ => continue,
            }
        };

        let total = store.filtered().len();
        match action {
            KeyCode::Char('e') | KeyCode::Char('E') if total > 0 => {
                println!();
                run_editor(store)?;
            }
            KeyCode::Char('d') | KeyCode::Char('D') if total > 0 => {
                println!();
                let note = store.filtered()[index].clone();
                if confirm(&format!("delete \"{}\"?", note.title))? {
                    if store.delete(note.id) {
                        println!("Deleted: {}", note.title);
                    } else {
                        error(store.error().unwrap_or("delete failed"));
                    }
                }
            }
            KeyCode::Char('t') | KeyCode::Char('T') if total > 0 => {
                println!();
                browse_translate(store, index)?;
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                println!();
                store.clear_selection();
                run_editor(store)?;
            }
            KeyCode::Char('g') | KeyCode::Char('G') => {
                println!();
                prompt_and_generate(store)?;
            }
            KeyCode::Char('/') => {
                println!();
                let current = store.search_query().to_string();
                if let Some(query) = text_input("search: ", Some(&current))? {
                    store.set_search_query(&query);
                    index = 0;
                }
            }
            KeyCode::Right | KeyCode::Char('j') | KeyCode::Enter | KeyCode::Char(' ') => {
                if total > 0 {
                    index = (index + 1) % total;
                }
            }
            KeyCode::Left | KeyCode::Char('k') => {
                if total > 0 {
                    index = index.checked_sub(1).unwrap_or(total - 1);
                }
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
            _ => {}
        }
    }

    clear_screen()?;
    Ok(())
}

/// Translate the current note in browse mode and show the preview.
/// Saving stays explicit, same as the translate subcommand.
fn browse_translate(store: &mut NoteStore, index: usize) -> Result<()> {
    let note = store.filtered()[index].clone();

    let Some(idx) = select("language: ", Language::all())? else {
        return Ok(());
    };
    let language = Language::all()[idx];

    println!("Translating...");
    let Some(translated) = store.translate(note.id, language) else {
        error(store.error().unwrap_or("translation failed"));
        crate::cli::ui::wait_for_key()?;
        return Ok(());
    };

    println!();
    println!("{}", translated.title);
    println!("{}", translated.content);
    println!();

    if confirm("save translation to this note?")? {
        let draft = NoteDraft {
            title: translated.title,
            content: translated.content,
            tags: note.tags,
        };
        match store.save(SaveCommand::Update(note.id, draft)) {
            SaveOutcome::Saved => println!("Saved."),
            SaveOutcome::Skipped => println!("Nothing to save."),
            SaveOutcome::Failed => error(store.error().unwrap_or("save failed")),
        }
    }
    Ok(())
}
