//! Editor session: a draft buffer edited through prompts.
//!
//! The draft is seeded from the selected note (or empty for a new note)
//! and discarded unless the user saves. Translation here is a preview:
//! it overwrites the draft only, never the stored note.

use anyhow::Result;

use crate::cli::ui::{error, select, text_input};
use crate::models::{Language, Note, NoteDraft};
use crate::store::{NoteStore, SaveCommand, SaveOutcome};

enum EditorAction {
    Save,
    Translate,
    Cancel,
}

/// `add` command: flags fill the draft directly, otherwise prompt.
pub fn run_add(
    store: &mut NoteStore,
    title: Option<String>,
    content: Option<String>,
    tags: Vec<String>,
) -> Result<()> {
    if !store.load() {
        error(store.error().unwrap_or("load failed"));
        return Ok(());
    }
    store.clear_selection();

    // Non-interactive when any field was given on the command line.
    if title.is_some() || content.is_some() || !tags.is_empty() {
        let mut draft = NoteDraft {
            title: title.unwrap_or_default(),
            content: content.unwrap_or_default(),
            tags: Vec::new(),
        };
        for tag in &tags {
            draft.add_tag(tag);
        }
        return finish_save(store, SaveCommand::Create(draft));
    }

    run_editor(store)
}

/// `edit <id>` command.
pub fn run_edit(store: &mut NoteStore, id: i64) -> Result<()> {
    if !store.load() {
        error(store.error().unwrap_or("load failed"));
        return Ok(());
    }
    if !store.select(id) {
        println!("Note {} not found.", id);
        return Ok(());
    }
    run_editor(store)
}

/// Interactive editor over the current selection (or a new note when
/// nothing is selected).
pub fn run_editor(store: &mut NoteStore) -> Result<()> {
    let selected: Option<Note> = store.selected_note().cloned();
    let mut draft = selected
        .as_ref()
        .map(NoteDraft::from_note)
        .unwrap_or_default();

    let Some(title) = text_input("title: ", Some(&draft.title))? else {
        println!("Cancelled.");
        return Ok(());
    };
    draft.title = title;

    let Some(content) = text_input("content: ", Some(&draft.content))? else {
        println!("Cancelled.");
        return Ok(());
    };
    draft.content = content;

    edit_tags(&mut draft)?;

    loop {
        match prompt_action(&selected)? {
            EditorAction::Save => {
                let command = match &selected {
                    Some(note) => SaveCommand::Update(note.id, draft.clone()),
                    None => SaveCommand::Create(draft.clone()),
                };
                return finish_save(store, command);
            }
            EditorAction::Translate => {
                translate_draft(store, &selected, &mut draft)?;
            }
            EditorAction::Cancel => {
                println!("Cancelled.");
                return Ok(());
            }
        }
    }
}

/// Tag loop: `+name` (or bare name) adds, `-name` removes, empty input
/// moves on.
fn edit_tags(draft: &mut NoteDraft) -> Result<()> {
    loop {
        if !draft.tags.is_empty() {
            println!("tags: {}", draft.tags.join(", "));
        }
        let Some(input) = text_input("tag (+add -remove, enter to continue): ", None)? else {
            return Ok(());
        };
        let input = input.trim();
        if input.is_empty() {
            return Ok(());
        }
        if let Some(name) = input.strip_prefix('-') {
            draft.remove_tag(name.trim());
        } else {
            let name = input.strip_prefix('+').unwrap_or(input);
            if !draft.add_tag(name) {
                println!("Skipped.");
            }
        }
    }
}

fn prompt_action(selected: &Option<Note>) -> Result<EditorAction> {
    let verb = if selected.is_some() { "update" } else { "save" };
    let options = [verb, "translate", "cancel"];

    Ok(match select("action: ", &options)? {
        Some(0) => EditorAction::Save,
        Some(1) => EditorAction::Translate,
        _ => EditorAction::Cancel,
    })
}

/// Overwrite the draft's title/content with a translation. The stored
/// note stays as it is until the user saves.
fn translate_draft(
    store: &mut NoteStore,
    selected: &Option<Note>,
    draft: &mut NoteDraft,
) -> Result<()> {
    let Some(idx) = select("language: ", Language::all())? else {
        return Ok(());
    };
    let language = Language::all()[idx];

    println!("Translating...");
    let translated = match selected {
        Some(note) => store.translate(note.id, language),
        None => store.translate_draft(draft, language),
    };

    match translated {
        Some(result) => {
            draft.title = result.title;
            draft.content = result.content;
            println!();
            println!("{}", draft.title);
            println!("{}", draft.content);
            println!();
            println!("Preview only. Choose save to keep it.");
        }
        None => error(store.error().unwrap_or("translation failed")),
    }
    Ok(())
}

fn finish_save(store: &mut NoteStore, command: SaveCommand) -> Result<()> {
    println!("Saving...");
    match store.save(command) {
        SaveOutcome::Saved => {
            let title = store
                .selected_note()
                .map(|n| n.title.clone())
                .unwrap_or_default();
            println!("Saved: {}", title);
        }
        SaveOutcome::Skipped => println!("Nothing to save."),
        SaveOutcome::Failed => error(store.error().unwrap_or("save failed")),
    }
    Ok(())
}
