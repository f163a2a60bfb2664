//! Application state store.
//!
//! Single source of truth for the UI. Every backend call routes through
//! here, and every result is reconciled into the in-memory collection
//! before the UI sees it. Mutations commit only after the backend
//! confirms them; a failed call leaves prior state untouched and sets
//! the single-slot error message instead.

use crate::api::NotesApi;
use crate::models::{GenerateNoteRequest, Language, Note, NoteDraft, TranslateResponse};

const LOAD_FAILED: &str = "Failed to load notes. Please check if the backend is running.";
const SAVE_FAILED: &str = "Failed to save note. Please try again.";
const DELETE_FAILED: &str = "Failed to delete note. Please try again.";
const GENERATE_FAILED: &str = "Failed to generate note. Please try again.";
const TRANSLATE_FAILED: &str = "Failed to translate note. Please try again.";

/// Explicit save intent. The caller decides create-vs-update from its own
/// selection; the store never guesses.
#[derive(Debug, Clone)]
pub enum SaveCommand {
    Create(NoteDraft),
    Update(i64, NoteDraft),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// Draft had neither title nor content; no backend call was made.
    Skipped,
    Failed,
}

/// How the filtered view was produced for the current query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Empty query: the filtered view is the full collection.
    Full,
    /// Server-side search results.
    Server,
    /// Server search failed; filtered locally over the held collection.
    LocalFallback,
}

pub struct NoteStore<'a> {
    api: &'a dyn NotesApi,
    notes: Vec<Note>,
    filtered: Vec<Note>,
    selected_id: Option<i64>,
    search_query: String,
    is_loading: bool,
    is_saving: bool,
    error: Option<String>,
}

impl<'a> NoteStore<'a> {
    pub fn new(api: &'a dyn NotesApi) -> Self {
        Self {
            api,
            notes: Vec::new(),
            filtered: Vec::new(),
            selected_id: None,
            search_query: String::new(),
            is_loading: false,
            is_saving: false,
            error: None,
        }
    }

    // --- accessors ---

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Current view: the full collection, or search results when a query
    /// is active. Never mutated directly; always recomputed.
    pub fn filtered(&self) -> &[Note] {
        &self.filtered
    }

    pub fn selected_id(&self) -> Option<i64> {
        self.selected_id
    }

    pub fn selected_note(&self) -> Option<&Note> {
        let id = self.selected_id?;
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn note(&self, id: i64) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // --- selection ---

    /// Select a note by id. Returns false (and clears nothing) if the id
    /// is not in the collection.
    pub fn select(&mut self, id: i64) -> bool {
        if self.notes.iter().any(|n| n.id == id) {
            self.selected_id = Some(id);
            true
        } else {
            false
        }
    }

    /// Clear the selection ("new note" mode).
    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    /// Clear the error slot. Touches nothing else.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    // --- operations ---

    /// Fetch the full collection. On failure the previous collection is
    /// kept and the error slot is set; there is no automatic retry.
    pub fn load(&mut self) -> bool {
        self.is_loading = true;
        self.error = None;

        let result = self.api.list_notes();
        self.is_loading = false;

        match result {
            Ok(notes) => {
                self.notes = notes;
                self.refresh_filtered();
                true
            }
            Err(_) => {
                self.error = Some(LOAD_FAILED.to_string());
                false
            }
        }
    }

    /// Update the active query and reconcile the filtered view.
    ///
    /// A trimmed-empty query resets the view to the full collection with
    /// no backend call. Otherwise the backend search is consulted; if it
    /// fails, the view silently falls back to a case-insensitive
    /// substring match over the held collection. Search never sets the
    /// error slot.
    pub fn set_search_query(&mut self, query: &str) -> SearchOutcome {
        self.search_query = query.to_string();
        let trimmed = self.search_query.trim();

        if trimmed.is_empty() {
            self.filtered = self.notes.clone();
            return SearchOutcome::Full;
        }

        match self.api.search_notes(trimmed) {
            Ok(results) => {
                self.filtered = results;
                SearchOutcome::Server
            }
            Err(_) => {
                self.refresh_filtered();
                SearchOutcome::LocalFallback
            }
        }
    }

    /// Persist a draft. Create prepends the new note and selects it;
    /// update replaces the matching note in place and keeps it selected.
    /// A draft with neither title nor content is skipped without a call.
    pub fn save(&mut self, command: SaveCommand) -> SaveOutcome {
        let draft = match &command {
            SaveCommand::Create(draft) | SaveCommand::Update(_, draft) => draft,
        };
        if draft.is_blank() {
            return SaveOutcome::Skipped;
        }

        self.error = None;
        self.is_saving = true;

        let result = match &command {
            SaveCommand::Create(draft) => self.api.create_note(&draft.create_request()),
            SaveCommand::Update(id, draft) => self.api.update_note(*id, &draft.update_request()),
        };
        self.is_saving = false;

        let saved = match result {
            Ok(note) => note,
            Err(_) => {
                self.error = Some(SAVE_FAILED.to_string());
                return SaveOutcome::Failed;
            }
        };

        match command {
            SaveCommand::Create(_) => {
                self.selected_id = Some(saved.id);
                self.notes.insert(0, saved);
            }
            SaveCommand::Update(id, _) => {
                for note in &mut self.notes {
                    if note.id == id {
                        *note = saved.clone();
                    }
                }
                self.selected_id = Some(id);
            }
        }
        self.refresh_filtered();
        SaveOutcome::Saved
    }

    /// Delete by id. On success the note leaves the collection and, if it
    /// was selected, the selection clears. On failure nothing changes.
    pub fn delete(&mut self, id: i64) -> bool {
        self.error = None;

        if self.api.delete_note(id).is_err() {
            self.error = Some(DELETE_FAILED.to_string());
            return false;
        }

        self.notes.retain(|n| n.id != id);
        if self.selected_id == Some(id) {
            self.selected_id = None;
        }
        self.refresh_filtered();
        true
    }

    /// Ask the backend to build a note from free text. The result is
    /// prepended and selected, like a create.
    pub fn generate(&mut self, input: &str, language: Option<Language>) -> bool {
        self.error = None;

        let req = GenerateNoteRequest {
            input: input.trim().to_string(),
            language: language.map(|lang| lang.code().to_string()),
        };

        match self.api.generate_note(&req) {
            Ok(note) => {
                self.selected_id = Some(note.id);
                self.notes.insert(0, note);
                self.refresh_filtered();
                true
            }
            Err(_) => {
                self.error = Some(GENERATE_FAILED.to_string());
                false
            }
        }
    }

    /// Translate a stored note. Returns the translated pair for the
    /// caller's draft; the stored note is not touched. Translation is a
    /// preview until the user explicitly saves.
    pub fn translate(&mut self, id: i64, language: Language) -> Option<TranslateResponse> {
        self.error = None;

        match self.api.translate_note(id, language.code()) {
            Ok(translated) => Some(translated),
            Err(_) => {
                self.error = Some(TRANSLATE_FAILED.to_string());
                None
            }
        }
    }

    /// Translate an unsaved draft (no server-side id yet).
    pub fn translate_draft(
        &mut self,
        draft: &NoteDraft,
        language: Language,
    ) -> Option<TranslateResponse> {
        self.error = None;

        let title = draft.title.trim();
        let req = crate::models::TranslateTextRequest {
            target_lang: language.code().to_string(),
            title: if title.is_empty() {
                None
            } else {
                Some(title.to_string())
            },
            content: draft.content.trim().to_string(),
        };

        match self.api.translate_text(&req) {
            Ok(translated) => Some(translated),
            Err(_) => {
                self.error = Some(TRANSLATE_FAILED.to_string());
                None
            }
        }
    }

    /// Probe backend reachability.
    pub fn health(&self) -> bool {
        self.api.health().is_ok()
    }

    /// Recompute the filtered view from (collection, query). Used after
    /// every mutation; the backend is consulted only when the query
    /// itself changes.
    fn refresh_filtered(&mut self) {
        let query = self.search_query.trim().to_string();
        if query.is_empty() {
            self.filtered = self.notes.clone();
        } else {
            self.filtered = self
                .notes
                .iter()
                .filter(|n| n.matches(&query))
                .cloned()
                .collect();
        }
    }
}
