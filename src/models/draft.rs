use super::note::{CreateNoteRequest, Note, UpdateNoteRequest};

/// Title used when a note is saved with a blank title.
pub const UNTITLED: &str = "Untitled";

/// Editable buffer backing one editor session.
///
/// Seeded from the selected note (or empty for a new note) and thrown away
/// on save, cancel, or selection change. Nothing here touches the server
/// until the user explicitly saves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

impl NoteDraft {
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
            tags: note.tags.clone(),
        }
    }

    /// A draft with neither title nor content is not worth saving.
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }

    /// Trimmed title, defaulting to "Untitled" when blank.
    pub fn effective_title(&self) -> String {
        let trimmed = self.title.trim();
        if trimmed.is_empty() {
            UNTITLED.to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// Add a tag, ignoring empty input and duplicates.
    /// Returns true if the tag was added.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    pub fn create_request(&self) -> CreateNoteRequest {
        CreateNoteRequest {
            title: self.effective_title(),
            content: self.content.trim().to_string(),
            tags: Some(self.tags.clone()),
        }
    }

    pub fn update_request(&self) -> UpdateNoteRequest {
        UpdateNoteRequest {
            title: Some(self.effective_title()),
            content: Some(self.content.trim().to_string()),
            tags: Some(self.tags.clone()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_draft() {
        let draft = NoteDraft::default();
        assert!(draft.is_blank());

        let draft = NoteDraft {
            title: "   ".to_string(),
            content: "\t".to_string(),
            tags: vec![],
        };
        assert!(draft.is_blank());
    }

    #[test]
    fn test_content_only_draft_is_not_blank() {
        let draft = NoteDraft {
            content: "buy milk".to_string(),
            ..Default::default()
        };
        assert!(!draft.is_blank());
        assert_eq!(draft.effective_title(), UNTITLED);
    }

    #[test]
    fn test_effective_title_trims() {
        let draft = NoteDraft {
            title: "  Plans  ".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.effective_title(), "Plans");
    }

    #[test]
    fn test_add_tag_dedupes_and_preserves_order() {
        let mut draft = NoteDraft::default();
        assert!(draft.add_tag("work"));
        assert!(draft.add_tag("urgent"));
        assert!(!draft.add_tag("work"));
        assert!(!draft.add_tag("  "));
        assert_eq!(draft.tags, vec!["work", "urgent"]);
    }

    #[test]
    fn test_remove_tag() {
        let mut draft = NoteDraft::default();
        draft.add_tag("a");
        draft.add_tag("b");
        draft.remove_tag("a");
        assert_eq!(draft.tags, vec!["b"]);
    }

    #[test]
    fn test_create_request_defaults_title() {
        let draft = NoteDraft {
            content: "buy milk".to_string(),
            ..Default::default()
        };
        let req = draft.create_request();
        assert_eq!(req.title, UNTITLED);
        assert_eq!(req.content, "buy milk");
    }
}
