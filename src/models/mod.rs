pub mod draft;
pub mod language;
pub mod note;

pub use draft::NoteDraft;
pub use language::Language;
pub use note::{
    CreateNoteRequest, GenerateNoteRequest, Note, TranslateRequest, TranslateResponse,
    TranslateTextRequest, UpdateNoteRequest,
};
