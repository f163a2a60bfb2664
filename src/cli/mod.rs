use clap::{Args, Parser, Subcommand};

pub mod display;
pub mod editor;
pub mod generate;
pub mod list;
pub mod menu;
pub mod search;
pub mod ui;

pub use editor::{run_add, run_edit};
pub use generate::run_generate;
pub use list::{run_browse_mode, run_delete, run_list, run_show, run_translate};
pub use menu::{run_health, run_menu};
pub use search::run_search;

#[derive(Parser)]
#[command(name = "notecmd")]
#[command(about = "Notes client for the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List notes
    List(ListArgs),
    /// Browse notes one by one with full content
    Browse,
    /// Show a single note
    Show(ShowArgs),
    /// Create a new note
    Add(AddArgs),
    /// Edit an existing note
    Edit(EditArgs),
    /// Delete a note
    Delete(DeleteArgs),
    /// Search notes by title or content
    Search(SearchArgs),
    /// Translate a note (preview only; saving is explicit)
    Translate(TranslateArgs),
    /// Generate a note from a free-text description
    Generate(GenerateArgs),
    /// Check whether the backend is reachable
    Health,
}

#[derive(Args)]
pub struct ListArgs {
    /// Plain table output, no interaction (default for pipes)
    #[arg(short, long)]
    pub all: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Note id
    pub id: i64,
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(short, long)]
    pub title: Option<String>,
    #[arg(short, long)]
    pub content: Option<String>,
    /// Tag to attach (repeatable)
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,
}

#[derive(Args)]
pub struct EditArgs {
    /// Note id
    pub id: i64,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Note id
    pub id: i64,
    /// Skip confirmation
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Search query
    pub query: String,
}

#[derive(Args)]
pub struct TranslateArgs {
    /// Note id
    pub id: i64,
    /// Target language code (en, zh, es, fr, de, ja, ko, pt, ru, ar)
    pub lang: String,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Free-text description of the note to generate
    pub input: Option<String>,
    /// Output language code
    #[arg(short, long)]
    pub language: Option<String>,
}
