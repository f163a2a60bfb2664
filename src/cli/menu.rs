//! Main menu for notecmd
//!
//! Uses inquire for clean, reliable terminal interaction.

use anyhow::{anyhow, Result};
use inquire::{Select, Text};
use std::io::{self, IsTerminal};

use crate::cli::ui::{clear_screen, minimal_render_config, select};
use crate::cli::{run_add, run_browse_mode, run_delete, run_generate, run_list, run_search, run_translate};
use crate::models::Language;
use crate::store::NoteStore;

/// Menu options with type-safe variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Browse,
    List,
    New,
    Search,
    Generate,
    Translate,
    Delete,
    Health,
    Quit,
}

impl MenuOption {
    const ALL: &'static [MenuOption] = &[
        MenuOption::Browse,
        MenuOption::List,
        MenuOption::New,
        MenuOption::Search,
        MenuOption::Generate,
        MenuOption::Translate,
        MenuOption::Delete,
        MenuOption::Health,
        MenuOption::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuOption::Browse => "Browse",
            MenuOption::List => "List",
            MenuOption::New => "New Note",
            MenuOption::Search => "Search",
            MenuOption::Generate => "Generate",
            MenuOption::Translate => "Translate",
            MenuOption::Delete => "Delete",
            MenuOption::Health => "Health",
            MenuOption::Quit => "Quit",
        }
    }

    fn from_label(s: &str) -> Option<MenuOption> {
        MenuOption::ALL.iter().find(|opt| opt.label() == s).copied()
    }
}

/// Run the interactive main menu
pub fn run_menu(store: &mut NoteStore, base_url: &str) -> Result<()> {
    // TTY check: interactive menu requires a terminal
    if !io::stdin().is_terminal() {
        return Err(anyhow!(
            "Interactive menu requires a terminal. Use subcommands for non-interactive use:\n  \
            notecmd list\n  \
            notecmd search <query>\n  \
            notecmd show <id>\n  \
            Run 'notecmd --help' for all options."
        ));
    }

    let menu_labels: Vec<&str> = MenuOption::ALL.iter().map(|opt| opt.label()).collect();

    loop {
        // Clear screen - if this fails, continue anyway (degraded but functional)
        let _ = clear_screen();

        let selection = Select::new("notecmd", menu_labels.clone())
            .with_render_config(minimal_render_config())
            .with_page_size(menu_labels.len())
            .with_vim_mode(true)
            .prompt_skippable();

        // Handle prompt errors (Ctrl+C, terminal issues) - exit gracefully
        let selection = match selection {
            Ok(sel) => sel,
            Err(_) => return Ok(()),
        };

        let Some(choice_label) = selection else {
            // User pressed Escape
            return Ok(());
        };

        let Some(choice) = MenuOption::from_label(choice_label) else {
            continue;
        };

        if choice == MenuOption::Quit {
            return Ok(());
        }

        let _ = clear_screen();

        if let Err(e) = execute_command(store, base_url, choice) {
            eprintln!("\nError: {}", e);
        }
        wait_for_continue();
    }
}

fn execute_command(store: &mut NoteStore, base_url: &str, choice: MenuOption) -> Result<()> {
    match choice {
        MenuOption::Browse => run_browse_mode(store),
        MenuOption::List => run_list(store, false),
        MenuOption::New => run_add(store, None, None, Vec::new()),
        MenuOption::Search => {
            let query = prompt_for_input("search: ")?;
            if query.trim().is_empty() {
                // Empty search shows all notes (becomes list)
                run_list(store, false)
            } else {
                run_search(store, &query)
            }
        }
        MenuOption::Generate => run_generate(store, None, None),
        MenuOption::Translate => {
            let Some(id) = prompt_for_id()? else {
                return Ok(());
            };
            let Some(idx) = select("language: ", Language::all())? else {
                return Ok(());
            };
            run_translate(store, id, Language::all()[idx].code())
        }
        MenuOption::Delete => {
            let Some(id) = prompt_for_id()? else {
                return Ok(());
            };
            run_delete(store, id, false)
        }
        MenuOption::Health => {
            run_health(store, base_url);
            Ok(())
        }
        MenuOption::Quit => Ok(()),
    }
}

/// Probe the backend and report.
pub fn run_health(store: &NoteStore, base_url: &str) {
    if store.health() {
        println!("Backend reachable at {}.", base_url);
    } else {
        println!("Backend unreachable at {}.", base_url);
    }
}

/// Prompt for text input, returning empty string on cancel
fn prompt_for_input(label: &str) -> Result<String> {
    let result = Text::new(label)
        .with_render_config(minimal_render_config())
        .prompt_skippable()?;
    Ok(result.unwrap_or_default())
}

/// Prompt for a note id; None when cancelled or not a number.
fn prompt_for_id() -> Result<Option<i64>> {
    let raw = prompt_for_input("note id: ")?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<i64>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            println!("Not a note id: {}", raw);
            Ok(None)
        }
    }
}

/// Wait for user to press enter to continue
fn wait_for_continue() {
    println!();
    let _ = Text::new("[enter]")
        .with_render_config(minimal_render_config())
        .prompt_skippable();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_option_roundtrip() {
        for opt in MenuOption::ALL {
            let label = opt.label();
            let recovered = MenuOption::from_label(label);
            assert_eq!(recovered, Some(*opt), "Failed roundtrip for {:?}", opt);
        }
    }

    #[test]
    fn test_menu_option_from_invalid_label() {
        assert_eq!(MenuOption::from_label("Invalid"), None);
        assert_eq!(MenuOption::from_label(""), None);
    }

    #[test]
    fn test_menu_option_all_has_correct_count() {
        assert_eq!(MenuOption::ALL.len(), 9);
    }
}
