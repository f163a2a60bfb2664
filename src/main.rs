use clap::Parser;
use notecmd::cli::{
    run_add, run_browse_mode, run_delete, run_edit, run_generate, run_health, run_list, run_menu,
    run_search, run_show, run_translate, Cli, Commands,
};
use notecmd::{ApiClient, Config, NoteStore};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load();
    let api = ApiClient::new(&config.base_url)?;
    let mut store = NoteStore::new(&api);

    match cli.command {
        None => {
            // No subcommand provided - show interactive menu
            run_menu(&mut store, &config.base_url)?;
        }
        Some(Commands::List(args)) => {
            run_list(&mut store, args.all)?;
        }
        Some(Commands::Browse) => {
            run_browse_mode(&mut store)?;
        }
        Some(Commands::Show(args)) => {
            run_show(&mut store, args.id)?;
        }
        Some(Commands::Add(args)) => {
            run_add(&mut store, args.title, args.content, args.tags)?;
        }
        Some(Commands::Edit(args)) => {
            run_edit(&mut store, args.id)?;
        }
        Some(Commands::Delete(args)) => {
            run_delete(&mut store, args.id, args.yes)?;
        }
        Some(Commands::Search(args)) => {
            run_search(&mut store, &args.query)?;
        }
        Some(Commands::Translate(args)) => {
            run_translate(&mut store, args.id, &args.lang)?;
        }
        Some(Commands::Generate(args)) => {
            run_generate(&mut store, args.input, args.language)?;
        }
        Some(Commands::Health) => {
            run_health(&store, &config.base_url);
        }
    }

    Ok(())
}
