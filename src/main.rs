use clap::Parser;
use expatcmd::cli::{
    run_dashboard, run_edit_command, run_export, run_list, run_menu, run_remove_command, Cli,
    Commands,
};
use expatcmd::config::Config;
use expatcmd::{logging, Store};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load().with_overrides(cli.empty, cli.width);
    logging::init(&config.log_filter)?;

    let mut store = if config.seed_examples {
        Store::with_examples()
    } else {
        Store::new()
    };
    tracing::debug!(expats = store.len(), ?config, "store ready");

    match cli.command {
        None => {
            // No subcommand provided - run the interactive session
            run_menu(store, config)?;
        }
        Some(Commands::Dashboard(args)) => {
            run_dashboard(&store, &args.filter.to_filter(), &config, args.json)?;
        }
        Some(Commands::List(args)) => {
            run_list(&store, &args.filter.to_filter())?;
        }
        Some(Commands::Export(args)) => {
            run_export(&store, &args.filter.to_filter(), args.format)?;
        }
        Some(Commands::Edit(args)) => {
            run_edit_command(&mut store, &args.id, &args.field, &args.value)?;
        }
        Some(Commands::Remove(args)) => {
            run_remove_command(&mut store, &args.id, args.force)?;
        }
    }

    Ok(())
}
