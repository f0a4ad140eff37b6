use clap::Parser;
use colored::*;
use snipdeck::config::SnipdeckConfig;
use snipdeck::controller::{Controller, Outcome};
use snipdeck::error::Result;
use snipdeck::paths::CatalogPaths;
use snipdeck::store::fs::FileStore;

mod cli;
use cli::args::{Cli, Commands};
use cli::terminal::TerminalShell;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let mut clog = colog::default_builder();
    clog.filter(None, level);
    clog.init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = CatalogPaths::discover()?;
    let config = SnipdeckConfig::load_or_default(&paths.config_dir);
    let catalog_path = paths.catalog_path(&config, cli.file.as_deref());
    log::debug!("Using catalog {}", catalog_path.display());

    let command = cli.command.unwrap_or(Commands::Show);
    if let Commands::Path = command {
        println!("{}", catalog_path.display());
        return Ok(());
    }

    // Mutating commands draw once, after the change, not at startup too.
    let draw_at_startup = matches!(command, Commands::Show);
    let mut controller = Controller::new(
        FileStore::new(catalog_path),
        TerminalShell::new(draw_at_startup),
    );
    controller.startup();
    if matches!(command, Commands::Add { .. } | Commands::Remove { .. }) {
        controller.shell_mut().set_draw(true);
    }

    let outcome = match command {
        Commands::Add { category } => Some(controller.handle_add(category.into())),
        Commands::Remove { category, label } => {
            Some(controller.handle_remove(category.into(), label.as_deref()))
        }
        Commands::Copy { label } => Some(controller.handle_copy(&label)),
        Commands::Show | Commands::Path => None,
    };

    if let Some(Outcome::Copied(label)) = outcome {
        println!("{}", format!("Copied '{}' to the clipboard.", label).dimmed());
    }
    Ok(())
}
