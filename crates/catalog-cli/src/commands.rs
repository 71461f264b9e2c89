use super::args::{Cli, Commands};
use super::handlers;
use super::handlers::browse::BrowseOptions;
use super::handlers::list::ListOptions;
use anyhow::Result;
use catalog_runtime::{LogOptions, Workspace, init_logging, resolve_data_dir};
use catalog_types::Route;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let workspace = Workspace::open(&data_dir)?;

    let log_options = LogOptions::new(cli.log_level.to_string(), workspace.log_path());
    if let Err(e) = init_logging(&log_options) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let theme = cli
        .theme
        .map(Into::into)
        .unwrap_or(workspace.config().ui.theme);

    let Some(command) = cli.command else {
        return handlers::browse::handle(
            &workspace,
            BrowseOptions {
                seed: cli.seed,
                start: Route::Landing,
                view: None,
                search: None,
                theme,
            },
        );
    };

    match command {
        Commands::Browse { view, search } => handlers::browse::handle(
            &workspace,
            BrowseOptions {
                seed: cli.seed,
                start: Route::Products,
                view: view.map(Into::into),
                search,
                theme,
            },
        ),

        Commands::List {
            search,
            page,
            view,
            format,
        } => handlers::list::handle(
            &workspace,
            ListOptions {
                seed: cli.seed,
                search,
                page,
                view: view.map(Into::into),
                format,
            },
        ),

        Commands::Init { force } => handlers::init::handle(&workspace, force),
    }
}
