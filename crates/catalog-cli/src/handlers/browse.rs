use crate::presentation::renderers::TuiRenderer;
use anyhow::Result;
use catalog_runtime::Workspace;
use catalog_types::{Route, Theme, ViewMode};
use std::path::PathBuf;
use std::time::Instant;

pub struct BrowseOptions {
    pub seed: Option<PathBuf>,
    pub start: Route,
    pub view: Option<ViewMode>,
    pub search: Option<String>,
    pub theme: Theme,
}

pub fn handle(workspace: &Workspace, options: BrowseOptions) -> Result<()> {
    let mut catalog = workspace.open_catalog(options.seed)?;

    if let Some(view) = options.view {
        catalog.set_view_mode(view);
    }
    if let Some(search) = options.search {
        catalog.set_search_input(search, Instant::now());
        catalog.apply_search_now();
    }

    tracing::info!(route = ?options.start, theme = %options.theme, "starting tui");

    let renderer = TuiRenderer::new(
        catalog,
        options.start,
        options.theme,
        workspace.config().catalog.currency.clone(),
    );
    renderer.run()
}
