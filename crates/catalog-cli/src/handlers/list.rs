use crate::presentation::presenters;
use crate::presentation::renderers::ConsoleRenderer;
use crate::types::OutputFormat;
use anyhow::Result;
use catalog_runtime::Workspace;
use catalog_types::ViewMode;
use std::path::PathBuf;
use std::time::Instant;

pub struct ListOptions {
    pub seed: Option<PathBuf>,
    pub search: Option<String>,
    pub page: usize,
    pub view: Option<ViewMode>,
    pub format: OutputFormat,
}

pub fn handle(workspace: &Workspace, options: ListOptions) -> Result<()> {
    let mut catalog = workspace.open_catalog(options.seed)?;

    if let Some(view) = options.view {
        catalog.set_view_mode(view);
    }
    if let Some(search) = options.search {
        // one-shot: nothing to wait for, apply immediately
        catalog.set_search_input(search, Instant::now());
        catalog.apply_search_now();
    }
    catalog.go_to_page(options.page);

    let page = presenters::present_page(&catalog, &workspace.config().catalog.currency);
    let renderer = ConsoleRenderer::new(options.format == OutputFormat::Json);
    renderer.render_page(&page)
}
