use anyhow::Result;
use catalog_runtime::Workspace;

pub fn handle(workspace: &Workspace, force: bool) -> Result<()> {
    let path = workspace.config_path();

    if workspace.write_config(force)? {
        println!("Wrote {}", path.display());
    } else {
        println!("Config already exists at {}", path.display());
        println!("Use --force to overwrite it.");
    }

    Ok(())
}
