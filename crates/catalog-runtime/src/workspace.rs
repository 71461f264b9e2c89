use crate::config::Config;
use crate::seed::{SeedSource, load_seed};
use crate::Result;
use catalog_engine::Catalog;
use std::path::{Path, PathBuf};

/// Data directory plus the configuration loaded from it
#[derive(Debug, Clone)]
pub struct Workspace {
    data_dir: PathBuf,
    config: Config,
}

impl Workspace {
    /// Load `config.toml` from `data_dir`; a missing file means defaults
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        let config = Config::load_from(&Config::path_in(&data_dir))?;
        Ok(Self { data_dir, config })
    }

    pub fn with_config(data_dir: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            data_dir: data_dir.into(),
            config,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_path(&self) -> PathBuf {
        Config::path_in(&self.data_dir)
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("catalog.log")
    }

    /// Write the current configuration unless a file exists and `force` is
    /// off. Returns whether the file was written.
    pub fn write_config(&self, force: bool) -> Result<bool> {
        let path = self.config_path();
        if path.exists() && !force {
            return Ok(false);
        }
        self.config.save_to(&path)?;
        Ok(true)
    }

    /// Pick the seed: an explicit override, then `catalog.seed_path`
    /// (relative paths resolve against the data directory), then the
    /// embedded list.
    pub fn seed_source(&self, seed_override: Option<PathBuf>) -> SeedSource {
        let path = seed_override.or_else(|| {
            self.config.catalog.seed_path.as_ref().map(|p| {
                if p.is_relative() {
                    self.data_dir.join(p)
                } else {
                    p.clone()
                }
            })
        });
        SeedSource::from_path(path)
    }

    pub fn open_catalog(&self, seed_override: Option<PathBuf>) -> Result<Catalog> {
        let seed = load_seed(&self.seed_source(seed_override))?;
        Ok(Catalog::new(seed, self.config.catalog_options()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_without_config_uses_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let workspace = Workspace::open(temp_dir.path())?;

        assert_eq!(workspace.config(), &Config::default());
        assert_eq!(workspace.seed_source(None), SeedSource::Embedded);
        Ok(())
    }

    #[test]
    fn test_relative_seed_path_resolves_against_data_dir() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let mut config = Config::default();
        config.catalog.seed_path = Some(PathBuf::from("seed.json"));
        let workspace = Workspace::with_config(temp_dir.path(), config);

        assert_eq!(
            workspace.seed_source(None),
            SeedSource::File(temp_dir.path().join("seed.json"))
        );
        assert_eq!(
            workspace.seed_source(Some(PathBuf::from("/other.json"))),
            SeedSource::File(PathBuf::from("/other.json"))
        );
        Ok(())
    }

    #[test]
    fn test_write_config_respects_force() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let workspace = Workspace::open(temp_dir.path())?;

        assert!(workspace.write_config(false)?);
        assert!(!workspace.write_config(false)?);
        assert!(workspace.write_config(true)?);
        Ok(())
    }

    #[test]
    fn test_open_catalog_from_embedded_seed() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let catalog = Workspace::open(temp_dir.path())?.open_catalog(None)?;

        assert_eq!(catalog.store().len(), 13);
        assert_eq!(catalog.total_pages(), 3);
        Ok(())
    }
}
