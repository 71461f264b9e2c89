pub mod config;
pub mod error;
pub mod logging;
pub mod seed;
pub mod workspace;

pub use config::{CatalogSection, Config, UiSection, expand_tilde, resolve_data_dir};
pub use error::{Error, Result};
pub use logging::{LogOptions, init_logging};
pub use seed::{DEFAULT_SEED, SeedSource, load_seed};
pub use workspace::Workspace;
