pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::session::Session;
pub use config::CliConfig;
pub use core::{find_by_identifier, load_catalog, resolve_prerequisites, sort_by_identifier};
pub use domain::model::{Course, ResolvedPrerequisite};
pub use utils::error::{CatalogError, Result};
