pub mod lookup;
pub mod parser;
pub mod sorter;

pub use crate::domain::model::{Course, ResolvedPrerequisite};
pub use crate::utils::error::Result;

pub use lookup::{find_by_identifier, resolve_prerequisites};
pub use parser::{load_catalog, parse_catalog};
pub use sorter::sort_by_identifier;
