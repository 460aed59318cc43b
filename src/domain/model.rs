use serde::{Deserialize, Serialize};

/// A single course record as loaded from the catalog file.
///
/// `identifier` is the case-sensitive key; `prerequisites` holds raw
/// identifier references that may or may not resolve against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub identifier: String,
    pub title: String,
    pub prerequisites: Vec<String>,
}

/// One prerequisite reference paired with its resolution outcome.
/// `title` is `None` for a dangling reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPrerequisite {
    pub identifier: String,
    pub title: Option<String>,
}
