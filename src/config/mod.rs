use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "course-planner")]
#[command(about = "An interactive course catalog planner")]
pub struct CliConfig {
    /// Catalog file to load before the menu starts
    #[arg(long)]
    pub data_file: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.data_file {
            validate_non_empty_string("data_file", path)?;
            validate_path("data_file", path)?;
        }
        Ok(())
    }
}
