pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "validator")]
#[command(about = "Checks switch model catalog YAML files against the catalog schema")]
pub struct CliConfig {
    /// Catalog documents to check, in order
    pub files: Vec<PathBuf>,

    /// TOML file with extra allow-list entries
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Also require every model's switch chip to be a known one
    #[arg(long)]
    pub check_switch_chips: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit log events as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        for file in &self.files {
            validate_path("files", &file.to_string_lossy())?;
        }
        if let Some(config) = &self.config {
            validate_path("config", &config.to_string_lossy())?;
        }
        Ok(())
    }
}
