pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::FileSource, toml_config::LintConfig};
pub use crate::core::{
    runner::{LintRunner, RunSummary},
    validator::{decode_definition, Validator},
};
pub use domain::catalog::{AllowList, Catalog};
pub use domain::model::{Definition, Model, Port};
pub use utils::error::{LintError, Result, SchemaViolation};
