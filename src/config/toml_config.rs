use crate::domain::catalog::Catalog;
use crate::utils::error::{LintError, Result};
use crate::utils::validation::{validate_non_empty_entries, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

/// Optional lint settings, loaded from a TOML file.
///
/// ```toml
/// check_switch_chips = true
///
/// [port_types]
/// extra = ["OSFP", "${SITE_PORT_TYPE}"]
///
/// [switch_chips]
/// extra = ["Tomahawk"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LintConfig {
    #[serde(default)]
    pub check_switch_chips: bool,
    #[serde(default)]
    pub port_types: ExtraEntries,
    #[serde(default)]
    pub switch_chips: ExtraEntries,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtraEntries {
    #[serde(default)]
    pub extra: Vec<String>,
}

impl LintConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LintError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content)
            .map_err(|e| LintError::config(format!("TOML parsing error: {}", e)))
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left untouched.
    fn substitute_env_vars(content: &str) -> String {
        static ENV_REF: OnceLock<Regex> = OnceLock::new();
        let re = ENV_REF.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env pattern"));

        re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    /// Builds the allow-lists: built-ins plus whatever this config adds.
    pub fn to_catalog(&self) -> Catalog {
        let mut catalog = Catalog::default();
        catalog.port_types.extend(self.port_types.extra.iter().cloned());
        catalog.switch_chips.extend(self.switch_chips.extra.iter().cloned());
        catalog.check_switch_chips = self.check_switch_chips;
        catalog
    }
}

impl Validate for LintConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_entries("port_types.extra", &self.port_types.extra)?;
        validate_non_empty_entries("switch_chips.extra", &self.switch_chips.extra)?;
        Ok(())
    }
}
