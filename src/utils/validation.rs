use crate::utils::error::{LintError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LintError::config(format!(
            "{}: value cannot be empty or whitespace-only",
            field_name
        )));
    }
    Ok(())
}

pub fn validate_non_empty_entries(field_name: &str, values: &[String]) -> Result<()> {
    for (index, value) in values.iter().enumerate() {
        validate_non_empty_string(&format!("{}[{}]", field_name, index), value)?;
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(LintError::config(format!("{}: path cannot be empty", field_name)));
    }

    if path.contains('\0') {
        return Err(LintError::config(format!(
            "{}: path contains null bytes",
            field_name
        )));
    }

    Ok(())
}
