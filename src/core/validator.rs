use crate::config::cli::FileSource;
use crate::domain::catalog::Catalog;
use crate::domain::model::{Definition, Model};
use crate::domain::ports::DocumentSource;
use crate::utils::error::{LintError, Result, SchemaViolation};
use serde::Deserialize;
use std::path::Path;

/// Decodes the first document of a YAML stream, rejecting any key outside the schema.
///
/// Later documents in the stream are ignored. A null document decodes to the
/// zero value; a stream with no document at all is `EmptyDocument`.
pub fn decode_definition(bytes: &[u8]) -> Result<Definition> {
    let document = serde_yaml::Deserializer::from_slice(bytes)
        .next()
        .ok_or(LintError::EmptyDocument)?;
    let definition = Option::<Definition>::deserialize(document)?;
    Ok(definition.unwrap_or_default())
}

pub struct Validator<S: DocumentSource = FileSource> {
    source: S,
    catalog: Catalog,
}

impl Validator<FileSource> {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_source(FileSource, catalog)
    }
}

impl Default for Validator<FileSource> {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

impl<S: DocumentSource> Validator<S> {
    pub fn with_source(source: S, catalog: Catalog) -> Self {
        Self { source, catalog }
    }

    pub fn validate_file(&self, path: &Path) -> Result<Definition> {
        let bytes = self.source.read_document(path)?;
        tracing::debug!("read {} bytes from {}", bytes.len(), path.display());
        self.validate_bytes(&bytes)
    }

    pub fn validate_bytes(&self, bytes: &[u8]) -> Result<Definition> {
        let definition = decode_definition(bytes)?;
        tracing::debug!(
            "decoded {:?}: {} models, {} port entries",
            definition.name,
            definition.models.len(),
            definition.port_count()
        );
        self.validate_definition(&definition)?;
        Ok(definition)
    }

    /// Stops at the first model with a violation.
    pub fn validate_definition(&self, definition: &Definition) -> Result<()> {
        for model in &definition.models {
            self.validate_model(model)
                .map_err(|violation| LintError::SchemaError {
                    model: model.name.clone(),
                    violation,
                })?;
        }
        Ok(())
    }

    pub fn validate_model(&self, model: &Model) -> std::result::Result<(), SchemaViolation> {
        if let Some(port) = model
            .ports
            .iter()
            .find(|port| !self.catalog.port_types.contains(&port.port_type))
        {
            return Err(SchemaViolation::UnknownPortType(port.port_type.clone()));
        }

        // An empty chip means the field was not filled in.
        if self.catalog.check_switch_chips
            && !model.switch_chip.is_empty()
            && !self.catalog.switch_chips.contains(&model.switch_chip)
        {
            return Err(SchemaViolation::UnknownSwitchChip(model.switch_chip.clone()));
        }

        Ok(())
    }
}
