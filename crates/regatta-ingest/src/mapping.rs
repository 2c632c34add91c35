//! Field-mapping configuration loading.

use std::path::Path;

use regatta_model::FieldMapping;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Parse a field mapping from TOML text.
///
/// # Errors
///
/// Returns the TOML error; the caller attaches the path.
pub fn parse_field_mapping(text: &str) -> std::result::Result<FieldMapping, toml::de::Error> {
    toml::from_str(text)
}

/// Load and validate the field-mapping file.
///
/// # Errors
///
/// Returns an error when the file cannot be read or parsed, or when the
/// mapping is inconsistent (duplicate names, unmapped required columns).
pub fn load_field_mapping(path: &Path) -> Result<FieldMapping> {
    let text = std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let mapping = parse_field_mapping(&text).map_err(|source| IngestError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    mapping
        .validate()
        .map_err(|source| IngestError::InvalidMapping {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(
        path = %path.display(),
        teams_columns = mapping.teams.columns.len(),
        team_members_columns = mapping.team_members.columns.len(),
        community = mapping.community_members.is_some(),
        "loaded field mapping"
    );
    Ok(mapping)
}
