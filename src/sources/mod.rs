use crate::model::{ResolutionError, SourceRecord};
use crate::vault::VaultFs;
use serde::de::DeserializeOwned;
use std::path::Path;

pub trait Source {
    /// Reads raw records in the source's native order.
    fn read(
        &self,
        vault: &dyn VaultFs,
        root: &Path,
        path: Option<&str>,
    ) -> Result<Vec<SourceRecord>, ResolutionError>;
}

/// Reads and decodes a JSON document. `Ok(None)` when it does not exist.
fn read_json<T: DeserializeOwned>(
    vault: &dyn VaultFs,
    file: &Path,
) -> Result<Option<T>, ResolutionError> {
    let shown = file.display().to_string();
    let Some(content) = vault
        .read_string(file)
        .map_err(|e| ResolutionError::unreadable(&shown, e))?
    else {
        return Ok(None);
    };
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| ResolutionError::unreadable(shown, e))
}

pub mod recent;
pub mod starred;
pub mod folder;
pub mod file;
