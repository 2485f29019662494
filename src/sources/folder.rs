use crate::model::{ResolutionError, SourceRecord};
use crate::sources::Source;
use crate::vault::{vault_path, VaultFs};
use log::{debug, info};
use std::path::Path;

pub struct FolderSource;

impl Source for FolderSource {
    fn read(
        &self,
        vault: &dyn VaultFs,
        root: &Path,
        path: Option<&str>,
    ) -> Result<Vec<SourceRecord>, ResolutionError> {
        let Some(path) = path else {
            debug!("FolderSource: no folder given, nothing to list");
            return Ok(vec![]);
        };

        let folder = vault_path(root, path);
        if !vault.is_directory(&folder) {
            return Err(ResolutionError::InvalidPath { path: path.to_string() });
        }

        debug!("Listing files in {:?}", folder);
        let names = vault
            .list_contents(&folder)
            .map_err(|e| ResolutionError::unreadable(folder.display().to_string(), e))?;

        let records: Vec<SourceRecord> = names
            .into_iter()
            .filter(|name| !vault.is_directory(&folder.join(name)))
            .map(|name| SourceRecord::FolderEntry { name })
            .collect();

        info!("FolderSource: found {} files", records.len());
        Ok(records)
    }
}
