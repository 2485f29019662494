use crate::model::{DisplayItem, LinkKind, ResolutionError};
use crate::vault::{vault_path, VaultFs};
use log::debug;
use std::path::Path;

/// Shows a whole note as a single row. The body is the label, untouched.
pub fn read_file(
    vault: &dyn VaultFs,
    root: &Path,
    path: &str,
) -> Result<DisplayItem, ResolutionError> {
    let file = vault_path(root, path);
    debug!("Reading {:?}", file);
    let content = vault
        .read_string(&file)
        .map_err(|e| ResolutionError::unreadable(path, e))?
        .ok_or_else(|| ResolutionError::SourceDataMissing {
            message: format!("The file \"{path}\" was not found in this vault. Please update the parameter for this widget."),
            help_url: None,
        })?;

    Ok(DisplayItem::new(content, path.to_string(), LinkKind::Open))
}
