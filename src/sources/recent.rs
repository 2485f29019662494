use crate::model::{ResolutionError, SourceRecord};
use crate::sources::{read_json, Source};
use crate::vault::VaultFs;
use log::{debug, info};
use serde::Deserialize;
use std::path::Path;

pub const RECENT_FILES_DATA: &str = ".obsidian/plugins/recent-files-obsidian/data.json";
pub const RECENT_FILES_HELP_URL: &str = "https://github.com/tgrosinger/recent-files-obsidian";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecentFilesData {
    recent_files: Option<Vec<RecentFile>>,
}

#[derive(Deserialize)]
struct RecentFile {
    basename: String,
    path: String,
}

pub struct RecentSource;

impl Source for RecentSource {
    fn read(
        &self,
        vault: &dyn VaultFs,
        root: &Path,
        _path: Option<&str>,
    ) -> Result<Vec<SourceRecord>, ResolutionError> {
        let data: Option<RecentFilesData> = read_json(vault, &root.join(RECENT_FILES_DATA))?;
        let Some(files) = data.and_then(|d| d.recent_files) else {
            return Err(ResolutionError::SourceDataMissing {
                message: format!(
                    "No recent files information found. Perhaps the Recent Files plugin is not installed in Obsidian. More info on this plugin can be found at: {RECENT_FILES_HELP_URL}"
                ),
                help_url: Some(RECENT_FILES_HELP_URL.to_string()),
            });
        };

        let records: Vec<SourceRecord> = files
            .into_iter()
            .filter(|f| {
                if f.path.is_empty() {
                    debug!("Skipping recent file {:?} without a path", f.basename);
                }
                !f.path.is_empty()
            })
            .map(|f| SourceRecord::Recent {
                basename: f.basename,
                path: f.path,
            })
            .collect();

        info!("RecentSource: found {} entries", records.len());
        Ok(records)
    }
}
