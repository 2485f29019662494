use crate::model::{ResolutionError, SourceRecord};
use crate::sources::{read_json, Source};
use crate::vault::VaultFs;
use log::{debug, info};
use serde::Deserialize;
use std::path::Path;

pub const STARRED_DATA: &str = ".obsidian/starred.json";

#[derive(Deserialize)]
struct StarredData {
    items: Option<Vec<StarredItem>>,
}

#[derive(Deserialize)]
struct StarredItem {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    title: String,
    path: Option<String>,
    query: Option<String>,
}

pub struct StarredSource;

impl Source for StarredSource {
    fn read(
        &self,
        vault: &dyn VaultFs,
        root: &Path,
        _path: Option<&str>,
    ) -> Result<Vec<SourceRecord>, ResolutionError> {
        let data: Option<StarredData> = read_json(vault, &root.join(STARRED_DATA))?;
        let Some(items) = data.and_then(|d| d.items) else {
            return Err(ResolutionError::SourceDataMissing {
                message: "No starred files found. Perhaps the Starred core plugin is not enabled or you have not starred any files in this vault yet".to_string(),
                help_url: None,
            });
        };

        let mut records = Vec::with_capacity(items.len());
        for item in items {
            let target = item
                .path
                .filter(|p| !p.is_empty())
                .or(item.query)
                .filter(|t| !t.is_empty());
            let Some(target) = target else {
                debug!("Skipping starred item {:?} without a path or query", item.title);
                continue;
            };
            records.push(SourceRecord::Starred {
                title: item.title,
                target,
                is_search: item.kind == "search",
            });
        }

        info!("StarredSource: found {} entries", records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::fake::FakeVault;

    const DATA: &str = "/v/.obsidian/starred.json";

    #[test]
    fn reads_files_and_searches() {
        let vault = FakeVault::with_bookmark("v", "/v").file(
            DATA,
            r#"{"items":[
                {"type":"file","title":"Inbox","path":"Inbox.md"},
                {"type":"search","title":"Open tasks","query":"task-todo:"}
            ]}"#,
        );
        let records = StarredSource.read(&vault, Path::new("/v"), None).unwrap();
        assert_eq!(
            records,
            vec![
                SourceRecord::Starred {
                    title: "Inbox".to_string(),
                    target: "Inbox.md".to_string(),
                    is_search: false
                },
                SourceRecord::Starred {
                    title: "Open tasks".to_string(),
                    target: "task-todo:".to_string(),
                    is_search: true
                },
            ]
        );
    }

    #[test]
    fn skips_items_without_a_target() {
        let vault = FakeVault::with_bookmark("v", "/v").file(
            DATA,
            r#"{"items":[{"type":"file","title":"Broken"},{"type":"folder","title":"Ok","path":"Ok"}]}"#,
        );
        let records = StarredSource.read(&vault, Path::new("/v"), None).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn missing_document_has_no_help_link() {
        let vault = FakeVault::with_bookmark("v", "/v");
        let err = StarredSource.read(&vault, Path::new("/v"), None).unwrap_err();
        assert!(matches!(err, ResolutionError::SourceDataMissing { .. }));
        assert!(!err.message().is_empty());
        assert_eq!(err.help_url(), None);
    }
}
