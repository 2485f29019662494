use crate::links::build_link;
use crate::model::{DisplayItem, Resolution, ResolutionError, Row};
use crate::query::{Mode, Query};
use crate::select::normalize_and_select;
use crate::sources::{
    file::read_file, folder::FolderSource, recent::RecentSource, starred::StarredSource, Source,
};
use crate::vault::VaultFs;
use log::{info, warn};

/// Per-invocation settings supplied by the presentation layer.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    pub cap: usize,
    pub interactive: bool,
    pub uri_scheme: String,
}

pub struct Resolver<'a> {
    vault: &'a dyn VaultFs,
    options: ResolveOptions,
}

impl<'a> Resolver<'a> {
    pub fn new(vault: &'a dyn VaultFs, options: ResolveOptions) -> Self {
        Self { vault, options }
    }

    pub fn resolve(&self, query: &Query) -> Result<Resolution, ResolutionError> {
        let items = self.resolve_items(query).inspect_err(|e| {
            warn!("Resolution of {} for {:?} failed: {}", query.mode, query.bookmark, e);
        })?;

        let rows: Vec<Row> = items
            .into_iter()
            .map(|item| Row {
                uri: build_link(
                    &self.options.uri_scheme,
                    &query.bookmark,
                    &item,
                    self.options.interactive,
                ),
                label: item.label,
            })
            .collect();

        info!("Resolved {} rows for {} in {:?}", rows.len(), query.mode, query.bookmark);
        Ok(Resolution {
            title: query.title(),
            items: rows,
        })
    }

    fn resolve_items(&self, query: &Query) -> Result<Vec<DisplayItem>, ResolutionError> {
        let root = self
            .vault
            .bookmarked_path(&query.bookmark)
            .ok_or_else(|| ResolutionError::BookmarkMissing {
                bookmark: query.bookmark.clone(),
            })?;

        let path = query.path.as_deref();
        let source: &dyn Source = match query.mode {
            Mode::Recent => &RecentSource,
            Mode::Starred => &StarredSource,
            Mode::Folder => &FolderSource,
            Mode::File => {
                let Some(path) = path else {
                    return Ok(vec![]);
                };
                let item = read_file(self.vault, &root, path)?;
                return Ok(vec![item].into_iter().take(self.options.cap).collect());
            }
        };

        let records = source.read(self.vault, &root, path)?;
        Ok(normalize_and_select(records, self.options.cap, query.mode, path))
    }
}
