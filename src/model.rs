use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Open,
    Search,
}

/// Raw record as a source reader hands it over, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRecord {
    Recent { basename: String, path: String },
    Starred { title: String, target: String, is_search: bool },
    FolderEntry { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub label: String,
    pub target_path: String,
    pub link_kind: LinkKind,
}

impl DisplayItem {
    pub fn new(label: String, target_path: String, link_kind: LinkKind) -> Self {
        Self {
            label,
            target_path,
            link_kind,
        }
    }
}

/// A row ready for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub label: String,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub title: String,
    pub items: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error(
        "The bookmark \"{bookmark}\" does not point to a vault. Add it under [bookmarks] in the config file with the root folder of your vault."
    )]
    BookmarkMissing { bookmark: String },

    #[error("{message}")]
    SourceDataMissing {
        message: String,
        help_url: Option<String>,
    },

    #[error("The folder path \"{path}\" is not valid. Please update the parameter for this widget.")]
    InvalidPath { path: String },

    #[error("Could not read {path}: {reason}")]
    Unreadable { path: String, reason: String },
}

impl ResolutionError {
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn help_url(&self) -> Option<&str> {
        match self {
            ResolutionError::SourceDataMissing { help_url, .. } => help_url.as_deref(),
            _ => None,
        }
    }

    pub fn unreadable(path: impl Into<String>, reason: impl ToString) -> Self {
        ResolutionError::Unreadable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_url_only_for_missing_source_data() {
        let err = ResolutionError::SourceDataMissing {
            message: "no data".to_string(),
            help_url: Some("https://example.org".to_string()),
        };
        assert_eq!(err.help_url(), Some("https://example.org"));
        assert_eq!(err.message(), "no data");

        let err = ResolutionError::InvalidPath { path: "/x".to_string() };
        assert_eq!(err.help_url(), None);
        assert!(err.message().contains("/x"));
    }
}
