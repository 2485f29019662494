use std::fmt;

pub const PARAM_DELIMITER: &str = "||";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Recent,
    Starred,
    Folder,
    File,
}

impl Mode {
    /// Case-insensitive lookup. Anything unrecognized falls back to `Recent`.
    pub fn from_param(raw: &str) -> Self {
        match raw.to_uppercase().as_str() {
            "STARRED" => Mode::Starred,
            "FOLDER" => Mode::Folder,
            "FILE" => Mode::File,
            _ => Mode::Recent,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Recent => "RECENT",
            Mode::Starred => "STARRED",
            Mode::Folder => "FOLDER",
            Mode::File => "FILE",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub bookmark: String,
    pub mode: Mode,
    pub path: Option<String>,
}

impl Query {
    /// Splits `bookmark[||mode[||path]]`. Never fails; the bookmark is
    /// validated later, during resolution.
    pub fn parse(raw: &str) -> Self {
        let mut segments = raw.split(PARAM_DELIMITER);
        let bookmark = segments.next().unwrap_or_default().to_string();
        let mode = segments.next().map(Mode::from_param).unwrap_or_default();
        let path = segments.next().map(str::to_string);

        Self {
            bookmark,
            mode,
            path,
        }
    }

    /// Header text shown above the rows.
    pub fn title(&self) -> String {
        match self.mode {
            Mode::Recent => "Recent".to_string(),
            Mode::Starred => "Starred".to_string(),
            Mode::Folder | Mode::File => self
                .path
                .as_deref()
                .map(|p| p.replacen(".md", "", 1))
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_bookmark_defaults_to_recent() {
        let q = Query::parse("Vault A");
        assert_eq!(q.bookmark, "Vault A");
        assert_eq!(q.mode, Mode::Recent);
        assert_eq!(q.path, None);
    }

    #[test]
    fn folder_mode_with_path() {
        let q = Query::parse("Vault A||folder||/Projects");
        assert_eq!(
            q,
            Query {
                bookmark: "Vault A".to_string(),
                mode: Mode::Folder,
                path: Some("/Projects".to_string()),
            }
        );
    }

    #[test]
    fn mode_is_case_insensitive() {
        assert_eq!(Query::parse("v||StArReD").mode, Mode::Starred);
        assert_eq!(Query::parse("v||FILE||a.md").mode, Mode::File);
    }

    #[test]
    fn unknown_mode_falls_back_to_recent() {
        let q = Query::parse("v||bogus||/somewhere");
        assert_eq!(q.mode, Mode::Recent);
        assert_eq!(q.path.as_deref(), Some("/somewhere"));
    }

    #[test]
    fn path_is_kept_verbatim() {
        let q = Query::parse("v||file|| notes/My File.md ");
        assert_eq!(q.path.as_deref(), Some(" notes/My File.md "));
    }

    #[test]
    fn empty_input_is_still_a_query() {
        let q = Query::parse("");
        assert_eq!(q.bookmark, "");
        assert_eq!(q.mode, Mode::Recent);
        assert_eq!(q.path, None);
    }

    #[test]
    fn title_strips_first_md_extension() {
        assert_eq!(Query::parse("v||file||/daily/2022-02-01.md").title(), "/daily/2022-02-01");
        assert_eq!(Query::parse("v||folder").title(), "");
        assert_eq!(Query::parse("v").title(), "Recent");
        assert_eq!(Query::parse("v||starred").title(), "Starred");
    }
}
