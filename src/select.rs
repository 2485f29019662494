use crate::model::{DisplayItem, LinkKind, SourceRecord};
use crate::query::Mode;

/// Turns raw records into display items, keeping at most `cap` of them.
/// Folder listings are sorted by name before the cap is applied; every
/// other source keeps its native order.
pub fn normalize_and_select(
    mut records: Vec<SourceRecord>,
    cap: usize,
    mode: Mode,
    folder: Option<&str>,
) -> Vec<DisplayItem> {
    if mode == Mode::Folder {
        records.sort_by(|a, b| record_name(a).cmp(record_name(b)));
    }

    records
        .into_iter()
        .take(cap)
        .map(|record| normalize(record, folder))
        .collect()
}

fn record_name(record: &SourceRecord) -> &str {
    match record {
        SourceRecord::Recent { basename, .. } => basename,
        SourceRecord::Starred { title, .. } => title,
        SourceRecord::FolderEntry { name } => name,
    }
}

fn normalize(record: SourceRecord, folder: Option<&str>) -> DisplayItem {
    match record {
        SourceRecord::Recent { basename, path } => DisplayItem::new(basename, path, LinkKind::Open),
        SourceRecord::Starred {
            title,
            target,
            is_search,
        } => {
            let kind = if is_search { LinkKind::Search } else { LinkKind::Open };
            DisplayItem::new(title, target, kind)
        }
        SourceRecord::FolderEntry { name } => {
            let target = folder_target(folder.unwrap_or_default(), &name);
            DisplayItem::new(name, target, LinkKind::Open)
        }
    }
}

/// Vault-relative path of a file listed in `folder`.
fn folder_target(folder: &str, name: &str) -> String {
    let folder = folder.trim_matches('/');
    if folder.is_empty() {
        name.to_string()
    } else {
        format!("{folder}/{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recent(n: usize) -> Vec<SourceRecord> {
        (0..n)
            .map(|i| SourceRecord::Recent {
                basename: format!("note-{i}"),
                path: format!("notes/note-{i}.md"),
            })
            .collect()
    }

    #[test]
    fn caps_recent_files_in_source_order() {
        let items = normalize_and_select(recent(20), 5, Mode::Recent, None);
        assert_eq!(items.len(), 5);
        for (i, item) in items.iter().enumerate() {
            assert_eq!(item.label, format!("note-{i}"));
            assert_eq!(item.target_path, format!("notes/note-{i}.md"));
            assert_eq!(item.link_kind, LinkKind::Open);
        }
    }

    #[test]
    fn count_is_min_of_records_and_cap() {
        for n in [0, 1, 4, 12] {
            for cap in [0, 1, 5, 12, 30] {
                let items = normalize_and_select(recent(n), cap, Mode::Recent, None);
                assert_eq!(items.len(), n.min(cap), "n={n} cap={cap}");
            }
        }
    }

    #[test]
    fn folder_entries_are_sorted_before_capping() {
        let records = ["c.md", "a.md", "d.md", "b.md"]
            .into_iter()
            .map(|name| SourceRecord::FolderEntry { name: name.to_string() })
            .collect();
        let items = normalize_and_select(records, 3, Mode::Folder, Some("/Projects"));
        let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["a.md", "b.md", "c.md"]);
        assert_eq!(items[0].target_path, "Projects/a.md");
    }

    #[test]
    fn folder_at_vault_root_targets_bare_names() {
        let records = vec![SourceRecord::FolderEntry { name: "Home.md".to_string() }];
        let items = normalize_and_select(records, 5, Mode::Folder, Some("/"));
        assert_eq!(items[0].target_path, "Home.md");
    }

    #[test]
    fn only_search_tagged_starred_items_link_to_search() {
        let records = vec![
            SourceRecord::Starred {
                title: "Tasks".to_string(),
                target: "tag:#task".to_string(),
                is_search: true,
            },
            SourceRecord::Starred {
                title: "Inbox".to_string(),
                target: "Inbox.md".to_string(),
                is_search: false,
            },
        ];
        let items = normalize_and_select(records, 12, Mode::Starred, None);
        assert_eq!(items[0].link_kind, LinkKind::Search);
        assert_eq!(items[1].link_kind, LinkKind::Open);
        assert_eq!(items[0].label, "Tasks");
    }

    #[test]
    fn non_folder_modes_are_not_resorted() {
        let records = vec![
            SourceRecord::Recent { basename: "z".to_string(), path: "z.md".to_string() },
            SourceRecord::Recent { basename: "a".to_string(), path: "a.md".to_string() },
        ];
        let items = normalize_and_select(records, 12, Mode::Recent, None);
        assert_eq!(items[0].label, "z");
    }
}
