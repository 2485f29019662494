use crate::model::{DisplayItem, LinkKind};

/// Deep link for an item, or `None` when links are disabled for this
/// invocation. The vault name is encoded separately for each link.
pub fn build_link(
    scheme: &str,
    bookmark: &str,
    item: &DisplayItem,
    interactive: bool,
) -> Option<String> {
    if !interactive {
        return None;
    }

    let vault = urlencoding::encode(bookmark);
    let target = urlencoding::encode(&item.target_path);
    let link = match item.link_kind {
        LinkKind::Open => format!("{scheme}://open?vault={vault}&file={target}"),
        LinkKind::Search => format!("{scheme}://search?vault={vault}&query={target}"),
    };
    Some(link)
}
