use std::process::{Command, Stdio};
use anyhow::{anyhow, bail, Result};
use log::info;
use crate::config::Config;
use crate::model::{Resolution, ResolutionError};

/// Link behind the 1-based `index` row. On an error result the help link
/// stands in for the rows.
pub fn link_for_row(
    result: &Result<Resolution, ResolutionError>,
    index: usize,
    interactive: bool,
) -> Result<String> {
    if !interactive {
        bail!("links are disabled for non-interactive invocations");
    }
    let target = match result {
        Ok(resolution) => index
            .checked_sub(1)
            .and_then(|i| resolution.items.get(i))
            .ok_or_else(|| anyhow!("there is no row {index}"))?
            .uri
            .clone(),
        Err(e) => e.help_url().map(str::to_string),
    };
    target.ok_or_else(|| anyhow!("row {index} has no link"))
}

/// Hands a deep link to the system opener, detached from our stdio.
pub fn open_uri(uri: &str, config: &Config) -> Result<()> {
    let cmd_parts = opener_command(&config.general.opener, uri);
    if cmd_parts.is_empty() {
        bail!("no opener configured");
    }

    info!("Opening {} with {}", uri, cmd_parts[0]);
    Command::new(&cmd_parts[0])
        .args(&cmd_parts[1..])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    Ok(())
}

/// Splits the opener on whitespace and appends the uri as one argument.
fn opener_command(opener: &str, uri: &str) -> Vec<String> {
    let mut cmd_parts: Vec<String> = opener.split_whitespace().map(str::to_string).collect();
    if !cmd_parts.is_empty() {
        cmd_parts.push(uri.to_string());
    }
    cmd_parts
}
