mod config;
mod executor;
mod links;
mod model;
mod query;
mod resolver;
mod select;
mod sources;
mod ui;
mod vault;

use std::path::PathBuf;
use anyhow::{anyhow, Result};
use clap::Parser;
use crate::config::{load_config, load_config_from, WidgetSize};
use crate::query::Query;
use crate::resolver::{ResolveOptions, Resolver};
use crate::ui::render::Renderer;
use crate::vault::LocalVault;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Widget parameter: bookmark[||mode[||path]]
    param: Option<String>,

    /// Display size class (small, medium, large, extra-large)
    #[arg(short, long)]
    size: Option<String>,

    /// Maximum number of rows, overriding the size class
    #[arg(short, long)]
    rows: Option<usize>,

    /// Render plain rows without deep links
    #[arg(long)]
    non_interactive: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Open the link of the given row (1-based)
    #[arg(short, long)]
    open: Option<usize>,

    /// Config file to use instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // 1. Load Config
    let config = match &args.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };

    let raw = args
        .param
        .clone()
        .or_else(|| config.general.default_param.clone())
        .ok_or_else(|| anyhow!("no widget parameter given and no default_param configured"))?;

    // 2. Pick the row budget for this display size
    let size = args
        .size
        .as_deref()
        .map(WidgetSize::from_name)
        .unwrap_or(config.general.size);
    let profile = config.profile(size);
    let cap = args.rows.unwrap_or(profile.rows);
    log::debug!("Size {:?}, showing at most {} rows", size, cap);

    // 3. Resolve
    let query = Query::parse(&raw);
    let vault = LocalVault::new(config.bookmarks.clone());
    let resolver = Resolver::new(
        &vault,
        ResolveOptions {
            cap,
            interactive: !args.non_interactive,
            uri_scheme: config.general.uri_scheme.clone(),
        },
    );
    let result = resolver.resolve(&query);

    // 4. Present
    let renderer = Renderer::new(config.general.title_prefix.clone(), profile);
    if args.json {
        println!("{}", renderer.draw_json(&result)?);
    } else {
        print!("{}", renderer.draw(&result, &query.title()));
    }

    // 5. Follow a row, like tapping it
    if let Some(index) = args.open {
        let uri = executor::link_for_row(&result, index, !args.non_interactive)?;
        executor::open_uri(&uri, &config)?;
    }

    Ok(())
}
