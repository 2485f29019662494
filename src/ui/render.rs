use crate::config::SizeProfile;
use crate::model::{Resolution, ResolutionError};
use serde::Serialize;

pub struct Renderer {
    title_prefix: String,
    profile: SizeProfile,
}

#[derive(Serialize)]
struct Layout {
    title_font: u16,
    description_font: u16,
}

#[derive(Serialize)]
struct ItemsDoc<'a> {
    #[serde(flatten)]
    resolution: &'a Resolution,
    layout: Layout,
}

#[derive(Serialize)]
struct ErrorDoc<'a> {
    error: ErrorBody<'a>,
    layout: Layout,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: String,
    help_url: Option<&'a str>,
}

impl Renderer {
    pub fn new(title_prefix: impl Into<String>, profile: SizeProfile) -> Self {
        Self {
            title_prefix: title_prefix.into(),
            profile,
        }
    }

    pub fn header(&self, title: &str) -> String {
        format!("{}: {}", self.title_prefix, title)
    }

    pub fn draw(&self, result: &Result<Resolution, ResolutionError>, title: &str) -> String {
        let mut out = format!("{}\n\n", self.header(title));

        match result {
            Ok(resolution) => {
                for (i, row) in resolution.items.iter().enumerate() {
                    let mut lines = row.label.lines();
                    out.push_str(&format!("• {}\n", lines.next().unwrap_or_default()));
                    for line in lines {
                        out.push_str(&format!("  {line}\n"));
                    }
                    if let Some(uri) = &row.uri {
                        out.push_str(&format!("  [{}] {uri}\n", i + 1));
                    }
                }
            }
            Err(e) => {
                out.push_str(&format!("{}\n", e.message()));
                if let Some(url) = e.help_url() {
                    out.push_str(&format!("  {url}\n"));
                }
            }
        }
        out
    }

    pub fn draw_json(&self, result: &Result<Resolution, ResolutionError>) -> serde_json::Result<String> {
        let layout = Layout {
            title_font: self.profile.title_font,
            description_font: self.profile.description_font,
        };
        match result {
            Ok(resolution) => serde_json::to_string_pretty(&ItemsDoc { resolution, layout }),
            Err(e) => serde_json::to_string_pretty(&ErrorDoc {
                error: ErrorBody {
                    message: e.message(),
                    help_url: e.help_url(),
                },
                layout,
            }),
        }
    }
}
