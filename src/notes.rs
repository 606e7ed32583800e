//! Release-notes page rendering
//!
//! Pure template fill: context data in, HTML string out. Writing the result
//! to disk is left to the pipeline.

use chrono::Local;
use minijinja::Environment;
use serde::Serialize;

use crate::config::Config;
use crate::domain::{Identifier, Version};
use crate::error::Result;

/// Built-in release-notes template, used unless a custom one is supplied
pub const DEFAULT_TEMPLATE: &str = include_str!("templates/release_notes.html.jinja");

/// Link to a platform build artifact
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactLink {
    pub url: String,
}

/// Context data passed to the release-notes template
#[derive(Debug, Serialize)]
pub struct NotesContext {
    pub app_name: String,
    /// Canonical tag with 'v' prefix, e.g. "v1.2.3-beta.0"
    pub git_tag: String,
    pub git_message: Option<String>,
    pub git_commit: Option<String>,
    pub release_date: String,
    pub is_prerelease: bool,
    pub ios: Option<ArtifactLink>,
    pub android: Option<ArtifactLink>,
    pub icon_url: Option<String>,
}

impl NotesContext {
    /// Build the template context for a release
    pub fn new(config: &Config, version: &Version) -> Self {
        NotesContext {
            app_name: config.app_name.trim().to_string(),
            git_tag: format!("v{}", version),
            git_message: config.commit_message.clone(),
            git_commit: config.commit_hash.clone(),
            release_date: Local::now().format("%b %-d %Y, %-I:%M:%S %p").to_string(),
            is_prerelease: version.is_prerelease(),
            ios: config
                .ios_artifact_url
                .clone()
                .map(|url| ArtifactLink { url }),
            android: config
                .android_artifact_url
                .clone()
                .map(|url| ArtifactLink { url }),
            icon_url: config.icon_url.clone(),
        }
    }
}

/// Render the release-notes page from a template source
pub fn render(template_source: &str, ctx: &NotesContext) -> Result<String> {
    let mut env = Environment::new();
    env.add_template("release-notes", template_source)?;

    let template = env.get_template("release-notes")?;
    let rendered = template.render(ctx)?;

    Ok(rendered)
}

/// Filename for the rendered page:
/// `<appName>_v<maj>-<min>-<patch>[_<prerelease joined with '-'>].html`,
/// with internal whitespace in the app name collapsed to single underscores.
pub fn output_filename(app_name: &str, version: &Version) -> String {
    let name: String = app_name.split_whitespace().collect::<Vec<_>>().join("_");

    let prerelease_decoration = if version.is_prerelease() {
        let joined: Vec<String> = version
            .prerelease
            .iter()
            .map(Identifier::to_string)
            .collect();
        format!("_{}", joined.join("-"))
    } else {
        String::new()
    };

    format!(
        "{}_v{}-{}-{}{}.html",
        name, version.major, version.minor, version.patch, prerelease_decoration
    )
}
