//! Shell render command.

use std::path::Path;

use anyhow::{Context, Result};
use hygoal_render::ShellRenderer;
use hygoal_site::SiteConfig;

/// Run the render command.
pub fn run(config_path: &Path, page_path: &str, output: Option<&Path>) -> Result<()> {
    let config = SiteConfig::load_or_default(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    let html = ShellRenderer::new()
        .render(&config, page_path)
        .with_context(|| format!("Failed to render {}", page_path))?;

    super::emit(&html, output)
}
