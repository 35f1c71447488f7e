//! Sidebar lookup command.

use std::path::Path;

use anyhow::{Context, Result};
use hygoal_site::{SidebarGroup, SiteConfig};

/// Run the sidebar command.
pub fn run(config_path: &Path, page_path: &str) -> Result<()> {
    let config = SiteConfig::load_or_default(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    match config.sidebar_for(page_path) {
        Some((key, groups)) => super::emit(&format_sidebar(key, groups), None),
        None => {
            tracing::warn!("No sidebar matches {}", page_path);
            Ok(())
        }
    }
}

/// Plain-text listing of a resolved sidebar.
fn format_sidebar(key: &str, groups: &[SidebarGroup]) -> String {
    let mut out = format!("{}\n", key);

    for group in groups {
        out.push_str(&format!("  {}\n", group.text));

        let width = group
            .items
            .iter()
            .map(|item| item.text.chars().count())
            .max()
            .unwrap_or(0);
        for item in &group.items {
            out.push_str(&format!(
                "    {:width$}  {}\n",
                item.text,
                item.link,
                width = width
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_protocol_sidebar() {
        let config = SiteConfig::hygoal();
        let (key, groups) = config.sidebar_for("/protocol/handshake").unwrap();

        assert_eq!(
            format_sidebar(key, groups),
            "/protocol/\n  Protocol\n    Introduction  /protocol/\n    Handshake     /protocol/handshake\n"
        );
    }
}
