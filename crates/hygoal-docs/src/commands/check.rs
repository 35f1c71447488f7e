//! Config and link check command.

use std::path::Path;

use anyhow::{bail, Context, Result};
use hygoal_site::{ContentIndex, SiteConfig};

/// Run the check command.
pub fn run(config_path: &Path, docs_dir: Option<&Path>) -> Result<()> {
    let config = SiteConfig::load(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    tracing::info!(
        "{} is valid: {} nav entries, {} sidebars, {} social links",
        config_path.display(),
        config.nav().len(),
        config.sidebar().len(),
        config.social_links().len()
    );

    let Some(docs_dir) = docs_dir else {
        return Ok(());
    };

    let missing = missing_links(&config, docs_dir)?;
    if !missing.is_empty() {
        bail!(
            "{} link(s) have no content page in {}: {}",
            missing.len(),
            docs_dir.display(),
            missing.join(", ")
        );
    }

    tracing::info!("All {} links resolve", config.links().len());
    Ok(())
}

fn missing_links(config: &SiteConfig, docs_dir: &Path) -> Result<Vec<String>> {
    let index = ContentIndex::scan(docs_dir)
        .with_context(|| format!("Failed to scan {}", docs_dir.display()))?;
    Ok(index.missing_links(config))
}
