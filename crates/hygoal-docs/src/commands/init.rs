//! Initialize the site config and content pages.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use hygoal_site::{page_file_for, SiteConfig};

/// Run the init command.
pub fn run(config_path: &Path, docs_dir: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing site config...");

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    let config = SiteConfig::hygoal();
    let toml = config.to_toml_string()?;
    fs::write(config_path, format!("{}{}", CONFIG_HEADER, toml))
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    let created = scaffold_pages(&config, docs_dir, yes)?;

    tracing::info!("Initialization complete! Created {} pages.", created);
    tracing::info!("Run 'hygoal-docs check --docs {}' to verify links.", docs_dir.display());

    Ok(())
}

/// Create a placeholder page for every site-relative link without one.
///
/// Existing pages are kept unless `overwrite` is set. Returns the number of pages written.
pub fn scaffold_pages(config: &SiteConfig, docs_dir: &Path, overwrite: bool) -> Result<usize> {
    let mut created = 0;

    for page in config.pages() {
        let path = docs_dir.join(page_file_for(&page.link));
        if path.exists() && !overwrite {
            tracing::debug!("Keeping existing {}", path.display());
            continue;
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, placeholder_page(&page.text))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Created {}", path.display());
        created += 1;
    }

    Ok(created)
}

fn placeholder_page(title: &str) -> String {
    format!("---\ntitle: {}\n---\n\n# {}\n", title, title)
}

const CONFIG_HEADER: &str = "# Hygoal documentation site configuration\n\
# Navigation, sidebars and social links consumed by the docs renderer.\n\n";

#[cfg(test)]
mod tests {
    use super::*;
    use hygoal_site::ContentIndex;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn writes_loadable_config() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("site.toml");

        run(&config_path, &temp.path().join("docs"), false).unwrap();

        assert_eq!(SiteConfig::load(&config_path).unwrap(), SiteConfig::hygoal());
    }

    #[test]
    fn scaffolds_a_page_per_link() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("docs");

        let created = scaffold_pages(&SiteConfig::hygoal(), &docs, false).unwrap();

        assert_eq!(created, 4);
        let index = ContentIndex::scan(&docs).unwrap();
        assert!(index.missing_links(&SiteConfig::hygoal()).is_empty());
        assert_eq!(
            fs::read_to_string(docs.join("protocol").join("handshake.md")).unwrap(),
            "---\ntitle: Handshake\n---\n\n# Handshake\n"
        );
    }

    #[test]
    fn keeps_existing_files_without_yes() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("site.toml");
        let docs = temp.path().join("docs");
        fs::write(&config_path, "title = \"Mine\"\n").unwrap();
        fs::create_dir_all(&docs).unwrap();
        fs::write(docs.join("index.md"), "# Mine\n").unwrap();

        run(&config_path, &docs, false).unwrap();
        let created = scaffold_pages(&SiteConfig::hygoal(), &docs, false).unwrap();

        assert_eq!(fs::read_to_string(&config_path).unwrap(), "title = \"Mine\"\n");
        assert_eq!(fs::read_to_string(docs.join("index.md")).unwrap(), "# Mine\n");
        assert_eq!(created, 3);
    }
}
