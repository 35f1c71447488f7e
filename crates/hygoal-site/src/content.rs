//! Content directory index and dead-link detection.
//!
//! Maps markdown pages to the routes the renderer serves them at:
//! `index.md` becomes its directory route with a trailing slash, any other page
//! becomes its path without the extension.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::config::{link_path, SiteConfig};

/// Errors that can occur while scanning content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Docs directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Failed to walk {path}: {message}")]
    Walk { path: String, message: String },
}

/// Routes of every page in a content directory.
#[derive(Debug, Clone, Default)]
pub struct ContentIndex {
    routes: BTreeSet<String>,
}

impl ContentIndex {
    /// Scan a docs directory for `.md` and `.mdx` pages.
    pub fn scan(docs_dir: &Path) -> Result<Self, ContentError> {
        if !docs_dir.exists() {
            return Err(ContentError::DirectoryNotFound(
                docs_dir.display().to_string(),
            ));
        }

        let mut routes = BTreeSet::new();

        for entry in WalkDir::new(docs_dir).follow_links(true) {
            let entry = entry.map_err(|e| ContentError::Walk {
                path: docs_dir.display().to_string(),
                message: e.to_string(),
            })?;
            let path = entry.path();

            if !entry.file_type().is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if ext != "md" && ext != "mdx" {
                continue;
            }

            let relative = path.strip_prefix(docs_dir).unwrap_or(path);
            if let Some(route) = route_for(relative) {
                tracing::debug!("Found page {} -> {}", relative.display(), route);
                routes.insert(route);
            }
        }

        tracing::debug!("Indexed {} pages in {}", routes.len(), docs_dir.display());

        Ok(Self { routes })
    }

    /// Build an index from known routes.
    pub fn from_routes<I, S>(routes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            routes: routes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, route: &str) -> bool {
        self.routes.contains(route)
    }

    /// Routes in sorted order.
    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Site-relative page paths in `config` that no page serves.
    pub fn missing_links(&self, config: &SiteConfig) -> Vec<String> {
        let missing: Vec<String> = config
            .links()
            .into_iter()
            .filter(|link| !self.contains(link))
            .map(str::to_string)
            .collect();

        for link in &missing {
            tracing::warn!("No content page for link {}", link);
        }

        missing
    }
}

/// Route served for a page at `relative` inside the docs directory.
fn route_for(relative: &Path) -> Option<String> {
    let stem = relative.file_stem()?.to_str()?;

    let mut segments: Vec<&str> = Vec::new();
    if let Some(parent) = relative.parent() {
        for component in parent.components() {
            match component {
                Component::Normal(part) => segments.push(part.to_str()?),
                _ => return None,
            }
        }
    }

    let mut route = String::from("/");
    for segment in &segments {
        route.push_str(segment);
        route.push('/');
    }
    if stem != "index" {
        route.push_str(stem);
    }

    Some(route)
}

/// Markdown file, relative to the docs directory, that serves `link`.
///
/// `/` maps to `index.md`, `/x/` to `x/index.md` and `/x/y` to `x/y.md`.
/// Any `#fragment` or `?query` is ignored.
pub fn page_file_for(link: &str) -> PathBuf {
    let trimmed = link_path(link).trim_start_matches('/');
    let is_dir = trimmed.is_empty() || trimmed.ends_with('/');
    let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

    let mut path = PathBuf::new();
    match segments.split_last() {
        Some((last, parents)) if !is_dir => {
            for segment in parents {
                path.push(segment);
            }
            path.push(format!("{}.md", last));
        }
        _ => {
            for segment in &segments {
                path.push(segment);
            }
            path.push("index.md");
        }
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NavItem;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn write(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "# Page\n").unwrap();
    }

    #[test]
    fn maps_pages_to_routes() {
        let temp = tempdir().unwrap();
        write(temp.path(), "index.md");
        write(temp.path(), "hygoal/index.md");
        write(temp.path(), "protocol/index.mdx");
        write(temp.path(), "protocol/handshake.md");
        write(temp.path(), "protocol/notes.txt");

        let index = ContentIndex::scan(temp.path()).unwrap();

        assert_eq!(
            index.routes().collect::<Vec<_>>(),
            vec!["/", "/hygoal/", "/protocol/", "/protocol/handshake"]
        );
    }

    #[test]
    fn builtin_links_resolve_against_full_tree() {
        let index =
            ContentIndex::from_routes(["/", "/hygoal/", "/protocol/", "/protocol/handshake"]);

        assert!(index.missing_links(&SiteConfig::hygoal()).is_empty());
    }

    #[test]
    fn reports_missing_links() {
        let temp = tempdir().unwrap();
        write(temp.path(), "index.md");
        write(temp.path(), "protocol/index.md");

        let index = ContentIndex::scan(temp.path()).unwrap();

        assert_eq!(
            index.missing_links(&SiteConfig::hygoal()),
            vec!["/hygoal/".to_string(), "/protocol/handshake".to_string()]
        );
    }

    #[test]
    fn ignores_fragment_when_mapping_links() {
        let temp = tempdir().unwrap();
        write(temp.path(), "protocol/handshake.md");
        let config = SiteConfig::builder("Site", "")
            .nav(NavItem::new("Packet", "/protocol/handshake#packet"))
            .build()
            .unwrap();

        let index = ContentIndex::scan(temp.path()).unwrap();

        assert!(index.missing_links(&config).is_empty());
        assert_eq!(
            page_file_for("/protocol/handshake#packet"),
            PathBuf::from("protocol").join("handshake.md")
        );
    }

    #[test]
    fn keeps_dots_in_page_names() {
        assert_eq!(
            page_file_for("/protocol/v1.2"),
            PathBuf::from("protocol").join("v1.2.md")
        );
    }

    #[test]
    fn errors_on_missing_directory() {
        let temp = tempdir().unwrap();

        let result = ContentIndex::scan(&temp.path().join("docs"));

        assert!(matches!(result, Err(ContentError::DirectoryNotFound(_))));
    }

    #[test]
    fn page_file_is_inverse_of_route() {
        for link in ["/", "/hygoal/", "/protocol/", "/protocol/handshake"] {
            let file = page_file_for(link);
            assert_eq!(route_for(&file).as_deref(), Some(link), "{}", link);
        }

        assert_eq!(page_file_for("/"), PathBuf::from("index.md"));
        assert_eq!(
            route_for(&page_file_for("/protocol/v1.2")).as_deref(),
            Some("/protocol/v1.2")
        );
        assert_eq!(
            page_file_for("/protocol/handshake"),
            PathBuf::from("protocol").join("handshake.md")
        );
    }
}
