//! Template context built from a site configuration and a page path.

use hygoal_site::{NavItem, SiteConfig};

/// A link as rendered in the shell.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LinkEntry {
    /// Display text
    pub text: String,
    /// Target path or URL
    pub link: String,
    /// Whether this entry points at the current page
    pub active: bool,
}

/// A sidebar group as rendered in the shell.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct GroupEntry {
    /// Group heading
    pub text: String,
    /// Group links
    pub items: Vec<LinkEntry>,
}

/// A social link as rendered in the shell.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SocialEntry {
    /// Icon identifier
    pub icon: String,
    /// External URL
    pub link: String,
}

/// Context for rendering the layout template.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ShellContext {
    /// Site title
    pub site_title: String,
    /// Site description
    pub description: String,
    /// Path of the page being rendered
    pub page_path: String,
    /// Top navigation entries
    pub nav: Vec<LinkEntry>,
    /// Prefix of the selected sidebar, if any
    pub sidebar_key: Option<String>,
    /// Groups of the selected sidebar
    pub sidebar: Vec<GroupEntry>,
    /// Social links
    pub social: Vec<SocialEntry>,
}

impl ShellContext {
    /// Build the context for `page_path`.
    pub fn new(config: &SiteConfig, page_path: &str) -> Self {
        let active_nav = active_nav_index(config.nav(), page_path);

        let nav = config
            .nav()
            .iter()
            .enumerate()
            .map(|(i, item)| LinkEntry {
                text: item.text.clone(),
                link: item.link.clone(),
                active: active_nav == Some(i),
            })
            .collect();

        let (sidebar_key, sidebar) = match config.sidebar_for(page_path) {
            Some((key, groups)) => (
                Some(key.to_string()),
                groups
                    .iter()
                    .map(|group| GroupEntry {
                        text: group.text.clone(),
                        items: group
                            .items
                            .iter()
                            .map(|item| LinkEntry {
                                text: item.text.clone(),
                                link: item.link.clone(),
                                active: is_current(&item.link, page_path),
                            })
                            .collect(),
                    })
                    .collect(),
            ),
            None => (None, Vec::new()),
        };

        let social = config
            .social_links()
            .iter()
            .map(|s| SocialEntry {
                icon: s.icon.to_string(),
                link: s.link.clone(),
            })
            .collect();

        Self {
            site_title: config.title().to_string(),
            description: config.description().to_string(),
            page_path: page_path.to_string(),
            nav,
            sidebar_key,
            sidebar,
            social,
        }
    }
}

/// Index of the nav entry for `path`: the longest link that is the path itself
/// or a directory prefix of it. `/` only matches the home page.
fn active_nav_index(nav: &[NavItem], path: &str) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;

    for (i, item) in nav.iter().enumerate() {
        let link = item.link.as_str();
        let is_section = link != "/" && link.ends_with('/') && path.starts_with(link);
        if !is_current(link, path) && !is_section {
            continue;
        }
        if best.map_or(true, |(_, len)| link.len() > len) {
            best = Some((i, link.len()));
        }
    }

    best.map(|(i, _)| i)
}

/// Whether `link` points at the page at `path`, with or without its trailing slash.
fn is_current(link: &str, path: &str) -> bool {
    link == path || link.strip_suffix('/') == Some(path)
}
