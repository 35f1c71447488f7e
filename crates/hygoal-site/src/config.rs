//! Site configuration model.
//!
//! The configuration is built once, validated, and then only handed out by shared
//! reference. Field names serialize in the camelCase shape the renderer expects.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ConfigError;
use crate::validate::validate;

/// Top-level site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    theme_config: ThemeConfig,
}

/// Theme options: top navigation, sidebars and social links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Top navigation entries, in display order
    #[serde(default)]
    pub nav: Vec<NavItem>,

    /// Sidebars keyed by URL path prefix
    #[serde(default)]
    pub sidebar: Sidebar,

    /// External links shown in the site header
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

/// A link with display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Display text
    pub text: String,
    /// Target path, site-relative unless it is an absolute URL
    pub link: String,
}

impl NavItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

/// A named group of sidebar links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Group heading
    pub text: String,
    /// Links in display order
    #[serde(default)]
    pub items: Vec<NavItem>,
}

impl SidebarGroup {
    pub fn new(text: impl Into<String>, items: impl IntoIterator<Item = NavItem>) -> Self {
        Self {
            text: text.into(),
            items: items.into_iter().collect(),
        }
    }
}

/// Icons the renderer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Github,
    Discord,
    X,
    Mastodon,
    Youtube,
    Slack,
    Linkedin,
    Npm,
}

impl SocialIcon {
    /// Identifier used by the renderer.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Discord => "discord",
            Self::X => "x",
            Self::Mastodon => "mastodon",
            Self::Youtube => "youtube",
            Self::Slack => "slack",
            Self::Linkedin => "linkedin",
            Self::Npm => "npm",
        }
    }
}

impl fmt::Display for SocialIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An icon-identified external link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: SocialIcon,
    pub link: String,
}

impl SocialLink {
    pub fn new(icon: SocialIcon, link: impl Into<String>) -> Self {
        Self {
            icon,
            link: link.into(),
        }
    }
}

/// Sidebars keyed by URL path prefix, in authored order.
///
/// Serializes as a map. Duplicate keys from formats that allow them (JSON) survive
/// deserialization so that validation can report them. TOML merges a repeated
/// `[[themeConfig.sidebar."/a/"]]` header into one key instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sidebar {
    entries: Vec<(String, Vec<SidebarGroup>)>,
}

impl Sidebar {
    /// Iterate over `(prefix, groups)` pairs in authored order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SidebarGroup])> {
        self.entries
            .iter()
            .map(|(key, groups)| (key.as_str(), groups.as_slice()))
    }

    /// Sidebar prefixes in authored order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Groups registered under exactly `prefix`.
    pub fn get(&self, prefix: &str) -> Option<&[SidebarGroup]> {
        self.entries
            .iter()
            .find(|(key, _)| key == prefix)
            .map(|(_, groups)| groups.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Select the sidebar for a page path.
    ///
    /// The longest matching prefix wins. A path equal to a prefix without its
    /// trailing slash also matches that prefix.
    pub fn resolve(&self, path: &str) -> Option<(&str, &[SidebarGroup])> {
        let mut best: Option<(&str, &[SidebarGroup])> = None;

        for (key, groups) in self.iter() {
            let matches = path.starts_with(key) || key.strip_suffix('/') == Some(path);
            if !matches {
                continue;
            }
            if best.map_or(true, |(current, _)| key.len() > current.len()) {
                best = Some((key, groups));
            }
        }

        best
    }
}

impl Serialize for Sidebar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(key, groups)| (key, groups)))
    }
}

impl<'de> Deserialize<'de> for Sidebar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SidebarVisitor;

        impl<'de> Visitor<'de> for SidebarVisitor {
            type Value = Sidebar;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of path prefixes to sidebar groups")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Sidebar, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, groups)) = map.next_entry::<String, Vec<SidebarGroup>>()? {
                    entries.push((key, groups));
                }
                Ok(Sidebar { entries })
            }
        }

        deserializer.deserialize_map(SidebarVisitor)
    }
}

impl SiteConfig {
    /// The configuration of the Hygoal documentation site.
    pub fn hygoal() -> Self {
        Self::builder("Hygoal", "Documentation for Hygoal and the Hytale protocol")
            .nav(NavItem::new("Home", "/"))
            .nav(NavItem::new("Hygoal Docs", "/hygoal/"))
            .nav(NavItem::new("Hytale Protocol", "/protocol/"))
            .sidebar(
                "/hygoal/",
                [SidebarGroup::new(
                    "Hygoal",
                    [NavItem::new("Introduction", "/hygoal/")],
                )],
            )
            .sidebar(
                "/protocol/",
                [SidebarGroup::new(
                    "Protocol",
                    [
                        NavItem::new("Introduction", "/protocol/"),
                        NavItem::new("Handshake", "/protocol/handshake"),
                    ],
                )],
            )
            .social_link(SocialLink::new(
                SocialIcon::Github,
                "https://github.com/Floffah/hygoal",
            ))
            .build_unvalidated()
    }

    /// Start building a configuration.
    pub fn builder(title: impl Into<String>, description: impl Into<String>) -> SiteConfigBuilder {
        SiteConfigBuilder {
            title: title.into(),
            description: description.into(),
            theme: ThemeConfig::default(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn theme(&self) -> &ThemeConfig {
        &self.theme_config
    }

    pub fn nav(&self) -> &[NavItem] {
        &self.theme_config.nav
    }

    pub fn sidebar(&self) -> &Sidebar {
        &self.theme_config.sidebar
    }

    pub fn social_links(&self) -> &[SocialLink] {
        &self.theme_config.social_links
    }

    /// Select the sidebar shown on `path`.
    pub fn sidebar_for(&self, path: &str) -> Option<(&str, &[SidebarGroup])> {
        let resolved = self.theme_config.sidebar.resolve(path);
        tracing::debug!(
            "Sidebar for {}: {}",
            path,
            resolved.map_or("<none>", |(key, _)| key)
        );
        resolved
    }

    /// Every site-relative entry in nav and sidebar order, first occurrence of each page.
    ///
    /// Links that differ only by `#fragment` or `?query` count as one page.
    pub fn pages(&self) -> Vec<&NavItem> {
        let sidebar_items = self
            .theme_config
            .sidebar
            .iter()
            .flat_map(|(_, groups)| groups.iter().flat_map(|g| g.items.iter()));

        let mut pages: Vec<&NavItem> = Vec::new();
        for item in self.theme_config.nav.iter().chain(sidebar_items) {
            if !item.link.starts_with('/') {
                continue;
            }
            if pages.iter().any(|p| link_path(&p.link) == link_path(&item.link)) {
                continue;
            }
            pages.push(item);
        }
        pages
    }

    /// Page paths of [`SiteConfig::pages`], without fragments or queries.
    pub fn links(&self) -> Vec<&str> {
        self.pages()
            .into_iter()
            .map(|p| link_path(&p.link))
            .collect()
    }
}

/// Path part of a link, without any `#fragment` or `?query`.
pub fn link_path(link: &str) -> &str {
    match link.find(|c: char| c == '#' || c == '?') {
        Some(end) => &link[..end],
        None => link,
    }
}

/// Builder for [`SiteConfig`].
#[derive(Debug, Clone)]
pub struct SiteConfigBuilder {
    title: String,
    description: String,
    theme: ThemeConfig,
}

impl SiteConfigBuilder {
    /// Append a top navigation entry.
    pub fn nav(mut self, item: NavItem) -> Self {
        self.theme.nav.push(item);
        self
    }

    /// Append a sidebar under `prefix`.
    pub fn sidebar(
        mut self,
        prefix: impl Into<String>,
        groups: impl IntoIterator<Item = SidebarGroup>,
    ) -> Self {
        self.theme
            .sidebar
            .entries
            .push((prefix.into(), groups.into_iter().collect()));
        self
    }

    /// Append a social link.
    pub fn social_link(mut self, link: SocialLink) -> Self {
        self.theme.social_links.push(link);
        self
    }

    /// Validate and finish the configuration.
    pub fn build(self) -> Result<SiteConfig, ConfigError> {
        let config = self.build_unvalidated();
        validate(&config)?;
        Ok(config)
    }

    /// Finish without validating. Callers are expected to run [`validate`] themselves.
    pub fn build_unvalidated(self) -> SiteConfig {
        SiteConfig {
            title: self.title,
            description: self.description,
            theme_config: self.theme,
        }
    }
}
