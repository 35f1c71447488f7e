//! Structural validation of a site configuration.
//!
//! Validation walks the whole configuration and collects every problem instead of
//! stopping at the first one, so a broken `site.toml` can be fixed in one pass.
//! Whether links point at real pages is a separate concern, see [`crate::content`].

use std::fmt;

use crate::config::{NavItem, SiteConfig};

/// What is wrong with a configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IssueKind {
    #[error("title is empty")]
    EmptyTitle,

    #[error("text is empty")]
    EmptyText,

    #[error("link is empty")]
    EmptyLink,

    #[error("link '{0}' must start with '/' or be an absolute http(s) URL")]
    NotSiteRelative(String),

    #[error("sidebar key '{0}' must start and end with '/'")]
    InvalidSidebarKey(String),

    #[error("sidebar key '{0}' is declared more than once")]
    DuplicateSidebarKey(String),

    #[error("social link '{0}' must be an absolute http(s) URL")]
    NotAbsoluteUrl(String),
}

/// A single problem and where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Path to the offending value, e.g. `themeConfig.nav[0].link`
    pub location: String,
    pub kind: IssueKind,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.kind)
    }
}

/// Every problem found in one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", format_issues(.issues))]
pub struct ValidationErrors {
    issues: Vec<ValidationIssue>,
}

impl ValidationErrors {
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

/// One `  - location: problem` line per issue.
fn format_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("  - {}", issue))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check a configuration for structural problems.
pub fn validate(config: &SiteConfig) -> Result<(), ValidationErrors> {
    let mut issues = Vec::new();

    if config.title().trim().is_empty() {
        push(&mut issues, "title", IssueKind::EmptyTitle);
    }

    for (i, item) in config.nav().iter().enumerate() {
        check_item(&mut issues, &format!("themeConfig.nav[{}]", i), item);
    }

    let mut seen: Vec<&str> = Vec::new();
    for (key, groups) in config.sidebar().iter() {
        let base = format!("themeConfig.sidebar[\"{}\"]", key);

        if !is_prefix(key) {
            push(
                &mut issues,
                &base,
                IssueKind::InvalidSidebarKey(key.to_string()),
            );
        }
        if seen.contains(&key) {
            push(
                &mut issues,
                &base,
                IssueKind::DuplicateSidebarKey(key.to_string()),
            );
        } else {
            seen.push(key);
        }

        for (g, group) in groups.iter().enumerate() {
            let group_base = format!("{}[{}]", base, g);
            if group.text.trim().is_empty() {
                push(
                    &mut issues,
                    &format!("{}.text", group_base),
                    IssueKind::EmptyText,
                );
            }
            for (j, item) in group.items.iter().enumerate() {
                check_item(&mut issues, &format!("{}.items[{}]", group_base, j), item);
            }
        }
    }

    for (i, social) in config.social_links().iter().enumerate() {
        let location = format!("themeConfig.socialLinks[{}].link", i);
        if social.link.is_empty() {
            push(&mut issues, &location, IssueKind::EmptyLink);
        } else if !is_absolute_url(&social.link) {
            push(
                &mut issues,
                &location,
                IssueKind::NotAbsoluteUrl(social.link.clone()),
            );
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { issues })
    }
}

fn check_item(issues: &mut Vec<ValidationIssue>, base: &str, item: &NavItem) {
    if item.text.trim().is_empty() {
        push(issues, &format!("{}.text", base), IssueKind::EmptyText);
    }

    let location = format!("{}.link", base);
    if item.link.is_empty() {
        push(issues, &location, IssueKind::EmptyLink);
    } else if !item.link.starts_with('/') && !is_absolute_url(&item.link) {
        push(
            issues,
            &location,
            IssueKind::NotSiteRelative(item.link.clone()),
        );
    }
}

fn push(issues: &mut Vec<ValidationIssue>, location: &str, kind: IssueKind) {
    issues.push(ValidationIssue {
        location: location.to_string(),
        kind,
    });
}

fn is_prefix(key: &str) -> bool {
    key.starts_with('/') && key.ends_with('/')
}

fn is_absolute_url(link: &str) -> bool {
    ["https://", "http://"]
        .iter()
        .any(|scheme| link.len() > scheme.len() && link.starts_with(scheme))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SidebarGroup, SocialIcon, SocialLink};
    use pretty_assertions::assert_eq;

    #[test]
    fn accepts_external_nav_links() {
        let config = SiteConfig::builder("Site", "")
            .nav(NavItem::new("Source", "https://github.com/Floffah/hygoal"))
            .build_unvalidated();

        assert!(validate(&config).is_ok());
    }

    #[test]
    fn rejects_empty_title() {
        let config = SiteConfig::builder("  ", "").build_unvalidated();

        let errors = validate(&config).unwrap_err();
        assert_eq!(errors.issues()[0].kind, IssueKind::EmptyTitle);
    }

    #[test]
    fn rejects_relative_link() {
        let config = SiteConfig::builder("Site", "")
            .nav(NavItem::new("Protocol", "protocol/"))
            .build_unvalidated();

        let errors = validate(&config).unwrap_err();
        assert_eq!(
            errors.issues(),
            &[ValidationIssue {
                location: "themeConfig.nav[0].link".to_string(),
                kind: IssueKind::NotSiteRelative("protocol/".to_string()),
            }]
        );
    }

    #[test]
    fn collects_every_issue() {
        let config = SiteConfig::builder("Site", "")
            .nav(NavItem::new("", "/"))
            .sidebar(
                "/protocol",
                [SidebarGroup::new(
                    "Protocol",
                    [
                        NavItem::new("Introduction", "/protocol/"),
                        NavItem::new("Handshake", ""),
                    ],
                )],
            )
            .sidebar(
                "/protocol",
                [SidebarGroup::new(
                    "Again",
                    [NavItem::new("Handshake", "/protocol/handshake")],
                )],
            )
            .social_link(SocialLink::new(SocialIcon::Github, "github.com/Floffah"))
            .build_unvalidated();

        let errors = validate(&config).unwrap_err();
        let locations: Vec<&str> = errors
            .issues()
            .iter()
            .map(|i| i.location.as_str())
            .collect();

        assert_eq!(
            locations,
            vec![
                "themeConfig.nav[0].text",
                "themeConfig.sidebar[\"/protocol\"]",
                "themeConfig.sidebar[\"/protocol\"][0].items[1].link",
                "themeConfig.sidebar[\"/protocol\"]",
                "themeConfig.sidebar[\"/protocol\"]",
                "themeConfig.socialLinks[0].link",
            ]
        );
        assert_eq!(
            errors.issues()[4].kind,
            IssueKind::DuplicateSidebarKey("/protocol".to_string())
        );
    }

    #[test]
    fn rejects_bare_scheme_as_social_link() {
        let config = SiteConfig::builder("Site", "")
            .social_link(SocialLink::new(SocialIcon::Discord, "https://"))
            .build_unvalidated();

        let errors = validate(&config).unwrap_err();
        assert_eq!(
            errors.issues()[0].kind,
            IssueKind::NotAbsoluteUrl("https://".to_string())
        );
    }

    #[test]
    fn invalid_config_error_lists_issues() {
        let config = SiteConfig::builder("Site", "")
            .nav(NavItem::new("Home", ""))
            .build_unvalidated();

        let err = crate::ConfigError::from(validate(&config).unwrap_err());

        assert_eq!(
            err.to_string(),
            "Invalid site configuration:\n  - themeConfig.nav[0].link: link is empty"
        );
    }

    #[test]
    fn display_lists_each_issue() {
        let config = SiteConfig::builder("", "")
            .nav(NavItem::new("Home", ""))
            .build_unvalidated();

        let errors = validate(&config).unwrap_err();
        assert_eq!(
            errors.to_string(),
            "  - title: title is empty\n  - themeConfig.nav[0].link: link is empty"
        );
    }
}
