//! Site configuration for the Hygoal documentation site.
//!
//! This crate declares the navigation, sidebar and social link structure consumed
//! by the documentation renderer, together with loading, validation and export helpers.

pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod loader;
pub mod validate;

pub use config::{
    link_path, NavItem, Sidebar, SidebarGroup, SiteConfig, SiteConfigBuilder, SocialIcon, SocialLink,
    ThemeConfig,
};
pub use content::{page_file_for, ContentError, ContentIndex};
pub use error::ConfigError;
pub use validate::{validate, IssueKind, ValidationErrors, ValidationIssue};
