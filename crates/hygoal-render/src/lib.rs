//! Navigation shell rendering for the Hygoal documentation site.
//!
//! Renders the top navigation, the sidebar selected for a page and the social
//! links of a [`hygoal_site::SiteConfig`] into an HTML layout.

pub mod context;
pub mod templates;

pub use context::{GroupEntry, LinkEntry, ShellContext, SocialEntry};
pub use templates::{RenderError, ShellRenderer};
