//! Template engine for rendering the navigation shell.

use minijinja::{context, Environment};

use hygoal_site::SiteConfig;

use crate::context::ShellContext;

/// Errors that can occur while rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to render template: {0}")]
    Template(#[from] minijinja::Error),
}

/// Template engine using minijinja.
pub struct ShellRenderer {
    env: Environment<'static>,
}

impl ShellRenderer {
    /// Create a new renderer with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template("layout.html", LAYOUT_TEMPLATE)
            .expect("Failed to add layout template");
        env.add_template("nav.html", NAV_TEMPLATE)
            .expect("Failed to add nav template");
        env.add_template("sidebar.html", SIDEBAR_TEMPLATE)
            .expect("Failed to add sidebar template");
        env.add_template("social.html", SOCIAL_TEMPLATE)
            .expect("Failed to add social template");

        Self { env }
    }

    /// Render the shell for the page at `page_path`.
    pub fn render(&self, config: &SiteConfig, page_path: &str) -> Result<String, RenderError> {
        let context = ShellContext::new(config, page_path);
        tracing::debug!(
            "Rendering shell for {} (sidebar: {})",
            page_path,
            context.sidebar_key.as_deref().unwrap_or("<none>")
        );
        self.render_context(&context)
    }

    /// Render a prepared context.
    pub fn render_context(&self, context: &ShellContext) -> Result<String, RenderError> {
        let tmpl = self.env.get_template("layout.html")?;

        Ok(tmpl.render(context! {
            site_title => &context.site_title,
            description => &context.description,
            page_path => &context.page_path,
            nav => &context.nav,
            sidebar_key => &context.sidebar_key,
            sidebar => &context.sidebar,
            social => &context.social,
        })?)
    }
}

impl Default for ShellRenderer {
    fn default() -> Self {
        Self::new()
    }
}

const LAYOUT_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ site_title }}</title>
  <meta name="description" content="{{ description }}">
</head>
<body>
  <header class="navbar">
    <a href="/" class="nav-logo">{{ site_title }}</a>
    {% include "nav.html" %}
    {% include "social.html" %}
  </header>
  <div class="layout">
    {% if sidebar %}
    <aside class="sidebar" data-prefix="{{ sidebar_key }}">
      {% include "sidebar.html" %}
    </aside>
    {% endif %}
    <main class="main" data-path="{{ page_path }}"></main>
  </div>
</body>
</html>"##;

const NAV_TEMPLATE: &str = r##"<ul class="nav-list">
{% for item in nav %}
  <li class="nav-item{% if item.active %} active{% endif %}">
    <a href="{{ item.link }}">{{ item.text }}</a>
  </li>
{% endfor %}
</ul>"##;

const SIDEBAR_TEMPLATE: &str = r##"{% for group in sidebar %}
<section class="sidebar-group">
  <h2>{{ group.text }}</h2>
  <ul>
  {% for item in group.items %}
    <li class="sidebar-item{% if item.active %} active{% endif %}">
      <a href="{{ item.link }}">{{ item.text }}</a>
    </li>
  {% endfor %}
  </ul>
</section>
{% endfor %}"##;

const SOCIAL_TEMPLATE: &str = r##"<div class="social-links">
{% for s in social %}
  <a class="social-link social-{{ s.icon }}" href="{{ s.link }}" aria-label="{{ s.icon }}">{{ s.icon }}</a>
{% endfor %}
</div>"##;
