//! JSON export command.

use std::path::Path;

use anyhow::{Context, Result};
use hygoal_site::SiteConfig;

/// Run the export command.
pub fn run(config_path: &Path, output: Option<&Path>) -> Result<()> {
    let config = SiteConfig::load_or_default(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    let json = config.to_json_pretty()?;

    super::emit(&json, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn writes_json_file() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("out").join("config.json");

        run(&temp.path().join("site.toml"), Some(out.as_path())).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(value["title"], "Hygoal");
        assert_eq!(value["themeConfig"]["nav"].as_array().unwrap().len(), 3);
        assert_eq!(value["themeConfig"]["socialLinks"][0]["icon"], "github");
    }
}
