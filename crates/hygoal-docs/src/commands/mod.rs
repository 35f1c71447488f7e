//! CLI command implementations.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

pub mod check;
pub mod export;
pub mod init;
pub mod render;
pub mod sidebar;

/// Write `content` to `output`, or to stdout when no file is given.
fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .context("Failed to write to stdout")?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n").context("Failed to write to stdout")?;
            }
        }
    }
    Ok(())
}
