use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// Load the account handles to follow, one per line.
///
/// Blank lines and `#` comments are skipped. A leading `- ` list marker or `@`
/// is dropped so the list can live in a markdown file.
pub fn load_handles(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        anyhow::bail!("Account list not found: {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read account list: {}", path.display()))?;

    Ok(parse_handles(&content))
}

pub fn parse_handles(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            let handle = trimmed
                .strip_prefix("- ")
                .or_else(|| trimmed.strip_prefix("* "))
                .unwrap_or(trimmed)
                .trim()
                .trim_start_matches('@');
            if handle.is_empty() {
                None
            } else {
                Some(handle.to_string())
            }
        })
        .collect()
}

/// File name for the digest of `date`, e.g. `tldreth-2026-02-01.md`
pub fn digest_filename(prefix: &str, date: NaiveDate) -> String {
    format!("{}-{}.md", prefix, date.format("%Y-%m-%d"))
}

/// Write the digest into `dir`, replacing any file from an earlier run that day
pub fn save_digest(content: &str, dir: &Path, prefix: &str, date: NaiveDate) -> Result<PathBuf> {
    let filepath = dir.join(digest_filename(prefix, date));

    fs::write(&filepath, content)
        .with_context(|| format!("Failed to write digest file: {}", filepath.display()))?;

    Ok(filepath)
}
