//! Runtime settings: built-in defaults, overlaid by an optional TOML file.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use labtrack_store_sqlite::STORE_FILE_NAME;
use serde::Deserialize;

/// Config file read when `--config` is not given; missing is fine.
pub const DEFAULT_CONFIG_PATH: &str = "~/.config/labtrack/config.toml";

const DATA_DIR: &str = "~/.local/share/labtrack";

/// Settings after defaults and the config file are merged.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
  /// SQLite store file.
  pub store_path: PathBuf,
  /// Where the TUI writes its log.
  pub log_file:   PathBuf,
}

impl Settings {
  /// Load settings from `path` (or [`DEFAULT_CONFIG_PATH`]). The file is
  /// optional, and `~` is expanded in every path.
  pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
    let path = path.map_or_else(|| expand_tilde(Path::new(DEFAULT_CONFIG_PATH)), expand_tilde);

    let settings = config::Config::builder()
      .set_default("store_path", format!("{DATA_DIR}/{STORE_FILE_NAME}"))?
      .set_default("log_file", format!("{DATA_DIR}/labtrack.log"))?
      .add_source(config::File::from(path.clone()).required(false))
      .build()
      .with_context(|| format!("failed to read config file {}", path.display()))?;

    let mut settings: Settings = settings
      .try_deserialize()
      .context("failed to deserialise settings")?;

    settings.store_path = expand_tilde(&settings.store_path);
    settings.log_file = expand_tilde(&settings.log_file);
    Ok(settings)
  }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_apply_without_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let absent = dir.path().join("absent.toml");
    let settings = Settings::load(Some(absent.as_path())).unwrap();

    assert!(settings.store_path.ends_with(STORE_FILE_NAME));
    assert!(settings.log_file.ends_with("labtrack.log"));
  }

  #[test]
  fn file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("config.toml");
    std::fs::write(&file, "store_path = \"/tmp/elsewhere.db\"\n").unwrap();

    let settings = Settings::load(Some(file.as_path())).unwrap();
    assert_eq!(settings.store_path, PathBuf::from("/tmp/elsewhere.db"));
    assert!(settings.log_file.ends_with("labtrack.log"));
  }

  #[test]
  fn expand_tilde_leaves_other_paths() {
    assert_eq!(expand_tilde(Path::new("/var/x.db")), PathBuf::from("/var/x.db"));
  }
}
