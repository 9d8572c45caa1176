use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("read config file {} failed", path.display())]
	Read {
		path:   PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("parse config file {} failed", path.display())]
	Parse {
		path:   PathBuf,
		#[source]
		source: toml::de::Error,
	},
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
	/// Width of a tab stop in render columns.
	pub tab_stop:             usize,
	/// Extra Ctrl-Q presses needed to quit with unsaved changes.
	pub quit_times:           u8,
	pub message_timeout_secs: u64,
}

impl Default for EditorConfig {
	fn default() -> Self {
		Self { tab_stop: 8, quit_times: 3, message_timeout_secs: 5 }
	}
}

impl EditorConfig {
	pub fn from_toml(path: &Path, source: &str) -> Result<Self, ConfigError> {
		let mut config: Self =
			toml::from_str(source).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
		config.tab_stop = config.tab_stop.max(1);
		Ok(config)
	}

	/// Reads `path`, falling back to defaults when the file is absent.
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		match std::fs::read_to_string(path) {
			Ok(source) => {
				info!("loading config from {}", path.display());
				Self::from_toml(path, &source)
			}
			Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
			Err(source) => Err(ConfigError::Read { path: path.to_path_buf(), source }),
		}
	}

	pub fn load_with_override(cli_override: Option<&Path>) -> Result<Self, ConfigError> {
		match cli_override {
			Some(path) => Self::load(path),
			None => Self::load(&crate::paths::config_file()),
		}
	}
}
