//! Per-user directories for the log file and the config file.

use std::path::PathBuf;

const APP_DIR: &str = "edi";

fn home_or_temp() -> PathBuf {
	std::env::var_os("HOME").map(PathBuf::from).unwrap_or_else(std::env::temp_dir)
}

fn xdg_dir(var: &str, fallback: &[&str]) -> PathBuf {
	match std::env::var_os(var).map(PathBuf::from) {
		Some(dir) if dir.is_absolute() => dir.join(APP_DIR),
		_ => fallback.iter().fold(home_or_temp(), |dir, part| dir.join(part)).join(APP_DIR),
	}
}

pub fn log_dir() -> PathBuf {
	#[cfg(target_os = "macos")]
	{
		home_or_temp().join("Library").join("Logs").join(APP_DIR)
	}

	#[cfg(not(target_os = "macos"))]
	{
		xdg_dir("XDG_STATE_HOME", &[".local", "state"]).join("logs")
	}
}

pub fn config_file() -> PathBuf {
	xdg_dir("XDG_CONFIG_HOME", &[".config"]).join("config.toml")
}
