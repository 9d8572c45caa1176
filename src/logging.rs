//! File logging for the editor.
//!
//! The screen belongs to the editor while it runs in raw mode, so buffer
//! edits, search steps, saves and terminal errors are traced to
//! `<log_dir>/edi.log` instead. `RUST_LOG` overrides the default `info` level.

use std::path::{Path, PathBuf};

use thiserror::Error;
use time::macros::format_description;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;

pub const LOG_FILE_NAME: &str = "edi.log";

#[derive(Debug, Error)]
pub enum LoggingError {
	#[error("create log directory {} failed", path.display())]
	CreateLogDir {
		path:   PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("install editor log subscriber failed")]
	InitSubscriber {
		#[source]
		source: Box<dyn std::error::Error + Send + Sync>,
	},
}

fn default_filter() -> EnvFilter {
	EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn init_logging(log_dir: &Path) -> Result<(), LoggingError> {
	std::fs::create_dir_all(log_dir)
		.map_err(|source| LoggingError::CreateLogDir { path: log_dir.to_path_buf(), source })?;

	let timer =
		UtcTime::new(format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]"));
	tracing_subscriber::fmt()
		.with_timer(timer)
		.with_env_filter(default_filter())
		.with_writer(tracing_appender::rolling::never(log_dir, LOG_FILE_NAME))
		.with_ansi(false)
		.try_init()
		.map_err(|source| LoggingError::InitSubscriber { source })?;

	info!("edi {} logging to {}", env!("CARGO_PKG_VERSION"), log_dir.join(LOG_FILE_NAME).display());
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn log_dir_blocked_by_file_is_reported_with_path() {
		let dir = tempfile::tempdir().expect("tempdir");
		let blocker = dir.path().join("logs");
		std::fs::write(&blocker, b"not a directory").expect("write blocker");

		let err = init_logging(&blocker.join("edi")).expect_err("directory cannot be created");
		match err {
			LoggingError::CreateLogDir { path, .. } => assert_eq!(path, blocker.join("edi")),
			other => panic!("unexpected error: {other}"),
		}
	}
}
