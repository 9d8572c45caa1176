use std::fs::OpenOptions;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum FileIoError {
	#[error("read {} failed: {source}", path.display())]
	Read {
		path:   PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("{source}")]
	Write {
		path:   PathBuf,
		#[source]
		source: io::Error,
	},
}

/// Load and persist collaborators. The editor never touches the file system
/// directly.
pub trait FileIo {
	/// Lines of `path` with trailing `\n` / `\r\n` removed. `Ok(None)` when the
	/// file does not exist yet.
	fn load_lines(&self, path: &Path) -> Result<Option<Vec<Vec<u8>>>, FileIoError>;

	/// Writes `bytes` to `path`, replacing its contents. Returns the number of
	/// bytes written.
	fn save(&self, path: &Path, bytes: &[u8]) -> Result<usize, FileIoError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FsFileIo;

impl FileIo for FsFileIo {
	fn load_lines(&self, path: &Path) -> Result<Option<Vec<Vec<u8>>>, FileIoError> {
		let bytes = match std::fs::read(path) {
			Ok(bytes) => bytes,
			Err(err) if err.kind() == ErrorKind::NotFound => {
				info!("{} does not exist, starting empty", path.display());
				return Ok(None);
			}
			Err(source) => return Err(FileIoError::Read { path: path.to_path_buf(), source }),
		};
		let lines = split_lines(&bytes);
		debug!("read {} bytes ({} lines) from {}", bytes.len(), lines.len(), path.display());
		Ok(Some(lines))
	}

	fn save(&self, path: &Path, bytes: &[u8]) -> Result<usize, FileIoError> {
		let write = || -> io::Result<()> {
			let mut file = OpenOptions::new().read(true).write(true).create(true).truncate(false).open(path)?;
			file.set_len(bytes.len() as u64)?;
			file.write_all(bytes)?;
			file.flush()
		};
		write().map_err(|source| FileIoError::Write { path: path.to_path_buf(), source })?;
		info!("wrote {} bytes to {}", bytes.len(), path.display());
		Ok(bytes.len())
	}
}

/// Splits on `\n`, dropping any trailing `\r` or `\n` from each line. A final
/// newline does not produce an extra empty line.
pub fn split_lines(bytes: &[u8]) -> Vec<Vec<u8>> {
	if bytes.is_empty() {
		return Vec::new();
	}
	let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
	body.split(|byte| *byte == b'\n')
		.map(|line| {
			let end = line.iter().rposition(|byte| *byte != b'\r' && *byte != b'\n').map_or(0, |idx| idx + 1);
			line[..end].to_vec()
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn split_lines_strips_line_endings() {
		let lines = split_lines(b"one\r\ntwo\n\nthree\n");
		assert_eq!(lines, vec![b"one".to_vec(), b"two".to_vec(), Vec::new(), b"three".to_vec()]);
	}

	#[test]
	fn split_lines_keeps_unterminated_last_line() {
		assert_eq!(split_lines(b"a\nb"), vec![b"a".to_vec(), b"b".to_vec()]);
		assert!(split_lines(b"").is_empty());
		assert_eq!(split_lines(b"\n"), vec![Vec::<u8>::new()]);
	}

	#[test]
	fn save_truncates_existing_file() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("out.txt");
		std::fs::write(&path, "a much longer previous body\n").expect("seed file");

		let written = FsFileIo.save(&path, b"short\n").expect("save");
		assert_eq!(written, 6);
		assert_eq!(std::fs::read(&path).expect("read back"), b"short\n");
	}

	#[test]
	fn missing_file_loads_as_none() {
		let dir = tempfile::tempdir().expect("tempdir");
		let loaded = FsFileIo.load_lines(&dir.path().join("absent.txt")).expect("load");
		assert!(loaded.is_none());
	}

	#[test]
	fn directory_fails_to_load() {
		let dir = tempfile::tempdir().expect("tempdir");
		let err = FsFileIo.load_lines(dir.path()).expect_err("directories are not files");
		assert!(matches!(err, FileIoError::Read { .. }));
	}
}
