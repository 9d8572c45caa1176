use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::info;

use crate::config::EditorConfig;
use crate::search::SearchEngine;
use crate::syntax::select_syntax;

mod buffer;
mod edit;
mod row;
mod viewport;

pub use buffer::{BufferError, TextBuffer};
pub use edit::MoveDirection;
pub use row::Row;
pub use viewport::Viewport;

/// `cx` indexes raw characters of row `cy`. `cy` may equal the row count,
/// which is the empty line past the end of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorState {
	pub cx: usize,
	pub cy: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusMessage {
	pub text:   String,
	pub set_at: Option<Instant>,
}

impl StatusMessage {
	pub fn visible_text(&self, now: Instant, timeout: Duration) -> Option<&str> {
		let set_at = self.set_at?;
		if self.text.is_empty() || now.saturating_duration_since(set_at) >= timeout {
			return None;
		}
		Some(&self.text)
	}
}

/// Cursor and scroll position captured before a search so that a cancelled
/// search can put them back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedView {
	pub cursor:     CursorState,
	pub row_offset: usize,
	pub col_offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
	SaveAs,
	Find { saved: SavedView },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptState {
	pub kind:  PromptKind,
	pub input: String,
}

impl PromptState {
	pub fn label(&self) -> String {
		match self.kind {
			PromptKind::SaveAs => format!("Save as: {} (ESC to cancel)", self.input),
			PromptKind::Find { .. } => format!("Search: {} (Use ESC/Arrows/Enter)", self.input),
		}
	}
}

#[derive(Debug)]
pub struct EditorState {
	pub buffer:   TextBuffer,
	pub cursor:   CursorState,
	pub viewport: Viewport,
	pub filename: Option<PathBuf>,
	pub status:   StatusMessage,
	pub prompt:   Option<PromptState>,
	pub search:   SearchEngine,
	pub config:   EditorConfig,
}

impl EditorState {
	pub fn new(config: EditorConfig) -> Self {
		Self {
			buffer: TextBuffer::new(config.tab_stop),
			cursor: CursorState::default(),
			viewport: Viewport::default(),
			filename: None,
			status: StatusMessage::default(),
			prompt: None,
			search: SearchEngine::new(),
			config,
		}
	}

	/// Replaces the buffer with `lines` and binds it to `path`. The loaded
	/// buffer starts clean.
	pub fn load_lines<I>(&mut self, path: Option<PathBuf>, lines: I)
	where
		I: IntoIterator<Item = Vec<u8>>,
	{
		self.buffer = TextBuffer::new(self.config.tab_stop);
		if let Some(path) = path {
			self.set_filename(path);
		}
		for line in lines {
			let at = self.buffer.len();
			if let Err(err) = self.buffer.insert_row(at, &line) {
				tracing::debug!("load_lines skipped row: {}", err);
			}
		}
		self.buffer.mark_clean();
		self.cursor = CursorState::default();
		self.viewport.row_offset = 0;
		self.viewport.col_offset = 0;
		info!("loaded {} rows", self.buffer.len());
	}

	/// Binds the buffer to `path` and re-selects the language rules from its
	/// file name.
	pub fn set_filename(&mut self, path: PathBuf) {
		let syntax = path.file_name().map(|name| name.to_string_lossy()).and_then(|name| select_syntax(&name));
		self.buffer.set_syntax(syntax);
		self.filename = Some(path);
	}

	pub fn file_name(&self) -> Option<&Path> {
		self.filename.as_deref()
	}

	pub fn set_status_message(&mut self, text: impl Into<String>) {
		self.set_status_message_at(text, Instant::now());
	}

	pub fn set_status_message_at(&mut self, text: impl Into<String>, now: Instant) {
		self.status = StatusMessage { text: text.into(), set_at: Some(now) };
	}

	pub fn message_timeout(&self) -> Duration {
		Duration::from_secs(self.config.message_timeout_secs)
	}

	pub fn save_view(&self) -> SavedView {
		SavedView {
			cursor:     self.cursor,
			row_offset: self.viewport.row_offset,
			col_offset: self.viewport.col_offset,
		}
	}

	pub fn restore_view(&mut self, saved: SavedView) {
		self.cursor = saved.cursor;
		self.viewport.row_offset = saved.row_offset;
		self.viewport.col_offset = saved.col_offset;
	}

	/// Rebuilds `rx` from `cx` and scrolls so the cursor is on screen.
	pub fn scroll(&mut self) {
		let rx = if self.cursor.cy < self.buffer.len() {
			self.buffer.cx_to_rx(self.cursor.cy, self.cursor.cx)
		} else {
			0
		};
		self.viewport.scroll_to(self.cursor.cy, rx);
	}
}

#[cfg(test)]
mod tests;
