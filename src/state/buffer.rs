use thiserror::Error;
use tracing::debug;

use super::row::Row;
use crate::syntax::{Highlight, Syntax};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
	#[error("row index {index} out of range for buffer of {len} rows")]
	OutOfRange { index: usize, len: usize },
}

/// Ordered rows of the document. Rows are only reachable by index; any call
/// that changes the row count may move them.
#[derive(Debug)]
pub struct TextBuffer {
	rows:     Vec<Row>,
	dirty:    u64,
	tab_stop: usize,
	syntax:   Option<&'static Syntax>,
}

impl TextBuffer {
	pub fn new(tab_stop: usize) -> Self {
		Self { rows: Vec::new(), dirty: 0, tab_stop: tab_stop.max(1), syntax: None }
	}

	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	pub fn row(&self, at: usize) -> Option<&Row> {
		self.rows.get(at)
	}

	pub fn tab_stop(&self) -> usize {
		self.tab_stop
	}

	pub fn syntax(&self) -> Option<&'static Syntax> {
		self.syntax
	}

	pub fn is_dirty(&self) -> bool {
		self.dirty > 0
	}

	pub fn dirty_count(&self) -> u64 {
		self.dirty
	}

	pub fn mark_clean(&mut self) {
		self.dirty = 0;
	}

	/// Switches the language rules and re-highlights every row.
	pub fn set_syntax(&mut self, syntax: Option<&'static Syntax>) {
		self.syntax = syntax;
		for row in &mut self.rows {
			row.rehighlight(syntax);
		}
	}

	pub fn insert_row(&mut self, at: usize, text: &[u8]) -> Result<(), BufferError> {
		if at > self.rows.len() {
			return Err(BufferError::OutOfRange { index: at, len: self.rows.len() });
		}
		self.rows.insert(at, Row::new(text.to_vec(), self.tab_stop, self.syntax));
		self.dirty += 1;
		Ok(())
	}

	pub fn delete_row(&mut self, at: usize) {
		if at >= self.rows.len() {
			debug!("delete_row ignored: index {} out of range ({} rows)", at, self.rows.len());
			return;
		}
		self.rows.remove(at);
		self.dirty += 1;
	}

	/// Inserts `byte` into row `row` at `at`, appending when `at` is past the
	/// end of the row.
	pub fn insert_char(&mut self, row: usize, at: usize, byte: u8) {
		let (tab_stop, syntax) = (self.tab_stop, self.syntax);
		let Some(target) = self.rows.get_mut(row) else {
			debug!("insert_char ignored: row {} out of range", row);
			return;
		};
		target.insert_byte(at, byte);
		target.update(tab_stop, syntax);
		self.dirty += 1;
	}

	pub fn delete_char(&mut self, row: usize, at: usize) {
		let (tab_stop, syntax) = (self.tab_stop, self.syntax);
		let Some(target) = self.rows.get_mut(row) else {
			return;
		};
		if !target.remove_byte(at) {
			return;
		}
		target.update(tab_stop, syntax);
		self.dirty += 1;
	}

	pub fn append_string(&mut self, row: usize, text: &[u8]) {
		let (tab_stop, syntax) = (self.tab_stop, self.syntax);
		let Some(target) = self.rows.get_mut(row) else {
			return;
		};
		target.append_bytes(text);
		target.update(tab_stop, syntax);
		self.dirty += 1;
	}

	/// Cuts row `row` at `at` and returns the tail that was removed.
	pub(crate) fn truncate_row(&mut self, row: usize, at: usize) -> Option<Vec<u8>> {
		let (tab_stop, syntax) = (self.tab_stop, self.syntax);
		let target = self.rows.get_mut(row)?;
		let tail = target.split_off(at);
		target.update(tab_stop, syntax);
		self.dirty += 1;
		Some(tail)
	}

	/// Every row followed by one `\n`.
	pub fn linearize(&self) -> Vec<u8> {
		let total = self.rows.iter().map(|row| row.size() + 1).sum();
		let mut bytes = Vec::with_capacity(total);
		for row in &self.rows {
			bytes.extend_from_slice(row.chars());
			bytes.push(b'\n');
		}
		bytes
	}

	pub fn cx_to_rx(&self, row: usize, cx: usize) -> usize {
		self.rows.get(row).map(|row| row.cx_to_rx(cx, self.tab_stop)).unwrap_or(0)
	}

	pub fn rx_to_cx(&self, row: usize, rx: usize) -> usize {
		self.rows.get(row).map(|row| row.rx_to_cx(rx, self.tab_stop)).unwrap_or(0)
	}

	/// Paints `tag` over `span` of row `row`'s highlight and returns the
	/// previous highlight so it can be put back later.
	pub(crate) fn overlay_highlight(
		&mut self,
		row: usize,
		span: std::ops::Range<usize>,
		tag: Highlight,
	) -> Option<Vec<Highlight>> {
		let target = self.rows.get_mut(row)?;
		let saved = target.highlight().to_vec();
		let highlight = target.highlight_mut();
		let end = span.end.min(highlight.len());
		let start = span.start.min(end);
		highlight[start..end].fill(tag);
		Some(saved)
	}

	pub(crate) fn restore_highlight(&mut self, row: usize, saved: Vec<Highlight>) {
		let syntax = self.syntax;
		let Some(target) = self.rows.get_mut(row) else {
			return;
		};
		if !target.replace_highlight(saved) {
			target.rehighlight(syntax);
		}
	}
}
