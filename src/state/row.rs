use crate::syntax::{Highlight, Syntax, highlight_row};

/// One line of the document. `render` and `highlight` are derived from
/// `chars` and are rebuilt together after every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
	chars:     Vec<u8>,
	render:    Vec<u8>,
	highlight: Vec<Highlight>,
}

impl Row {
	pub(crate) fn new(chars: Vec<u8>, tab_stop: usize, syntax: Option<&Syntax>) -> Self {
		let mut row = Self { chars, render: Vec::new(), highlight: Vec::new() };
		row.update(tab_stop, syntax);
		row
	}

	pub fn chars(&self) -> &[u8] {
		&self.chars
	}

	pub fn render(&self) -> &[u8] {
		&self.render
	}

	pub fn highlight(&self) -> &[Highlight] {
		&self.highlight
	}

	pub fn size(&self) -> usize {
		self.chars.len()
	}

	pub fn render_size(&self) -> usize {
		self.render.len()
	}

	/// Render column of the character at `cx`. Tabs advance to the next
	/// multiple of `tab_stop`.
	pub fn cx_to_rx(&self, cx: usize, tab_stop: usize) -> usize {
		self.chars.iter().take(cx).fold(0, |rx, byte| advance_column(rx, *byte, tab_stop))
	}

	/// Smallest character index whose render column reaches `rx`, or the row
	/// size when `rx` lies past the last character.
	pub fn rx_to_cx(&self, rx: usize, tab_stop: usize) -> usize {
		let mut cur_rx = 0;
		for (cx, byte) in self.chars.iter().enumerate() {
			if cur_rx >= rx {
				return cx;
			}
			cur_rx = advance_column(cur_rx, *byte, tab_stop);
		}
		self.chars.len()
	}

	pub(crate) fn update(&mut self, tab_stop: usize, syntax: Option<&Syntax>) {
		let tab_stop = tab_stop.max(1);
		let tabs = self.chars.iter().filter(|byte| **byte == b'\t').count();
		let mut render = Vec::with_capacity(self.chars.len() + tabs * (tab_stop - 1));
		for byte in &self.chars {
			if *byte == b'\t' {
				render.push(b' ');
				while render.len() % tab_stop != 0 {
					render.push(b' ');
				}
			} else {
				render.push(*byte);
			}
		}
		self.render = render;
		self.rehighlight(syntax);
	}

	pub(crate) fn rehighlight(&mut self, syntax: Option<&Syntax>) {
		self.highlight = highlight_row(&self.render, syntax);
	}

	pub(crate) fn insert_byte(&mut self, at: usize, byte: u8) {
		let at = at.min(self.chars.len());
		self.chars.insert(at, byte);
	}

	/// Returns false when `at` is not a character of the row.
	pub(crate) fn remove_byte(&mut self, at: usize) -> bool {
		if at >= self.chars.len() {
			return false;
		}
		self.chars.remove(at);
		true
	}

	pub(crate) fn append_bytes(&mut self, bytes: &[u8]) {
		self.chars.extend_from_slice(bytes);
	}

	pub(crate) fn split_off(&mut self, at: usize) -> Vec<u8> {
		let at = at.min(self.chars.len());
		self.chars.split_off(at)
	}

	pub(crate) fn highlight_mut(&mut self) -> &mut [Highlight] {
		&mut self.highlight
	}

	pub(crate) fn replace_highlight(&mut self, highlight: Vec<Highlight>) -> bool {
		if highlight.len() != self.render.len() {
			return false;
		}
		self.highlight = highlight;
		true
	}
}

fn advance_column(rx: usize, byte: u8, tab_stop: usize) -> usize {
	if byte == b'\t' {
		let tab_stop = tab_stop.max(1);
		rx + (tab_stop - rx % tab_stop)
	} else {
		rx + 1
	}
}
