use crossterm::style::Color;

/// One terminal instruction. A frame is an ordered list of these; the
/// terminal session turns them into escape sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameOp {
	Text(String),
	HideCursor,
	ShowCursor,
	MoveCursor { row: u16, col: u16 },
	SetColor(Color),
	ResetColor,
	SetInverse,
	/// Clears colours and attributes.
	ResetStyle,
	ClearLine,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
	ops: Vec<FrameOp>,
}

impl Frame {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn ops(&self) -> &[FrameOp] {
		&self.ops
	}

	pub fn push(&mut self, op: FrameOp) {
		if let FrameOp::Text(text) = &op {
			self.push_str(text);
			return;
		}
		self.ops.push(op);
	}

	/// Appends text, merging with a preceding text op.
	pub fn push_str(&mut self, text: &str) {
		if text.is_empty() {
			return;
		}
		if let Some(FrameOp::Text(last)) = self.ops.last_mut() {
			last.push_str(text);
		} else {
			self.ops.push(FrameOp::Text(text.to_string()));
		}
	}

	pub fn push_bytes(&mut self, bytes: &[u8]) {
		self.push_str(&String::from_utf8_lossy(bytes));
	}

	/// All text of the frame with the control ops dropped.
	pub fn plain_text(&self) -> String {
		self.ops
			.iter()
			.filter_map(|op| match op {
				FrameOp::Text(text) => Some(text.as_str()),
				_ => None,
			})
			.collect()
	}
}
