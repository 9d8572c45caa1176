/// Visible window over the buffer, in render coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
	pub row_offset: usize,
	pub col_offset: usize,
	/// Text rows, excluding the status and message lines.
	pub rows:       usize,
	pub cols:       usize,
	/// Render column of the cursor as of the last scroll.
	pub rx:         usize,
}

impl Viewport {
	/// Lines kept for the status bar and the message bar.
	pub const RESERVED_ROWS: u16 = 2;

	pub fn with_window_size(rows: u16, cols: u16) -> Self {
		let mut viewport = Self::default();
		viewport.resize(rows, cols);
		viewport
	}

	pub fn resize(&mut self, rows: u16, cols: u16) {
		self.rows = usize::from(rows.saturating_sub(Self::RESERVED_ROWS));
		self.cols = usize::from(cols);
	}

	/// Moves the offsets just enough for `(cy, rx)` to be visible.
	pub fn scroll_to(&mut self, cy: usize, rx: usize) {
		self.rx = rx;
		if cy < self.row_offset {
			self.row_offset = cy;
		}
		if self.rows > 0 && cy >= self.row_offset + self.rows {
			self.row_offset = cy + 1 - self.rows;
		}
		if rx < self.col_offset {
			self.col_offset = rx;
		}
		if self.cols > 0 && rx >= self.col_offset + self.cols {
			self.col_offset = rx + 1 - self.cols;
		}
	}
}
