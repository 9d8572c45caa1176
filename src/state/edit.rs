use tracing::{debug, trace};

use super::EditorState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
	Left,
	Right,
	Up,
	Down,
}

impl EditorState {
	pub fn insert_char_at_cursor(&mut self, byte: u8) {
		if self.cursor.cy == self.buffer.len() {
			let at = self.buffer.len();
			if let Err(err) = self.buffer.insert_row(at, b"") {
				debug!("insert_char_at_cursor: {}", err);
				return;
			}
		}
		self.buffer.insert_char(self.cursor.cy, self.cursor.cx, byte);
		self.cursor.cx += 1;
	}

	/// Splits the current row at the cursor, or opens an empty row above it
	/// when the cursor is at column 0.
	pub fn insert_newline_at_cursor(&mut self) {
		let cy = self.cursor.cy;
		if self.cursor.cx == 0 {
			if let Err(err) = self.buffer.insert_row(cy, b"") {
				debug!("insert_newline_at_cursor: {}", err);
				return;
			}
		} else {
			let Some(tail) = self.buffer.truncate_row(cy, self.cursor.cx) else {
				debug!("insert_newline_at_cursor: row {} out of range", cy);
				return;
			};
			if let Err(err) = self.buffer.insert_row(cy + 1, &tail) {
				debug!("insert_newline_at_cursor: {}", err);
				return;
			}
		}
		self.cursor.cy = cy + 1;
		self.cursor.cx = 0;
	}

	/// Backspace: removes the character before the cursor, or joins the row
	/// onto the previous one when the cursor is at column 0.
	pub fn delete_char_at_cursor(&mut self) {
		let (cx, cy) = (self.cursor.cx, self.cursor.cy);
		if cy >= self.buffer.len() || (cx == 0 && cy == 0) {
			return;
		}

		if cx > 0 {
			self.buffer.delete_char(cy, cx - 1);
			self.cursor.cx = cx - 1;
			return;
		}

		let Some(current) = self.buffer.row(cy).map(|row| row.chars().to_vec()) else {
			return;
		};
		let join_at = self.buffer.row(cy - 1).map(|row| row.size()).unwrap_or(0);
		self.buffer.append_string(cy - 1, &current);
		self.buffer.delete_row(cy);
		self.cursor.cy = cy - 1;
		self.cursor.cx = join_at;
		trace!("joined row {} into row {}", cy, cy - 1);
	}

	pub fn move_cursor(&mut self, direction: MoveDirection) {
		let row_size = self.buffer.row(self.cursor.cy).map(|row| row.size());
		match direction {
			MoveDirection::Left => {
				if self.cursor.cx > 0 {
					self.cursor.cx -= 1;
				} else if self.cursor.cy > 0 {
					self.cursor.cy -= 1;
					self.cursor.cx = self.buffer.row(self.cursor.cy).map(|row| row.size()).unwrap_or(0);
				}
			}
			MoveDirection::Right => match row_size {
				Some(size) if self.cursor.cx < size => self.cursor.cx += 1,
				Some(size) if self.cursor.cx == size => {
					self.cursor.cy += 1;
					self.cursor.cx = 0;
				}
				_ => {}
			},
			MoveDirection::Up => {
				self.cursor.cy = self.cursor.cy.saturating_sub(1);
			}
			MoveDirection::Down => {
				if self.cursor.cy < self.buffer.len() {
					self.cursor.cy += 1;
				}
			}
		}
		self.clamp_cursor_to_row();
	}

	pub fn move_cursor_line_start(&mut self) {
		self.cursor.cx = 0;
	}

	pub fn move_cursor_line_end(&mut self) {
		self.cursor.cx = self.buffer.row(self.cursor.cy).map(|row| row.size()).unwrap_or(0);
	}

	pub fn page_up(&mut self) {
		self.cursor.cy = self.viewport.row_offset;
		for _ in 0..self.viewport.rows {
			self.move_cursor(MoveDirection::Up);
		}
	}

	pub fn page_down(&mut self) {
		let bottom = (self.viewport.row_offset + self.viewport.rows).saturating_sub(1);
		self.cursor.cy = bottom.min(self.buffer.len());
		for _ in 0..self.viewport.rows {
			self.move_cursor(MoveDirection::Down);
		}
	}

	fn clamp_cursor_to_row(&mut self) {
		let row_size = self.buffer.row(self.cursor.cy).map(|row| row.size()).unwrap_or(0);
		self.cursor.cx = self.cursor.cx.min(row_size);
	}
}
