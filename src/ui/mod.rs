mod frame;
mod status_bar;
mod terminal_session;

use std::time::Instant;

use crossterm::style::Color;

pub use frame::{Frame, FrameOp};
use status_bar::{StatusBarView, message_line};
pub use terminal_session::{TerminalSession, TerminalSessionError, write_frame};

use crate::state::{EditorState, Row};
use crate::syntax::Highlight;

pub struct Renderer {
	welcome: String,
}

impl Renderer {
	pub fn new() -> Self {
		Self { welcome: format!("Edi editor -- version {}", env!("CARGO_PKG_VERSION")) }
	}

	/// Scrolls the viewport to the cursor and draws a full frame.
	pub fn refresh(&self, state: &mut EditorState, now: Instant) -> Frame {
		state.scroll();

		let mut frame = Frame::new();
		frame.push(FrameOp::HideCursor);
		frame.push(FrameOp::MoveCursor { row: 0, col: 0 });

		self.draw_rows(&mut frame, state);
		draw_status_bar(&mut frame, state);
		frame.push(FrameOp::ClearLine);
		frame.push_str(&message_line(state, now, state.viewport.cols));

		let viewport = &state.viewport;
		let row = state.cursor.cy.saturating_sub(viewport.row_offset);
		let col = viewport.rx.saturating_sub(viewport.col_offset);
		frame.push(FrameOp::MoveCursor { row: clamp_u16(row), col: clamp_u16(col) });
		frame.push(FrameOp::ShowCursor);
		frame
	}

	fn draw_rows(&self, frame: &mut Frame, state: &EditorState) {
		let viewport = &state.viewport;
		for y in 0..viewport.rows {
			let file_row = y + viewport.row_offset;
			match state.buffer.row(file_row) {
				Some(row) => draw_row(frame, row, viewport.col_offset, viewport.cols),
				None if state.buffer.is_empty() && y == viewport.rows / 3 => {
					self.draw_welcome(frame, viewport.cols);
				}
				None => frame.push_str("~"),
			}
			frame.push(FrameOp::ClearLine);
			frame.push_str("\r\n");
		}
	}

	fn draw_welcome(&self, frame: &mut Frame, width: usize) {
		let welcome = &self.welcome[..self.welcome.len().min(width)];
		let mut padding = (width - welcome.len()) / 2;
		if padding > 0 {
			frame.push_str("~");
			padding -= 1;
		}
		frame.push_str(&" ".repeat(padding));
		frame.push_str(welcome);
	}
}

impl Default for Renderer {
	fn default() -> Self {
		Self::new()
	}
}

/// Emits the visible slice of `row`, switching colour only where the
/// highlight tag changes.
fn draw_row(frame: &mut Frame, row: &Row, col_offset: usize, width: usize) {
	let render = row.render();
	let highlight = row.highlight();
	let start = col_offset.min(render.len());
	let end = col_offset.saturating_add(width).min(render.len());
	let mut current: Option<Color> = None;
	let mut run = Vec::new();

	for idx in start..end {
		let byte = render[idx];
		if byte.is_ascii_control() {
			let symbol = if byte <= 26 { b'@' + byte } else { b'?' };
			flush_run(frame, &mut run);
			frame.push(FrameOp::SetInverse);
			frame.push_bytes(&[symbol]);
			frame.push(FrameOp::ResetStyle);
			if let Some(color) = current {
				frame.push(FrameOp::SetColor(color));
			}
			continue;
		}

		let color = highlight.get(idx).copied().unwrap_or(Highlight::Normal).color();
		if color != current {
			flush_run(frame, &mut run);
			match color {
				Some(color) => frame.push(FrameOp::SetColor(color)),
				None => frame.push(FrameOp::ResetColor),
			}
			current = color;
		}
		run.push(byte);
	}

	flush_run(frame, &mut run);
	if current.is_some() {
		frame.push(FrameOp::ResetColor);
	}
}

fn flush_run(frame: &mut Frame, run: &mut Vec<u8>) {
	frame.push_bytes(run);
	run.clear();
}

fn draw_status_bar(frame: &mut Frame, state: &EditorState) {
	let status = StatusBarView::from_state(state);
	frame.push(FrameOp::SetInverse);
	frame.push_str(&status.compose(state.viewport.cols));
	frame.push(FrameOp::ResetStyle);
	frame.push_str("\r\n");
}

fn clamp_u16(value: usize) -> u16 {
	u16::try_from(value).unwrap_or(u16::MAX)
}
