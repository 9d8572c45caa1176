use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetForegroundColor};
use crossterm::terminal::{
	Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use crossterm::{execute, queue};
use thiserror::Error;

use super::frame::{Frame, FrameOp};

#[derive(Debug, Error)]
pub enum TerminalSessionError {
	#[error("enable raw mode failed")]
	EnableRawMode {
		#[source]
		source: io::Error,
	},
	#[error("enter alternate screen failed")]
	EnterAlternateScreen {
		#[source]
		source: io::Error,
	},
	#[error("query window size failed")]
	WindowSize {
		#[source]
		source: io::Error,
	},
	#[error("terminal draw failed")]
	Draw {
		#[source]
		source: io::Error,
	},
}

struct TerminalModeGuard;

impl Drop for TerminalModeGuard {
	fn drop(&mut self) {
		let _ = disable_raw_mode();
		let mut stdout = io::stdout();
		let _ = execute!(stdout, Clear(ClearType::All), Show, LeaveAlternateScreen);
	}
}

/// Raw-mode terminal. Cooked mode is restored when the session is dropped.
pub struct TerminalSession {
	stdout:      io::Stdout,
	_mode_guard: TerminalModeGuard,
}

impl TerminalSession {
	pub fn enter(title: &str) -> Result<Self, TerminalSessionError> {
		enable_raw_mode().map_err(|source| TerminalSessionError::EnableRawMode { source })?;
		let mode_guard = TerminalModeGuard;
		let mut stdout = io::stdout();
		execute!(stdout, EnterAlternateScreen, SetTitle(title))
			.map_err(|source| TerminalSessionError::EnterAlternateScreen { source })?;
		Ok(Self { stdout, _mode_guard: mode_guard })
	}

	/// `(rows, cols)` of the terminal window.
	pub fn window_size(&self) -> Result<(u16, u16), TerminalSessionError> {
		let (cols, rows) =
			crossterm::terminal::size().map_err(|source| TerminalSessionError::WindowSize { source })?;
		Ok((rows, cols))
	}

	pub fn draw(&mut self, frame: &Frame) -> Result<(), TerminalSessionError> {
		write_frame(&mut self.stdout, frame).map_err(|source| TerminalSessionError::Draw { source })
	}
}

/// Serializes `frame` as terminal escape sequences and flushes once.
pub fn write_frame<W: Write>(out: &mut W, frame: &Frame) -> io::Result<()> {
	for op in frame.ops() {
		match op {
			FrameOp::Text(text) => queue!(out, Print(text))?,
			FrameOp::HideCursor => queue!(out, Hide)?,
			FrameOp::ShowCursor => queue!(out, Show)?,
			FrameOp::MoveCursor { row, col } => queue!(out, MoveTo(*col, *row))?,
			FrameOp::SetColor(color) => queue!(out, SetForegroundColor(*color))?,
			FrameOp::ResetColor => queue!(out, SetForegroundColor(Color::Reset))?,
			FrameOp::SetInverse => queue!(out, SetAttribute(Attribute::Reverse))?,
			FrameOp::ResetStyle => queue!(out, SetAttribute(Attribute::Reset))?,
			FrameOp::ClearLine => queue!(out, Clear(ClearType::UntilNewLine))?,
		}
	}
	out.flush()
}
