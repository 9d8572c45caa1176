use std::io;
use std::path::PathBuf;
use std::time::Instant;

use crossterm::event;
use thiserror::Error;
use tracing::{info, trace};

use crate::action_handler::ActionHandler;
use crate::config::EditorConfig;
use crate::file_io::{FileIo, FileIoError, FsFileIo};
use crate::input::{InputEvent, InputHandler};
use crate::state::EditorState;
use crate::ui::{Renderer, TerminalSession, TerminalSessionError};

const HELP_MESSAGE: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find";

#[derive(Debug, Error)]
pub enum AppError {
	#[error(transparent)]
	Terminal(#[from] TerminalSessionError),
	#[error("read terminal event failed")]
	ReadEvent {
		#[source]
		source: io::Error,
	},
}

pub struct App {
	state:          EditorState,
	renderer:       Renderer,
	input_handler:  InputHandler,
	action_handler: ActionHandler,
	file_io:        FsFileIo,
}

impl App {
	pub fn new(config: EditorConfig) -> Self {
		let action_handler = ActionHandler::new(config.quit_times);
		Self {
			state: EditorState::new(config),
			renderer: Renderer::new(),
			input_handler: InputHandler::new(),
			action_handler,
			file_io: FsFileIo,
		}
	}

	/// Loads `path` into the buffer. A file that does not exist yet opens as
	/// an empty buffer with that name.
	pub fn open_file(&mut self, path: PathBuf) -> Result<(), FileIoError> {
		info!("open_file: {}", path.display());
		let lines = self.file_io.load_lines(&path)?.unwrap_or_default();
		self.state.load_lines(Some(path), lines);
		Ok(())
	}

	/// Runs until the user quits. Blocks on terminal input between frames.
	pub fn run(mut self) -> Result<(), AppError> {
		let mut session = TerminalSession::enter("edi")?;
		let (rows, cols) = session.window_size()?;
		self.state.viewport.resize(rows, cols);
		self.state.set_status_message(HELP_MESSAGE);

		loop {
			let frame = self.renderer.refresh(&mut self.state, Instant::now());
			session.draw(&frame)?;
			trace!("redraw");

			let event = event::read().map_err(|source| AppError::ReadEvent { source })?;
			match self.input_handler.event(&event) {
				Some(InputEvent::Key(key)) => {
					if self.action_handler.apply(&mut self.state, &self.file_io, key).is_break() {
						break;
					}
				}
				Some(InputEvent::Resize { cols, rows }) => self.state.viewport.resize(rows, cols),
				None => {}
			}
		}

		info!("editor exiting");
		Ok(())
	}
}
