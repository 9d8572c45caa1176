use std::ops::ControlFlow;
use std::path::PathBuf;

use tracing::{error, info};

use crate::action::{EditorAction, PromptAction};
use crate::file_io::FileIo;
use crate::input::Key;
use crate::search::SearchEngine;
use crate::state::{EditorState, MoveDirection, PromptKind, PromptState};

pub struct ActionHandler {
	quit_times: u8,
}

impl ActionHandler {
	pub fn new(quit_times: u8) -> Self {
		Self { quit_times }
	}

	pub fn quit_times_remaining(&self) -> u8 {
		self.quit_times
	}

	/// Applies one key. `Break` means the editor should exit.
	pub fn apply(&mut self, state: &mut EditorState, file_io: &impl FileIo, key: Key) -> ControlFlow<()> {
		if state.prompt.is_some() {
			self.handle_prompt_key(state, file_io, key);
			return ControlFlow::Continue(());
		}

		let action = Self::resolve_key(key);
		if action == EditorAction::Quit {
			if state.buffer.is_dirty() && self.quit_times > 0 {
				state.set_status_message(format!(
					"WARNING!!! File has unsaved changes. Press Ctrl-Q {} more times to quit.",
					self.quit_times
				));
				self.quit_times -= 1;
				return ControlFlow::Continue(());
			}
			info!("quit requested");
			return ControlFlow::Break(());
		}

		self.apply_editor_action(state, file_io, action);
		self.quit_times = state.config.quit_times;
		ControlFlow::Continue(())
	}

	fn resolve_key(key: Key) -> EditorAction {
		match key {
			Key::Ctrl('q') => EditorAction::Quit,
			Key::Ctrl('s') => EditorAction::Save,
			Key::Ctrl('f') => EditorAction::Find,
			Key::Ctrl('l') => EditorAction::Ignore,
			Key::Ctrl(ch) if ch.is_ascii_lowercase() => EditorAction::InsertChar(ch as u8 & 0x1f),
			Key::Ctrl(_) | Key::Escape => EditorAction::Ignore,
			Key::Char(byte) => EditorAction::InsertChar(byte),
			Key::Enter => EditorAction::InsertNewline,
			Key::Backspace => EditorAction::DeleteBackward,
			Key::Delete => EditorAction::DeleteForward,
			Key::ArrowLeft => EditorAction::Move(MoveDirection::Left),
			Key::ArrowRight => EditorAction::Move(MoveDirection::Right),
			Key::ArrowUp => EditorAction::Move(MoveDirection::Up),
			Key::ArrowDown => EditorAction::Move(MoveDirection::Down),
			Key::Home => EditorAction::MoveLineStart,
			Key::End => EditorAction::MoveLineEnd,
			Key::PageUp => EditorAction::PageUp,
			Key::PageDown => EditorAction::PageDown,
		}
	}

	fn apply_editor_action(&mut self, state: &mut EditorState, file_io: &impl FileIo, action: EditorAction) {
		match action {
			EditorAction::InsertChar(byte) => state.insert_char_at_cursor(byte),
			EditorAction::InsertNewline => state.insert_newline_at_cursor(),
			EditorAction::DeleteBackward => state.delete_char_at_cursor(),
			EditorAction::DeleteForward => {
				state.move_cursor(MoveDirection::Right);
				state.delete_char_at_cursor();
			}
			EditorAction::Move(direction) => state.move_cursor(direction),
			EditorAction::MoveLineStart => state.move_cursor_line_start(),
			EditorAction::MoveLineEnd => state.move_cursor_line_end(),
			EditorAction::PageUp => state.page_up(),
			EditorAction::PageDown => state.page_down(),
			EditorAction::Save => self.save(state, file_io),
			EditorAction::Find => {
				state.prompt = Some(PromptState { kind: PromptKind::Find { saved: state.save_view() }, input: String::new() });
			}
			EditorAction::Quit | EditorAction::Ignore => {}
		}
	}

	fn resolve_prompt_key(key: Key) -> PromptAction {
		match key {
			Key::Backspace | Key::Delete => PromptAction::Pop,
			Key::Escape => PromptAction::Cancel,
			Key::Enter => PromptAction::Submit,
			Key::Char(byte) if byte.is_ascii_graphic() || byte == b' ' => PromptAction::Push(byte),
			_ => PromptAction::Other,
		}
	}

	fn handle_prompt_key(&mut self, state: &mut EditorState, file_io: &impl FileIo, key: Key) {
		let Some(mut prompt) = state.prompt.take() else {
			return;
		};

		let action = Self::resolve_prompt_key(key);
		match action {
			PromptAction::Push(byte) => prompt.input.push(char::from(byte)),
			PromptAction::Pop => {
				prompt.input.pop();
			}
			PromptAction::Cancel | PromptAction::Submit | PromptAction::Other => {}
		}

		let finished = match action {
			PromptAction::Cancel => Some(None),
			PromptAction::Submit if !prompt.input.is_empty() => Some(Some(prompt.input.clone())),
			_ => None,
		};

		if let PromptKind::Find { .. } = prompt.kind {
			SearchEngine::step(state, &prompt.input, key);
		}

		let Some(result) = finished else {
			state.prompt = Some(prompt);
			return;
		};
		state.set_status_message("");

		match (prompt.kind, result) {
			(PromptKind::SaveAs, Some(name)) => {
				state.set_filename(PathBuf::from(name));
				self.save(state, file_io);
			}
			(PromptKind::SaveAs, None) => state.set_status_message("Save aborted"),
			(PromptKind::Find { saved }, None) => state.restore_view(saved),
			(PromptKind::Find { .. }, Some(_)) => {}
		}
	}

	fn save(&mut self, state: &mut EditorState, file_io: &impl FileIo) {
		let Some(path) = state.filename.clone() else {
			state.prompt = Some(PromptState { kind: PromptKind::SaveAs, input: String::new() });
			return;
		};

		let bytes = state.buffer.linearize();
		match file_io.save(&path, &bytes) {
			Ok(written) => {
				state.buffer.mark_clean();
				state.set_status_message(format!("{} bytes written to disk", written));
			}
			Err(err) => {
				error!("save failed: {}", err);
				state.set_status_message(format!("Can't save! I/O error: {}", err));
			}
		}
	}
}
