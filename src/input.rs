use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Keys the editor understands. Everything the terminal sends is folded into
/// one of these before it reaches the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
	Char(u8),
	Ctrl(char),
	Enter,
	Escape,
	Backspace,
	Delete,
	ArrowLeft,
	ArrowRight,
	ArrowUp,
	ArrowDown,
	Home,
	End,
	PageUp,
	PageDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
	Key(Key),
	Resize { cols: u16, rows: u16 },
}

pub struct InputHandler;

impl InputHandler {
	pub fn new() -> Self {
		Self
	}

	pub fn event(&self, event: &Event) -> Option<InputEvent> {
		match event {
			Event::Resize(cols, rows) => Some(InputEvent::Resize { cols: *cols, rows: *rows }),
			Event::Key(key) if key.kind != KeyEventKind::Release => Self::key(key).map(InputEvent::Key),
			_ => None,
		}
	}

	pub fn key(key: &KeyEvent) -> Option<Key> {
		if key.modifiers.contains(KeyModifiers::CONTROL)
			&& let KeyCode::Char(ch) = key.code
		{
			let ch = ch.to_ascii_lowercase();
			// Ctrl-H is the terminal's backspace.
			if ch == 'h' {
				return Some(Key::Backspace);
			}
			return Some(Key::Ctrl(ch));
		}

		let key = match key.code {
			KeyCode::Char(ch) if ch.is_ascii() => Key::Char(ch as u8),
			KeyCode::Char(_) => return None,
			KeyCode::Tab => Key::Char(b'\t'),
			KeyCode::Enter => Key::Enter,
			KeyCode::Esc => Key::Escape,
			KeyCode::Backspace => Key::Backspace,
			KeyCode::Delete => Key::Delete,
			KeyCode::Left => Key::ArrowLeft,
			KeyCode::Right => Key::ArrowRight,
			KeyCode::Up => Key::ArrowUp,
			KeyCode::Down => Key::ArrowDown,
			KeyCode::Home => Key::Home,
			KeyCode::End => Key::End,
			KeyCode::PageUp => Key::PageUp,
			KeyCode::PageDown => Key::PageDown,
			_ => return None,
		};
		Some(key)
	}
}

impl Default for InputHandler {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn control_combinations_are_tagged() {
		let event = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
		assert_eq!(InputHandler::new().event(&event), Some(InputEvent::Key(Key::Ctrl('q'))));
	}

	#[test]
	fn ctrl_h_is_backspace() {
		let key = KeyEvent::new(KeyCode::Char('h'), KeyModifiers::CONTROL);
		assert_eq!(InputHandler::key(&key), Some(Key::Backspace));
	}

	#[test]
	fn tab_and_printable_bytes() {
		let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
		let upper = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
		assert_eq!(InputHandler::key(&tab), Some(Key::Char(b'\t')));
		assert_eq!(InputHandler::key(&upper), Some(Key::Char(b'A')));
	}

	#[test]
	fn non_ascii_input_is_dropped() {
		let key = KeyEvent::new(KeyCode::Char('é'), KeyModifiers::NONE);
		assert_eq!(InputHandler::key(&key), None);
	}

	#[test]
	fn resize_is_forwarded() {
		let event = Event::Resize(80, 24);
		assert_eq!(InputHandler::new().event(&event), Some(InputEvent::Resize { cols: 80, rows: 24 }));
	}
}
