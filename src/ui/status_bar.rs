use std::time::Instant;

use crate::state::EditorState;

pub(super) struct StatusBarView {
	left:  String,
	right: String,
}

impl StatusBarView {
	pub(super) fn from_state(state: &EditorState) -> Self {
		let name = state
			.file_name()
			.map(|path| path.display().to_string())
			.unwrap_or_else(|| "[No Name]".to_string());
		let name = name.chars().take(20).collect::<String>();
		let modified = if state.buffer.is_dirty() { "(modified)" } else { "" };
		let language = state.buffer.syntax().map(|syntax| syntax.name).unwrap_or("no ft");

		Self {
			left:  format!("{} - {} lines {}", name, state.buffer.len(), modified),
			right: format!("{} | {}/{}", language, state.cursor.cy + 1, state.buffer.len()),
		}
	}

	/// Left part clipped to `width`, right part flush with the right edge when
	/// it fits.
	pub(super) fn compose(&self, width: usize) -> String {
		let mut line = self.left.chars().take(width).collect::<String>();
		let mut len = line.chars().count();
		let right_len = self.right.chars().count();
		while len < width {
			if width - len == right_len {
				line.push_str(&self.right);
				break;
			}
			line.push(' ');
			len += 1;
		}
		line
	}
}

/// Prompt text while a prompt is open, otherwise the status message if it
/// has not expired.
pub(super) fn message_line(state: &EditorState, now: Instant, width: usize) -> String {
	let text = match &state.prompt {
		Some(prompt) => prompt.label(),
		None => state.status.visible_text(now, state.message_timeout()).unwrap_or_default().to_string(),
	};
	text.chars().take(width).collect()
}
