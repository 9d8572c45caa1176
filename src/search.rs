//! Incremental search over the rendered rows.
//!
//! The engine is stepped once per prompt keystroke. Each step first puts back
//! the highlight of the previous match, then looks for the query starting
//! after the last matching row and wrapping around the buffer.

use tracing::{debug, trace};

use crate::input::Key;
use crate::state::EditorState;
use crate::syntax::Highlight;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchDirection {
	#[default]
	Forward,
	Backward,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SavedHighlight {
	row:       usize,
	highlight: Vec<Highlight>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchEngine {
	last_match: Option<usize>,
	direction:  SearchDirection,
	saved:      Option<SavedHighlight>,
}

impl SearchEngine {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn last_match(&self) -> Option<usize> {
		self.last_match
	}

	pub fn direction(&self) -> SearchDirection {
		self.direction
	}

	pub fn has_overlay(&self) -> bool {
		self.saved.is_some()
	}

	pub fn reset(&mut self) {
		self.last_match = None;
		self.direction = SearchDirection::Forward;
	}

	/// Feeds one prompt key. `query` is the prompt text after the key was
	/// applied.
	pub fn step(state: &mut EditorState, query: &str, key: Key) {
		if let Some(saved) = state.search.saved.take() {
			state.buffer.restore_highlight(saved.row, saved.highlight);
		}

		match key {
			Key::Enter | Key::Escape => {
				state.search.reset();
				return;
			}
			Key::ArrowRight | Key::ArrowDown => state.search.direction = SearchDirection::Forward,
			Key::ArrowLeft | Key::ArrowUp => state.search.direction = SearchDirection::Backward,
			_ => state.search.reset(),
		}

		if state.search.last_match.is_none() {
			state.search.direction = SearchDirection::Forward;
		}
		let Some((row, render_col)) = state.search.find_next(state, query.as_bytes()) else {
			trace!("search: no match for {:?}", query);
			return;
		};

		state.search.last_match = Some(row);
		state.cursor.cy = row;
		state.cursor.cx = state.buffer.rx_to_cx(row, render_col);
		// Past the end so that the next scroll puts the match on the top line.
		state.viewport.row_offset = state.buffer.len();

		let span = render_col..render_col + query.len();
		if let Some(highlight) = state.buffer.overlay_highlight(row, span, Highlight::Match) {
			state.search.saved = Some(SavedHighlight { row, highlight });
		}
		debug!("search: {:?} matched row {} column {}", query, row, render_col);
	}

	fn find_next(&self, state: &EditorState, query: &[u8]) -> Option<(usize, usize)> {
		let len = state.buffer.len();
		if len == 0 {
			return None;
		}

		let mut current = self.last_match;
		for _ in 0..len {
			let next = match (current, self.direction) {
				(None, _) => 0,
				(Some(idx), SearchDirection::Forward) => (idx + 1) % len,
				(Some(0), SearchDirection::Backward) => len - 1,
				(Some(idx), SearchDirection::Backward) => (idx - 1).min(len - 1),
			};
			current = Some(next);
			let render = state.buffer.row(next)?.render();
			if let Some(col) = find_bytes(render, query) {
				return Some((next, col));
			}
		}
		None
	}
}

/// First occurrence of `needle`. An empty needle matches at column 0.
fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
	if needle.is_empty() {
		return Some(0);
	}
	if needle.len() > haystack.len() {
		return None;
	}
	haystack.windows(needle.len()).position(|window| window == needle)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::EditorConfig;

	fn state_with(lines: &[&str]) -> EditorState {
		let mut state = EditorState::new(EditorConfig::default());
		state.load_lines(None, lines.iter().map(|line| line.as_bytes().to_vec()));
		state.viewport.resize(10, 40);
		state
	}

	fn type_query(state: &mut EditorState, query: &str) {
		let mut typed = String::new();
		for ch in query.chars() {
			typed.push(ch);
			SearchEngine::step(state, &typed, Key::Char(ch as u8));
		}
	}

	#[test]
	fn finds_query_and_wraps_without_losing_last_match() {
		let mut state = state_with(&["ab", "cd"]);
		type_query(&mut state, "cd");
		assert_eq!(state.search.last_match(), Some(1));
		assert_eq!(state.cursor.cy, 1);

		SearchEngine::step(&mut state, "cd", Key::ArrowDown);
		assert_eq!(state.search.last_match(), Some(1));
		assert_eq!(state.cursor.cy, 1);
	}

	#[test]
	fn match_is_overlaid_then_restored_on_exit() {
		let mut state = state_with(&["int x = 10;"]);
		state.set_filename("a.c".into());
		let before = state.buffer.row(0).expect("row").highlight().to_vec();

		type_query(&mut state, "10");
		let overlaid = state.buffer.row(0).expect("row").highlight().to_vec();
		assert_eq!(&overlaid[8..10], &[Highlight::Match, Highlight::Match]);
		assert!(state.search.has_overlay());

		SearchEngine::step(&mut state, "10", Key::Escape);
		assert_eq!(state.buffer.row(0).expect("row").highlight(), before.as_slice());
		assert!(!state.search.has_overlay());
		assert_eq!(state.search.last_match(), None);
	}

	#[test]
	fn arrows_change_direction() {
		let mut state = state_with(&["x1", "x2", "x3"]);
		type_query(&mut state, "x");
		assert_eq!(state.search.last_match(), Some(0));

		SearchEngine::step(&mut state, "x", Key::ArrowUp);
		assert_eq!(state.search.direction(), SearchDirection::Backward);
		assert_eq!(state.search.last_match(), Some(2));

		SearchEngine::step(&mut state, "x", Key::ArrowLeft);
		assert_eq!(state.search.last_match(), Some(1));

		SearchEngine::step(&mut state, "x", Key::ArrowRight);
		assert_eq!(state.search.last_match(), Some(2));
	}

	#[test]
	fn editing_query_restarts_from_top() {
		let mut state = state_with(&["foo", "bar", "foo bar"]);
		type_query(&mut state, "foo");
		SearchEngine::step(&mut state, "foo", Key::ArrowDown);
		assert_eq!(state.search.last_match(), Some(2));

		SearchEngine::step(&mut state, "fo", Key::Backspace);
		assert_eq!(state.search.last_match(), Some(0));
		assert_eq!(state.search.direction(), SearchDirection::Forward);
	}

	#[test]
	fn match_after_tab_maps_back_to_char_index() {
		let mut state = state_with(&["\tneedle"]);
		type_query(&mut state, "needle");
		assert_eq!(state.cursor, crate::state::CursorState { cx: 1, cy: 0 });
	}

	#[test]
	fn erasing_query_restarts_at_first_row() {
		let mut state = state_with(&["ab", "xcd"]);
		type_query(&mut state, "c");
		assert_eq!(state.cursor, crate::state::CursorState { cx: 1, cy: 1 });
		assert_eq!(state.search.last_match(), Some(1));

		SearchEngine::step(&mut state, "", Key::Backspace);
		assert_eq!(state.cursor, crate::state::CursorState { cx: 0, cy: 0 });
		assert_eq!(state.search.last_match(), Some(0));
		assert_eq!(state.buffer.row(0).expect("row").highlight(), &[Highlight::Normal; 2]);
	}

	#[test]
	fn missing_query_leaves_cursor_alone() {
		let mut state = state_with(&["alpha", "beta"]);
		state.cursor.cy = 1;
		state.cursor.cx = 2;
		type_query(&mut state, "zeta");
		assert_eq!(state.search.last_match(), None);
		assert_eq!(state.cursor.cy, 1);
		assert_eq!(state.cursor.cx, 2);
	}
}
