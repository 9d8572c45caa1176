use crate::config::EditorConfig;
use crate::state::EditorState;

pub(super) fn test_state(lines: &[&str]) -> EditorState {
	let mut state = EditorState::new(EditorConfig::default());
	state.load_lines(None, lines.iter().map(|line| line.as_bytes().to_vec()));
	state.viewport.resize(12, 40);
	state
}

pub(super) fn row_text(state: &EditorState, at: usize) -> String {
	let row = state.buffer.row(at).expect("row should exist");
	String::from_utf8(row.chars().to_vec()).expect("test rows are utf-8")
}

pub(super) fn all_rows(state: &EditorState) -> Vec<String> {
	(0..state.buffer.len()).map(|at| row_text(state, at)).collect()
}
