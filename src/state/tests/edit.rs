use super::common::{all_rows, row_text, test_state};
use crate::state::{CursorState, MoveDirection};

#[test]
fn typing_on_virtual_row_appends_a_row() {
	let mut state = test_state(&[]);
	state.insert_char_at_cursor(b'h');
	state.insert_char_at_cursor(b'i');
	assert_eq!(all_rows(&state), vec!["hi"]);
	assert_eq!(state.cursor, CursorState { cx: 2, cy: 0 });
	assert!(state.buffer.is_dirty());
}

#[test]
fn newline_at_column_zero_opens_row_above() {
	let mut state = test_state(&["abc"]);
	state.insert_newline_at_cursor();
	assert_eq!(all_rows(&state), vec!["", "abc"]);
	assert_eq!(state.cursor, CursorState { cx: 0, cy: 1 });
}

#[test]
fn newline_mid_row_splits_it() {
	let mut state = test_state(&["abcd", "z"]);
	state.cursor.cx = 2;
	state.insert_newline_at_cursor();
	assert_eq!(all_rows(&state), vec!["ab", "cd", "z"]);
	assert_eq!(state.cursor, CursorState { cx: 0, cy: 1 });
}

#[test]
fn split_then_backspace_rejoins() {
	let mut state = test_state(&["abcd"]);
	state.cursor.cx = 2;
	state.insert_newline_at_cursor();
	state.delete_char_at_cursor();
	assert_eq!(all_rows(&state), vec!["abcd"]);
	assert_eq!(state.cursor, CursorState { cx: 2, cy: 0 });
}

#[test]
fn empty_row_round_trip_via_up_end_backspace() {
	let mut state = test_state(&["first", "second"]);
	state.cursor.cy = 1;
	state.insert_newline_at_cursor();
	assert_eq!(all_rows(&state), vec!["first", "", "second"]);

	state.move_cursor(MoveDirection::Up);
	state.move_cursor_line_end();
	state.delete_char_at_cursor();
	assert_eq!(all_rows(&state), vec!["first", "second"]);
	assert_eq!(state.cursor, CursorState { cx: 5, cy: 0 });
}

#[test]
fn backspace_at_document_start_is_noop() {
	let mut state = test_state(&["only"]);
	state.buffer.mark_clean();
	state.delete_char_at_cursor();
	assert_eq!(all_rows(&state), vec!["only"]);
	assert_eq!(state.cursor, CursorState::default());
	assert!(!state.buffer.is_dirty());
}

#[test]
fn backspace_on_virtual_row_is_noop() {
	let mut state = test_state(&["a"]);
	state.cursor.cy = 1;
	state.delete_char_at_cursor();
	assert_eq!(all_rows(&state), vec!["a"]);
	assert_eq!(state.cursor.cy, 1);
}

#[test]
fn backspace_removes_previous_character() {
	let mut state = test_state(&["abc"]);
	state.cursor.cx = 2;
	state.delete_char_at_cursor();
	assert_eq!(row_text(&state, 0), "ac");
	assert_eq!(state.cursor.cx, 1);
}

#[test]
fn left_at_column_zero_wraps_to_previous_row_end() {
	let mut state = test_state(&["abc", "d"]);
	state.cursor.cy = 1;
	state.move_cursor(MoveDirection::Left);
	assert_eq!(state.cursor, CursorState { cx: 3, cy: 0 });
}

#[test]
fn right_at_row_end_wraps_to_next_row_start() {
	let mut state = test_state(&["ab", "cd"]);
	state.cursor.cx = 2;
	state.move_cursor(MoveDirection::Right);
	assert_eq!(state.cursor, CursorState { cx: 0, cy: 1 });
}

#[test]
fn vertical_move_snaps_to_shorter_row() {
	let mut state = test_state(&["abcdef", "xy", "abcdef"]);
	state.cursor.cx = 5;
	state.move_cursor(MoveDirection::Down);
	assert_eq!(state.cursor, CursorState { cx: 2, cy: 1 });
	state.move_cursor(MoveDirection::Down);
	assert_eq!(state.cursor, CursorState { cx: 2, cy: 2 });
	state.move_cursor(MoveDirection::Down);
	assert_eq!(state.cursor, CursorState { cx: 0, cy: 3 });
	state.move_cursor(MoveDirection::Down);
	assert_eq!(state.cursor.cy, 3);
}

#[test]
fn page_down_then_up_moves_by_screens() {
	let lines = (0..50).map(|n| n.to_string()).collect::<Vec<_>>();
	let refs = lines.iter().map(String::as_str).collect::<Vec<_>>();
	let mut state = test_state(&refs);
	let rows = state.viewport.rows;

	state.page_down();
	assert_eq!(state.cursor.cy, 2 * rows - 1);
	state.scroll();
	state.page_up();
	assert_eq!(state.cursor.cy, state.viewport.row_offset.saturating_sub(rows));
}

#[test]
fn home_and_end() {
	let mut state = test_state(&["hello"]);
	state.move_cursor_line_end();
	assert_eq!(state.cursor.cx, 5);
	state.move_cursor_line_start();
	assert_eq!(state.cursor.cx, 0);
}
