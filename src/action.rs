use crate::state::MoveDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
	InsertChar(u8),
	InsertNewline,
	DeleteBackward,
	DeleteForward,
	Move(MoveDirection),
	MoveLineStart,
	MoveLineEnd,
	PageUp,
	PageDown,
	Save,
	Find,
	Quit,
	Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAction {
	Push(u8),
	Pop,
	Cancel,
	Submit,
	/// Keys that leave the text alone but still step the search engine.
	Other,
}
