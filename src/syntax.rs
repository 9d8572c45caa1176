//! Per-row syntax classification.
//!
//! Every row is scanned on its own: a string or comment left open at the end
//! of a row does not colour the next one. Multi-line constructs are not
//! tracked.

use crossterm::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
	#[default]
	Normal,
	Comment,
	String,
	Number,
	Match,
}

impl Highlight {
	/// Foreground colour for the tag, `None` meaning the terminal default.
	pub fn color(self) -> Option<Color> {
		match self {
			Highlight::Normal => None,
			Highlight::Comment => Some(Color::DarkCyan),
			Highlight::String => Some(Color::DarkMagenta),
			Highlight::Number => Some(Color::DarkRed),
			Highlight::Match => Some(Color::DarkBlue),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxFlags {
	pub numbers: bool,
	pub strings: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Syntax {
	pub name:           &'static str,
	/// Entries starting with `.` match the file extension, others match
	/// anywhere in the file name.
	pub file_match:     &'static [&'static str],
	pub comment_marker: Option<&'static str>,
	pub flags:          SyntaxFlags,
}

const HIGHLIGHT_ALL: SyntaxFlags = SyntaxFlags { numbers: true, strings: true };

pub static SYNTAX_DATABASE: &[Syntax] = &[
	Syntax {
		name:           "c",
		file_match:     &[".c", ".h", ".cpp"],
		comment_marker: Some("//"),
		flags:          HIGHLIGHT_ALL,
	},
	Syntax { name: "rust", file_match: &[".rs"], comment_marker: Some("//"), flags: HIGHLIGHT_ALL },
	Syntax { name: "python", file_match: &[".py"], comment_marker: Some("#"), flags: HIGHLIGHT_ALL },
	Syntax {
		name:           "shell",
		file_match:     &[".sh", "Makefile"],
		comment_marker: Some("#"),
		flags:          SyntaxFlags { numbers: false, strings: true },
	},
];

/// Picks the first descriptor whose pattern matches `file_name`.
pub fn select_syntax(file_name: &str) -> Option<&'static Syntax> {
	let extension = file_name.rfind('.').map(|idx| &file_name[idx..]);
	SYNTAX_DATABASE.iter().find(|syntax| {
		syntax.file_match.iter().any(|pattern| {
			if pattern.starts_with('.') {
				extension == Some(*pattern)
			} else {
				file_name.contains(pattern)
			}
		})
	})
}

pub fn is_separator(byte: u8) -> bool {
	byte.is_ascii_whitespace() || byte == b'\x0b' || byte == b'\0' || b",.()+-/*=~%<>[];".contains(&byte)
}

/// Classifies every byte of `render`. The result always has `render.len()`
/// entries.
pub fn highlight_row(render: &[u8], syntax: Option<&Syntax>) -> Vec<Highlight> {
	let mut highlight = vec![Highlight::Normal; render.len()];
	let Some(syntax) = syntax else {
		return highlight;
	};

	let comment_marker = syntax.comment_marker.map(str::as_bytes).filter(|marker| !marker.is_empty());
	let mut prev_was_separator = true;
	let mut in_string: Option<u8> = None;
	let mut idx = 0;

	while idx < render.len() {
		let byte = render[idx];
		let prev_highlight = if idx > 0 { highlight[idx - 1] } else { Highlight::Normal };

		if let Some(marker) = comment_marker
			&& in_string.is_none()
			&& render[idx..].starts_with(marker)
		{
			highlight[idx..].fill(Highlight::Comment);
			break;
		}

		if syntax.flags.strings {
			if let Some(quote) = in_string {
				highlight[idx] = Highlight::String;
				if byte == b'\\' && idx + 1 < render.len() {
					highlight[idx + 1] = Highlight::String;
					idx += 2;
					continue;
				}
				if byte == quote {
					in_string = None;
				}
				idx += 1;
				prev_was_separator = true;
				continue;
			} else if byte == b'"' || byte == b'\'' {
				in_string = Some(byte);
				highlight[idx] = Highlight::String;
				idx += 1;
				continue;
			}
		}

		if syntax.flags.numbers
			&& ((byte.is_ascii_digit() && (prev_was_separator || prev_highlight == Highlight::Number))
				|| (byte == b'.' && prev_highlight == Highlight::Number))
		{
			highlight[idx] = Highlight::Number;
			idx += 1;
			prev_was_separator = false;
			continue;
		}

		prev_was_separator = is_separator(byte);
		idx += 1;
	}

	highlight
}
