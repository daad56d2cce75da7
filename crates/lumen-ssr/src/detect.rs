//! Interpolation point classification.
//!
//! This is a bounded heuristic over the markup emitted so far, not a markup
//! parser. It assumes one interpolation per attribute value, placed right
//! after the `=` and optional opening quote. Any attribute whose name contains
//! `on` is treated as an event handler, including names such as `content`.
//!
//! Only the text after the last `<` is inspected, and a `>` there means the tag
//! is closed. An unescaped `>` inside an earlier attribute value of the same
//! tag therefore hides the tag: in `<a title="1>0" href="{}">` the
//! interpolation is classified as content.

use std::sync::LazyLock;

use regex::Regex;

static ATTRIBUTE_TAIL: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r#"([a-zA-Z_:][-a-zA-Z0-9_:.]*)\s*=\s*["']?$"#).unwrap());

/// What kind of position an interpolation occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Position {
	/// Between tags, or inside a tag but not in an attribute value.
	Content,
	/// Inside the value of an ordinary attribute.
	Attribute {
		/// Attribute name as written.
		name: String,
	},
	/// Inside the value of an event handler attribute.
	EventAttribute {
		/// Attribute name as written.
		name: String,
	},
}

/// Classifies the interpolation point that follows `html`.
pub fn classify(html: &str) -> Position {
	let Some(open) = html.rfind('<') else {
		return Position::Content;
	};
	let tail = &html[open..];
	if tail.contains('>') {
		return Position::Content;
	}

	match ATTRIBUTE_TAIL.captures(tail) {
		Some(caps) => {
			let name = caps[1].to_string();
			if name.contains("on") {
				Position::EventAttribute { name }
			} else {
				Position::Attribute { name }
			}
		}
		None => Position::Content,
	}
}
