//! HTML escaping helpers.

use std::borrow::Cow;

/// Escapes text for use between tags.
pub fn escape_text(s: &str) -> Cow<'_, str> {
	escape_with(s, |c| match c {
		'&' => Some("&amp;"),
		'<' => Some("&lt;"),
		'>' => Some("&gt;"),
		_ => None,
	})
}

/// Escapes a string for use in an HTML attribute value.
pub fn escape_attr(s: &str) -> Cow<'_, str> {
	escape_with(s, |c| match c {
		'&' => Some("&amp;"),
		'"' => Some("&quot;"),
		'\'' => Some("&#x27;"),
		'<' => Some("&lt;"),
		'>' => Some("&gt;"),
		_ => None,
	})
}

fn escape_with(s: &str, entity: impl Fn(char) -> Option<&'static str>) -> Cow<'_, str> {
	let Some(first) = s.find(|c| entity(c).is_some()) else {
		return Cow::Borrowed(s);
	};

	let mut out = String::with_capacity(s.len() + 8);
	out.push_str(&s[..first]);
	for c in s[first..].chars() {
		match entity(c) {
			Some(e) => out.push_str(e),
			None => out.push(c),
		}
	}
	Cow::Owned(out)
}
