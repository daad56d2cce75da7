//! Hydration markers.
//!
//! Content interpolations are bracketed by a pair of comments the client
//! locates by walking comment nodes. Event handler attributes receive a
//! placeholder value the client matches to the real handler by id.

use std::sync::LazyLock;

use regex::Regex;

/// Name shared by the start and end comments of a text part.
pub const TEXT_PART_PREFIX: &str = "text-part-";

/// Prefix of event placeholder values.
pub const EVENT_PART_PREFIX: &str = "ev-part-";

static PART_PATTERN: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"<!--([se])text-part-(\d+)-->|ev-part-(\d+)").unwrap());

/// Opening comment of a text part.
pub fn text_start(id: u64) -> String {
	format!("<!--s{}{}-->", TEXT_PART_PREFIX, id)
}

/// Closing comment of a text part.
pub fn text_end(id: u64) -> String {
	format!("<!--e{}{}-->", TEXT_PART_PREFIX, id)
}

/// Placeholder written into an event handler attribute.
pub fn event_placeholder(id: u64) -> String {
	format!("{}{}", EVENT_PART_PREFIX, id)
}

/// A hydration marker found in rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartRef {
	/// `<!--stext-part-{n}-->`
	TextStart(u64),
	/// `<!--etext-part-{n}-->`
	TextEnd(u64),
	/// `ev-part-{n}`
	Event(u64),
}

impl PartRef {
	/// The part id carried by this marker.
	pub fn id(&self) -> u64 {
		match *self {
			PartRef::TextStart(id) | PartRef::TextEnd(id) | PartRef::Event(id) => id,
		}
	}
}

/// Lists every marker in `html`, in document order.
pub fn scan_parts(html: &str) -> Vec<PartRef> {
	PART_PATTERN
		.captures_iter(html)
		.filter_map(|caps| {
			if let Some(id) = caps.get(3) {
				return id.as_str().parse().ok().map(PartRef::Event);
			}
			let id = caps.get(2)?.as_str().parse().ok()?;
			match caps.get(1)?.as_str() {
				"s" => Some(PartRef::TextStart(id)),
				_ => Some(PartRef::TextEnd(id)),
			}
		})
		.collect()
}

/// Ids that open a part (text starts and event placeholders), in document order.
pub fn allocated_ids(html: &str) -> Vec<u64> {
	scan_parts(html)
		.into_iter()
		.filter(|part| !matches!(part, PartRef::TextEnd(_)))
		.map(|part| part.id())
		.collect()
}
