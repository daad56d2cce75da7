//! Render property-based tests
//!
//! Property-based tests for id allocation, marker counts and sequence
//! resolution.

use lumen_ssr::markers::{PartRef, allocated_ids, scan_parts};
use lumen_ssr::{
	PartAllocator, RenderContext, Template, Value, resolve_scalar, render_view_to_string,
};
use proptest::prelude::*;

/// One interpolation slot of a generated template.
#[derive(Debug, Clone)]
enum Slot {
	Content(String),
	Attribute(String),
	Event,
}

fn slot() -> impl Strategy<Value = Slot> {
	prop_oneof![
		"[a-z0-9 ]{0,8}".prop_map(Slot::Content),
		"[a-z0-9]{0,8}".prop_map(Slot::Attribute),
		Just(Slot::Event),
	]
}

fn build(slots: &[Slot]) -> (Template, Vec<Value>) {
	let mut literals = vec![String::from("<div>")];
	let mut values = Vec::new();
	for slot in slots {
		let last = literals.last_mut().expect("literals never empty");
		match slot {
			Slot::Content(text) => {
				last.push_str("<p>");
				values.push(Value::from(text.clone()));
				literals.push(String::from("</p>"));
			}
			Slot::Attribute(text) => {
				last.push_str("<a title=\"");
				values.push(Value::from(text.clone()));
				literals.push(String::from("\"></a>"));
			}
			Slot::Event => {
				last.push_str("<a onclick=\"");
				values.push(Value::from("handler"));
				literals.push(String::from("\"></a>"));
			}
		}
	}
	literals.last_mut().expect("literals never empty").push_str("</div>");
	(Template::new(literals), values)
}

proptest! {
	/// Ids appear in document order as 0, 1, 2, ... for flat templates.
	#[test]
	fn prop_ids_are_consecutive(slots in prop::collection::vec(slot(), 0..16)) {
		let (template, values) = build(&slots);
		let out = render_view_to_string(&template.bind(values).unwrap()).unwrap();

		let ids = allocated_ids(&out);
		let expected: Vec<u64> = (0..ids.len() as u64).collect();
		prop_assert_eq!(ids, expected);
	}

	/// One marker pair per content interpolation, none for attributes.
	#[test]
	fn prop_marker_count_matches_content_slots(slots in prop::collection::vec(slot(), 0..16)) {
		let (template, values) = build(&slots);
		let out = render_view_to_string(&template.bind(values).unwrap()).unwrap();
		let parts = scan_parts(&out);

		let content = slots.iter().filter(|s| matches!(s, Slot::Content(_))).count();
		let events = slots.iter().filter(|s| matches!(s, Slot::Event)).count();
		let starts = parts.iter().filter(|p| matches!(p, PartRef::TextStart(_))).count();
		let ends = parts.iter().filter(|p| matches!(p, PartRef::TextEnd(_))).count();
		let placeholders = parts.iter().filter(|p| matches!(p, PartRef::Event(_))).count();

		prop_assert_eq!(starts, content);
		prop_assert_eq!(ends, content);
		prop_assert_eq!(placeholders, events);
	}

	/// A sequence resolves to the in-order concatenation of its elements.
	#[test]
	fn prop_sequence_is_concatenation(items in prop::collection::vec("[a-z<>&]{0,6}", 0..10)) {
		let mut ctx = RenderContext::new();
		let joined = resolve_scalar(&Value::from(items.clone()), &mut ctx).unwrap();
		prop_assert_eq!(joined, items.concat());
	}

	/// Restoring a saved counter resumes exactly where it left off.
	#[test]
	fn prop_allocator_restore(before in 0usize..50, during in 0usize..50) {
		let mut parts = PartAllocator::new();
		for _ in 0..before {
			parts.allocate();
		}
		let saved = parts.save();
		parts.reset();
		for expected in 0..during as u64 {
			prop_assert_eq!(parts.allocate(), expected);
		}
		parts.restore(saved);
		prop_assert_eq!(parts.allocate(), before as u64);
	}
}
