//! Hydration protocol integration tests
//!
//! Test Categories:
//! 1. Marker placement - content, attribute and event positions
//! 2. Id allocation - pre-order numbering across nesting
//! 3. Value shapes - containers, factories, sequences inside templates
//! 4. Entry points - components, views and invalid roots

use lumen_ssr::markers::{PartRef, allocated_ids, scan_parts};
use lumen_ssr::{
	Factory, RenderContext, RenderError, RenderOptions, Root, Signal, Value, View,
	define_component, html, render_component_to_string, render_to_string, render_value_to_string,
	render_view_to_string,
};
use rstest::rstest;

fn item(text: &'static str) -> View {
	html!("<li>{}</li>", text).unwrap()
}

// ============================================================================
// Category 1: Marker placement
// ============================================================================

#[rstest]
fn test_text_marker() {
	let view = html(["<p>", "</p>"], vec!["Hello".into()]).unwrap();
	assert_eq!(
		render_view_to_string(&view).unwrap(),
		"<p><!--stext-part-0-->Hello<!--etext-part-0--></p>"
	);
}

#[rstest]
fn test_normal_attribute() {
	let view = html(["<img alt=\"", "\" src=\"/x.png\">"], vec!["Logo".into()]).unwrap();
	assert_eq!(
		render_view_to_string(&view).unwrap(),
		"<img alt=\"Logo\" src=\"/x.png\">"
	);
}

#[rstest]
#[case(Value::from("ignored"))]
#[case(Value::from(42))]
#[case(Value::factory(|| "never called"))]
#[case(Value::NIL)]
fn test_event_attribute_placeholder(#[case] handler: Value) {
	let view = html(["<button onclick=\"", "\">Ok</button>"], vec![handler]).unwrap();
	assert_eq!(
		render_view_to_string(&view).unwrap(),
		"<button onclick=\"ev-part-0\">Ok</button>"
	);
}

#[rstest]
fn test_attribute_values_never_contain_markers() {
	let view = html!(
		"<div class=\"{}\" title='{}' data-x={}></div>",
		"card",
		Value::Sequence(vec!["a".into(), Signal::new(2.5).into()]),
		Value::factory(|| 7)
	)
	.unwrap();
	let out = render_view_to_string(&view).unwrap();
	assert_eq!(out, "<div class=\"card\" title='a2.5' data-x=7></div>");
	assert!(scan_parts(&out).is_empty());
}

#[rstest]
#[case::factory(|child: View| Value::factory(move || child.clone()))]
#[case::sequence(|child: View| Value::Sequence(vec![child.into()]))]
#[case::signal(|child: View| Signal::new(child).into())]
fn test_wrapped_view_in_attribute_has_no_markers(#[case] wrap: fn(View) -> Value) {
	let child = html(["<b>", "</b>"], vec!["x".into()]).unwrap();
	let view = html(["<p title=\"", "\">", "</p>"], vec![wrap(child), "t".into()]).unwrap();
	let out = render_view_to_string(&view).unwrap();
	assert_eq!(
		out,
		"<p title=\"<b>x</b>\"><!--stext-part-1-->t<!--etext-part-1--></p>"
	);
	assert_eq!(allocated_ids(&out), vec![1]);
}

#[rstest]
fn test_self_referencing_signal_fails_instead_of_overflowing() {
	let cell = Signal::new(Value::NIL);
	cell.set(Value::from(&cell));
	let view = html!("<p>{}</p>", &cell).unwrap();
	assert!(matches!(
		render_view_to_string(&view),
		Err(RenderError::MalformedFactory { .. })
	));
	cell.set(Value::NIL);
}

#[rstest]
fn test_multiple_attributes_in_one_tag() {
	let view = html!(
		"<input type=\"{}\" value=\"{}\" oninput=\"{}\">",
		"text",
		"hi",
		"handler"
	)
	.unwrap();
	assert_eq!(
		render_view_to_string(&view).unwrap(),
		"<input type=\"text\" value=\"hi\" oninput=\"ev-part-0\">"
	);
}

// ============================================================================
// Category 2: Id allocation
// ============================================================================

#[rstest]
fn test_nested_view_has_no_wrapper_marker() {
	let child = html(["<em>", "</em>"], vec!["x".into()]).unwrap();
	let parent = html(["<p>", "</p>"], vec![child.into()]).unwrap();
	assert_eq!(
		render_view_to_string(&parent).unwrap(),
		"<p><em><!--stext-part-0-->x<!--etext-part-0--></em></p>"
	);
}

#[rstest]
fn test_list_wrapper_id_is_allocated_before_items() {
	let list = vec![item("a"), item("b")];
	let view = html!("<ul>{}</ul>", list).unwrap();
	assert_eq!(
		render_view_to_string(&view).unwrap(),
		"<ul><!--stext-part-0--><li><!--stext-part-1-->a<!--etext-part-1--></li>\
		 <li><!--stext-part-2-->b<!--etext-part-2--></li><!--etext-part-0--></ul>"
	);
}

#[rstest]
fn test_ids_are_consecutive_across_depth() {
	let leaf = |s: &'static str| html!("<span onclick=\"{}\">{}</span>", "h", s).unwrap();
	let section = html!(
		"<section>{}{}</section>",
		vec![leaf("a"), leaf("b")],
		Value::factory(move || vec![leaf("c")])
	)
	.unwrap();
	let page = html!("<main><h1>{}</h1>{}</main>", "Title", section).unwrap();

	let out = render_view_to_string(&page).unwrap();
	let ids = allocated_ids(&out);
	assert_eq!(ids, (0..ids.len() as u64).collect::<Vec<_>>());
	assert_eq!(ids.len(), 9);
}

#[rstest]
fn test_wrapper_markers_enclose_children() {
	let view = html!("<ul>{}</ul>", vec![item("a")]).unwrap();
	let out = render_view_to_string(&view).unwrap();
	assert_eq!(
		scan_parts(&out),
		vec![
			PartRef::TextStart(0),
			PartRef::TextStart(1),
			PartRef::TextEnd(1),
			PartRef::TextEnd(0),
		]
	);
}

#[rstest]
fn test_content_marker_count_matches_content_values() {
	let view = html!(
		"<p class=\"{}\">{} and {}</p><a onclick=\"{}\">{}</a>",
		"c",
		1,
		false,
		"h",
		()
	)
	.unwrap();
	let out = render_view_to_string(&view).unwrap();
	let starts = scan_parts(&out)
		.into_iter()
		.filter(|p| matches!(p, PartRef::TextStart(_)))
		.count();
	assert_eq!(starts, 3);
}

#[rstest]
fn test_view_is_recomputed_for_each_render() {
	let count = Signal::new(1);
	let view = html!("<i>{}</i>", &count).unwrap();
	let first = render_view_to_string(&view).unwrap();
	count.set(2);
	let second = render_view_to_string(&view).unwrap();
	assert_eq!(first, "<i><!--stext-part-0-->1<!--etext-part-0--></i>");
	assert_eq!(second, "<i><!--stext-part-0-->2<!--etext-part-0--></i>");
}

// ============================================================================
// Category 3: Value shapes
// ============================================================================

#[rstest]
fn test_sequence_of_scalars_in_content() {
	let view = html!("<p>{}</p>", vec![Value::from("a"), 1.into(), Value::NIL, "b".into()]).unwrap();
	assert_eq!(
		render_view_to_string(&view).unwrap(),
		"<p><!--stext-part-0-->a1b<!--etext-part-0--></p>"
	);
}

#[rstest]
fn test_container_holding_view() {
	let body = Signal::new(html!("<b>{}</b>", "x").unwrap());
	let view = html!("<div>{}</div>", Value::container(body)).unwrap();
	assert_eq!(
		render_view_to_string(&view).unwrap(),
		"<div><!--stext-part-0--><b><!--stext-part-1-->x<!--etext-part-1--></b><!--etext-part-0--></div>"
	);
}

#[rstest]
fn test_malformed_factory_in_content_fails_render() {
	let view = html!(
		"<p>{}</p>",
		Factory::fallible(|| Err::<String, _>("expected exactly one result"))
	)
	.unwrap();
	assert_eq!(
		render_view_to_string(&view).unwrap_err(),
		RenderError::malformed_factory("expected exactly one result")
	);
}

#[rstest]
fn test_true_renders_as_text() {
	let view = html!("<p>{}</p>", true).unwrap();
	assert_eq!(
		render_view_to_string(&view).unwrap(),
		"<p><!--stext-part-0-->true<!--etext-part-0--></p>"
	);
}

// ============================================================================
// Category 4: Entry points
// ============================================================================

struct TitleProps {
	title: String,
}

#[rstest]
fn test_render_component_to_string_simple() {
	let comp = define_component(|p: TitleProps| html(["<h1>", "</h1>"], vec![p.title.into()]));
	let got = render_component_to_string(
		&comp,
		TitleProps {
			title: "Hello".to_string(),
		},
	)
	.unwrap();
	assert_eq!(got, "<h1><!--stext-part-0-->Hello<!--etext-part-0--></h1>");
}

#[rstest]
fn test_render_component_event_placeholder() {
	let comp = define_component(|_: ()| html(["<button onclick=\"", "\">Ok</button>"], vec!["ignored".into()]));
	assert_eq!(
		render_to_string(Root::Component(comp, ())).unwrap(),
		"<button onclick=\"ev-part-0\">Ok</button>"
	);
}

#[rstest]
#[case(Value::from("text"), "literal")]
#[case(Value::from(vec![1]), "sequence")]
#[case(Value::factory(|| 1), "factory")]
#[case(Value::VNode(lumen_ssr::VNode::new("<p></p>")), "vnode")]
fn test_invalid_root(#[case] value: Value, #[case] shape: &'static str) {
	assert_eq!(
		render_value_to_string(value).unwrap_err(),
		RenderError::InvalidArgument { found: shape }
	);
}

#[rstest]
fn test_context_counter_restored_after_failed_render() {
	let mut ctx = RenderContext::with_options(RenderOptions::default());
	ctx.allocate();
	ctx.allocate();
	let failing = html!("<p>{}</p>", Factory::fallible(|| Err::<i32, _>("nope"))).unwrap();
	assert!(ctx.render::<()>(failing).is_err());
	assert_eq!(ctx.parts_allocated(), 2);

	let ok = html!("<p>{}</p>", "fine").unwrap();
	assert_eq!(
		ctx.render::<()>(ok).unwrap(),
		"<p><!--stext-part-0-->fine<!--etext-part-0--></p>"
	);
	assert_eq!(ctx.parts_allocated(), 2);
}

#[rstest]
fn test_concurrent_renders_do_not_interfere() {
	let comp = define_component(|n: usize| {
		let items: Vec<View> = (0..n).map(|_| item("x")).collect();
		html!("<ul>{}</ul>", items)
	});

	let handles: Vec<_> = (0..8)
		.map(|n| {
			let comp = comp.clone();
			std::thread::spawn(move || render_component_to_string(&comp, n).unwrap())
		})
		.collect();

	for (n, handle) in handles.into_iter().enumerate() {
		let out = handle.join().unwrap();
		let ids = allocated_ids(&out);
		assert_eq!(ids, (0..=n as u64).collect::<Vec<_>>());
	}
}
