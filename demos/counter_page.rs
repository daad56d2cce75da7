//! Renders a counter page and prints the full document.
//!
//! Run with `RUST_LOG=debug cargo run --example counter_page` to see render
//! pass logging.

use lumen::prelude::*;
use lumen::{AssetManifest, ManifestEntry};
use tracing_subscriber::EnvFilter;

struct CounterProps {
	label: &'static str,
	start: i64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.init();

	let counter = define_component(|props: CounterProps| {
		let count = Signal::new(props.start);
		let doubled = {
			let count = count.clone();
			Memo::new(move || count.get() * 2)
		};
		html!(
			"<section class=\"{}\"><button onclick=\"{}\">{}</button><p>{} (x2: {})</p></section>",
			"counter",
			"increment",
			props.label,
			&count,
			&doubled
		)
	})
	.named("Counter");

	let manifest = AssetManifest::from_json(
		r#"{"src/entry-client.ts": {"file": "assets/entry-client.js", "isEntry": true, "css": ["assets/entry-client.css"]}}"#,
	)?;
	let entry: &ManifestEntry = manifest.entry("src/entry-client.ts")?;

	let page = DocumentShell::new()
		.title("Counter")
		.entry(entry)
		.render(
			&mut RenderContext::new(),
			(
				counter,
				CounterProps {
					label: "Add one",
					start: 3,
				},
			),
		)?;

	println!("{page}");
	Ok(())
}
