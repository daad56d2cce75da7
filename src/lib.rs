//! # Lumen
//!
//! Server-side rendering for template-literal components, with hydration
//! markers that let a client pick up reactivity without re-parsing the page.
//!
//! ## Feature Flags
//!
//! - `ssr` - The renderer: templates, values, components, render entry points
//! - `shell` - Document shell and build-asset manifest lookup
//! - `full` (default) - Everything
//!
//! ## Quick Example
//!
//! ```rust
//! use lumen::prelude::*;
//!
//! let greeting = define_component(|name: &'static str| html!("<h1>Hello, {}!</h1>", name));
//!
//! let body = render_component_to_string(&greeting, "world").unwrap();
//! assert_eq!(body, "<h1>Hello, <!--stext-part-0-->world<!--etext-part-0-->!</h1>");
//! ```

#![warn(missing_docs)]

/// The renderer crate.
#[cfg(feature = "ssr")]
pub mod ssr {
	pub use lumen_ssr::*;
}

/// Document assembly around rendered markup.
#[cfg(feature = "shell")]
pub mod shell {
	pub use lumen_shell::*;
}

#[cfg(feature = "ssr")]
pub use lumen_ssr::{
	Component, Factory, IntoView, Literal, Memo, RenderContext, RenderError, RenderOptions, Root,
	SharedRenderer, Signal, Template, VNode, Value, View, define_component, html,
	render_component_to_string, render_to_string, render_value_to_string, render_view_to_string,
};

#[cfg(feature = "shell")]
pub use lumen_shell::{AssetManifest, DocumentShell, ManifestEntry, ShellError};

/// Commonly used items.
pub mod prelude {
	#[cfg(feature = "ssr")]
	pub use crate::{
		Component, Factory, Memo, RenderContext, RenderError, RenderOptions, Root, Signal, Value,
		View, define_component, html, render_component_to_string, render_to_string,
		render_view_to_string,
	};

	#[cfg(feature = "shell")]
	pub use crate::{AssetManifest, DocumentShell};
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
	use crate::prelude::*;
	use rstest::rstest;

	#[rstest]
	fn test_prelude_renders_component() {
		let badge = define_component(|count: u32| html!("<span class=\"{}\">{}</span>", "badge", count));
		assert_eq!(
			render_component_to_string(&badge, 3).unwrap(),
			"<span class=\"badge\"><!--stext-part-0-->3<!--etext-part-0--></span>"
		);
	}

	#[rstest]
	fn test_member_crate_modules_are_reachable() {
		let view = crate::ssr::Template::parse("<b>{}</b>").bind(vec![Value::from("x")]).unwrap();
		assert_eq!(
			crate::ssr::markers::allocated_ids(&render_view_to_string(&view).unwrap()),
			vec![0]
		);
	}

	#[cfg(feature = "shell")]
	#[rstest]
	fn test_prelude_wraps_page_in_shell() {
		let view = html!("<p>{}</p>", "hi").unwrap();
		let page = DocumentShell::new()
			.title("Facade")
			.render::<()>(&mut RenderContext::new(), view)
			.unwrap();
		assert!(page.contains("<title>Facade</title>"));
		assert!(page.contains("<div id=\"app\"><p><!--stext-part-0-->hi<!--etext-part-0--></p></div>"));
	}
}
