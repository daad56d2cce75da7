//! HTML document assembly around a rendered fragment.

use lumen_ssr::escape::{escape_attr, escape_text};
use lumen_ssr::{RenderContext, Root};

use crate::error::Result;
use crate::manifest::ManifestEntry;

/// Builder for the document wrapping server-rendered markup.
///
/// # Example
///
/// ```
/// use lumen_shell::DocumentShell;
///
/// let page = DocumentShell::new()
///     .title("Counter")
///     .stylesheet("/assets/app.css")
///     .script("/assets/app.js")
///     .wrap("<p>hi</p>");
/// assert!(page.contains("<div id=\"app\"><p>hi</p></div>"));
/// assert!(page.contains("<script type=\"module\" async src=\"/assets/app.js\"></script>"));
/// ```
#[derive(Debug, Clone)]
pub struct DocumentShell {
	lang: String,
	title: Option<String>,
	mount_id: String,
	asset_base: String,
	stylesheets: Vec<String>,
	scripts: Vec<String>,
}

impl Default for DocumentShell {
	fn default() -> Self {
		Self {
			lang: "en".to_string(),
			title: None,
			mount_id: "app".to_string(),
			asset_base: "/".to_string(),
			stylesheets: Vec::new(),
			scripts: Vec::new(),
		}
	}
}

impl DocumentShell {
	/// Creates a shell with default settings.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the language attribute of the `<html>` element.
	pub fn lang(mut self, lang: impl Into<String>) -> Self {
		self.lang = lang.into();
		self
	}

	/// Sets the document title.
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// Sets the id of the element the client hydrates.
	pub fn mount_id(mut self, id: impl Into<String>) -> Self {
		self.mount_id = id.into();
		self
	}

	/// Sets the URL prefix prepended to manifest file paths.
	pub fn asset_base(mut self, base: impl Into<String>) -> Self {
		self.asset_base = base.into();
		self
	}

	/// Adds a stylesheet link.
	pub fn stylesheet(mut self, href: impl Into<String>) -> Self {
		self.stylesheets.push(href.into());
		self
	}

	/// Adds a module script.
	pub fn script(mut self, src: impl Into<String>) -> Self {
		self.scripts.push(src.into());
		self
	}

	/// Adds the script and stylesheets of a manifest chunk.
	pub fn entry(mut self, entry: &ManifestEntry) -> Self {
		for css in &entry.css {
			let href = self.asset_url(css);
			self.stylesheets.push(href);
		}
		let src = self.asset_url(&entry.file);
		self.scripts.push(src);
		self
	}

	fn asset_url(&self, file: &str) -> String {
		format!(
			"{}/{}",
			self.asset_base.trim_end_matches('/'),
			file.trim_start_matches('/')
		)
	}

	/// Wraps already rendered markup in a full document.
	pub fn wrap(&self, body: &str) -> String {
		let mut html = String::with_capacity(body.len() + 512);

		html.push_str("<!DOCTYPE html>\n");
		html.push_str(&format!("<html lang=\"{}\">\n", escape_attr(&self.lang)));

		html.push_str("<head>\n");
		html.push_str("<meta charset=\"utf-8\">\n");
		html.push_str(
			"<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
		);
		if let Some(ref title) = self.title {
			html.push_str(&format!("<title>{}</title>\n", escape_text(title)));
		}
		for href in &self.stylesheets {
			html.push_str(&format!(
				"<link rel=\"stylesheet\" href=\"{}\">\n",
				escape_attr(href)
			));
		}
		html.push_str("</head>\n");

		html.push_str("<body>\n");
		html.push_str(&format!("<div id=\"{}\">", escape_attr(&self.mount_id)));
		html.push_str(body);
		html.push_str("</div>\n");
		for src in &self.scripts {
			html.push_str(&format!(
				"<script type=\"module\" async src=\"{}\"></script>\n",
				escape_attr(src)
			));
		}
		html.push_str("</body>\n");
		html.push_str("</html>");

		html
	}

	/// Renders a root and wraps the result.
	pub fn render<P>(&self, ctx: &mut RenderContext, root: impl Into<Root<P>>) -> Result<String> {
		let body = ctx.render(root)?;
		Ok(self.wrap(&body))
	}
}
