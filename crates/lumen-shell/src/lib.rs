//! Lumen Shell - document assembly for server-rendered pages
//!
//! Wraps the fragment produced by `lumen-ssr` in a full HTML document and
//! injects the client bundle's script and stylesheets, resolved from the
//! bundler's asset manifest.
//!
//! ## Example
//!
//! ```
//! use lumen_shell::{AssetManifest, DocumentShell};
//! use lumen_ssr::{RenderContext, html};
//!
//! let manifest = AssetManifest::from_json(
//!     r#"{"src/entry-client.ts": {"file": "assets/entry.js", "isEntry": true, "css": ["assets/entry.css"]}}"#,
//! )
//! .unwrap();
//!
//! let shell = DocumentShell::new()
//!     .title("Demo")
//!     .entry(manifest.entry("src/entry-client.ts").unwrap());
//!
//! let view = html!("<p>{}</p>", "Hello").unwrap();
//! let page = shell.render::<()>(&mut RenderContext::new(), view).unwrap();
//! assert!(page.contains("href=\"/assets/entry.css\""));
//! ```

#![warn(missing_docs)]

pub mod document;
pub mod error;
pub mod manifest;

pub use document::DocumentShell;
pub use error::{Result, ShellError};
pub use manifest::{AssetManifest, ManifestEntry};
