//! Compile entry point and options.

use std::collections::BTreeMap;

use mdlive_core::{AliasRule, CompileError, Template};
use serde::{Deserialize, Serialize};

use crate::renderer;
use crate::session::CompileSession;

/// Output shape requested by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportType {
    /// Static HTML of the whole document.
    #[default]
    Html,
    /// San component module plus preview artifacts.
    Component,
}

/// Options for one document compile.
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    /// Path of the document being compiled. Required: block identifiers
    /// and stylesheet resolution both derive from it.
    pub filepath: String,
    /// Requested output shape.
    pub export_type: ExportType,
    /// Alias rules applied to stylesheet import paths, in order.
    pub alias: Vec<AliasRule>,
    /// Entry template for preview blocks.
    pub template: Template,
}

/// Result of compiling one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CompileOutput {
    /// Static HTML export.
    Html {
        /// Rendered document HTML.
        html: String,
    },
    /// Component export: the document module plus its preview artifacts.
    #[serde(rename_all = "camelCase")]
    Component {
        /// San component module source for the document.
        entry_component: String,
        /// Virtual artifact map, keyed by artifact key.
        preview_blocks: BTreeMap<String, String>,
    },
}

/// Compiles a markdown document.
///
/// An HTML export returns the rendered document only, whatever the
/// document contains. A component export returns a San module for the
/// document plus the artifact map of its preview blocks.
///
/// # Examples
///
/// ```
/// use mdlive_san::{CompileOptions, CompileOutput, compile};
///
/// let options = CompileOptions {
///     filepath: String::from("/docs/x.md"),
///     ..CompileOptions::default()
/// };
/// let output = compile("# Hello", options).unwrap();
/// assert_eq!(
///     output,
///     CompileOutput::Html {
///         html: String::from("<h1>Hello</h1>"),
///     }
/// );
/// ```
pub fn compile(raw: &str, options: CompileOptions) -> Result<CompileOutput, CompileError> {
    let mut session = CompileSession::new(options)?;
    let mut hook = |code: &str, info: &str| session.render_code_block(code, info);
    let html = renderer::to_html(raw, &mut hook)?;
    Ok(session.finish(&html))
}
