//! NAPI-exposed data structures.

use napi_derive::napi;
use std::collections::HashMap;

/// Alias rule rewriting stylesheet import specifiers.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct JsAliasRule {
    /// Substring searched for in the import specifier.
    pub find: String,
    /// Text substituted for every occurrence of `find`.
    pub replacement: String,
}

/// Options passed to the compiler constructor.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct CompilerConfig {
    /// Output shape: `"html"` for static markup, `"component"` for a San
    /// module with preview artifacts. Defaults to `"html"`.
    pub export_type: Option<String>,
    /// Alias rules applied to stylesheet import paths, in order.
    pub alias: Option<Vec<JsAliasRule>>,
    /// Replacement entry template for preview blocks. Placeholders such as
    /// `<%= code =%>` are substituted per block.
    pub template: Option<String>,
}

/// File-specific overrides that accompany each compilation.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct FileOptions {
    /// Overrides the compiler-level export type for this file.
    pub export_type: Option<String>,
}

/// Result returned by the compiler.
///
/// Exactly one shape is populated: `html` for the `html` export type,
/// `entryComponent` plus `previewBlocks` for the `component` export type.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct CompileResult {
    /// Rendered document HTML.
    pub html: Option<String>,
    /// San component module source for the document.
    pub entry_component: Option<String>,
    /// Virtual preview artifacts keyed by artifact key.
    pub preview_blocks: Option<HashMap<String, String>>,
}
