use mdlive_core::{AliasRule, Template};
use mdlive_san::{CompileOptions, ExportType};
use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

// ============================================================================
// Compile Options
// ============================================================================

/// Options accepted by the WASM compile function.
/// Mirrors the NAPI `CompilerConfig` for parity.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct WasmCompileOptions {
    #[serde(default, alias = "exportType")]
    pub export_type: Option<String>,
    #[serde(default)]
    pub alias: Option<Vec<AliasRule>>,
    #[serde(default)]
    pub template: Option<String>,
}

fn parse_options(options: JsValue) -> WasmCompileOptions {
    if options.is_undefined() || options.is_null() {
        return WasmCompileOptions::default();
    }
    serde_wasm_bindgen::from_value(options).unwrap_or_default()
}

fn build_compile_options(opts: WasmCompileOptions, filepath: &str) -> CompileOptions {
    let export_type = match opts.export_type.as_deref() {
        Some("component") => ExportType::Component,
        _ => ExportType::Html,
    };
    let template = match opts.template {
        Some(text) => Template::Literal(text),
        None => Template::default(),
    };

    CompileOptions {
        filepath: filepath.to_string(),
        export_type,
        alias: opts.alias.unwrap_or_default(),
        template,
    }
}

// ============================================================================
// Compile API
// ============================================================================

/// Compiles a Markdown document into HTML or a San component module.
///
/// With the default `html` export type the result is `{ html }`. With the
/// `component` export type the result is `{ entryComponent, previewBlocks }`
/// where fenced blocks tagged `san export=preview` become live preview
/// blocks keyed by their virtual artifact names.
///
/// # Arguments
///
/// * `source` - The Markdown source text
/// * `filepath` - Path of the document, used for block identifiers and
///   stylesheet resolution. Must be non-empty.
/// * `options` - Optional compile options (JsValue)
///
/// # Example (JavaScript)
///
/// ```javascript
/// import { compile } from './mdlive_wasm';
///
/// const output = compile('# Hello', '/docs/hello.md', { exportType: 'html' });
/// console.log(output.html);
/// ```
#[wasm_bindgen]
pub fn compile(source: &str, filepath: &str, options: JsValue) -> Result<JsValue, JsError> {
    let opts = parse_options(options);
    let compile_options = build_compile_options(opts, filepath);

    let output =
        mdlive_san::compile(source, compile_options).map_err(|e| JsError::new(&e.to_string()))?;

    // json_compatible keeps the artifact map a plain object rather than a JS Map
    output
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
