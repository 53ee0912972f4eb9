//! The stateful compiler and its configuration.

use crate::types::{CompileResult, CompilerConfig, FileOptions};
use mdlive_core::{AliasRule, Template};
use mdlive_san::{CompileOptions, CompileOutput, ExportType, compile};
use napi_derive::napi;

#[derive(Debug, Clone)]
pub(crate) struct InternalCompilerConfig {
    pub(crate) export_type: ExportType,
    pub(crate) alias: Vec<AliasRule>,
    pub(crate) template: Template,
}

impl InternalCompilerConfig {
    pub(crate) fn new(config: Option<CompilerConfig>) -> Self {
        let cfg = config.unwrap_or_default();
        let export_type = parse_export_type(cfg.export_type.as_deref());
        let alias = cfg
            .alias
            .unwrap_or_default()
            .into_iter()
            .map(|rule| AliasRule {
                find: rule.find,
                replacement: rule.replacement,
            })
            .collect();
        let template = match cfg.template {
            Some(text) => Template::Literal(text),
            None => Template::default(),
        };

        Self {
            export_type,
            alias,
            template,
        }
    }
}

/// Unrecognized values fall back to the html export.
fn parse_export_type(value: Option<&str>) -> ExportType {
    match value {
        Some("component") => ExportType::Component,
        _ => ExportType::Html,
    }
}

/// Stateful compiler exposed to Node callers.
#[napi]
pub struct MdliveCompiler {
    pub(crate) config: InternalCompilerConfig,
}

#[napi]
impl MdliveCompiler {
    #[napi(constructor)]
    /// Creates a compiler that can be reused across build-tool transform hooks.
    pub fn new(config: Option<CompilerConfig>) -> Self {
        Self {
            config: InternalCompilerConfig::new(config),
        }
    }

    /// Compiles a Markdown document into HTML or a San component module.
    ///
    /// Fenced blocks tagged `san export=preview` become live preview blocks
    /// when the component export type is active.
    ///
    /// # Arguments
    ///
    /// * `source` - Markdown source content
    /// * `filepath` - Path of the document, used for block identifiers and
    ///   stylesheet resolution. Must be non-empty.
    /// * `options` - Optional per-file overrides
    ///
    /// # Example (JavaScript)
    ///
    /// ```javascript
    /// const { MdliveCompiler } = require('mdlive-napi');
    ///
    /// const compiler = new MdliveCompiler({ exportType: 'component' });
    /// const result = compiler.compile('# Demo', '/docs/demo.md');
    /// console.log(result.entryComponent);
    /// ```
    #[napi]
    pub fn compile(
        &self,
        source: String,
        filepath: String,
        options: Option<FileOptions>,
    ) -> napi::Result<CompileResult> {
        compile_document(&self.config, &source, filepath, options)
    }
}

/// Compiles one document with the given configuration and per-file overrides.
pub(crate) fn compile_document(
    config: &InternalCompilerConfig,
    source: &str,
    filepath: String,
    options: Option<FileOptions>,
) -> napi::Result<CompileResult> {
    let export_type = options
        .and_then(|opts| opts.export_type)
        .map(|value| parse_export_type(Some(&value)))
        .unwrap_or(config.export_type);

    let compile_options = CompileOptions {
        filepath,
        export_type,
        alias: config.alias.clone(),
        template: config.template.clone(),
    };

    let output = compile(source, compile_options).map_err(super::convert_error)?;

    Ok(match output {
        CompileOutput::Html { html } => CompileResult {
            html: Some(html),
            entry_component: None,
            preview_blocks: None,
        },
        CompileOutput::Component {
            entry_component,
            preview_blocks,
        } => CompileResult {
            html: None,
            entry_component: Some(entry_component),
            preview_blocks: Some(preview_blocks.into_iter().collect()),
        },
    })
}
