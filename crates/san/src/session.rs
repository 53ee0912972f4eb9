//! Per-compile session state.
//!
//! A [`CompileSession`] owns everything one document compile accumulates:
//! the resolved options, the preview block counter, component
//! registrations, and the virtual artifact map. Sessions are cheap and
//! single-use; nothing is shared between compiles.

use std::collections::BTreeMap;

use mdlive_core::{
    AliasRule, BlockKeys, CompileError, Template, TemplateData, build_source_list,
    parse_fence_info, render_template,
};

use crate::codegen::{ComponentRegistration, generate_component_module};
use crate::compile::{CompileOptions, CompileOutput, ExportType};

/// Language id of preview-capable blocks.
pub const SAN_LANG: &str = "san";
/// `export` attribute value requesting a live preview.
pub const PREVIEW_EXPORT: &str = "preview";

/// Mutable state of one document compile.
#[derive(Debug)]
pub struct CompileSession {
    filepath: String,
    export_type: ExportType,
    alias: Vec<AliasRule>,
    template: Template,
    counter: u32,
    registrations: Vec<ComponentRegistration>,
    artifacts: BTreeMap<String, String>,
}

impl CompileSession {
    /// Validates `options` and opens a session.
    ///
    /// The block counter starts at 1; only preview blocks advance it.
    pub fn new(options: CompileOptions) -> Result<Self, CompileError> {
        if options.filepath.is_empty() {
            return Err(CompileError::MissingFilepath);
        }
        Ok(CompileSession {
            filepath: options.filepath,
            export_type: options.export_type,
            alias: options.alias,
            template: options.template,
            counter: 1,
            registrations: Vec::new(),
            artifacts: BTreeMap::new(),
        })
    }

    /// Code block hook: returns the HTML standing in for one block.
    ///
    /// A block becomes a live preview only under a component export, with
    /// the `san` language and `export=preview` in its fence info. Preview
    /// blocks record their artifacts and registration, advance the
    /// counter, and are replaced by a placeholder tag pair. Every other
    /// block renders as a plain code block.
    pub fn render_code_block(&mut self, code: &str, info: &str) -> String {
        let escaped = escape_block(code);
        let descriptor = parse_fence_info(info);

        let preview = self.export_type == ExportType::Component
            && descriptor.lang.as_deref() == Some(SAN_LANG)
            && descriptor.export.as_deref() == Some(PREVIEW_EXPORT);
        if !preview {
            return format!(
                "<pre><code class=\"language-san\">{}</code></pre>",
                escaped
            );
        }

        let sources = build_source_list(&escaped, &self.filepath, &self.alias);
        let keys = BlockKeys::derive(self.counter, code, &self.filepath);

        self.registrations.push(ComponentRegistration {
            entry_var: keys.entry_var.clone(),
            entry_request: keys.entry_request.clone(),
            tag_name: keys.tag_name.clone(),
        });

        let data = TemplateData::new(&keys, &escaped, &descriptor, &sources, &self.filepath);
        let entry = render_template(&self.template, &data);
        self.artifacts.insert(keys.entry_key.clone(), entry);
        self.artifacts
            .insert(keys.component_key.clone(), code.to_string());
        self.counter += 1;

        format!("<{}></{}>", keys.tag_name, keys.tag_name)
    }

    /// Closes the session, assembling the output around the rendered
    /// document HTML.
    pub fn finish(self, html: &str) -> CompileOutput {
        match self.export_type {
            ExportType::Html => CompileOutput::Html {
                html: html.to_string(),
            },
            ExportType::Component => CompileOutput::Component {
                entry_component: generate_component_module(html, &self.registrations),
                preview_blocks: self.artifacts,
            },
        }
    }
}

/// Escape a code block for embedding: `<` ends the surrounding markup and
/// backticks end the San template literal the HTML lands in. Everything
/// else keeps its exact bytes.
fn escape_block(code: &str) -> String {
    let mut escaped = String::with_capacity(code.len());
    for c in code.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '`' => escaped.push_str("&#96;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(export_type: ExportType) -> CompileSession {
        CompileSession::new(CompileOptions {
            filepath: String::from("/docs/x.md"),
            export_type,
            ..CompileOptions::default()
        })
        .unwrap()
    }

    #[test]
    fn empty_filepath_is_rejected() {
        let result = CompileSession::new(CompileOptions::default());
        assert!(matches!(result, Err(CompileError::MissingFilepath)));
    }

    #[test]
    fn block_escape_covers_markup_and_template_literals() {
        assert_eq!(
            escape_block("<b>`tick`</b>"),
            "&lt;b>&#96;tick&#96;&lt;/b>"
        );
    }

    #[test]
    fn html_export_never_synthesizes_previews() {
        let mut session = session(ExportType::Html);
        let html = session.render_code_block("var x = 1;", "san export=preview");
        assert_eq!(
            html,
            "<pre><code class=\"language-san\">var x = 1;</code></pre>"
        );
        assert!(matches!(
            session.finish(""),
            CompileOutput::Html { .. }
        ));
    }

    #[test]
    fn non_san_blocks_render_plain() {
        let mut session = session(ExportType::Component);
        let html = session.render_code_block("var a = 1;", "js");
        assert_eq!(
            html,
            "<pre><code class=\"language-san\">var a = 1;</code></pre>"
        );

        let html = session.render_code_block("var a = 1;", "san");
        assert!(html.starts_with("<pre>"));
    }

    #[test]
    fn preview_blocks_register_artifacts_and_advance_counter() {
        let mut session = session(ExportType::Component);

        let first = session.render_code_block("var a = 1;", "san export=preview");
        assert_eq!(
            first,
            "<preview-block-1-f9d67ab></preview-block-1-f9d67ab>"
        );

        let second = session.render_code_block("var b = 2;", "san export=preview");
        assert_eq!(
            second,
            "<preview-block-2-9f343a3></preview-block-2-9f343a3>"
        );

        let CompileOutput::Component { preview_blocks, .. } = session.finish("") else {
            panic!("component export expected");
        };
        let keys: Vec<&str> = preview_blocks.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "Component1_f9d67ab.vpms",
                "Component2_9f343a3.vpms",
                "PreviewBlock1_f9d67ab.vpms",
                "PreviewBlock2_9f343a3.vpms",
            ]
        );
        assert_eq!(preview_blocks["Component1_f9d67ab.vpms"], "var a = 1;");
    }
}
