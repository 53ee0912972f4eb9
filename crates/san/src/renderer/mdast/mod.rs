//! MDAST-based markdown to HTML renderer.
//!
//! Converts markdown input to an HTML string using the markdown-rs AST.
//! Standard constructs render directly; every code block is dispatched
//! through the injected [`CodeBlockRenderer`].

mod context;
mod render;

pub use context::{Context, Scope};

use mdlive_core::CompileError;

use crate::renderer::CodeBlockRenderer;
use render::render_node;

/// markdown-rs parse options: CommonMark plus the GFM constructs the
/// renderer understands (tables, strikethrough, autolink literals).
fn parse_options() -> markdown::ParseOptions {
    markdown::ParseOptions {
        constructs: markdown::Constructs {
            gfm_autolink_literal: true,
            gfm_strikethrough: true,
            gfm_table: true,
            ..markdown::Constructs::default()
        },
        ..markdown::ParseOptions::default()
    }
}

/// Renders markdown to HTML, dispatching code blocks to `renderer`.
pub fn to_html(input: &str, renderer: &mut dyn CodeBlockRenderer) -> Result<String, CompileError> {
    let tree = markdown::to_mdast(input, &parse_options())
        .map_err(|message| CompileError::parse(message.to_string()))?;

    let mut ctx = Context::new();
    render_node(&tree, &mut ctx, renderer);
    Ok(ctx.finish())
}
