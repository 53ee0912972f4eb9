//! Markdown rendering with pluggable code block handling.
//!
//! [`mdast`] walks the markdown-rs AST and renders standard constructs to
//! HTML. Every fenced code block is dispatched through a
//! [`CodeBlockRenderer`], which is where the compile session decides
//! between plain rendering and live-preview synthesis.

pub mod mdast;

pub use mdast::to_html;

/// Hook invoked for every code block in the document.
pub trait CodeBlockRenderer {
    /// Returns the HTML standing in for one block. `code` is the raw
    /// block source, `info` the text after the opening fence (empty for
    /// indented code blocks).
    fn render_code(&mut self, code: &str, info: &str) -> String;
}

impl<F> CodeBlockRenderer for F
where
    F: FnMut(&str, &str) -> String,
{
    fn render_code(&mut self, code: &str, info: &str) -> String {
        (self)(code, info)
    }
}
