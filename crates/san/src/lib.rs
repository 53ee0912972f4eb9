#![deny(missing_docs)]
//! San rendering and component codegen for mdlive: compiles one markdown
//! document into static HTML or a San component module with live preview
//! blocks.

/// San component module generation.
pub mod codegen;
/// Compile entry point and options.
pub mod compile;
/// Markdown rendering with pluggable code block handling.
pub mod renderer;
/// Per-compile session state.
pub mod session;

pub use codegen::{ComponentRegistration, generate_component_module};
pub use compile::{CompileOptions, CompileOutput, ExportType, compile};
pub use renderer::{CodeBlockRenderer, to_html};
pub use session::{CompileSession, PREVIEW_EXPORT, SAN_LANG};
