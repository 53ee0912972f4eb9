#![deny(missing_docs)]
//! mdlive core: fence metadata, identifier derivation, entry templates, and
//! stylesheet inlining for markdown live previews.

/// Compile error types.
pub mod error;
/// Fence info-string parsing.
pub mod fence;
/// Preview block identifier derivation.
pub mod ident;
/// Stylesheet import scanning and source list assembly.
pub mod stylesheet;
/// Entry templates and placeholder substitution.
pub mod template;

pub use error::CompileError;
pub use fence::{FenceDescriptor, parse_fence_info};
pub use ident::{ARTIFACT_EXT, BlockKeys, content_digest};
pub use stylesheet::{AliasRule, SourceEntry, SourceKind, apply_alias_rules, build_source_list};
pub use template::{DEFAULT_TEMPLATE, Template, TemplateData, render_template};
