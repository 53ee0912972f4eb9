//! Entry templates and placeholder substitution.
//!
//! Each preview block's entry module is produced from a template: either
//! literal text carrying `<%= field =%>` markers, or a generator callback
//! whose output goes through the same substitution pass. The built-in
//! template lives in `theme/default.template` and is embedded at build
//! time.

use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::{Captures, Regex};

use crate::fence::FenceDescriptor;
use crate::ident::BlockKeys;
use crate::stylesheet::SourceEntry;

/// Built-in entry template.
pub const DEFAULT_TEMPLATE: &str = include_str!("../theme/default.template");

/// Placeholder marker: `<%= field =%>`, whitespace around the name tolerated.
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<%=\s*([A-Za-z][A-Za-z0-9_]*)\s*=%>").unwrap());

/// How a preview block's entry module is produced.
#[derive(Clone)]
pub enum Template {
    /// Literal template text substituted via `<%= field =%>` markers.
    Literal(String),
    /// Callback producing template text per block. The returned text goes
    /// through the same placeholder substitution as literal templates.
    Generator(Arc<dyn Fn(&TemplateData) -> String + Send + Sync>),
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Template::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Template::Generator(_) => f.write_str("Generator(..)"),
        }
    }
}

impl Default for Template {
    fn default() -> Self {
        Template::Literal(DEFAULT_TEMPLATE.to_string())
    }
}

/// Per-block data exposed to entry templates.
///
/// Placeholder names follow the template contract (`componentRequest`,
/// `sourceList`), not Rust field names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateData {
    /// Block id (`<counter>_<digest>`).
    pub id: String,
    /// Escaped block source.
    pub code: String,
    /// Loader request path of the raw component source.
    pub component_request: String,
    /// Caption from the fence descriptor; empty when absent.
    pub caption: String,
    /// JSON array of the inlined source list.
    pub source_list: String,
    /// JSON of the fence descriptor.
    pub metadata: String,
    /// Path of the document being compiled.
    pub filepath: String,
}

impl TemplateData {
    /// Assemble the data for one block, serializing the source list and
    /// the descriptor to JSON. A missing caption becomes the empty string.
    pub fn new(
        keys: &BlockKeys,
        code: &str,
        descriptor: &FenceDescriptor,
        sources: &[SourceEntry],
        filepath: &str,
    ) -> Self {
        TemplateData {
            id: keys.id.clone(),
            code: code.to_string(),
            component_request: keys.component_request.clone(),
            caption: descriptor.caption.clone().unwrap_or_default(),
            source_list: serde_json::to_string(sources).unwrap_or_else(|_| String::from("[]")),
            metadata: serde_json::to_string(descriptor).unwrap_or_else(|_| String::from("{}")),
            filepath: filepath.to_string(),
        }
    }

    /// Placeholder names and their values.
    fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("id", &self.id),
            ("code", &self.code),
            ("componentRequest", &self.component_request),
            ("caption", &self.caption),
            ("sourceList", &self.source_list),
            ("metadata", &self.metadata),
            ("filepath", &self.filepath),
        ]
    }
}

/// Render `template` with `data`.
///
/// Substitution is a single pass: substituted values are never rescanned
/// for further placeholders, and a marker naming no field is left
/// verbatim.
pub fn render_template(template: &Template, data: &TemplateData) -> String {
    let generated;
    let text: &str = match template {
        Template::Literal(text) => text,
        Template::Generator(generator) => {
            generated = generator(data);
            &generated
        }
    };
    let fields = data.fields();
    PLACEHOLDER_RE
        .replace_all(text, |caps: &Captures<'_>| {
            match fields.iter().find(|(name, _)| *name == &caps[1]) {
                Some((_, value)) => (*value).to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
