//! Stylesheet import inlining.
//!
//! Preview blocks routinely import their own styles. The compiler scans
//! the escaped block source for quoted `.css`/`.less`/`.scss` paths,
//! applies alias rules, reads each file relative to the document's
//! directory, and assembles the ordered source list served to the preview
//! runtime. The scan is textual and best-effort: any quoted
//! stylesheet-looking string counts as an import, whatever construct it
//! appears in, and unreadable files are tolerated as empty entries.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Quoted stylesheet path, e.g. `'./a.css'` or `"@theme/x.less"`.
static STYLESHEET_IMPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"('|")[^('|")]+\.(css|less|scss)+('|")"#).unwrap());

/// Trailing `/<name>.md` of a document path.
static DOC_FILE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/[^/]+\.md$").unwrap());

/// A find/replace pair applied to imported stylesheet paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRule {
    /// Substring to search for.
    pub find: String,
    /// Text replacing every occurrence of `find`.
    pub replacement: String,
}

/// One entry of a preview block's source list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceEntry {
    /// Display name: `index.ts` for the primary entry, the import path as
    /// the author wrote it for stylesheets.
    pub filename: String,
    /// Entry content; empty when a stylesheet could not be read.
    pub code: String,
    /// Entry kind.
    #[serde(rename = "type")]
    pub kind: SourceKind,
}

/// Source list entry kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// The block source itself.
    Ts,
    /// An inlined stylesheet. Less and scss imports use this kind too.
    Css,
}

impl SourceEntry {
    /// Primary script entry.
    pub fn script(filename: impl Into<String>, code: impl Into<String>) -> Self {
        SourceEntry {
            filename: filename.into(),
            code: code.into(),
            kind: SourceKind::Ts,
        }
    }

    /// Stylesheet entry.
    pub fn stylesheet(filename: impl Into<String>, code: impl Into<String>) -> Self {
        SourceEntry {
            filename: filename.into(),
            code: code.into(),
            kind: SourceKind::Css,
        }
    }
}

/// Apply every alias rule to `path`, in rule order.
///
/// Each rule replaces every occurrence of its `find` text, and later
/// rules see the output of earlier ones.
pub fn apply_alias_rules(path: &str, rules: &[AliasRule]) -> String {
    rules.iter().fold(path.to_string(), |current, rule| {
        current.replace(&rule.find, &rule.replacement)
    })
}

/// Directory of a document path: the trailing `/<name>.md` stripped.
/// Paths of any other shape come back unchanged.
fn document_dir(filepath: &str) -> String {
    DOC_FILE_RE.replace(filepath, "").into_owned()
}

/// Assemble the source list for one preview block.
///
/// `code` must already be escaped; it becomes the primary `index.ts`
/// entry verbatim. Each quoted stylesheet import found in it is appended
/// in scan order. The entry keeps the author's spelling of the path
/// (quotes stripped) as its filename, while the file itself is read from
/// the alias-resolved path relative to the document's directory.
pub fn build_source_list(code: &str, filepath: &str, rules: &[AliasRule]) -> Vec<SourceEntry> {
    let mut sources = vec![SourceEntry::script("index.ts", code)];
    let doc_dir = document_dir(filepath);

    for found in STYLESHEET_IMPORT_RE.find_iter(code) {
        let filename = found.as_str().replace(['\'', '"'], "");
        let resolved = apply_alias_rules(&filename, rules);
        let full_path = Path::new(&doc_dir).join(&resolved);
        let contents = match fs::read_to_string(&full_path) {
            Ok(contents) => contents,
            Err(err) => {
                log::debug!("stylesheet {} could not be read: {}", full_path.display(), err);
                String::new()
            }
        };
        sources.push(SourceEntry::stylesheet(filename, contents));
    }
    sources
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_rules_compose_in_order() {
        let rules = vec![
            AliasRule {
                find: String::from("@theme"),
                replacement: String::from("./x"),
            },
            AliasRule {
                find: String::from("./x"),
                replacement: String::from("./y"),
            },
        ];
        assert_eq!(apply_alias_rules("@theme/a.css", &rules), "./y/a.css");
    }

    #[test]
    fn alias_replaces_every_occurrence() {
        let rules = vec![AliasRule {
            find: String::from("pkg"),
            replacement: String::from("lib"),
        }];
        assert_eq!(apply_alias_rules("pkg/pkg/a.css", &rules), "lib/lib/a.css");
    }

    #[test]
    fn document_dir_strips_only_trailing_md() {
        assert_eq!(document_dir("/docs/guide/x.md"), "/docs/guide");
        assert_eq!(document_dir("/x.md"), "");
        assert_eq!(document_dir("/docs/guide"), "/docs/guide");
        assert_eq!(document_dir("x.md"), "x.md");
    }

    #[test]
    fn primary_entry_always_first() {
        let sources = build_source_list("var x = 1;", "/docs/x.md", &[]);
        assert_eq!(sources, vec![SourceEntry::script("index.ts", "var x = 1;")]);
    }

    #[test]
    fn inlines_stylesheet_next_to_document() {
        let dir = std::env::temp_dir().join("mdlive-inline-next-to-doc");
        fs::create_dir_all(&dir).unwrap();
        let css_path = dir.join("a.css");
        fs::write(&css_path, ".a { color: red; }").unwrap();
        let doc = format!("{}/x.md", dir.display());

        let code = "import './a.css';\nvar x = 1;";
        let sources = build_source_list(code, &doc, &[]);

        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0], SourceEntry::script("index.ts", code));
        assert_eq!(
            sources[1],
            SourceEntry::stylesheet("./a.css", ".a { color: red; }")
        );

        fs::remove_file(css_path).unwrap();
    }

    #[test]
    fn missing_stylesheet_tolerated_as_empty() {
        let code = "import './missing.css';\nvar gone = true;";
        let sources = build_source_list(code, "/no-such-dir/x.md", &[]);
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[1], SourceEntry::stylesheet("./missing.css", ""));
    }

    #[test]
    fn alias_changes_read_location_not_filename() {
        let dir = std::env::temp_dir().join("mdlive-inline-alias");
        fs::create_dir_all(dir.join("shared")).unwrap();
        let css_path = dir.join("shared").join("theme.less");
        fs::write(&css_path, "@color: blue;").unwrap();
        let doc = format!("{}/x.md", dir.display());

        let rules = vec![AliasRule {
            find: String::from("@theme"),
            replacement: String::from("./shared"),
        }];
        let code = "import '@theme/theme.less';";
        let sources = build_source_list(code, &doc, &rules);

        assert_eq!(sources[1].filename, "@theme/theme.less");
        assert_eq!(sources[1].code, "@color: blue;");
        assert_eq!(sources[1].kind, SourceKind::Css);

        fs::remove_file(css_path).unwrap();
    }

    #[test]
    fn imports_kept_in_scan_order() {
        let dir = std::env::temp_dir().join("mdlive-inline-order");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("b.css"), ".b {}").unwrap();
        fs::write(dir.join("a.scss"), ".a {}").unwrap();
        let doc = format!("{}/x.md", dir.display());

        let code = "import './b.css';\nimport \"./a.scss\";";
        let sources = build_source_list(code, &doc, &[]);

        assert_eq!(sources[1].filename, "./b.css");
        assert_eq!(sources[2].filename, "./a.scss");

        fs::remove_file(dir.join("b.css")).unwrap();
        fs::remove_file(dir.join("a.scss")).unwrap();
    }

    #[test]
    fn scan_is_textual_best_effort() {
        // A quoted path in a comment still counts as an import.
        let code = "// import './dead.css';\nvar x = 1;";
        let sources = build_source_list(code, "/no-such-dir/x.md", &[]);
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[1].filename, "./dead.css");
    }

    #[test]
    fn source_entry_json_shape() {
        let entry = SourceEntry::stylesheet("./a.css", ".a {}");
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"filename":"./a.css","code":".a {}","type":"css"}"#
        );
    }
}
