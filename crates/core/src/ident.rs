//! Identifier derivation for preview blocks.
//!
//! Every preview block is named after its position in the document and a
//! digest of its raw source, so artifact keys stay stable across compiles
//! of the same document and never collide within one compile.

use sha2::{Digest, Sha256};

/// Extension shared by every virtual artifact key.
pub const ARTIFACT_EXT: &str = "vpms";

/// First 7 hex characters of the SHA-256 digest of `content`.
///
/// The digest is bookkeeping, not security: it only has to tell blocks
/// apart and change when the source changes.
pub fn content_digest(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let mut digest = hex::encode(hasher.finalize());
    digest.truncate(7);
    digest
}

/// The full set of names derived for one preview block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockKeys {
    /// 7-character content digest of the raw block source.
    pub digest: String,
    /// Block id: `<counter>_<digest>`.
    pub id: String,
    /// Placeholder custom-element tag: `preview-block-<counter>-<digest>`.
    pub tag_name: String,
    /// Entry module variable name: `PreviewBlock<id>`.
    pub entry_var: String,
    /// Artifact-map key of the rendered entry module.
    pub entry_key: String,
    /// Artifact-map key of the raw component source.
    pub component_key: String,
    /// Loader request path of the entry module: `<filepath>.<entry_key>`.
    pub entry_request: String,
    /// Loader request path of the component source.
    pub component_request: String,
}

impl BlockKeys {
    /// Derive all names for the preview block numbered `counter`.
    ///
    /// `code` must be the raw (unescaped) block source; the digest feeds
    /// every derived name, so hashing escaped text would make identifiers
    /// depend on the escaping rules instead of the author's source.
    pub fn derive(counter: u32, code: &str, filepath: &str) -> Self {
        let digest = content_digest(code);
        let id = format!("{}_{}", counter, digest);
        let tag_name = format!("preview-block-{}-{}", counter, digest);
        let entry_var = format!("PreviewBlock{}", id);
        let entry_key = format!("{}.{}", entry_var, ARTIFACT_EXT);
        let component_key = format!("Component{}.{}", id, ARTIFACT_EXT);
        let entry_request = format!("{}.{}", filepath, entry_key);
        let component_request = format!("{}.{}", filepath, component_key);
        BlockKeys {
            digest,
            id,
            tag_name,
            entry_var,
            entry_key,
            component_key,
            entry_request,
            component_request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_seven_lowercase_hex() {
        assert_eq!(content_digest("hello"), "2cf24db");
        assert_eq!(content_digest(""), "e3b0c44");
    }

    #[test]
    fn derive_produces_every_name() {
        let keys = BlockKeys::derive(1, "import './a.css';\nvar x = 1;", "/docs/x.md");
        assert_eq!(keys.digest, "0981542");
        assert_eq!(keys.id, "1_0981542");
        assert_eq!(keys.tag_name, "preview-block-1-0981542");
        assert_eq!(keys.entry_var, "PreviewBlock1_0981542");
        assert_eq!(keys.entry_key, "PreviewBlock1_0981542.vpms");
        assert_eq!(keys.component_key, "Component1_0981542.vpms");
        assert_eq!(keys.entry_request, "/docs/x.md.PreviewBlock1_0981542.vpms");
        assert_eq!(keys.component_request, "/docs/x.md.Component1_0981542.vpms");
    }

    #[test]
    fn same_source_same_digest_distinct_ids() {
        let first = BlockKeys::derive(1, "var same = true;", "/docs/x.md");
        let second = BlockKeys::derive(2, "var same = true;", "/docs/x.md");
        assert_eq!(first.digest, second.digest);
        assert_ne!(first.id, second.id);
        assert_ne!(first.tag_name, second.tag_name);
        assert_ne!(first.entry_key, second.entry_key);
    }
}
