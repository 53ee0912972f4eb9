//! Rendering context for the mdast renderer.

/// Scopes tracked while walking the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Document root.
    Root,
    /// Inside a list.
    List {
        /// Whether the list is loose (items keep their `<p>` wrappers).
        spread: bool,
    },
}

/// Holds the HTML buffer and scope stack while walking the tree.
pub struct Context {
    output: String,
    stack: Vec<Scope>,
}

impl Context {
    /// Creates an empty context.
    pub fn new() -> Self {
        Context {
            output: String::with_capacity(4096),
            stack: vec![Scope::Root],
        }
    }

    /// Writes a raw string to the output without escaping (for HTML tags
    /// and renderer-produced markup).
    pub fn push_raw(&mut self, s: &str) {
        self.output.push_str(s);
    }

    /// Writes text content with HTML escaping.
    ///
    /// Escapes `<`, `>`, `&`, backticks, and curly braces: the rendered
    /// HTML may end up inside a San template literal, where backticks end
    /// the literal and braces open interpolations.
    pub fn push_text(&mut self, s: &str) {
        for c in s.chars() {
            match c {
                '<' => self.output.push_str("&lt;"),
                '>' => self.output.push_str("&gt;"),
                '&' => self.output.push_str("&amp;"),
                '`' => self.output.push_str("&#96;"),
                '{' => self.output.push_str("&#123;"),
                '}' => self.output.push_str("&#125;"),
                _ => self.output.push(c),
            }
        }
    }

    /// Writes an HTML-escaped attribute value.
    ///
    /// Escapes `<`, `>`, `&`, `"`, and `'` for safe attribute rendering.
    pub fn push_attr_value(&mut self, s: &str) {
        for c in s.chars() {
            match c {
                '<' => self.output.push_str("&lt;"),
                '>' => self.output.push_str("&gt;"),
                '&' => self.output.push_str("&amp;"),
                '"' => self.output.push_str("&quot;"),
                '\'' => self.output.push_str("&#39;"),
                _ => self.output.push(c),
            }
        }
    }

    /// Enters a new scope by pushing it onto the stack.
    pub fn enter(&mut self, scope: Scope) {
        self.stack.push(scope);
    }

    /// Exits the current scope by popping from the stack.
    pub fn exit(&mut self) -> Option<Scope> {
        self.stack.pop()
    }

    /// Returns true if inside a tight (non-spread) list.
    ///
    /// Used to suppress `<p>` wrappers around list item content, matching
    /// the CommonMark distinction between tight and loose lists.
    pub fn is_in_tight_list(&self) -> bool {
        self.stack
            .iter()
            .rev()
            .find(|scope| matches!(scope, Scope::List { .. }))
            .is_some_and(|scope| matches!(scope, Scope::List { spread: false }))
    }

    /// Returns the accumulated HTML.
    pub fn finish(self) -> String {
        self.output
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
