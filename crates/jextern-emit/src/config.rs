//! Configuration types for extern emission.

/// Words the target language reserves that are legal member names in the source.
pub const DEFAULT_RESERVED_WORDS: &[&str] = &[
    "cast", "dynamic", "extern", "function", "in", "inline", "macro", "operator", "overload",
    "typedef", "untyped", "using", "var",
];

/// Configuration for extern emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// One indentation unit
    pub(crate) indent: String,
    /// Universal top type; bounds equal to it are omitted
    pub(crate) top_type: String,
    /// Base type every enumeration extends
    pub(crate) enum_base: String,
    /// Member names that must be renamed
    pub(crate) reserved_words: Vec<String>,
    /// Prefix prepended to reserved member names
    pub(crate) reserved_prefix: String,
    /// Whether to emit documentation comments
    pub(crate) emit_docs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            top_type: "java.lang.Object".to_string(),
            enum_base: "java.lang.Enum".to_string(),
            reserved_words: DEFAULT_RESERVED_WORDS
                .iter()
                .map(|w| w.to_string())
                .collect(),
            reserved_prefix: "do".to_string(),
            emit_docs: true,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation unit to `width` spaces.
    pub fn indent_width(mut self, width: usize) -> Self {
        self.indent = " ".repeat(width);
        self
    }

    /// Set the indentation unit verbatim (e.g. `"\t"`).
    pub fn indent(mut self, unit: impl Into<String>) -> Self {
        self.indent = unit.into();
        self
    }

    /// Set the universal top type.
    pub fn top_type(mut self, name: impl Into<String>) -> Self {
        self.top_type = name.into();
        self
    }

    /// Set the base type of enumerations.
    pub fn enum_base(mut self, name: impl Into<String>) -> Self {
        self.enum_base = name.into();
        self
    }

    /// Replace the reserved word list.
    pub fn reserved_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Set the prefix used to rename reserved member names.
    pub fn reserved_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.reserved_prefix = prefix.into();
        self
    }

    /// Set whether to emit documentation comments.
    pub fn emit_docs(mut self, value: bool) -> Self {
        self.emit_docs = value;
        self
    }

    pub(crate) fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.iter().any(|w| w == name)
    }

    pub(crate) fn indent_for(&self, level: usize) -> String {
        self.indent.repeat(level)
    }
}
