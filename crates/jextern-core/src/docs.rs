//! Structured documentation comments.

use serde::{Deserialize, Serialize};

/// A documentation comment: inline body followed by block tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DocComment {
    #[serde(default)]
    pub body: Vec<DocNode>,
    #[serde(default)]
    pub tags: Vec<DocNode>,
}

impl DocComment {
    /// A comment whose body is a single text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            body: vec![DocNode::Text { text: text.into() }],
            tags: Vec::new(),
        }
    }

    pub fn with_body(mut self, node: DocNode) -> Self {
        self.body.push(node);
        self
    }

    pub fn with_tag(mut self, node: DocNode) -> Self {
        self.tags.push(node);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty() && self.tags.is_empty()
    }
}

/// One node of a documentation tree.
///
/// Deserialized through [`RawDocNode`]; unknown kinds become [`DocNode::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case", from = "RawDocNode")]
pub enum DocNode {
    Text {
        text: String,
    },
    /// Inline code literal.
    Code {
        code: String,
    },
    Link {
        reference: String,
    },
    /// HTML start tag such as `<p>`.
    StartElement {
        name: String,
    },
    EndElement {
        name: String,
    },
    /// HTML entity such as `&lt;`.
    Entity {
        name: String,
    },
    /// HTML comment.
    Comment {
        body: String,
    },
    /// Text the doc parser could not make sense of.
    Erroneous {
        text: String,
    },
    Param {
        name: String,
        #[serde(default)]
        description: String,
    },
    Return {
        #[serde(default)]
        description: String,
    },
    Throws {
        exception: String,
        #[serde(default)]
        description: String,
    },
    See {
        reference: String,
    },
    Author {
        name: String,
    },
    Deprecated {
        #[serde(default)]
        body: String,
    },
    Since {
        body: String,
    },
    Version {
        body: String,
    },
    Serial {
        #[serde(default)]
        description: String,
    },
    SerialData {
        #[serde(default)]
        description: String,
    },
    SerialField {
        name: String,
        #[serde(default)]
        description: String,
    },
    InheritDoc,
    DocRoot,
    Value {
        #[serde(default)]
        reference: String,
    },
    UnknownInlineTag {
        tag: String,
        #[serde(default)]
        content: String,
    },
    UnknownBlockTag {
        tag: String,
        #[serde(default)]
        content: String,
    },
    Other {
        category: String,
        #[serde(default)]
        text: String,
    },
}

impl DocNode {
    pub fn text(text: impl Into<String>) -> Self {
        DocNode::Text { text: text.into() }
    }

    /// Kind name as used in the serialized form.
    pub fn kind_name(&self) -> &str {
        match self {
            DocNode::Text { .. } => "text",
            DocNode::Code { .. } => "code",
            DocNode::Link { .. } => "link",
            DocNode::StartElement { .. } => "start_element",
            DocNode::EndElement { .. } => "end_element",
            DocNode::Entity { .. } => "entity",
            DocNode::Comment { .. } => "comment",
            DocNode::Erroneous { .. } => "erroneous",
            DocNode::Param { .. } => "param",
            DocNode::Return { .. } => "return",
            DocNode::Throws { .. } => "throws",
            DocNode::See { .. } => "see",
            DocNode::Author { .. } => "author",
            DocNode::Deprecated { .. } => "deprecated",
            DocNode::Since { .. } => "since",
            DocNode::Version { .. } => "version",
            DocNode::Serial { .. } => "serial",
            DocNode::SerialData { .. } => "serial_data",
            DocNode::SerialField { .. } => "serial_field",
            DocNode::InheritDoc => "inherit_doc",
            DocNode::DocRoot => "doc_root",
            DocNode::Value { .. } => "value",
            DocNode::UnknownInlineTag { .. } => "unknown_inline_tag",
            DocNode::UnknownBlockTag { .. } => "unknown_block_tag",
            DocNode::Other { category, .. } => category,
        }
    }
}

/// Raw documentation node: a kind string plus every text field, each
/// defaulting to empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDocNode {
    pub kind: String,
    pub text: String,
    pub code: String,
    pub reference: String,
    pub name: String,
    pub body: String,
    pub description: String,
    pub exception: String,
    pub tag: String,
    pub content: String,
    pub category: String,
}

impl From<RawDocNode> for DocNode {
    fn from(raw: RawDocNode) -> Self {
        match raw.kind.as_str() {
            "text" => DocNode::Text { text: raw.text },
            "code" => DocNode::Code { code: raw.code },
            "link" => DocNode::Link {
                reference: raw.reference,
            },
            "start_element" => DocNode::StartElement { name: raw.name },
            "end_element" => DocNode::EndElement { name: raw.name },
            "entity" => DocNode::Entity { name: raw.name },
            "comment" => DocNode::Comment { body: raw.body },
            "erroneous" => DocNode::Erroneous { text: raw.text },
            "param" => DocNode::Param {
                name: raw.name,
                description: raw.description,
            },
            "return" => DocNode::Return {
                description: raw.description,
            },
            "throws" => DocNode::Throws {
                exception: raw.exception,
                description: raw.description,
            },
            "see" => DocNode::See {
                reference: raw.reference,
            },
            "author" => DocNode::Author { name: raw.name },
            "deprecated" => DocNode::Deprecated { body: raw.body },
            "since" => DocNode::Since { body: raw.body },
            "version" => DocNode::Version { body: raw.body },
            "serial" => DocNode::Serial {
                description: raw.description,
            },
            "serial_data" => DocNode::SerialData {
                description: raw.description,
            },
            "serial_field" => DocNode::SerialField {
                name: raw.name,
                description: raw.description,
            },
            "inherit_doc" => DocNode::InheritDoc,
            "doc_root" => DocNode::DocRoot,
            "value" => DocNode::Value {
                reference: raw.reference,
            },
            "unknown_inline_tag" => DocNode::UnknownInlineTag {
                tag: raw.tag,
                content: raw.content,
            },
            "unknown_block_tag" => DocNode::UnknownBlockTag {
                tag: raw.tag,
                content: raw.content,
            },
            "other" => DocNode::Other {
                category: raw.category,
                text: raw.text,
            },
            kind => DocNode::Other {
                category: kind.to_string(),
                text: raw.text,
            },
        }
    }
}
