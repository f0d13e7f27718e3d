//! Documentation comment rendering.

use jextern_core::{DocComment, DocNode};

use crate::escape::doc_text;
use crate::sentinel::sentinel;

/// Render a documentation comment as plain text.
///
/// Body nodes are concatenated; each block tag starts on its own line.
/// Returns `None` when there is nothing to say.
pub fn render_docs(docs: &DocComment) -> Option<String> {
    let mut text: String = docs.body.iter().map(render_node).collect();

    for tag in &docs.tags {
        let rendered = render_node(tag);
        if rendered.is_empty() {
            continue;
        }
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(&rendered);
    }

    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Render one documentation node.
pub fn render_node(node: &DocNode) -> String {
    match node {
        DocNode::Text { text } => text.clone(),
        DocNode::Code { code } => format!("`{code}`"),
        DocNode::Link { reference } => format!("`{reference}`"),
        DocNode::StartElement { .. } | DocNode::EndElement { .. } => String::new(),
        DocNode::Erroneous { text } => text.clone(),

        DocNode::Param { name, description } => tag("param", &[name, description]),
        DocNode::Return { description } => tag("return", &[description]),
        DocNode::Throws {
            exception,
            description,
        } => tag("throws", &[exception, description]),
        DocNode::See { reference } => tag("see", &[reference]),
        DocNode::Author { name } => tag("author", &[name]),
        DocNode::Deprecated { body } => tag("deprecated", &[body]),
        DocNode::Since { body } => tag("since", &[body]),
        DocNode::UnknownInlineTag { tag: name, content } => tag(name, &[content]),

        DocNode::Entity { name } => sentinel("doc_entity", format!("&{name};")),
        DocNode::Comment { body } => sentinel("doc_comment", body),
        DocNode::Version { body } => sentinel("doc_version", body),
        DocNode::Serial { description } => sentinel("doc_serial", description),
        DocNode::SerialData { description } => sentinel("doc_serial_data", description),
        DocNode::SerialField { name, description } => {
            sentinel("doc_serial_field", format!("{name} {description}").trim_end())
        }
        DocNode::InheritDoc => sentinel("doc_inherit_doc", "{@inheritDoc}"),
        DocNode::DocRoot => sentinel("doc_doc_root", "{@docRoot}"),
        DocNode::Value { reference } => sentinel("doc_value", reference),
        DocNode::UnknownBlockTag { tag: name, content } => {
            sentinel("doc_unknown_block_tag", format!("@{name} {content}").trim_end())
        }
        DocNode::Other { category, text } => sentinel(&format!("doc_{category}"), text),
    }
}

/// Wrap rendered documentation in a comment block at `indent`.
pub fn comment_block(text: &str, indent: &str) -> String {
    let mut out = format!("{indent}/**\n");
    for line in doc_text(text).lines() {
        let line = line.trim_end();
        if line.is_empty() {
            out.push_str(&format!("{indent} *\n"));
        } else {
            out.push_str(&format!("{indent} * {line}\n"));
        }
    }
    out.push_str(&format!("{indent} */\n"));
    out
}

fn tag(name: &str, parts: &[&String]) -> String {
    let mut out = format!("@{name}");
    for part in parts.iter().map(|p| p.trim()).filter(|p| !p.is_empty()) {
        out.push(' ');
        out.push_str(part);
    }
    out
}
