use indoc::indoc;
use jextern_core::{DocComment, DocNode};

use crate::docs::{comment_block, render_docs, render_node};

#[test]
fn inline_nodes_concatenate() {
    let docs = DocComment::text("Returns ")
        .with_body(DocNode::Code {
            code: "null".into(),
        })
        .with_body(DocNode::text(" unless "))
        .with_body(DocNode::Link {
            reference: "#isEmpty()".into(),
        })
        .with_body(DocNode::text("."));

    assert_eq!(
        render_docs(&docs).as_deref(),
        Some("Returns `null` unless `#isEmpty()`.")
    );
}

#[test]
fn block_tags_start_new_lines() {
    let docs = DocComment::text("Adds two numbers.")
        .with_tag(DocNode::Param {
            name: "a".into(),
            description: "first".into(),
        })
        .with_tag(DocNode::Param {
            name: "b".into(),
            description: "second".into(),
        })
        .with_tag(DocNode::Return {
            description: "the sum".into(),
        })
        .with_tag(DocNode::Throws {
            exception: "ArithmeticException".into(),
            description: "on overflow".into(),
        });

    insta::assert_snapshot!(render_docs(&docs).unwrap(), @r"
    Adds two numbers.
    @param a first
    @param b second
    @return the sum
    @throws ArithmeticException on overflow
    ");
}

#[test]
fn html_elements_vanish() {
    let docs = DocComment::text("One.")
        .with_body(DocNode::StartElement { name: "p".into() })
        .with_body(DocNode::text("Two."))
        .with_body(DocNode::EndElement { name: "p".into() });

    assert_eq!(render_docs(&docs).as_deref(), Some("One.Two."));
}

#[test]
fn empty_docs_render_nothing() {
    assert_eq!(render_docs(&DocComment::default()), None);
    assert_eq!(render_docs(&DocComment::text("   \n")), None);
}

#[test]
fn tags_without_body() {
    let docs = DocComment::default()
        .with_tag(DocNode::Deprecated { body: "".into() })
        .with_tag(DocNode::Since { body: "1.2".into() })
        .with_tag(DocNode::Author {
            name: "J. Doe".into(),
        })
        .with_tag(DocNode::See {
            reference: "java.util.List".into(),
        });

    insta::assert_snapshot!(render_docs(&docs).unwrap(), @r"
    @deprecated
    @since 1.2
    @author J. Doe
    @see java.util.List
    ");
}

#[test]
fn unknown_inline_tag_keeps_name() {
    let node = DocNode::UnknownInlineTag {
        tag: "literal".into(),
        content: "a < b".into(),
    };
    assert_eq!(render_node(&node), "@literal a < b");
}

#[test]
fn erroneous_text_passes_through() {
    let node = DocNode::Erroneous {
        text: "{@link".into(),
    };
    assert_eq!(render_node(&node), "{@link");
}

#[test]
fn unmappable_nodes_are_sentinels() {
    assert_eq!(render_node(&DocNode::InheritDoc), "~~~DOCINHERITDOC: {@inheritDoc}");
    assert_eq!(
        render_node(&DocNode::Entity { name: "lt".into() }),
        "~~~DOCENTITY: &lt;"
    );
    assert_eq!(
        render_node(&DocNode::Version { body: "2".into() }),
        "~~~DOCVERSION: 2"
    );
    assert_eq!(
        render_node(&DocNode::UnknownBlockTag {
            tag: "apiNote".into(),
            content: "careful".into(),
        }),
        "~~~DOCUNKNOWNBLOCKTAG: @apiNote careful"
    );
    assert_eq!(
        render_node(&DocNode::Other {
            category: "summary".into(),
            text: "short".into(),
        }),
        "~~~DOCSUMMARY: short"
    );
}

#[test]
fn comment_block_layout() {
    let block = comment_block("First line.\n\nSecond line.", "");
    assert_eq!(
        block,
        indoc! {"
            /**
             * First line.
             *
             * Second line.
             */
        "}
    );
}

#[test]
fn comment_block_is_indented() {
    let block = comment_block("Hi.", "  ");
    assert_eq!(block, "  /**\n   * Hi.\n   */\n");
}

#[test]
fn comment_terminator_is_escaped() {
    let block = comment_block("matches /* and */ literally", "");
    assert_eq!(block, "/**\n * matches /* and *\\/ literally\n */\n");
}
