use jextern_core::Modifier::{Private, Public, Static};
use jextern_core::{Declaration, Parameter, TypeRef};

use crate::error::Error;
use crate::sink::MemorySinks;
use crate::{Config, Emitter};

fn emit(decl: &Declaration) -> String {
    Emitter::new(Config::default())
        .emit_string(decl)
        .unwrap()
        .expect("declaration should be exported")
}

fn nested(qualified_name: &str) -> Declaration {
    Declaration::class(qualified_name).with_modifiers([Public, Static])
}

#[test]
fn three_levels_deep() {
    let deep = nested("com.example.Outer.Mid.Inner.Deep").with_member(
        Declaration::method("copy", TypeRef::declared("com.example.Outer.Mid.Inner.Deep"))
            .with_modifiers([Public]),
    );
    let decl = Declaration::class("com.example.Outer")
        .with_modifiers([Public])
        .with_member(nested("com.example.Outer.Mid").with_member(
            nested("com.example.Outer.Mid.Inner").with_member(deep),
        ));

    insta::assert_snapshot!(emit(&decl), @r"
    package com.example;

    @:native('com.example.Outer')
    extern class Outer
    {
    }

    @:native('com.example.Outer.Mid')
    extern class OuterMid
    {
    }

    @:native('com.example.Outer.Mid.Inner')
    extern class OuterMidInner
    {
    }

    @:native('com.example.Outer.Mid.Inner.Deep')
    extern class OuterMidInnerDeep
    {
      public function copy():com.example.Outer.OuterMidInnerDeep;
    }
    ");
}

#[test]
fn hoisted_in_source_order() {
    let decl = Declaration::class("com.example.Outer")
        .with_member(nested("com.example.Outer.A").with_member(nested("com.example.Outer.A.One")))
        .with_member(Declaration::field("x", TypeRef::int()).with_modifiers([Public]))
        .with_member(nested("com.example.Outer.B"));

    let out = emit(&decl);
    let headers: Vec<&str> = out
        .lines()
        .filter(|l| l.starts_with("extern class"))
        .collect();
    assert_eq!(
        headers,
        [
            "extern class Outer",
            "extern class OuterA",
            "extern class OuterAOne",
            "extern class OuterB",
        ]
    );
}

#[test]
fn nested_type_does_not_disturb_member_spacing() {
    let decl = Declaration::class("com.example.Outer")
        .with_member(Declaration::field("a", TypeRef::int()).with_modifiers([Public]))
        .with_member(nested("com.example.Outer.Inner"))
        .with_member(Declaration::field("b", TypeRef::int()).with_modifiers([Public]));

    insta::assert_snapshot!(emit(&decl), @r"
    package com.example;

    @:native('com.example.Outer')
    extern class Outer
    {
      public var a:Int;

      public var b:Int;
    }

    @:native('com.example.Outer.Inner')
    extern class OuterInner
    {
    }
    ");
}

#[test]
fn private_nested_subtree_is_dropped_entirely() {
    let decl = Declaration::class("com.example.Outer").with_member(
        Declaration::class("com.example.Outer.Hidden")
            .with_modifiers([Private, Static])
            .with_member(nested("com.example.Outer.Hidden.Visible")),
    );

    let out = emit(&decl);
    assert!(!out.contains("Hidden"), "{out}");
    assert!(!out.contains("Visible"), "{out}");
}

#[test]
fn substitution_rewrites_own_members_verbatim() {
    let inner = nested("com.example.Outer.Inner")
        .with_member(
            Declaration::method("self", TypeRef::declared("com.example.Outer.Inner"))
                .with_modifiers([Public]),
        )
        .with_member(
            Declaration::method("box", TypeRef::declared("com.example.Outer.InnerBox"))
                .with_modifiers([Public])
                .with_param(Parameter::new(
                    "all",
                    TypeRef::generic("java.util.List", [TypeRef::declared("com.example.Outer.Inner")]),
                )),
        );
    let decl = Declaration::class("com.example.Outer")
        .with_member(inner)
        .with_member(nested("com.example.Outer.InnerBox"));

    insta::assert_snapshot!(emit(&decl), @r"
    package com.example;

    @:native('com.example.Outer')
    extern class Outer
    {
    }

    @:native('com.example.Outer.Inner')
    extern class OuterInner
    {
      public function self():com.example.Outer.OuterInner;

      public function box(all:java.util.List<com.example.Outer.OuterInner>):com.example.Outer.OuterInnerBox;
    }

    @:native('com.example.Outer.InnerBox')
    extern class OuterInnerBox
    {
    }
    ");
}

#[test]
fn nested_enum_extends_base_with_flattened_name() {
    let kind = TypeRef::declared("com.example.Outer.Kind");
    let decl = Declaration::class("com.example.Outer").with_member(
        Declaration::enumeration("com.example.Outer.Kind")
            .with_modifiers([Public, Static])
            .with_member(Declaration::enum_constant("ONE", kind)),
    );

    insta::assert_snapshot!(emit(&decl), @r"
    package com.example;

    @:native('com.example.Outer')
    extern class Outer
    {
    }

    @:native('com.example.Outer.Kind')
    extern class OuterKind extends java.lang.Enum<com.example.Outer.OuterKind>
    {
      public static var ONE:com.example.Outer.OuterKind;
    }
    ");
}

#[test]
fn nested_interface_in_unnamed_package() {
    let decl = Declaration::class("Top").with_member(Declaration::interface("Top.Listener"));

    let out = emit(&decl);
    assert!(out.contains("@:native('Top.Listener')\nextern interface TopListener\n"), "{out}");
}

#[test]
fn flattened_name_collision_is_an_error() {
    let decl = Declaration::class("com.example.Outer")
        .with_member(nested("com.example.Outer.AB"))
        .with_member(nested("com.example.Outer.A").with_member(nested("com.example.Outer.A.B")));

    let emitter = Emitter::new(Config::default());
    let mut sinks = MemorySinks::new();
    let err = emitter.emit_to(&decl, &mut sinks).unwrap_err();

    match err {
        Error::NameCollision {
            flattened,
            first,
            second,
        } => {
            assert_eq!(flattened, "OuterAB");
            assert_eq!(first, "com.example.Outer.AB");
            assert_eq!(second, "com.example.Outer.A.B");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(sinks.is_empty());
}

#[test]
fn hidden_sibling_does_not_claim_its_name() {
    let decl = Declaration::class("com.example.Outer")
        .with_member(
            Declaration::class("com.example.Outer.AB").with_modifiers([Private]),
        )
        .with_member(nested("com.example.Outer.A").with_member(nested("com.example.Outer.A.B")));

    let out = emit(&decl);
    assert!(out.contains("extern class OuterAB\n"), "{out}");
    assert!(out.contains("@:native('com.example.Outer.A.B')"), "{out}");
}
