use std::fs;
use std::io::Write;

use jextern_core::{Declaration, Modifier, TypeRef};

use crate::sink::{DirectorySinks, MemorySinks, SinkProvider};
use crate::{Config, Emitter};

#[test]
fn directory_path_follows_package() {
    let sinks = DirectorySinks::new("/out");
    let decl = Declaration::class("com.example.util.Point");
    assert_eq!(
        sinks.path_for(&decl),
        std::path::Path::new("/out/com/example/util/Point.hx")
    );
}

#[test]
fn directory_path_for_unnamed_package() {
    let sinks = DirectorySinks::new("/out").extension("txt");
    let decl = Declaration::class("Top");
    assert_eq!(sinks.path_for(&decl), std::path::Path::new("/out/Top.txt"));
}

#[test]
fn directory_sink_creates_package_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let mut sinks = DirectorySinks::new(dir.path());
    let decl = Declaration::class("com.example.Point");

    let mut sink = sinks.open(&decl).unwrap();
    sink.write_all(b"package com.example;\n").unwrap();
    sink.flush().unwrap();
    drop(sink);

    let written = fs::read_to_string(dir.path().join("com/example/Point.hx")).unwrap();
    assert_eq!(written, "package com.example;\n");
}

#[test]
fn emitter_writes_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut sinks = DirectorySinks::new(dir.path());
    let emitter = Emitter::new(Config::default());

    let shown = Declaration::class("com.example.Shown").with_member(
        Declaration::field("x", TypeRef::int()).with_modifiers([Modifier::Public]),
    );
    let hidden = Declaration::class("com.example.Hidden").with_modifiers([Modifier::Private]);

    let report = emitter.emit_all([&shown, &hidden], &mut sinks);
    assert!(report.is_success());

    let written = fs::read_to_string(sinks.path_for(&shown)).unwrap();
    insta::assert_snapshot!(written, @r"
    package com.example;

    @:native('com.example.Shown')
    extern class Shown
    {
      public var x:Int;
    }
    ");
    assert!(!sinks.path_for(&hidden).exists());
}

#[test]
fn unwritable_root_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("com");
    fs::write(&blocker, "not a directory").unwrap();

    let mut sinks = DirectorySinks::new(dir.path());
    let decl = Declaration::class("com.example.Point");
    assert!(sinks.open(&decl).is_err());
}

#[test]
fn memory_sinks_keep_open_order() {
    let mut sinks = MemorySinks::new();
    sinks
        .open(&Declaration::class("b.Second"))
        .unwrap()
        .write_all(b"2")
        .unwrap();
    sinks
        .open(&Declaration::class("a.First"))
        .unwrap()
        .write_all(b"1")
        .unwrap();

    assert_eq!(sinks.len(), 2);
    assert_eq!(sinks.names().collect::<Vec<_>>(), ["b.Second", "a.First"]);
    assert_eq!(sinks.get("a.First"), Some("1"));
    assert_eq!(sinks.get("missing"), None);
}

#[test]
fn reopening_a_memory_sink_replaces_output() {
    let mut sinks = MemorySinks::new();
    let decl = Declaration::class("a.Thing");
    sinks.open(&decl).unwrap().write_all(b"old").unwrap();
    sinks.open(&decl).unwrap().write_all(b"new").unwrap();
    assert_eq!(sinks.get("a.Thing"), Some("new"));
}
