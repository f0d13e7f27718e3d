//! Output destinations.
//!
//! A [`SinkProvider`] is asked for a sink only once a top-level declaration
//! is known to produce output.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use jextern_core::Declaration;

/// Opens one writable sink per top-level declaration.
pub trait SinkProvider {
    type Sink<'a>: Write
    where
        Self: 'a;

    fn open(&mut self, decl: &Declaration) -> io::Result<Self::Sink<'_>>;
}

/// One `<Name>.hx` file per declaration, in package directories under a root.
#[derive(Clone, Debug)]
pub struct DirectorySinks {
    root: PathBuf,
    extension: String,
}

impl DirectorySinks {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: "hx".to_string(),
        }
    }

    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File the declaration is written to.
    pub fn path_for(&self, decl: &Declaration) -> PathBuf {
        let mut path = self.root.clone();
        path.extend(decl.package().split('.').filter(|s| !s.is_empty()));
        path.push(format!("{}.{}", decl.name, self.extension));
        path
    }
}

impl SinkProvider for DirectorySinks {
    type Sink<'a> = BufWriter<File>;

    fn open(&mut self, decl: &Declaration) -> io::Result<Self::Sink<'_>> {
        let path = self.path_for(decl);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        tracing::debug!(path = %path.display(), "opening output file");
        Ok(BufWriter::new(File::create(path)?))
    }
}

/// Everything goes to standard output, one declaration after another.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSinks;

impl SinkProvider for StdoutSinks {
    type Sink<'a> = io::StdoutLock<'static>;

    fn open(&mut self, _decl: &Declaration) -> io::Result<Self::Sink<'_>> {
        Ok(io::stdout().lock())
    }
}

/// In-memory sinks keyed by qualified name.
#[derive(Clone, Debug, Default)]
pub struct MemorySinks {
    outputs: IndexMap<String, Vec<u8>>,
}

impl MemorySinks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Output for a declaration, if one was opened.
    pub fn get(&self, qualified_name: &str) -> Option<&str> {
        self.outputs
            .get(qualified_name)
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    /// Qualified names in the order their sinks were opened.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.outputs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }
}

impl SinkProvider for MemorySinks {
    type Sink<'a> = &'a mut Vec<u8>;

    fn open(&mut self, decl: &Declaration) -> io::Result<Self::Sink<'_>> {
        let buf = self.outputs.entry(decl.qualified_name.clone()).or_default();
        buf.clear();
        Ok(buf)
    }
}
