//! Speculative output staging.
//!
//! Declarations are rendered into a [`StagingBuffer`] before anything reaches
//! a sink. A subtree that turns out to be filtered (not exported) is thrown
//! away with [`StagingBuffer::discard`]; a kept subtree is moved into its
//! parent with [`StagingBuffer::commit_into`] or written out with
//! [`StagingBuffer::commit`]. Staged text can still be rewritten with
//! [`StagingBuffer::substitute_all`] until it is committed.

use std::io::{self, Write};

/// Logical role of a staged fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FragmentRole {
    /// Declaration line, annotation or documentation block
    Header,
    /// A member line
    Member,
    /// Blank line between members or hoisted declarations
    Separator,
    /// Closing brace
    Close,
    /// Sentinel line
    Diagnostic,
}

/// One piece of staged text with its role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    role: FragmentRole,
    text: String,
}

impl Fragment {
    pub fn role(&self) -> FragmentRole {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn is_line_break(&self) -> bool {
        self.text == "\n"
    }
}

/// Ordered fragments awaiting a commit or discard decision.
#[derive(Clone, Debug, Default)]
pub struct StagingBuffer {
    fragments: Vec<Fragment>,
}

impl StagingBuffer {
    /// An empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment.
    ///
    /// A bare line break staged right after another bare line break is
    /// dropped, so blank lines never stack. Returns whether it was appended.
    pub fn stage(&mut self, role: FragmentRole, text: impl Into<String>) -> bool {
        let fragment = Fragment {
            role,
            text: text.into(),
        };
        if fragment.is_line_break() && self.fragments.last().is_some_and(Fragment::is_line_break) {
            return false;
        }
        self.fragments.push(fragment);
        true
    }

    /// Stage a blank line.
    pub fn separator(&mut self) -> bool {
        self.stage(FragmentRole::Separator, "\n")
    }

    /// Replace every occurrence of `find` in staged text, verbatim.
    ///
    /// Longer names that start with `find` are rewritten too, so a sibling
    /// `pkg.Outer.InnerBox` follows `pkg.Outer.Inner` to
    /// `pkg.Outer.OuterInnerBox`. Returns the number of fragments that changed.
    pub fn substitute_all(&mut self, find: &str, replace: &str) -> usize {
        if find.is_empty() || find == replace {
            return 0;
        }
        let mut changed = 0;
        for fragment in &mut self.fragments {
            if fragment.text.contains(find) {
                fragment.text = fragment.text.replace(find, replace);
                changed += 1;
            }
        }
        changed
    }

    /// Move every fragment into `parent`, leaving this buffer empty.
    ///
    /// The blank-line rule applies at the seam.
    pub fn commit_into(&mut self, parent: &mut StagingBuffer) {
        for fragment in self.fragments.drain(..) {
            parent.stage(fragment.role, fragment.text);
        }
    }

    /// Write every fragment to `sink` in order, leaving this buffer empty.
    ///
    /// The buffer is emptied even when the sink fails part-way.
    pub fn commit<W: Write + ?Sized>(&mut self, sink: &mut W) -> io::Result<()> {
        let result = self
            .fragments
            .iter()
            .try_for_each(|f| sink.write_all(f.text.as_bytes()));
        self.fragments.clear();
        result
    }

    /// Drop every fragment.
    pub fn discard(&mut self) {
        self.fragments.clear();
    }

    /// Staged fragments in order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Number of staged fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Total size of the staged text in bytes.
    pub fn byte_len(&self) -> usize {
        self.fragments.iter().map(|f| f.text.len()).sum()
    }

    /// Concatenated staged text.
    pub fn text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }
}
