//! Nested-type flattening.
//!
//! Compound members are not rendered inside their parent. They are deferred
//! and rendered afterwards at the top level of the same file, named by
//! concatenating the simple names of their enclosing chain
//! (`Outer.Inner.Deep` becomes `OuterInnerDeep`).
//!
//! Deferred declarations go onto an explicit work list, children pushed in
//! reverse so the output order is a pre-order walk of the source tree.

use indexmap::IndexMap;
use indexmap::map::Entry;
use jextern_core::Declaration;

use super::Emitter;
use crate::error::{Error, Result};
use crate::sentinel::contains_sentinel;
use crate::staging::StagingBuffer;

/// Outcome of staging one compound declaration.
pub(super) enum Staged<'d> {
    /// Rendered; compound members still to be hoisted.
    Committed { deferred: Vec<&'d Declaration> },
    Discarded,
}

/// A compound waiting to be hoisted, with its enclosing name chain.
struct Pending<'d> {
    decl: &'d Declaration,
    prefix: String,
}

/// Names handed out within one output file.
pub(super) struct FlatNames {
    package: String,
    module: String,
    claimed: IndexMap<String, String>,
}

impl FlatNames {
    fn new(top: &Declaration) -> Self {
        Self {
            package: top.package().to_string(),
            module: top.name.clone(),
            claimed: IndexMap::new(),
        }
    }

    /// Qualified name a declaration is referenced by once flattened.
    ///
    /// Top-level declarations keep their own name. Hoisted ones live in the
    /// top-level declaration's module: `<package>.<Top>.<Flattened>`.
    pub(super) fn qualified(&self, decl: &Declaration, flattened: &str, hoisted: bool) -> String {
        if !hoisted {
            return decl.qualified_name.clone();
        }
        [self.package.as_str(), self.module.as_str(), flattened]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Record that `original` is emitted as `flattened`.
    pub(super) fn claim(&mut self, flattened: &str, original: &str) -> Result<()> {
        match self.claimed.entry(flattened.to_string()) {
            Entry::Occupied(entry) => {
                tracing::warn!(
                    flattened,
                    first = %entry.get(),
                    second = original,
                    "flattened name collision"
                );
                Err(Error::NameCollision {
                    flattened: flattened.to_string(),
                    first: entry.get().clone(),
                    second: original.to_string(),
                })
            }
            Entry::Vacant(entry) => {
                entry.insert(original.to_string());
                Ok(())
            }
        }
    }
}

impl Emitter {
    /// Render a top-level declaration and every compound it hoists.
    pub(super) fn stage_tree(&self, top: &Declaration) -> Result<Option<StagingBuffer>> {
        let mut out = StagingBuffer::new();

        if !top.is_compound() {
            let disposition = self.stage_member(top, 0, &mut out);
            return Ok((disposition == super::Disposition::Committed).then_some(out));
        }

        let mut names = FlatNames::new(top);
        let mut work = vec![Pending {
            decl: top,
            prefix: String::new(),
        }];

        while let Some(Pending { decl, prefix }) = work.pop() {
            let hoisted = !prefix.is_empty();
            let mut buf = StagingBuffer::new();

            match self.stage_compound(decl, &prefix, 0, &mut names, &mut buf)? {
                Staged::Discarded if !hoisted => return Ok(None),
                Staged::Discarded => {}
                Staged::Committed { deferred } => {
                    warn_sentinels(decl, &buf);
                    buf.commit_into(&mut out);

                    let prefix = format!("{prefix}{}", decl.name);
                    work.extend(deferred.into_iter().rev().map(|decl| Pending {
                        decl,
                        prefix: prefix.clone(),
                    }));
                }
            }
        }

        Ok(Some(out))
    }
}

fn warn_sentinels(decl: &Declaration, buf: &StagingBuffer) {
    for fragment in buf.fragments() {
        for line in fragment.text().lines().filter(|l| contains_sentinel(l)) {
            tracing::warn!(
                declaration = %decl.qualified_name,
                sentinel = line.trim(),
                "construct has no extern mapping"
            );
        }
    }
}
