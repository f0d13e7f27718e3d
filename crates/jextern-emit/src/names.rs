//! Synthesized names for unnamed generic parameters.
//!
//! Each declaration kind starts at its own letter offset so that a method's
//! synthesized parameters do not shadow those of its enclosing class.

use std::collections::BTreeSet;

use jextern_core::{DeclKind, TypeParam};

const ALPHABET_LEN: usize = 26;

/// Letter offset for a declaration kind.
pub fn offset_for(kind: &DeclKind) -> usize {
    match kind {
        DeclKind::Class | DeclKind::Record => 5,
        DeclKind::Enum => 10,
        DeclKind::Interface => 15,
        _ => 20,
    }
}

/// Hands out fresh names within a single declaration's parameter list.
#[derive(Debug)]
pub struct NameAllocator {
    offset: usize,
    next: usize,
    used_names: BTreeSet<String>,
}

impl NameAllocator {
    pub fn new(offset: usize) -> Self {
        Self {
            offset,
            next: 0,
            used_names: BTreeSet::new(),
        }
    }

    /// Allocator for `kind`, with the explicit names in `params` already taken.
    pub fn for_params(kind: &DeclKind, params: &[TypeParam]) -> Self {
        let mut allocator = Self::new(offset_for(kind));
        for name in params.iter().filter_map(|p| p.name.as_deref()) {
            allocator.reserve(name);
        }
        allocator
    }

    /// Mark a name as taken.
    pub fn reserve(&mut self, name: &str) {
        self.used_names.insert(name.to_string());
    }

    /// Next name not yet taken.
    pub fn fresh(&mut self) -> String {
        loop {
            let name = candidate(self.offset, self.next);
            self.next += 1;
            if self.used_names.insert(name.clone()) {
                return name;
            }
        }
    }
}

/// The `n`-th candidate: one letter per alphabet position starting at
/// `offset` and wrapping, then `AA`, `AB`, ... once the alphabet is used up.
fn candidate(offset: usize, n: usize) -> String {
    if n < ALPHABET_LEN {
        return letter((offset + n) % ALPHABET_LEN).to_string();
    }

    let mut column = n + 1;
    let mut letters = Vec::new();
    while column > 0 {
        column -= 1;
        letters.push(letter(column % ALPHABET_LEN));
        column /= ALPHABET_LEN;
    }
    letters.iter().rev().collect()
}

fn letter(index: usize) -> char {
    char::from(b'A' + index as u8)
}
