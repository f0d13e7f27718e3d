//! Modifier scanning.

use jextern_core::{DeclKind, Declaration, Modifier};

use crate::sentinel::sentinel;
use crate::staging::{FragmentRole, StagingBuffer};

/// Accepted modifier set for one declaration category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum ModifierPolicy {
    Class,
    Interface,
    Enum,
    Field,
    Executable,
}

impl ModifierPolicy {
    pub(super) fn for_kind(kind: &DeclKind) -> Self {
        match kind {
            DeclKind::Interface => ModifierPolicy::Interface,
            DeclKind::Enum => ModifierPolicy::Enum,
            DeclKind::Field(_) | DeclKind::EnumConstant(_) => ModifierPolicy::Field,
            DeclKind::Method(_) | DeclKind::Constructor(_) => ModifierPolicy::Executable,
            _ => ModifierPolicy::Class,
        }
    }

    fn accepts(self, modifier: &Modifier) -> bool {
        use Modifier::*;

        let access = matches!(modifier, Public | Protected | Private | Final | Static);
        access
            || match self {
                ModifierPolicy::Class | ModifierPolicy::Interface => matches!(modifier, Abstract),
                ModifierPolicy::Enum => matches!(modifier, Abstract | Sealed),
                ModifierPolicy::Field => matches!(modifier, Volatile),
                ModifierPolicy::Executable => {
                    matches!(modifier, Abstract | Default | Synchronized)
                }
            }
    }

    fn sentinel_kind(self) -> &'static str {
        match self {
            ModifierPolicy::Class => "class_modifier",
            ModifierPolicy::Interface => "interface_modifier",
            ModifierPolicy::Enum => "enum_modifier",
            ModifierPolicy::Field => "field_modifier",
            ModifierPolicy::Executable => "executable_modifier",
        }
    }
}

/// Modifiers that influence output.
#[derive(Clone, Copy, Debug, Default)]
pub(super) struct Modifiers {
    pub public: bool,
    /// `private` or `protected`
    pub hidden: bool,
    pub is_final: bool,
    pub is_static: bool,
    pub is_abstract: bool,
}

impl Modifiers {
    /// Types and executables are exported unless hidden.
    pub fn exported(&self) -> bool {
        !self.hidden
    }

    /// Fields must be explicitly public.
    pub fn exported_field(&self) -> bool {
        self.public && !self.hidden
    }
}

/// Scan `decl`'s modifiers, staging a sentinel line for every modifier the
/// policy does not accept.
///
/// Sentinels go into `buf` before the visibility decision, so they are
/// discarded together with a filtered declaration.
pub(super) fn scan(
    decl: &Declaration,
    policy: ModifierPolicy,
    indent: &str,
    buf: &mut StagingBuffer,
) -> Modifiers {
    let mut mods = Modifiers::default();
    for modifier in &decl.modifiers {
        if !policy.accepts(modifier) {
            let line = sentinel(policy.sentinel_kind(), modifier);
            buf.stage(FragmentRole::Diagnostic, format!("{indent}{line}\n"));
            continue;
        }
        match modifier {
            Modifier::Public => mods.public = true,
            Modifier::Private | Modifier::Protected => mods.hidden = true,
            Modifier::Final => mods.is_final = true,
            Modifier::Static => mods.is_static = true,
            Modifier::Abstract => mods.is_abstract = true,
            _ => {}
        }
    }
    mods
}
