//! Classes, interfaces, enumerations and records.

use jextern_core::{DeclKind, Declaration};

use super::flatten::{FlatNames, Staged};
use super::modifiers::{self, ModifierPolicy, Modifiers};
use super::{Disposition, Emitter};
use crate::error::Result;
use crate::staging::{FragmentRole, StagingBuffer};

impl Emitter {
    /// Stage one compound declaration into `buf`: header, members, close.
    ///
    /// `prefix` is the enclosing name chain; empty for a top-level
    /// declaration. Compound members are not rendered, they are returned
    /// for hoisting.
    pub(super) fn stage_compound<'d>(
        &self,
        decl: &'d Declaration,
        prefix: &str,
        level: usize,
        names: &mut FlatNames,
        buf: &mut StagingBuffer,
    ) -> Result<Staged<'d>> {
        let hoisted = !prefix.is_empty();
        let indent = self.indent(level);

        if hoisted {
            buf.separator();
        }

        let mods = modifiers::scan(decl, ModifierPolicy::for_kind(&decl.kind), &indent, buf);
        if !mods.exported() {
            tracing::debug!(declaration = %decl.qualified_name, "discarding hidden declaration");
            buf.discard();
            return Ok(Staged::Discarded);
        }

        let flattened = format!("{prefix}{}", decl.name);
        let flat_qualified = names.qualified(decl, &flattened, hoisted);
        names.claim(&flattened, &decl.qualified_name)?;

        self.stage_docs(decl, &indent, buf);
        buf.stage(
            FragmentRole::Header,
            self.native_line(&decl.qualified_name, &indent),
        );
        buf.stage(
            FragmentRole::Header,
            format!(
                "{indent}{}\n",
                self.declaration_line(decl, &mods, &flattened, &flat_qualified)
            ),
        );
        buf.stage(FragmentRole::Header, format!("{indent}{{\n"));

        let (mut body, deferred) = self.stage_body(decl, level + 1);
        // Only the body: the native annotation must keep the original name.
        body.substitute_all(&decl.qualified_name, &flat_qualified);
        body.commit_into(buf);

        buf.stage(FragmentRole::Close, format!("{indent}}}\n"));
        tracing::debug!(declaration = %decl.qualified_name, name = %flattened, "committed declaration");
        Ok(Staged::Committed { deferred })
    }

    /// Render non-compound members; collect compound ones.
    fn stage_body<'d>(
        &self,
        decl: &'d Declaration,
        level: usize,
    ) -> (StagingBuffer, Vec<&'d Declaration>) {
        let mut body = StagingBuffer::new();
        let mut deferred = Vec::new();
        let mut rendered = 0;

        for member in &decl.members {
            if member.is_compound() {
                deferred.push(member);
                continue;
            }
            let mut staged = StagingBuffer::new();
            if self.stage_member(member, level, &mut staged) == Disposition::Discarded {
                continue;
            }
            if rendered > 0 {
                body.separator();
            }
            staged.commit_into(&mut body);
            rendered += 1;
        }

        (body, deferred)
    }

    fn declaration_line(
        &self,
        decl: &Declaration,
        mods: &Modifiers,
        flattened: &str,
        flat_qualified: &str,
    ) -> String {
        let generics = self.type_params(decl);
        let mut line = String::new();
        if !matches!(decl.kind, DeclKind::Interface) {
            if mods.is_abstract {
                line.push_str("abstract ");
            }
            if mods.is_final {
                line.push_str("final ");
            }
        }
        match decl.kind {
            DeclKind::Interface => {
                line.push_str(&format!("extern interface {flattened}{generics}"));
            }
            DeclKind::Enum => line.push_str(&format!(
                "extern class {flattened}{generics} extends {}<{flat_qualified}>",
                self.config.enum_base
            )),
            _ => line.push_str(&format!("extern class {flattened}{generics}")),
        }
        line
    }
}
