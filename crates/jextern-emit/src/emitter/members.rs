//! Fields, methods, constructors and enum constants.

use jextern_core::{DeclKind, Declaration, Parameter, Signature, Variable};

use super::modifiers::{self, ModifierPolicy};
use super::{Disposition, Emitter};
use crate::sentinel::sentinel;
use crate::staging::{FragmentRole, StagingBuffer};
use crate::types::null_of;

/// Target name of every constructor.
const CONSTRUCTOR_NAME: &str = "new";

impl Emitter {
    /// Stage one non-compound member at `level`.
    pub(super) fn stage_member(
        &self,
        member: &Declaration,
        level: usize,
        buf: &mut StagingBuffer,
    ) -> Disposition {
        let indent = self.indent(level);
        match &member.kind {
            DeclKind::Field(var) => self.stage_field(member, var, &indent, buf),
            DeclKind::EnumConstant(var) => self.stage_enum_constant(member, var, &indent, buf),
            DeclKind::Method(sig) => self.stage_executable(member, sig, false, &indent, buf),
            DeclKind::Constructor(sig) => self.stage_executable(member, sig, true, &indent, buf),
            DeclKind::Unknown(kind) => {
                buf.stage(
                    FragmentRole::Diagnostic,
                    format!("{indent}{}\n", sentinel("element", kind)),
                );
                Disposition::Committed
            }
            // Compounds are hoisted by the caller.
            DeclKind::Class | DeclKind::Interface | DeclKind::Enum | DeclKind::Record => {
                buf.stage(
                    FragmentRole::Diagnostic,
                    format!("{indent}{}\n", sentinel("inner_class", &member.qualified_name)),
                );
                Disposition::Committed
            }
        }
    }

    fn stage_field(
        &self,
        member: &Declaration,
        var: &Variable,
        indent: &str,
        buf: &mut StagingBuffer,
    ) -> Disposition {
        let mods = modifiers::scan(member, ModifierPolicy::Field, indent, buf);
        if !mods.exported_field() {
            buf.discard();
            return Disposition::Discarded;
        }

        self.stage_docs(member, indent, buf);
        let name = self.stage_member_name(member, indent, buf);

        let mut ty = self.types.render_type(&var.ty);
        if var.nullable {
            ty = null_of(&ty);
        }
        let stat = if mods.is_static { "static " } else { "" };
        let storage = if mods.is_final { "final" } else { "var" };
        buf.stage(
            FragmentRole::Member,
            format!("{indent}public {stat}{storage} {name}:{ty};\n"),
        );
        Disposition::Committed
    }

    /// Enum constants are always exported and carry no modifiers of interest.
    fn stage_enum_constant(
        &self,
        member: &Declaration,
        var: &Variable,
        indent: &str,
        buf: &mut StagingBuffer,
    ) -> Disposition {
        self.stage_docs(member, indent, buf);
        let name = self.stage_member_name(member, indent, buf);
        let ty = self.types.render_type(&var.ty);
        buf.stage(
            FragmentRole::Member,
            format!("{indent}public static var {name}:{ty};\n"),
        );
        Disposition::Committed
    }

    fn stage_executable(
        &self,
        member: &Declaration,
        sig: &Signature,
        constructor: bool,
        indent: &str,
        buf: &mut StagingBuffer,
    ) -> Disposition {
        let mods = modifiers::scan(member, ModifierPolicy::Executable, indent, buf);
        // Constructors are emitted whatever their visibility.
        if !constructor && !mods.exported() {
            buf.discard();
            return Disposition::Discarded;
        }

        self.stage_docs(member, indent, buf);

        let mut line = String::from(indent);
        if mods.public || constructor {
            line.push_str("public ");
        }
        if mods.is_static {
            line.push_str("static ");
        }
        if mods.is_final {
            line.push_str("final ");
        }
        line.push_str("function ");

        if constructor {
            line.push_str(CONSTRUCTOR_NAME);
        } else {
            line.push_str(&self.stage_member_name(member, indent, buf));
            line.push_str(&self.type_params(member));
        }

        let params: Vec<String> = sig
            .params
            .iter()
            .enumerate()
            .map(|(i, param)| self.parameter(i, param))
            .collect();
        line.push('(');
        line.push_str(&params.join(", "));
        line.push(')');

        if !constructor {
            let returns = self.types.render_type(&sig.returns);
            line.push(':');
            if sig.nullable {
                line.push_str(&null_of(&returns));
            } else {
                line.push_str(&returns);
            }
        }
        line.push_str(";\n");

        buf.stage(FragmentRole::Member, line);
        Disposition::Committed
    }

    fn parameter(&self, index: usize, param: &Parameter) -> String {
        let name = match param.name.as_str() {
            "" => format!("arg{index}"),
            name => self.member_name(name).0,
        };
        let ty = self.types.render_type(&param.ty);
        if param.nullable {
            format!("{name}:{}", null_of(&ty))
        } else {
            format!("{name}:{ty}")
        }
    }

    /// Emit-safe member name. A renamed member gets a native annotation
    /// carrying its original name.
    fn stage_member_name(&self, member: &Declaration, indent: &str, buf: &mut StagingBuffer) -> String {
        let (name, original) = self.member_name(&member.name);
        if let Some(original) = original {
            buf.stage(FragmentRole::Header, self.native_line(original, indent));
        }
        name
    }
}
