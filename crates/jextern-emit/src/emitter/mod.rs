//! Declaration rendering.
//!
//! A top-level declaration is rendered into a [`StagingBuffer`] first; only
//! when something survives filtering is a sink opened and written.
//!
//! Nested compound declarations cannot be nested in the output, so they are
//! hoisted to the top level of the same file under a flattened name (see
//! `flatten`).

mod compound;
mod flatten;
mod members;
mod modifiers;

#[cfg(test)]
mod flatten_tests;

use std::io::Write;

use jextern_core::{Declaration, TypeParam};

use crate::docs::{comment_block, render_docs};
use crate::error::{Error, Result};
use crate::escape::native_literal;
use crate::names::NameAllocator;
use crate::sink::SinkProvider;
use crate::staging::{FragmentRole, StagingBuffer};
use crate::types::{HaxeTypes, RenderType};
use crate::Config;

/// Whether a rendered subtree was kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    Committed,
    Discarded,
}

/// Result of emitting one top-level declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Output was written; `bytes` counts everything including the package line.
    Written { bytes: usize },
    /// Nothing was exported, no sink was opened.
    Filtered,
}

/// Summary of a batch run.
#[derive(Debug, Default)]
pub struct Report {
    pub written: Vec<String>,
    pub filtered: Vec<String>,
    /// Failed top-level declarations with their error.
    pub failed: Vec<(String, Error)>,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Extern emitter.
pub struct Emitter {
    pub(crate) config: Config,
    pub(crate) types: Box<dyn RenderType>,
}

impl Emitter {
    pub fn new(config: Config) -> Self {
        let types = HaxeTypes::new(config.top_type.clone());
        Self::with_types(config, types)
    }

    /// Use a custom type renderer.
    pub fn with_types(config: Config, types: impl RenderType + 'static) -> Self {
        Self {
            config,
            types: Box::new(types),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Render `decl` and everything it hoists into a buffer.
    ///
    /// Returns `None` when `decl` itself is not exported.
    pub fn stage(&self, decl: &Declaration) -> Result<Option<StagingBuffer>> {
        self.stage_tree(decl)
    }

    /// Render `decl` to a string, package line included.
    pub fn emit_string(&self, decl: &Declaration) -> Result<Option<String>> {
        Ok(self
            .stage(decl)?
            .map(|staged| format!("{}{}", package_line(decl), staged.text())))
    }

    /// Render `decl` and write it to the sink `sinks` opens for it.
    ///
    /// The sink is only opened when something is exported. Whatever
    /// happens after it is opened, it is flushed before returning.
    pub fn emit_to<P: SinkProvider>(&self, decl: &Declaration, sinks: &mut P) -> Result<Outcome> {
        let Some(mut staged) = self.stage(decl)? else {
            tracing::debug!(declaration = %decl.qualified_name, "not exported, nothing written");
            return Ok(Outcome::Filtered);
        };

        let mut sink = sinks.open(decl).map_err(|source| Error::SinkUnavailable {
            declaration: decl.qualified_name.clone(),
            source,
        })?;

        let header = package_line(decl);
        let bytes = header.len() + staged.byte_len();
        let written = sink
            .write_all(header.as_bytes())
            .and_then(|()| staged.commit(&mut sink));
        let flushed = sink.flush();

        written
            .and(flushed)
            .map_err(|source| Error::Write {
                declaration: decl.qualified_name.clone(),
                source,
            })?;

        tracing::info!(declaration = %decl.qualified_name, bytes, "wrote extern");
        Ok(Outcome::Written { bytes })
    }

    /// Emit every declaration, continuing past failures.
    pub fn emit_all<'d, P: SinkProvider>(
        &self,
        decls: impl IntoIterator<Item = &'d Declaration>,
        sinks: &mut P,
    ) -> Report {
        let mut report = Report::default();
        for decl in decls {
            let name = decl.qualified_name.clone();
            match self.emit_to(decl, sinks) {
                Ok(Outcome::Written { .. }) => report.written.push(name),
                Ok(Outcome::Filtered) => report.filtered.push(name),
                Err(err) => {
                    tracing::error!(declaration = %name, error = %err, "emission failed");
                    report.failed.push((name, err));
                }
            }
        }
        report
    }

    // ========================================================================
    // Shared pieces
    // ========================================================================

    fn indent(&self, level: usize) -> String {
        self.config.indent_for(level)
    }

    fn stage_docs(&self, decl: &Declaration, indent: &str, buf: &mut StagingBuffer) {
        if !self.config.emit_docs {
            return;
        }
        let Some(text) = decl.docs.as_ref().and_then(render_docs) else {
            return;
        };
        buf.stage(FragmentRole::Header, comment_block(&text, indent));
    }

    /// Native annotation line for `qualified_name`.
    fn native_line(&self, qualified_name: &str, indent: &str) -> String {
        format!("{indent}@:native('{}')\n", native_literal(qualified_name))
    }

    /// Member name safe to emit, plus the original when it had to change.
    fn member_name<'n>(&self, name: &'n str) -> (String, Option<&'n str>) {
        if self.config.is_reserved(name) {
            (format!("{}{name}", self.config.reserved_prefix), Some(name))
        } else {
            (name.to_string(), None)
        }
    }

    /// `<A,B:Bound>` list for a declaration's type parameters, or empty.
    fn type_params(&self, decl: &Declaration) -> String {
        if decl.type_params.is_empty() {
            return String::new();
        }
        let mut names = NameAllocator::for_params(&decl.kind, &decl.type_params);
        let rendered: Vec<String> = decl
            .type_params
            .iter()
            .map(|param| self.type_param(param, &mut names))
            .collect();
        format!("<{}>", rendered.join(","))
    }

    fn type_param(&self, param: &TypeParam, names: &mut NameAllocator) -> String {
        let name = param.name.clone().unwrap_or_else(|| names.fresh());
        let bounds: Vec<String> = param
            .bounds
            .iter()
            .filter(|bound| !bound.is_top_type(&self.config.top_type))
            .map(|bound| self.types.render_type(bound))
            .collect();
        match bounds.as_slice() {
            [] => name,
            [bound] => format!("{name}:{bound}"),
            _ => format!("{name}:({})", bounds.join(",")),
        }
    }
}

/// `package a.b;` line followed by a blank line.
pub(crate) fn package_line(decl: &Declaration) -> String {
    match decl.package() {
        "" => "package;\n\n".to_string(),
        package => format!("package {package};\n\n"),
    }
}
