#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for jextern declaration trees.
//!
//! Two layers:
//! - **Deserialization layer**: 1:1 mapping to the frontend's JSON dump
//! - **Model layer**: typed declarations the emitter walks
//!
//! The tree is built once (by a frontend or by the builder methods below)
//! and is read-only afterwards. Nested declarations are owned by their
//! enclosing declaration.

mod docs;
mod modifier;
mod types;
pub mod utils;


pub use docs::{DocComment, DocNode, RawDocNode};
pub use modifier::Modifier;
pub use types::{PrimitiveKind, RawTypeRef, TypeRef};

use serde::{Deserialize, Serialize};

// ============================================================================
// Deserialization Layer
// ============================================================================

/// Raw declaration as written by the frontend.
///
/// Kind-specific fields are flat and optional here; [`Declaration::from`]
/// sorts them into [`DeclKind`]. Unknown kind strings are preserved.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDeclaration {
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub qualified_name: Option<String>,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(default)]
    pub type_params: Vec<TypeParam>,
    #[serde(default)]
    pub members: Vec<RawDeclaration>,
    #[serde(default)]
    pub docs: Option<DocComment>,
    #[serde(default, rename = "type")]
    pub ty: Option<TypeRef>,
    #[serde(default)]
    pub params: Vec<Parameter>,
    #[serde(default)]
    pub returns: Option<TypeRef>,
    #[serde(default)]
    pub nullable: bool,
}

/// Parse a JSON array of top-level raw declarations.
pub fn parse_raw_declarations(json: &str) -> Result<Vec<RawDeclaration>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Parse a JSON array of top-level declarations into the model layer.
pub fn parse_declarations(json: &str) -> Result<Vec<Declaration>, serde_json::Error> {
    Ok(parse_raw_declarations(json)?
        .into_iter()
        .map(Declaration::from)
        .collect())
}

impl From<RawDeclaration> for Declaration {
    fn from(raw: RawDeclaration) -> Self {
        let variable = |ty: Option<TypeRef>, nullable| Variable {
            ty: ty.unwrap_or_else(|| TypeRef::unresolved("")),
            nullable,
        };
        let signature = |params, returns: Option<TypeRef>, nullable| Signature {
            params,
            returns: returns.unwrap_or(TypeRef::Void),
            nullable,
        };

        let kind = match raw.kind.as_str() {
            "class" => DeclKind::Class,
            "interface" => DeclKind::Interface,
            "enum" => DeclKind::Enum,
            "record" => DeclKind::Record,
            "field" => DeclKind::Field(variable(raw.ty, raw.nullable)),
            "enum_constant" => DeclKind::EnumConstant(variable(raw.ty, raw.nullable)),
            "method" => DeclKind::Method(signature(raw.params, raw.returns, raw.nullable)),
            "constructor" => {
                DeclKind::Constructor(signature(raw.params, raw.returns, raw.nullable))
            }
            other => DeclKind::Unknown(other.to_string()),
        };

        Declaration {
            qualified_name: raw.qualified_name.unwrap_or_else(|| raw.name.clone()),
            name: raw.name,
            modifiers: raw.modifiers,
            type_params: raw.type_params,
            members: raw.members.into_iter().map(Declaration::from).collect(),
            docs: raw.docs,
            kind,
        }
    }
}

// ============================================================================
// Model Layer
// ============================================================================

/// One node of the declaration tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Simple name (`Inner`, `value`, `<init>`).
    pub name: String,
    /// Fully-qualified name, unique within the tree.
    pub qualified_name: String,
    pub modifiers: Vec<Modifier>,
    pub type_params: Vec<TypeParam>,
    /// Enclosed declarations in source order.
    pub members: Vec<Declaration>,
    pub docs: Option<DocComment>,
    pub kind: DeclKind,
}

/// Declaration kind with its kind-specific payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclKind {
    Class,
    Interface,
    Enum,
    Record,
    Field(Variable),
    EnumConstant(Variable),
    Method(Signature),
    Constructor(Signature),
    /// Element kind the model does not cover (package, record component, ...).
    Unknown(String),
}

impl DeclKind {
    /// Kinds that open a body and get hoisted when nested.
    pub fn is_compound(&self) -> bool {
        matches!(
            self,
            DeclKind::Class | DeclKind::Interface | DeclKind::Enum | DeclKind::Record
        )
    }

    pub fn name(&self) -> &str {
        match self {
            DeclKind::Class => "class",
            DeclKind::Interface => "interface",
            DeclKind::Enum => "enum",
            DeclKind::Record => "record",
            DeclKind::Field(_) => "field",
            DeclKind::EnumConstant(_) => "enum_constant",
            DeclKind::Method(_) => "method",
            DeclKind::Constructor(_) => "constructor",
            DeclKind::Unknown(kind) => kind,
        }
    }
}

/// Storage slot of a field or enum constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub ty: TypeRef,
    pub nullable: bool,
}

/// Signature of a method or constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub params: Vec<Parameter>,
    pub returns: TypeRef,
    /// The return value may be null.
    pub nullable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Parameter {
    /// Empty when the frontend has no name (compiled classes).
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub nullable: bool,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            nullable: false,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}

/// Generic type parameter. A missing name means a bare wildcard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TypeParam {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bounds: Vec<TypeRef>,
}

impl TypeParam {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            bounds: Vec::new(),
        }
    }

    pub fn wildcard() -> Self {
        Self::default()
    }

    pub fn bound(mut self, bound: TypeRef) -> Self {
        self.bounds.push(bound);
        self
    }
}

// ============================================================================
// Builders
// ============================================================================

impl Declaration {
    /// Create a declaration; the simple name is the last segment of `qualified_name`.
    pub fn new(kind: DeclKind, qualified_name: impl Into<String>) -> Self {
        let qualified_name = qualified_name.into();
        Self {
            name: utils::simple_name(&qualified_name).to_string(),
            qualified_name,
            modifiers: Vec::new(),
            type_params: Vec::new(),
            members: Vec::new(),
            docs: None,
            kind,
        }
    }

    pub fn class(qualified_name: impl Into<String>) -> Self {
        Self::new(DeclKind::Class, qualified_name)
    }

    pub fn interface(qualified_name: impl Into<String>) -> Self {
        Self::new(DeclKind::Interface, qualified_name)
    }

    pub fn enumeration(qualified_name: impl Into<String>) -> Self {
        Self::new(DeclKind::Enum, qualified_name)
    }

    pub fn record(qualified_name: impl Into<String>) -> Self {
        Self::new(DeclKind::Record, qualified_name)
    }

    pub fn field(name: impl Into<String>, ty: TypeRef) -> Self {
        Self::new(DeclKind::Field(Variable { ty, nullable: false }), name)
    }

    pub fn enum_constant(name: impl Into<String>, ty: TypeRef) -> Self {
        Self::new(DeclKind::EnumConstant(Variable { ty, nullable: false }), name)
    }

    pub fn method(name: impl Into<String>, returns: TypeRef) -> Self {
        Self::new(
            DeclKind::Method(Signature {
                params: Vec::new(),
                returns,
                nullable: false,
            }),
            name,
        )
    }

    pub fn constructor() -> Self {
        Self::new(
            DeclKind::Constructor(Signature {
                params: Vec::new(),
                returns: TypeRef::Void,
                nullable: false,
            }),
            "<init>",
        )
    }

    pub fn with_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    pub fn with_type_param(mut self, param: TypeParam) -> Self {
        self.type_params.push(param);
        self
    }

    /// Append a parameter. Ignored for kinds without a signature.
    pub fn with_param(mut self, param: Parameter) -> Self {
        if let DeclKind::Method(sig) | DeclKind::Constructor(sig) = &mut self.kind {
            sig.params.push(param);
        }
        self
    }

    /// Mark the slot (field, constant) or return value (method) as nullable.
    pub fn nullable(mut self) -> Self {
        match &mut self.kind {
            DeclKind::Field(var) | DeclKind::EnumConstant(var) => var.nullable = true,
            DeclKind::Method(sig) | DeclKind::Constructor(sig) => sig.nullable = true,
            _ => {}
        }
        self
    }

    pub fn with_docs(mut self, docs: DocComment) -> Self {
        self.docs = Some(docs);
        self
    }

    /// Attach a member. Simple members built by name alone get an
    /// `Owner#name` qualified name so names stay unique in the tree.
    pub fn with_member(mut self, mut member: Declaration) -> Self {
        if !member.kind.is_compound() && member.qualified_name == member.name {
            member.qualified_name = format!("{}#{}", self.qualified_name, member.name);
        }
        self.members.push(member);
        self
    }

    pub fn is_compound(&self) -> bool {
        self.kind.is_compound()
    }

    pub fn has_modifier(&self, modifier: &Modifier) -> bool {
        self.modifiers.contains(modifier)
    }

    /// Package of a top-level declaration (empty for the unnamed package).
    pub fn package(&self) -> &str {
        self.qualified_name
            .strip_suffix(self.name.as_str())
            .map(|prefix| prefix.trim_end_matches('.'))
            .unwrap_or("")
    }
}
