//! Type references (type usages, as opposed to type declarations).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Primitive type kind, named by its source keyword.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
    Other(String),
}

impl PrimitiveKind {
    pub fn as_str(&self) -> &str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Other(text) => text,
        }
    }
}

impl From<String> for PrimitiveKind {
    fn from(keyword: String) -> Self {
        match keyword.as_str() {
            "boolean" => PrimitiveKind::Boolean,
            "byte" => PrimitiveKind::Byte,
            "short" => PrimitiveKind::Short,
            "int" => PrimitiveKind::Int,
            "long" => PrimitiveKind::Long,
            "char" => PrimitiveKind::Char,
            "float" => PrimitiveKind::Float,
            "double" => PrimitiveKind::Double,
            _ => PrimitiveKind::Other(keyword),
        }
    }
}

impl From<PrimitiveKind> for String {
    fn from(kind: PrimitiveKind) -> Self {
        kind.as_str().to_string()
    }
}

/// A type usage. Value tree; declared types point at declarations by name only.
///
/// Deserialized through [`RawTypeRef`], so a kind string the model does not
/// list becomes [`TypeRef::Other`] instead of an error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case", try_from = "RawTypeRef")]
pub enum TypeRef {
    Primitive {
        primitive: PrimitiveKind,
    },
    Array {
        component: Box<TypeRef>,
        #[serde(default)]
        nullable: bool,
    },
    Declared {
        name: String,
        #[serde(default)]
        args: Vec<TypeRef>,
        #[serde(default)]
        nullable: bool,
    },
    Variable {
        name: String,
    },
    Wildcard {
        #[serde(default)]
        bound: Option<Box<TypeRef>>,
    },
    Void,
    Null,
    Union {
        alternatives: Vec<TypeRef>,
    },
    Intersection {
        bounds: Vec<TypeRef>,
    },
    /// The frontend could not resolve this type; `raw` is the source text.
    Unresolved {
        raw: String,
    },
    /// A type kind the model does not cover.
    Other {
        category: String,
        raw: String,
    },
}

impl TypeRef {
    pub fn primitive(kind: PrimitiveKind) -> Self {
        TypeRef::Primitive { primitive: kind }
    }

    pub fn boolean() -> Self {
        Self::primitive(PrimitiveKind::Boolean)
    }

    pub fn int() -> Self {
        Self::primitive(PrimitiveKind::Int)
    }

    pub fn double() -> Self {
        Self::primitive(PrimitiveKind::Double)
    }

    pub fn declared(name: impl Into<String>) -> Self {
        TypeRef::Declared {
            name: name.into(),
            args: Vec::new(),
            nullable: false,
        }
    }

    pub fn generic(name: impl Into<String>, args: impl IntoIterator<Item = TypeRef>) -> Self {
        TypeRef::Declared {
            name: name.into(),
            args: args.into_iter().collect(),
            nullable: false,
        }
    }

    pub fn array(component: TypeRef) -> Self {
        TypeRef::Array {
            component: Box::new(component),
            nullable: false,
        }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        TypeRef::Variable { name: name.into() }
    }

    pub fn wildcard() -> Self {
        TypeRef::Wildcard { bound: None }
    }

    pub fn wildcard_extends(bound: TypeRef) -> Self {
        TypeRef::Wildcard {
            bound: Some(Box::new(bound)),
        }
    }

    pub fn unresolved(raw: impl Into<String>) -> Self {
        TypeRef::Unresolved { raw: raw.into() }
    }

    /// Mark an array or declared type as nullable. Other kinds are unchanged.
    pub fn nullable(mut self) -> Self {
        if let TypeRef::Array { nullable, .. } | TypeRef::Declared { nullable, .. } = &mut self {
            *nullable = true;
        }
        self
    }

    /// Whether this is exactly the universal top type (no arguments, not nullable).
    pub fn is_top_type(&self, top: &str) -> bool {
        matches!(
            self,
            TypeRef::Declared { name, args, nullable: false } if name == top && args.is_empty()
        )
    }
}

/// Source-syntax rendering, used as raw text in diagnostics.
impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Primitive { primitive } => f.write_str(primitive.as_str()),
            TypeRef::Array { component, .. } => write!(f, "{component}[]"),
            TypeRef::Declared { name, args, .. } => {
                f.write_str(name)?;
                if !args.is_empty() {
                    write!(f, "<{}>", join(args, ", "))?;
                }
                Ok(())
            }
            TypeRef::Variable { name } => f.write_str(name),
            TypeRef::Wildcard { bound: None } => f.write_str("?"),
            TypeRef::Wildcard { bound: Some(bound) } => write!(f, "? extends {bound}"),
            TypeRef::Void => f.write_str("void"),
            TypeRef::Null => f.write_str("null"),
            TypeRef::Union { alternatives } => f.write_str(&join(alternatives, " | ")),
            TypeRef::Intersection { bounds } => f.write_str(&join(bounds, " & ")),
            TypeRef::Unresolved { raw } | TypeRef::Other { raw, .. } => f.write_str(raw),
        }
    }
}

/// Raw type usage as written by the frontend: a kind string plus every
/// kind-specific field, flat and optional.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTypeRef {
    pub kind: String,
    #[serde(default)]
    pub primitive: Option<PrimitiveKind>,
    #[serde(default)]
    pub component: Option<Box<TypeRef>>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub args: Vec<TypeRef>,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub bound: Option<Box<TypeRef>>,
    #[serde(default)]
    pub alternatives: Vec<TypeRef>,
    #[serde(default)]
    pub bounds: Vec<TypeRef>,
    #[serde(default)]
    pub raw: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl TryFrom<RawTypeRef> for TypeRef {
    type Error = String;

    fn try_from(raw: RawTypeRef) -> Result<Self, Self::Error> {
        let kind = raw.kind;
        let missing = |field: &str| format!("`{kind}` type without `{field}`");

        Ok(match kind.as_str() {
            "primitive" => TypeRef::Primitive {
                primitive: raw.primitive.ok_or_else(|| missing("primitive"))?,
            },
            "array" => TypeRef::Array {
                component: raw.component.ok_or_else(|| missing("component"))?,
                nullable: raw.nullable,
            },
            "declared" => TypeRef::Declared {
                name: raw.name.ok_or_else(|| missing("name"))?,
                args: raw.args,
                nullable: raw.nullable,
            },
            "variable" => TypeRef::Variable {
                name: raw.name.ok_or_else(|| missing("name"))?,
            },
            "wildcard" => TypeRef::Wildcard { bound: raw.bound },
            "void" => TypeRef::Void,
            "null" => TypeRef::Null,
            "union" => TypeRef::Union {
                alternatives: raw.alternatives,
            },
            "intersection" => TypeRef::Intersection { bounds: raw.bounds },
            "unresolved" => TypeRef::Unresolved {
                raw: raw.raw.unwrap_or_default(),
            },
            "other" => TypeRef::Other {
                category: raw.category.unwrap_or_else(|| kind.clone()),
                raw: raw.raw.unwrap_or_default(),
            },
            _ => TypeRef::Other {
                category: kind.clone(),
                raw: raw.raw.unwrap_or_default(),
            },
        })
    }
}

fn join(types: &[TypeRef], separator: &str) -> String {
    types
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}
