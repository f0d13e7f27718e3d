//! Type reference rendering.

use jextern_core::{PrimitiveKind, TypeRef};

use crate::sentinel::sentinel;

pub const BOOL: &str = "Bool";
pub const INT: &str = "Int";
pub const FLOAT: &str = "Float";
pub const VOID: &str = "Void";
pub const DYNAMIC: &str = "Dynamic";

/// Renders a type reference as target type syntax.
///
/// Implementations must be total: anything without a mapping renders as a
/// sentinel instead of failing.
pub trait RenderType {
    fn render_type(&self, ty: &TypeRef) -> String;
}

/// Default type renderer.
#[derive(Clone, Debug)]
pub struct HaxeTypes {
    top_type: String,
}

impl HaxeTypes {
    pub fn new(top_type: impl Into<String>) -> Self {
        Self {
            top_type: top_type.into(),
        }
    }

    /// Render one type argument. `None` means the argument is dropped.
    fn render_argument(&self, arg: &TypeRef) -> Option<String> {
        match arg {
            TypeRef::Wildcard { bound: None } => None,
            TypeRef::Wildcard { bound: Some(bound) } if bound.is_top_type(&self.top_type) => None,
            TypeRef::Wildcard { bound: Some(bound) } => Some(self.render_type(bound)),
            other => Some(self.render_type(other)),
        }
    }

    fn render_declared(&self, name: &str, args: &[TypeRef]) -> String {
        if args.is_empty() {
            return name.to_string();
        }
        let rendered: Vec<String> = args
            .iter()
            .filter_map(|arg| self.render_argument(arg))
            .collect();
        if rendered.is_empty() {
            return format!("{name}<{DYNAMIC}>");
        }
        format!("{name}<{}>", rendered.join(","))
    }
}

impl Default for HaxeTypes {
    fn default() -> Self {
        Self::new("java.lang.Object")
    }
}

impl RenderType for HaxeTypes {
    fn render_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Primitive { primitive } => match primitive {
                PrimitiveKind::Boolean => BOOL.to_string(),
                PrimitiveKind::Byte
                | PrimitiveKind::Short
                | PrimitiveKind::Int
                | PrimitiveKind::Long
                | PrimitiveKind::Char => INT.to_string(),
                PrimitiveKind::Float | PrimitiveKind::Double => FLOAT.to_string(),
                PrimitiveKind::Other(keyword) => sentinel("primitive", keyword),
            },
            TypeRef::Array {
                component,
                nullable,
            } => {
                let array = format!("Array<{}>", self.render_type(component));
                if *nullable { null_of(&array) } else { array }
            }
            // Nullable declared types lose their arguments.
            TypeRef::Declared {
                name,
                nullable: true,
                ..
            } => null_of(name),
            TypeRef::Declared { name, args, .. } => self.render_declared(name, args),
            TypeRef::Variable { name } => name.clone(),
            TypeRef::Void => VOID.to_string(),
            TypeRef::Wildcard { .. } => sentinel("wildcard_type", ty),
            TypeRef::Null => sentinel("null_type", ty),
            TypeRef::Union { .. } => sentinel("union_type", ty),
            TypeRef::Intersection { .. } => sentinel("intersection_type", ty),
            TypeRef::Unresolved { raw } => sentinel("error_type", raw),
            TypeRef::Other { category, raw } => sentinel(&format!("{category}_type"), raw),
        }
    }
}

/// Wrap a rendered type so it admits null.
pub fn null_of(rendered: &str) -> String {
    format!("Null<{rendered}>")
}
