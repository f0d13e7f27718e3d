use std::fmt;

use serde::{Deserialize, Serialize};

/// Source-level modifier keyword.
///
/// Deserialized from its lowercase keyword; anything else is kept verbatim
/// in [`Modifier::Other`] so the emitter can report it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Default,
    Static,
    Sealed,
    NonSealed,
    Final,
    Transient,
    Volatile,
    Synchronized,
    Native,
    Strictfp,
    Other(String),
}

impl Modifier {
    pub fn as_str(&self) -> &str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Abstract => "abstract",
            Modifier::Default => "default",
            Modifier::Static => "static",
            Modifier::Sealed => "sealed",
            Modifier::NonSealed => "non-sealed",
            Modifier::Final => "final",
            Modifier::Transient => "transient",
            Modifier::Volatile => "volatile",
            Modifier::Synchronized => "synchronized",
            Modifier::Native => "native",
            Modifier::Strictfp => "strictfp",
            Modifier::Other(text) => text,
        }
    }
}

impl From<&str> for Modifier {
    fn from(keyword: &str) -> Self {
        match keyword {
            "public" => Modifier::Public,
            "protected" => Modifier::Protected,
            "private" => Modifier::Private,
            "abstract" => Modifier::Abstract,
            "default" => Modifier::Default,
            "static" => Modifier::Static,
            "sealed" => Modifier::Sealed,
            "non-sealed" => Modifier::NonSealed,
            "final" => Modifier::Final,
            "transient" => Modifier::Transient,
            "volatile" => Modifier::Volatile,
            "synchronized" => Modifier::Synchronized,
            "native" => Modifier::Native,
            "strictfp" => Modifier::Strictfp,
            other => Modifier::Other(other.to_string()),
        }
    }
}

impl From<String> for Modifier {
    fn from(keyword: String) -> Self {
        Modifier::from(keyword.as_str())
    }
}

impl From<Modifier> for String {
    fn from(modifier: Modifier) -> Self {
        modifier.as_str().to_string()
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
