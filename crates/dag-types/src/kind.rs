use std::fmt;

use serde::{Deserialize, Serialize};

/// Distinguishes the different kinds of type definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeDefKind {
    #[serde(rename = "STRING_KIND")]
    String,
    #[serde(rename = "INTEGER_KIND")]
    Integer,
    #[serde(rename = "FLOAT_KIND")]
    Float,
    #[serde(rename = "BOOLEAN_KIND")]
    Boolean,
    /// A named custom scalar.
    #[serde(rename = "SCALAR_KIND")]
    Scalar,
    /// Always paired with a `ListTypeDef`.
    #[serde(rename = "LIST_KIND")]
    List,
    /// Always paired with an `ObjectTypeDef`.
    #[serde(rename = "OBJECT_KIND")]
    Object,
    #[serde(rename = "INTERFACE_KIND")]
    Interface,
    #[serde(rename = "INPUT_KIND")]
    Input,
    /// The function returns nothing.
    #[serde(rename = "VOID_KIND")]
    Void,
    #[serde(rename = "ENUM_KIND")]
    Enum,
}

impl TypeDefKind {
    /// Schema name of the enum.
    pub const TYPE_NAME: &'static str = "TypeDefKind";

    /// The wire value, as sent by the engine.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeDefKind::String => "STRING_KIND",
            TypeDefKind::Integer => "INTEGER_KIND",
            TypeDefKind::Float => "FLOAT_KIND",
            TypeDefKind::Boolean => "BOOLEAN_KIND",
            TypeDefKind::Scalar => "SCALAR_KIND",
            TypeDefKind::List => "LIST_KIND",
            TypeDefKind::Object => "OBJECT_KIND",
            TypeDefKind::Interface => "INTERFACE_KIND",
            TypeDefKind::Input => "INPUT_KIND",
            TypeDefKind::Void => "VOID_KIND",
            TypeDefKind::Enum => "ENUM_KIND",
        }
    }
}

impl fmt::Display for TypeDefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_match_serde() {
        for kind in [
            TypeDefKind::String,
            TypeDefKind::List,
            TypeDefKind::Object,
            TypeDefKind::Void,
        ] {
            let v = serde_json::to_value(kind).unwrap();
            assert_eq!(v.as_str(), Some(kind.as_str()));
        }
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let r: Result<TypeDefKind, _> = serde_json::from_value(serde_json::json!("TUPLE_KIND"));
        assert!(r.is_err());
    }
}
