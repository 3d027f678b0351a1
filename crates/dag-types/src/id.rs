//! Typed object identifiers.
//!
//! Every object in the API exposes an `id` field whose value is an opaque
//! handle. The handle is only meaningful to the engine: it is compared,
//! stored, and passed back through `load<Type>FromID`, never decoded.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An identifier newtype bound to the object type that owns it.
pub trait IdAble: Clone + fmt::Display {
    /// Schema name of the owning object type.
    const TYPE_NAME: &'static str;

    /// Wrap a raw handle.
    fn from_raw(raw: String) -> Self;

    /// The raw handle.
    fn as_str(&self) -> &str;

    /// Root field that loads the owning object back from this identifier.
    fn loader_field() -> String {
        format!("load{}FromID", Self::TYPE_NAME)
    }
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident => $type_name:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl IdAble for $name {
            const TYPE_NAME: &'static str = $type_name;

            fn from_raw(raw: String) -> Self {
                Self(raw)
            }

            fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_string())
            }
        }
    };
}

define_id!(
    /// A unique identifier for a `FunctionArg`.
    FunctionArgId => "FunctionArg"
);
define_id!(
    /// A unique identifier for a `Function`.
    FunctionId => "Function"
);
define_id!(
    /// A unique identifier for a `TypeDef`.
    TypeDefId => "TypeDef"
);
define_id!(
    /// A unique identifier for a `ListTypeDef`.
    ListTypeDefId => "ListTypeDef"
);
define_id!(
    /// A unique identifier for an `ObjectTypeDef`.
    ObjectTypeDefId => "ObjectTypeDef"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_carries_owning_type() {
        let id = FunctionArgId::new("fnarg-123");
        assert_eq!(id.as_str(), "fnarg-123");
        assert_eq!(FunctionArgId::TYPE_NAME, "FunctionArg");
        assert_eq!(FunctionArgId::loader_field(), "loadFunctionArgFromID");
        assert_eq!(TypeDefId::loader_field(), "loadTypeDefFromID");
    }

    #[test]
    fn test_id_serializes_as_bare_string() {
        let id = TypeDefId::from("td-1");
        assert_eq!(serde_json::to_value(&id).unwrap(), serde_json::json!("td-1"));
        let back: TypeDefId = serde_json::from_value(serde_json::json!("td-1")).unwrap();
        assert_eq!(back, id);
    }
}
