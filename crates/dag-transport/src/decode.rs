//! Decoders from raw response values to leaf scalars.
//!
//! All decoders share the signature `fn(&str, Value) -> Result<T, DecodeError>`
//! where the first argument is the dotted field path used in error messages.
//! A `null` where a non-null scalar is expected is a decode error, never a
//! default value.

use dag_sdk_types::{IdAble, Json, TypeDefKind};
use serde_json::Value;

use crate::error::DecodeError;

pub type Decoder<T> = fn(&str, Value) -> Result<T, DecodeError>;

pub fn string(path: &str, value: Value) -> Result<String, DecodeError> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(DecodeError::mismatch(path, "string", &other)),
    }
}

pub fn boolean(path: &str, value: Value) -> Result<bool, DecodeError> {
    match value {
        Value::Bool(b) => Ok(b),
        other => Err(DecodeError::mismatch(path, "boolean", &other)),
    }
}

/// Opaque JSON. Accepts any value, `null` included.
pub fn json(_path: &str, value: Value) -> Result<Json, DecodeError> {
    Ok(Json::from_value(&value))
}

/// Parse the document carried by a [`Json`] value.
pub fn parse_json(json: &Json) -> Result<Value, DecodeError> {
    json.parse().map_err(|e| DecodeError::InvalidJson {
        message: e.to_string(),
    })
}

pub fn id<T: IdAble>(path: &str, value: Value) -> Result<T, DecodeError> {
    string(path, value).map(T::from_raw)
}

pub fn type_def_kind(path: &str, value: Value) -> Result<TypeDefKind, DecodeError> {
    let raw = string(path, value)?;
    serde_json::from_value(Value::String(raw.clone())).map_err(|_| DecodeError::UnknownEnumValue {
        type_name: TypeDefKind::TYPE_NAME,
        value: raw,
    })
}

/// A list of identifiers, as produced by selecting `<field> { id }`.
pub fn id_list<T: IdAble>(path: &str, value: Value) -> Result<Vec<T>, DecodeError> {
    match value {
        Value::Array(items) => items.into_iter().map(|item| id(path, item)).collect(),
        other => Err(DecodeError::mismatch(path, "array", &other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dag_sdk_types::FunctionArgId;
    use serde_json::json;

    #[test]
    fn test_string_rejects_null() {
        assert_eq!(string("name", json!("timeout")).unwrap(), "timeout");
        let err = string("f.name", Value::Null).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TypeMismatch {
                path: "f.name".into(),
                expected: "string",
                found: "null"
            }
        );
    }

    #[test]
    fn test_boolean() {
        assert!(boolean("optional", json!(true)).unwrap());
        assert!(boolean("optional", json!("true")).is_err());
    }

    #[test]
    fn test_parse_json() {
        let carried = json("defaultValue", json!("{\"retries\": 3}")).unwrap();
        assert_eq!(parse_json(&carried).unwrap(), json!({"retries": 3}));

        let err = parse_json(&Json::new("{not json")).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidJson { .. }));
    }

    #[test]
    fn test_id_wraps_raw_handle() {
        let id: FunctionArgId = id("id", json!("fnarg-123")).unwrap();
        assert_eq!(id, FunctionArgId::new("fnarg-123"));
    }

    #[test]
    fn test_kind_decoding() {
        assert_eq!(
            type_def_kind("kind", json!("LIST_KIND")).unwrap(),
            TypeDefKind::List
        );
        let err = type_def_kind("kind", json!("TUPLE_KIND")).unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnknownEnumValue {
                type_name: "TypeDefKind",
                value: "TUPLE_KIND".into()
            }
        );
    }

    #[test]
    fn test_id_list() {
        let ids: Vec<FunctionArgId> = id_list("args.id", json!(["a", "b"])).unwrap();
        assert_eq!(ids.len(), 2);
        assert_eq!(ids[1].as_str(), "b");
        assert!(id_list::<FunctionArgId>("args.id", json!("a")).is_err());
        assert!(id_list::<FunctionArgId>("args.id", json!(["a", 1])).is_err());
    }
}
