//! Query builders and immutable query chains.
//!
//! A [`QueryChain`] is the path of field selections from the root `query`
//! down to an object. Chains are persistent lists: [`QueryChain::chain`]
//! returns a new chain that shares its prefix with the original, so a chain
//! handed to an accessor stays valid no matter how many children extend it.
//!
//! ```
//! use dag_transport::{QueryBuilder, QueryChain};
//!
//! let arg = QueryChain::root()
//!     .chain(QueryBuilder::new("loadFunctionArgFromID").with_argument("id", "fnarg-1"));
//! let type_def = arg.chain(QueryBuilder::new("typeDef"));
//!
//! assert_eq!(arg.len(), 1);
//! assert_eq!(
//!     type_def.render("kind"),
//!     r#"query{loadFunctionArgFromID(id:"fnarg-1"){typeDef{kind}}}"#
//! );
//! ```

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::{json_kind, DecodeError};

/// A single field selection, optionally with arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryBuilder {
    field: String,
    arguments: Vec<(String, Value)>,
}

impl QueryBuilder {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            arguments: Vec::new(),
        }
    }

    /// Add an argument. Arguments render in insertion order.
    pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.push((name.into(), value.into()));
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn arguments(&self) -> &[(String, Value)] {
        &self.arguments
    }

    fn write_selection(&self, out: &mut String) {
        out.push_str(&self.field);
        if self.arguments.is_empty() {
            return;
        }
        out.push('(');
        for (i, (name, value)) in self.arguments.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(name);
            out.push(':');
            write_literal(value, out);
        }
        out.push(')');
    }
}

/// Render a JSON value as a GraphQL input literal.
fn write_literal(value: &Value, out: &mut String) {
    match value {
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_literal(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(key);
                out.push(':');
                write_literal(item, out);
            }
            out.push('}');
        }
        // JSON string escaping is valid GraphQL string escaping.
        scalar => out.push_str(&scalar.to_string()),
    }
}

struct Link {
    node: QueryBuilder,
    parent: Option<Arc<Link>>,
}

/// An immutable, append-only sequence of field selections.
#[derive(Clone, Default)]
pub struct QueryChain {
    tail: Option<Arc<Link>>,
    len: usize,
}

impl QueryChain {
    /// The empty chain: the root `query` object.
    pub fn root() -> Self {
        Self::default()
    }

    /// Extend the chain by one selection, leaving `self` untouched.
    pub fn chain(&self, node: QueryBuilder) -> Self {
        Self {
            tail: Some(Arc::new(Link {
                node,
                parent: self.tail.clone(),
            })),
            len: self.len + 1,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Selections from the root outwards.
    pub fn iter(&self) -> impl Iterator<Item = &QueryBuilder> {
        let mut nodes = Vec::with_capacity(self.len);
        let mut cursor = self.tail.as_deref();
        while let Some(link) = cursor {
            nodes.push(&link.node);
            cursor = link.parent.as_deref();
        }
        nodes.into_iter().rev()
    }

    /// Dotted path of field names down to `leaf`, used in error messages.
    pub fn path(&self, leaf: &str) -> String {
        self.iter()
            .map(QueryBuilder::field)
            .chain(std::iter::once(leaf))
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Render the chain plus a leaf field as a GraphQL document.
    pub fn render(&self, leaf: &str) -> String {
        let mut out = String::from("query{");
        for node in self.iter() {
            node.write_selection(&mut out);
            out.push('{');
        }
        out.push_str(leaf);
        for _ in 0..=self.len {
            out.push('}');
        }
        out
    }
}

impl PartialEq for QueryChain {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl fmt::Debug for QueryChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Extract the value selected by `chain` + `leaf` from a response's `data`.
///
/// Arrays along the path are mapped: the rest of the path is applied to
/// every element and the results are collected in order.
pub fn unpack(data: &Value, chain: &QueryChain, leaf: &str) -> Result<Value, DecodeError> {
    let fields: Vec<&str> = chain
        .iter()
        .map(QueryBuilder::field)
        .chain(std::iter::once(leaf))
        .collect();
    walk(data, &fields, 0)
}

fn walk(value: &Value, fields: &[&str], depth: usize) -> Result<Value, DecodeError> {
    if depth == fields.len() {
        return Ok(value.clone());
    }
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| walk(item, fields, depth))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        Value::Object(map) => {
            let next = map
                .get(fields[depth])
                .ok_or_else(|| DecodeError::MissingField {
                    path: path_of(fields, depth + 1),
                })?;
            if next.is_null() && depth + 1 < fields.len() {
                return Err(DecodeError::NullObject {
                    path: path_of(fields, depth + 1),
                });
            }
            walk(next, fields, depth + 1)
        }
        Value::Null => Err(DecodeError::NullObject {
            path: path_of(fields, depth),
        }),
        other => Err(DecodeError::TypeMismatch {
            path: path_of(fields, depth),
            expected: "object",
            found: json_kind(other),
        }),
    }
}

fn path_of(fields: &[&str], depth: usize) -> String {
    if depth == 0 {
        "data".to_string()
    } else {
        fields[..depth].join(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn function_arg_chain() -> QueryChain {
        QueryChain::root()
            .chain(QueryBuilder::new("loadFunctionArgFromID").with_argument("id", "fnarg-123"))
    }

    #[test]
    fn test_render_root_leaf() {
        assert_eq!(QueryChain::root().render("version"), "query{version}");
    }

    #[test]
    fn test_render_nested_with_arguments() {
        let chain = function_arg_chain().chain(QueryBuilder::new("typeDef"));
        assert_eq!(
            chain.render("optional"),
            r#"query{loadFunctionArgFromID(id:"fnarg-123"){typeDef{optional}}}"#
        );
    }

    #[test]
    fn test_render_literals() {
        let node = QueryBuilder::new("withArgs")
            .with_argument("quote", "a\"b")
            .with_argument("n", 3)
            .with_argument("flag", true)
            .with_argument("none", Value::Null)
            .with_argument("list", json!(["x", 1]))
            .with_argument("obj", json!({"name": "n"}));
        let rendered = QueryChain::root().chain(node).render("id");
        assert_eq!(
            rendered,
            r#"query{withArgs(quote:"a\"b",n:3,flag:true,none:null,list:["x",1],obj:{name:"n"}){id}}"#
        );
    }

    #[test]
    fn test_chain_does_not_mutate_prefix() {
        let base = function_arg_chain();
        let a = base.chain(QueryBuilder::new("typeDef"));
        let b = base.chain(QueryBuilder::new("typeDef"));
        let c = base.chain(QueryBuilder::new("name"));

        assert_eq!(base.len(), 1);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(base.path("id"), "loadFunctionArgFromID.id");
    }

    #[test]
    fn test_unpack_leaf() {
        let data = json!({"loadFunctionArgFromID": {"name": "timeout"}});
        let v = unpack(&data, &function_arg_chain(), "name").unwrap();
        assert_eq!(v, json!("timeout"));
    }

    #[test]
    fn test_unpack_maps_arrays() {
        let chain = QueryChain::root()
            .chain(QueryBuilder::new("loadFunctionFromID").with_argument("id", "fn-1"))
            .chain(QueryBuilder::new("args"));
        let data = json!({"loadFunctionFromID": {"args": [{"id": "a1"}, {"id": "a2"}]}});
        let v = unpack(&data, &chain, "id").unwrap();
        assert_eq!(v, json!(["a1", "a2"]));
    }

    #[test]
    fn test_unpack_missing_field() {
        let data = json!({"loadFunctionArgFromID": {}});
        let err = unpack(&data, &function_arg_chain(), "name").unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingField {
                path: "loadFunctionArgFromID.name".into()
            }
        );
    }

    #[test]
    fn test_unpack_null_object() {
        let chain = function_arg_chain().chain(QueryBuilder::new("typeDef"));
        let data = json!({"loadFunctionArgFromID": {"typeDef": null}});
        let err = unpack(&data, &chain, "kind").unwrap_err();
        assert_eq!(
            err,
            DecodeError::NullObject {
                path: "loadFunctionArgFromID.typeDef".into()
            }
        );
    }

    #[test]
    fn test_unpack_null_leaf_is_returned() {
        let data = json!({"loadFunctionArgFromID": {"defaultValue": null}});
        let v = unpack(&data, &function_arg_chain(), "defaultValue").unwrap();
        assert!(v.is_null());
    }

    #[test]
    fn test_unpack_scalar_where_object_expected() {
        let data = json!({"loadFunctionArgFromID": "oops"});
        let err = unpack(&data, &function_arg_chain(), "name").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::TypeMismatch {
                expected: "object",
                found: "string",
                ..
            }
        ));
    }
}
