//! Typed client SDK for the engine GraphQL API.
//!
//! Accessors mirror the schema: one struct per object type, one method per
//! field. Scalar fields resolve immediately through the session; object
//! fields return another accessor holding an extended query chain, and the
//! query only runs once a scalar is requested from it.
//!
//! ```ignore
//! use dag_sdk::{Client, FunctionArgId};
//!
//! let client = Client::connect();
//! let arg = client.load_function_arg_from_id(&FunctionArgId::new("fnarg-123"));
//!
//! let name = arg.name()?;                // one round trip
//! let type_def = arg.type_def();         // no I/O
//! let kind = type_def.kind()?;           // one round trip
//! ```

pub mod client;
pub mod generated;
pub mod object;

pub use client::Client;
pub use generated::{Function, FunctionArg, ListTypeDef, ObjectTypeDef, TypeDef};
pub use object::{LeafField, NestedField, Object, ObjectHandle, ObjectListField};

pub use dag_sdk_types::{
    FunctionArgId, FunctionId, IdAble, Json, ListTypeDefId, ObjectTypeDefId, TypeDefId,
    TypeDefKind,
};
pub use dag_transport::{
    DecodeError, HttpSession, QueryBuilder, QueryChain, QueryError, Session, SessionConfig,
    TransportError,
};
