use std::sync::Arc;

use dag_sdk_types::{FunctionArgId, FunctionId, ObjectTypeDefId, TypeDefId};
use dag_transport::{HttpSession, Session, SessionConfig};
use tracing::info;

use crate::generated::{Function, FunctionArg, ObjectTypeDef, TypeDef};
use crate::object::{NestedField, Object, ObjectHandle};

/// Entry point to the API: the root `query` object.
///
/// Every accessor derived from a client shares its session. Constructing
/// accessors from the client never performs I/O.
#[derive(Clone, Debug)]
pub struct Client {
    root: ObjectHandle,
}

impl Client {
    const TYPE_DEF: NestedField<TypeDef> = NestedField::new("typeDef", TypeDef::from_handle);

    /// Create a client over an existing session.
    pub fn new(session: Arc<dyn Session>) -> Self {
        Self {
            root: ObjectHandle::root(session),
        }
    }

    /// Create a client from `DAGGER_*` environment variables.
    pub fn connect() -> Self {
        Self::with_config(SessionConfig::from_env())
    }

    /// Create a client over an HTTP session with explicit configuration.
    pub fn with_config(config: SessionConfig) -> Self {
        info!(endpoint = %config.endpoint, "connecting to engine session");
        Self::new(Arc::new(HttpSession::new(config)))
    }

    pub fn session(&self) -> &Arc<dyn Session> {
        self.root.session()
    }

    /// Create a new TypeDef.
    pub fn type_def(&self) -> TypeDef {
        Self::TYPE_DEF.select(&self.root)
    }

    /// Load a FunctionArg from its ID.
    pub fn load_function_arg_from_id(&self, id: &FunctionArgId) -> FunctionArg {
        FunctionArg::from_handle(self.root.load(id))
    }

    /// Load a Function from its ID.
    pub fn load_function_from_id(&self, id: &FunctionId) -> Function {
        Function::from_handle(self.root.load(id))
    }

    /// Load an ObjectTypeDef from its ID.
    pub fn load_object_type_def_from_id(&self, id: &ObjectTypeDefId) -> ObjectTypeDef {
        ObjectTypeDef::from_handle(self.root.load(id))
    }

    /// Load a TypeDef from its ID.
    pub fn load_type_def_from_id(&self, id: &TypeDefId) -> TypeDef {
        TypeDef::from_handle(self.root.load(id))
    }
}
