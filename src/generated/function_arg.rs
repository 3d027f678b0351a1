use dag_sdk_types::{FunctionArgId, Json};
use dag_transport::decode;
use dag_transport::QueryError;

use crate::generated::TypeDef;
use crate::object::{object_type, LeafField, NestedField, Object};

object_type!(
    /// An argument accepted by a function.
    ///
    /// This is a specification for an argument at function definition time,
    /// not an argument passed at function call time.
    FunctionArg => "FunctionArg"
);

impl FunctionArg {
    const DEFAULT_VALUE: LeafField<Json> = LeafField::new("defaultValue", decode::json);
    const DESCRIPTION: LeafField<String> = LeafField::new("description", decode::string);
    const ID: LeafField<FunctionArgId> = LeafField::new("id", decode::id::<FunctionArgId>);
    const NAME: LeafField<String> = LeafField::new("name", decode::string);
    const TYPE_DEF: NestedField<TypeDef> = NestedField::new("typeDef", TypeDef::from_handle);

    /// A default value to use for this argument when not explicitly set by the caller.
    pub fn default_value(&self) -> Result<Json, QueryError> {
        Self::DEFAULT_VALUE.resolve(self.handle())
    }

    pub fn description(&self) -> Result<String, QueryError> {
        Self::DESCRIPTION.resolve(self.handle())
    }

    /// A unique identifier for this FunctionArg.
    pub fn id(&self) -> Result<FunctionArgId, QueryError> {
        Self::ID.resolve(self.handle())
    }

    pub fn name(&self) -> Result<String, QueryError> {
        Self::NAME.resolve(self.handle())
    }

    pub fn type_def(&self) -> TypeDef {
        Self::TYPE_DEF.select(self.handle())
    }
}
