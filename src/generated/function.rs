use dag_sdk_types::{FunctionArgId, FunctionId};
use dag_transport::decode;
use dag_transport::QueryError;

use crate::generated::{FunctionArg, TypeDef};
use crate::object::{object_type, LeafField, NestedField, Object, ObjectListField};

object_type!(
    /// A function provided by a module or object type.
    Function => "Function"
);

impl Function {
    const ARGS: ObjectListField<FunctionArgId, FunctionArg> =
        ObjectListField::new("args", FunctionArg::from_handle);
    const DESCRIPTION: LeafField<String> = LeafField::new("description", decode::string);
    const ID: LeafField<FunctionId> = LeafField::new("id", decode::id::<FunctionId>);
    const NAME: LeafField<String> = LeafField::new("name", decode::string);
    const RETURN_TYPE: NestedField<TypeDef> = NestedField::new("returnType", TypeDef::from_handle);

    /// Arguments accepted by the function, in declaration order.
    pub fn args(&self) -> Result<Vec<FunctionArg>, QueryError> {
        Self::ARGS.resolve(self.handle())
    }

    pub fn description(&self) -> Result<String, QueryError> {
        Self::DESCRIPTION.resolve(self.handle())
    }

    /// A unique identifier for this Function.
    pub fn id(&self) -> Result<FunctionId, QueryError> {
        Self::ID.resolve(self.handle())
    }

    pub fn name(&self) -> Result<String, QueryError> {
        Self::NAME.resolve(self.handle())
    }

    /// The type returned by the function.
    pub fn return_type(&self) -> TypeDef {
        Self::RETURN_TYPE.select(self.handle())
    }
}
