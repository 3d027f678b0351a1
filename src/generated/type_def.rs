use dag_sdk_types::{FunctionId, ListTypeDefId, ObjectTypeDefId, TypeDefId, TypeDefKind};
use dag_transport::decode;
use dag_transport::QueryError;

use crate::generated::Function;
use crate::object::{object_type, LeafField, NestedField, Object, ObjectListField};

object_type!(
    /// A definition of a parameter or return type.
    TypeDef => "TypeDef"
);

impl TypeDef {
    const AS_LIST: NestedField<ListTypeDef> = NestedField::new("asList", ListTypeDef::from_handle);
    const AS_OBJECT: NestedField<ObjectTypeDef> =
        NestedField::new("asObject", ObjectTypeDef::from_handle);
    const ID: LeafField<TypeDefId> = LeafField::new("id", decode::id::<TypeDefId>);
    const KIND: LeafField<TypeDefKind> = LeafField::new("kind", decode::type_def_kind);
    const OPTIONAL: LeafField<bool> = LeafField::new("optional", decode::boolean);

    /// If kind is LIST, the list-specific type definition.
    pub fn as_list(&self) -> ListTypeDef {
        Self::AS_LIST.select(self.handle())
    }

    /// If kind is OBJECT, the object-specific type definition.
    pub fn as_object(&self) -> ObjectTypeDef {
        Self::AS_OBJECT.select(self.handle())
    }

    /// A unique identifier for this TypeDef.
    pub fn id(&self) -> Result<TypeDefId, QueryError> {
        Self::ID.resolve(self.handle())
    }

    pub fn kind(&self) -> Result<TypeDefKind, QueryError> {
        Self::KIND.resolve(self.handle())
    }

    /// Whether this type can be set to null.
    pub fn optional(&self) -> Result<bool, QueryError> {
        Self::OPTIONAL.resolve(self.handle())
    }
}

object_type!(
    /// A definition of a list type.
    ListTypeDef => "ListTypeDef"
);

impl ListTypeDef {
    const ELEMENT_TYPE_DEF: NestedField<TypeDef> =
        NestedField::new("elementTypeDef", TypeDef::from_handle);
    const ID: LeafField<ListTypeDefId> = LeafField::new("id", decode::id::<ListTypeDefId>);

    /// The type of the elements in the list.
    pub fn element_type_def(&self) -> TypeDef {
        Self::ELEMENT_TYPE_DEF.select(self.handle())
    }

    /// A unique identifier for this ListTypeDef.
    pub fn id(&self) -> Result<ListTypeDefId, QueryError> {
        Self::ID.resolve(self.handle())
    }
}

object_type!(
    /// A definition of a custom object.
    ObjectTypeDef => "ObjectTypeDef"
);

impl ObjectTypeDef {
    const DESCRIPTION: LeafField<String> = LeafField::new("description", decode::string);
    const FUNCTIONS: ObjectListField<FunctionId, Function> =
        ObjectListField::new("functions", Function::from_handle);
    const ID: LeafField<ObjectTypeDefId> = LeafField::new("id", decode::id::<ObjectTypeDefId>);
    const NAME: LeafField<String> = LeafField::new("name", decode::string);

    pub fn description(&self) -> Result<String, QueryError> {
        Self::DESCRIPTION.resolve(self.handle())
    }

    /// Functions defined on this object, if any.
    pub fn functions(&self) -> Result<Vec<Function>, QueryError> {
        Self::FUNCTIONS.resolve(self.handle())
    }

    /// A unique identifier for this ObjectTypeDef.
    pub fn id(&self) -> Result<ObjectTypeDefId, QueryError> {
        Self::ID.resolve(self.handle())
    }

    /// The name of the object.
    pub fn name(&self) -> Result<String, QueryError> {
        Self::NAME.resolve(self.handle())
    }
}
