//! Accessors for the engine's type-definition objects.
//!
//! One struct per schema object type, one method per field. Leaf methods
//! resolve through the session on every call; object-typed fields only
//! extend the query chain.

mod function;
mod function_arg;
mod type_def;

pub use function::Function;
pub use function_arg::FunctionArg;
pub use type_def::{ListTypeDef, ObjectTypeDef, TypeDef};
