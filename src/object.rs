//! Object handles and the field primitives accessors are built from.
//!
//! Every accessor wraps an [`ObjectHandle`]: the shared session plus the
//! query chain that selects the object. A schema field maps to one of three
//! primitives:
//!
//! - [`LeafField`] resolves a scalar through the session (one round trip)
//! - [`NestedField`] extends the chain and wraps it in another accessor (no I/O)
//! - [`ObjectListField`] resolves the ids of a list of objects and rebinds each
//!   element to its own `load<Type>FromID` root selection

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use dag_sdk_types::IdAble;
use dag_transport::decode::{self, Decoder};
use dag_transport::{QueryBuilder, QueryChain, QueryError, Session};
use serde_json::Value;

/// A session reference plus the chain that reaches one object.
#[derive(Clone)]
pub struct ObjectHandle {
    session: Arc<dyn Session>,
    chain: QueryChain,
}

impl ObjectHandle {
    pub fn new(session: Arc<dyn Session>, chain: QueryChain) -> Self {
        Self { session, chain }
    }

    /// The root `query` object.
    pub fn root(session: Arc<dyn Session>) -> Self {
        Self::new(session, QueryChain::root())
    }

    pub fn chain(&self) -> &QueryChain {
        &self.chain
    }

    pub fn session(&self) -> &Arc<dyn Session> {
        &self.session
    }

    /// Handle for a sub-selection. Shares the session; `self` is unchanged.
    pub fn select(&self, node: QueryBuilder) -> Self {
        Self::new(Arc::clone(&self.session), self.chain.chain(node))
    }

    /// Handle rooted at `load<Type>FromID(id: ...)`.
    pub fn load<I: IdAble>(&self, id: &I) -> Self {
        let node = QueryBuilder::new(I::loader_field()).with_argument("id", id.as_str());
        Self::new(Arc::clone(&self.session), QueryChain::root().chain(node))
    }

    pub fn query_leaf(&self, leaf: &str) -> Result<Value, QueryError> {
        self.session.query_leaf(&self.chain, leaf)
    }
}

impl fmt::Debug for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectHandle")
            .field("chain", &self.chain)
            .finish_non_exhaustive()
    }
}

/// A typed accessor over an [`ObjectHandle`].
pub trait Object: Sized {
    /// Schema name of the object type.
    const TYPE_NAME: &'static str;

    fn from_handle(handle: ObjectHandle) -> Self;

    fn handle(&self) -> &ObjectHandle;
}

/// A scalar field, decoded on every call.
pub struct LeafField<T> {
    name: &'static str,
    decode: Decoder<T>,
}

impl<T> LeafField<T> {
    pub const fn new(name: &'static str, decode: Decoder<T>) -> Self {
        Self { name, decode }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn resolve(&self, object: &ObjectHandle) -> Result<T, QueryError> {
        let raw = object.query_leaf(self.name)?;
        Ok((self.decode)(&object.chain().path(self.name), raw)?)
    }
}

/// An object-typed field. Selecting it never touches the session.
pub struct NestedField<T> {
    name: &'static str,
    wrap: fn(ObjectHandle) -> T,
}

impl<T> NestedField<T> {
    pub const fn new(name: &'static str, wrap: fn(ObjectHandle) -> T) -> Self {
        Self { name, wrap }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn select(&self, object: &ObjectHandle) -> T {
        (self.wrap)(object.select(QueryBuilder::new(self.name)))
    }
}

/// A field holding a list of objects identified by `I`.
///
/// Resolution selects `<field> { id }` in one round trip; each element is
/// then addressed through its own id rather than a list index.
pub struct ObjectListField<I, T> {
    name: &'static str,
    wrap: fn(ObjectHandle) -> T,
    _id: PhantomData<fn() -> I>,
}

impl<I: IdAble, T> ObjectListField<I, T> {
    pub const fn new(name: &'static str, wrap: fn(ObjectHandle) -> T) -> Self {
        Self {
            name,
            wrap,
            _id: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn resolve(&self, object: &ObjectHandle) -> Result<Vec<T>, QueryError> {
        let list = object.select(QueryBuilder::new(self.name));
        let ids = LeafField::new("id", decode::id_list::<I>).resolve(&list)?;
        Ok(ids
            .iter()
            .map(|id| (self.wrap)(object.load(id)))
            .collect())
    }
}

/// Declare an accessor struct wrapping an [`ObjectHandle`].
macro_rules! object_type {
    ($(#[$meta:meta])* $name:ident => $type_name:literal) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name {
            handle: $crate::object::ObjectHandle,
        }

        impl $crate::object::Object for $name {
            const TYPE_NAME: &'static str = $type_name;

            fn from_handle(handle: $crate::object::ObjectHandle) -> Self {
                Self { handle }
            }

            fn handle(&self) -> &$crate::object::ObjectHandle {
                &self.handle
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(<Self as $crate::object::Object>::TYPE_NAME)
                    .field("chain", self.handle.chain())
                    .finish()
            }
        }
    };
}

pub(crate) use object_type;
