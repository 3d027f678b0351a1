use serde_json::Value;

use crate::error::QueryError;
use crate::query::{unpack, QueryChain};

/// A connection to the engine capable of executing query documents.
///
/// Implementors only provide [`Session::execute`]; leaf resolution is
/// rendering plus unpacking on top of it. Sessions are shared by every
/// accessor created from one client, so they must be `Send + Sync`.
pub trait Session: Send + Sync {
    /// Execute a complete GraphQL document and return its `data` member.
    fn execute(&self, document: &str) -> Result<Value, QueryError>;

    /// Resolve `chain` plus the leaf field `leaf` to its raw value.
    fn query_leaf(&self, chain: &QueryChain, leaf: &str) -> Result<Value, QueryError> {
        let document = chain.render(leaf);
        let data = self.execute(&document)?;
        Ok(unpack(&data, chain, leaf)?)
    }
}
