//! Query chains and session transport for the engine GraphQL API.
//!
//! This crate provides:
//! - [`query`]: immutable [`QueryChain`]s of [`QueryBuilder`] selections, document
//!   rendering and response unpacking
//! - [`session`]: the [`Session`] capability accessors resolve leaves through
//! - [`http`]: [`HttpSession`], a blocking session over the engine's HTTP endpoint
//! - [`decode`]: leaf decoders with explicit failure
//!
//! # Example
//!
//! ```ignore
//! use dag_transport::{HttpSession, QueryBuilder, QueryChain, Session};
//!
//! let session = HttpSession::from_env();
//! let chain = QueryChain::root()
//!     .chain(QueryBuilder::new("loadFunctionArgFromID").with_argument("id", "fnarg-1"));
//! let name = session.query_leaf(&chain, "name")?;
//! ```

pub mod config;
pub mod decode;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod query;
pub mod session;

pub use config::SessionConfig;
pub use error::{DecodeError, QueryError, TransportError};
pub use http::HttpSession;
pub use query::{unpack, QueryBuilder, QueryChain};
pub use session::Session;
