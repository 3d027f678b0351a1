//! Shared types for the dag-sdk workspace.
//!
//! This crate holds the scalar carriers that cross the transport boundary,
//! so the transport layer and the generated accessors agree on them without
//! depending on each other.
//!
//! - [`Json`](scalar::Json) - opaque JSON payload
//! - [`FunctionArgId`](id::FunctionArgId) and friends - typed object identifiers
//! - [`TypeDefKind`](kind::TypeDefKind) - the kind of a type definition

pub mod env_utils;
pub mod id;
pub mod kind;
pub mod scalar;

pub use env_utils::{env_string, env_var, env_var_or};
pub use id::{FunctionArgId, FunctionId, IdAble, ListTypeDefId, ObjectTypeDefId, TypeDefId};
pub use kind::TypeDefKind;
pub use scalar::Json;

use std::time::Duration;

/// Configuration for retry behavior on session requests.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Number of retry attempts after the first failure.
    pub retries: usize,
    /// Initial backoff duration between retries.
    pub initial_backoff: Duration,
    /// Maximum backoff duration.
    pub max_backoff: Duration,
}

impl RetryConfig {
    /// Create a new RetryConfig with the specified parameters.
    pub fn new(retries: usize, initial_backoff_ms: u64, max_backoff_ms: u64) -> Self {
        Self {
            retries,
            initial_backoff: Duration::from_millis(initial_backoff_ms),
            max_backoff: Duration::from_millis(max_backoff_ms),
        }
    }

    /// A config that never retries.
    pub fn none() -> Self {
        Self::new(0, 0, 0)
    }

    /// Backoff to wait before retry number `attempt` (zero based).
    pub fn backoff_for(&self, attempt: usize) -> Duration {
        let factor = 1u32.checked_shl(attempt.min(31) as u32).unwrap_or(u32::MAX);
        self.initial_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            retries: 10,
            initial_backoff: Duration::from_millis(250),
            max_backoff: Duration::from_millis(5000),
        }
    }
}
