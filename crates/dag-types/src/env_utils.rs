//! Environment variable parsing utilities.
//!
//! Session configuration is read from the environment the engine exports to
//! its clients (`DAGGER_SESSION_PORT`, `DAGGER_SESSION_TOKEN`, ...). These
//! helpers keep that parsing in one place:
//!
//! ```
//! use dag_sdk_types::env_utils::{env_string, env_var_or};
//!
//! let port: u16 = env_var_or("DAGGER_SESSION_PORT", 8080);
//! let token: Option<String> = env_string("DAGGER_SESSION_TOKEN");
//! ```

use std::str::FromStr;

/// Parse an environment variable into a type that implements `FromStr`.
///
/// Returns `None` if the variable is unset, blank, or fails to parse.
pub fn env_var<T: FromStr>(key: &str) -> Option<T> {
    env_string(key).and_then(|v| v.parse().ok())
}

/// Parse an environment variable, falling back to `default`.
pub fn env_var_or<T: FromStr>(key: &str, default: T) -> T {
    env_var(key).unwrap_or(default)
}

/// Read a trimmed, non-empty string variable.
pub fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
