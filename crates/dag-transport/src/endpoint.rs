use dag_sdk_types::env_utils::{env_string, env_var_or};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const QUERY_PATH: &str = "/query";

/// Endpoint URL for a session listening on `host:port`.
pub fn session_endpoint(host: &str, port: u16) -> String {
    format!("http://{}:{}{}", host, port, QUERY_PATH)
}

/// Resolve the session endpoint from the environment.
///
/// `DAGGER_SESSION_URL` wins when set. Otherwise the endpoint is built from
/// `DAGGER_SESSION_HOST` (default `127.0.0.1`) and `DAGGER_SESSION_PORT`
/// (default `8080`).
pub fn resolve_session_endpoint() -> String {
    if let Some(url) = env_string("DAGGER_SESSION_URL") {
        return url;
    }

    let host = env_string("DAGGER_SESSION_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = env_var_or("DAGGER_SESSION_PORT", DEFAULT_PORT);
    session_endpoint(&host, port)
}

/// Host and port of an endpoint URL, for log fields.
pub fn endpoint_authority(endpoint: &str) -> &str {
    let without_scheme = endpoint
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(endpoint);
    without_scheme
        .split_once('/')
        .map(|(authority, _)| authority)
        .unwrap_or(without_scheme)
}
