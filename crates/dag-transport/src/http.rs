//! Blocking HTTP session.
//!
//! Every query is a `POST` of `{"query": <document>}` to the session
//! endpoint. Transport failures are retried with exponential backoff;
//! GraphQL and decode errors surface on the first attempt.

use base64::Engine;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::SessionConfig;
use crate::endpoint::endpoint_authority;
use crate::error::{DecodeError, QueryError, TransportError};
use crate::session::Session;

/// Session over the engine's HTTP query endpoint.
#[derive(Clone)]
pub struct HttpSession {
    config: SessionConfig,
    agent: ureq::Agent,
    authorization: Option<String>,
}

impl HttpSession {
    pub fn new(config: SessionConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .timeout_connect(config.connect_timeout)
            .build();
        let authorization = config.token.as_deref().map(basic_auth);
        Self {
            config,
            agent,
            authorization,
        }
    }

    /// Session configured from `DAGGER_*` environment variables.
    pub fn from_env() -> Self {
        Self::new(SessionConfig::from_env())
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// One round trip. Returns the whole response body.
    fn send(&self, document: &str) -> Result<Value, QueryError> {
        let body = serde_json::json!({ "query": document });

        let mut request = self
            .agent
            .post(&self.config.endpoint)
            .set("Content-Type", "application/json");
        if let Some(authorization) = &self.authorization {
            request = request.set("Authorization", authorization);
        }

        match request.send_json(&body) {
            Ok(response) => response.into_json::<Value>().map_err(|e| {
                TransportError::Body {
                    message: e.to_string(),
                }
                .into()
            }),
            Err(ureq::Error::Status(status, response)) => {
                let text = response.into_string().unwrap_or_default();
                // Engines report query failures with a non-2xx status and a GraphQL body.
                if let Some(err) = serde_json::from_str::<Value>(&text)
                    .ok()
                    .as_ref()
                    .and_then(graphql_error)
                {
                    return Err(err);
                }
                Err(TransportError::Status {
                    endpoint: self.config.endpoint.clone(),
                    status,
                    body: text,
                }
                .into())
            }
            Err(ureq::Error::Transport(e)) => Err(TransportError::Request {
                endpoint: self.config.endpoint.clone(),
                retryable: is_transient(&e),
                message: e.to_string(),
            }
            .into()),
        }
    }
}

impl Session for HttpSession {
    fn execute(&self, document: &str) -> Result<Value, QueryError> {
        let retry = self.config.retry;
        let mut attempt = 0usize;

        loop {
            debug!(
                endpoint = endpoint_authority(&self.config.endpoint),
                attempt, document, "executing query"
            );
            match self.send(document) {
                Ok(response) => return into_data(response),
                Err(QueryError::Transport(e)) if e.is_retryable() && attempt < retry.retries => {
                    let backoff = retry.backoff_for(attempt);
                    warn!(
                        error = %e,
                        attempt,
                        backoff_ms = backoff.as_millis() as u64,
                        "retrying query"
                    );
                    attempt += 1;
                    std::thread::sleep(backoff);
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Connection and I/O failures may clear up; URL and scheme errors never do.
fn is_transient(error: &ureq::Transport) -> bool {
    use ureq::ErrorKind;

    match error.kind() {
        ErrorKind::ConnectionFailed | ErrorKind::Io | ErrorKind::ProxyConnect => true,
        // A name that does not resolve stays unresolved; a lookup that timed out may not.
        ErrorKind::Dns => error.to_string().to_ascii_lowercase().contains("timed out"),
        _ => false,
    }
}

fn basic_auth(token: &str) -> String {
    let credentials = format!("{}:", token);
    format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode(credentials)
    )
}

fn into_data(response: Value) -> Result<Value, QueryError> {
    if let Some(err) = graphql_error(&response) {
        return Err(err);
    }
    match response.get("data") {
        Some(data) if !data.is_null() => Ok(data.clone()),
        _ => Err(DecodeError::MissingData.into()),
    }
}

/// The first entry of a non-empty `errors` array.
fn graphql_error(response: &Value) -> Option<QueryError> {
    let first = response.get("errors")?.as_array()?.first()?;
    let message = first
        .get("message")
        .and_then(|m| m.as_str())
        .unwrap_or("unknown error")
        .to_string();
    let path = first.get("path").and_then(|p| p.as_array()).map(|segments| {
        segments
            .iter()
            .map(|s| match s {
                Value::String(field) => field.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(".")
    });
    Some(QueryError::Graphql { message, path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_basic_auth_uses_token_as_user() {
        // "tok:"
        assert_eq!(basic_auth("tok"), "Basic dG9rOg==");
    }

    #[test]
    fn test_into_data() {
        let data = into_data(json!({"data": {"name": "x"}})).unwrap();
        assert_eq!(data, json!({"name": "x"}));

        let err = into_data(json!({"data": null})).unwrap_err();
        assert!(matches!(err, QueryError::Decode(DecodeError::MissingData)));
    }

    #[test]
    fn test_graphql_error_wins_over_data() {
        let response = json!({
            "data": null,
            "errors": [
                {"message": "object not found", "path": ["loadFunctionArgFromID", 0, "name"]},
                {"message": "second"}
            ]
        });
        match into_data(response).unwrap_err() {
            QueryError::Graphql { message, path } => {
                assert_eq!(message, "object not found");
                assert_eq!(path.as_deref(), Some("loadFunctionArgFromID.0.name"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_errors_array_is_ignored() {
        let data = into_data(json!({"data": {"id": "a"}, "errors": []})).unwrap();
        assert_eq!(data, json!({"id": "a"}));
    }
}
