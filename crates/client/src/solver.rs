//! HTTP client for the remote solve endpoint.

use reqwest::Client;
use tracing::debug;

use crate::config::SolverConfig;
use crate::core::{SolveError, SolveOutcome};
use crate::protocol::{SolveRequest, SolveResponse};

const MAX_LOGGED_BODY_BYTES: usize = 512;

/// Sends scrambles to the solver and decodes its answers.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct SolverClient {
    http: Client,
    endpoint: String,
}

impl SolverClient {
    pub fn new(config: &SolverConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Solve one scramble (space-joined move tokens).
    ///
    /// - non-2xx with an `error` text → [`SolveError::Service`]
    /// - 2xx with an `error` text → [`SolveError::Service`]
    /// - anything unreadable or unreachable → [`SolveError::Transport`]
    pub async fn solve(&self, scramble: &str) -> Result<SolveOutcome, SolveError> {
        let request = SolveRequest {
            scramble: scramble.to_string(),
        };
        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| SolveError::transport(format!("request to {} failed: {e}", self.endpoint)))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| SolveError::transport(format!("failed to read response body: {e}")))?;
        debug!(%status, bytes = body.len(), "solver responded");

        let parsed = serde_json::from_slice::<SolveResponse>(&body);
        if status.is_success() {
            return parsed
                .map_err(|e| {
                    SolveError::transport(format!(
                        "unreadable solver response ({e}): {}",
                        body_preview(&body)
                    ))
                })?
                .into_outcome();
        }

        match parsed.as_ref().ok().and_then(SolveResponse::error_text) {
            Some(text) => Err(SolveError::Service(text.to_string())),
            None => Err(SolveError::transport(format!(
                "solver returned HTTP {status}: {}",
                body_preview(&body)
            ))),
        }
    }
}

fn body_preview(body: &[u8]) -> String {
    let end = body.len().min(MAX_LOGGED_BODY_BYTES);
    String::from_utf8_lossy(&body[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Face};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SolverClient {
        let config = SolverConfig {
            endpoint: format!("{}/solve", server.uri()),
            ..SolverConfig::default()
        };
        SolverClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn posts_scramble_and_decodes_snapshots() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/solve"))
            .and(body_json(serde_json::json!({ "scramble": "R U" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "solution": "U' R'",
                "scrambled_cube": { "U": ["red", "red", "red", "red", "red", "red", "red", "red", "red"] },
            })))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = client_for(&server).solve("R U").await.unwrap();
        assert_eq!(outcome.solution.as_deref(), Some("U' R'"));
        assert_eq!(
            outcome.scrambled.unwrap().get(Face::Up),
            Some(&[Some(Color::Red); 9])
        );
        assert!(outcome.solved.is_none());
    }

    #[tokio::test]
    async fn bad_request_surfaces_server_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/solve"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({ "error": "Invalid scramble sequence" })),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).solve("R").await.unwrap_err();
        assert_eq!(err, SolveError::Service("Invalid scramble sequence".into()));
    }

    #[tokio::test]
    async fn malformed_snapshots_keep_solution_and_error_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(serde_json::json!({ "scramble": "F" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "solution": "F'",
                "scrambled_cube": "garbage",
                "solved_cube": [1, 2],
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(body_json(serde_json::json!({ "scramble": "B" })))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "Invalid move sequence",
                "scrambled_cube": 3,
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let outcome = client.solve("F").await.unwrap();
        assert_eq!(outcome.solution.as_deref(), Some("F'"));
        assert!(outcome.scrambled.is_none());
        assert!(outcome.solved.is_none());

        let err = client.solve("B").await.unwrap_err();
        assert_eq!(err, SolveError::Service("Invalid move sequence".into()));
    }

    #[tokio::test]
    async fn server_error_without_text_is_generic() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>boom</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).solve("R").await.unwrap_err();
        assert!(matches!(err, SolveError::Transport { .. }));
        assert_eq!(err.to_string(), "Something went wrong");
    }

    #[tokio::test]
    async fn non_json_success_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&server)
            .await;

        let err = client_for(&server).solve("R").await.unwrap_err();
        assert!(matches!(err, SolveError::Transport { .. }));
    }
}
