//! GraphQL-over-HTTP implementation of [`AuthBackendPort`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use sg_core::ports::{AuthBackendPort, ClockPort};
use sg_core::{Credentials, Failure, Session, TokenPair, UserId};
use tracing::debug;

const LOGIN_MUTATION: &str = "mutation Login($identifier: String!, $password: String!) { \
login(identifier: $identifier, password: $password) { \
userId accessToken refreshToken emailVerified phoneVerified createdAt } }";

const LOGOUT_MUTATION: &str = "mutation Logout { logout }";

const REFRESH_MUTATION: &str = "mutation RefreshSession($refreshToken: String!) { \
refreshSession(refreshToken: $refreshToken) { accessToken refreshToken } }";

#[derive(Debug, thiserror::Error)]
pub enum GraphqlBackendError {
    #[error("failed to build http client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorEntry {
    message: String,
}

#[derive(Debug, Deserialize)]
struct LoginData {
    login: LoginPayload,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginPayload {
    user_id: String,
    access_token: String,
    refresh_token: String,
    #[serde(default)]
    email_verified: bool,
    #[serde(default)]
    phone_verified: bool,
    created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RefreshData {
    refresh_session: TokenPayload,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenPayload {
    access_token: String,
    refresh_token: String,
}

pub struct GraphqlAuthBackend {
    client: reqwest::Client,
    endpoint: String,
    clock: Arc<dyn ClockPort>,
}

impl GraphqlAuthBackend {
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Duration,
        clock: Arc<dyn ClockPort>,
    ) -> Result<Self, GraphqlBackendError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            clock,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        operation: &str,
        query: &str,
        variables: Value,
        bearer: Option<&str>,
    ) -> Result<T, Failure> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "query": query, "variables": variables }));
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(transport_failure)?;
        let status = response.status();
        let body = response.bytes().await.map_err(transport_failure)?;
        debug!(operation, status = status.as_u16(), "GraphQL response received");

        let envelope = serde_json::from_slice::<GraphqlResponse<T>>(&body);

        if !status.is_success() {
            return match envelope {
                Ok(envelope) if !envelope.errors.is_empty() => {
                    Err(protocol_failure(envelope.errors))
                }
                _ => Err(Failure::network(format!("HTTP {status}"))),
            };
        }

        let envelope = envelope
            .map_err(|e| Failure::message(format!("malformed {operation} response: {e}")))?;

        if !envelope.errors.is_empty() {
            return Err(protocol_failure(envelope.errors));
        }

        envelope
            .data
            .ok_or_else(|| Failure::message(format!("{operation} response carried no data")))
    }
}

fn protocol_failure(errors: Vec<GraphqlErrorEntry>) -> Failure {
    Failure::protocol(errors.into_iter().map(|e| e.message).collect())
}

/// Transport failures keep the words the classifier keys on.
fn transport_failure(err: reqwest::Error) -> Failure {
    if err.is_timeout() {
        Failure::network(format!("request timeout: {err}"))
    } else if err.is_connect() {
        Failure::network(format!("network request failed: {err}"))
    } else if let Some(status) = err.status() {
        Failure::network(format!("HTTP {status}"))
    } else {
        Failure::network(err.to_string())
    }
}

#[async_trait]
impl AuthBackendPort for GraphqlAuthBackend {
    async fn login(&self, credentials: &Credentials) -> Result<Session, Failure> {
        let data: LoginData = self
            .execute(
                "login",
                LOGIN_MUTATION,
                json!({
                    "identifier": credentials.identifier,
                    "password": credentials.password,
                }),
                None,
            )
            .await?;

        let payload = data.login;
        Ok(Session {
            user_id: UserId::from(payload.user_id),
            access_token: payload.access_token,
            refresh_token: payload.refresh_token,
            email_verified: payload.email_verified,
            phone_verified: payload.phone_verified,
            created_at: payload.created_at.unwrap_or_else(|| self.clock.now()),
        })
    }

    async fn logout(&self, session: &Session) -> Result<(), Failure> {
        let _: Value = self
            .execute(
                "logout",
                LOGOUT_MUTATION,
                json!({}),
                Some(&session.access_token),
            )
            .await?;
        Ok(())
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, Failure> {
        let data: RefreshData = self
            .execute(
                "refresh",
                REFRESH_MUTATION,
                json!({ "refreshToken": refresh_token }),
                None,
            )
            .await?;

        Ok(TokenPair {
            access_token: data.refresh_session.access_token,
            refresh_token: data.refresh_session.refresh_token,
        })
    }
}
