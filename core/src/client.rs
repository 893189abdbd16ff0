//! Account client for the EVNotify backend.

use std::time::Duration;

use serde_json::{json, Value};
use tracing::debug;

use crate::error::ClientError;
use crate::session::Session;
use crate::transport::{ApiResponse, Transport, DEFAULT_BASE_URL};

/// Construction options for [`AccountClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base endpoint the operation names are appended to.
    pub base_url: String,

    /// Per-request timeout. A timed-out request surfaces as a transport
    /// fault; there are no retries.
    pub timeout: Duration,

    /// Credentials to resume, e.g. restored from an earlier run.
    pub session: Session,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            session: Session::default(),
        }
    }
}

/// Client for the EVNotify account backend.
///
/// Owns the [`Session`] for one account and exposes one async method per
/// backend operation. Each method issues a single POST through the shared
/// transport, then extracts its result from the JSON response body; missing
/// fields extract as `None`. See the crate docs for the status policy.
///
/// Operations that mutate the session take `&mut self`, so overlapping
/// token-mutating calls on one instance do not compile without external
/// synchronization.
pub struct AccountClient {
    transport: Transport,
    session: Session,
}

impl AccountClient {
    /// Client against the production backend with default options.
    pub fn new() -> Result<Self, ClientError> {
        Self::with_options(ClientOptions::default())
    }

    pub fn with_options(options: ClientOptions) -> Result<Self, ClientError> {
        Ok(Self {
            transport: Transport::new(&options.base_url, options.timeout)?,
            session: options.session,
        })
    }

    /// Credentials currently held by this client.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Replace the held credentials, e.g. with ones restored from disk.
    pub fn set_session(&mut self, session: Session) {
        self.session = session;
    }

    /// Issue a raw request through the transport funnel.
    ///
    /// Escape hatch for callers that need the HTTP status code or an
    /// endpoint this client has no method for. Performs no authentication
    /// precondition check and never touches the session.
    pub async fn send_raw(
        &self,
        operation: &str,
        payload: Option<&Value>,
    ) -> Result<ApiResponse, ClientError> {
        self.transport.send(operation, payload).await
    }

    /// Fetch an account key that was available on the backend at the time
    /// of the request, and store it as this client's account key.
    pub async fn retrieve_key(&mut self) -> Result<Option<String>, ClientError> {
        let res = self.transport.send("getkey", Some(&json!({}))).await?;
        let akey = res.str_field("akey");
        self.session.akey = akey.clone();
        Ok(akey)
    }

    /// Register a new account under `akey`.
    ///
    /// On a response carrying a token, stores both credentials; on one
    /// without, clears the account key so the client reads as anonymous.
    pub async fn register(
        &mut self,
        akey: &str,
        password: &str,
    ) -> Result<Option<String>, ClientError> {
        self.authenticate("register", akey, password).await
    }

    /// Log in to an existing account. Same session handling as
    /// [`register`](AccountClient::register).
    pub async fn login(
        &mut self,
        akey: &str,
        password: &str,
    ) -> Result<Option<String>, ClientError> {
        self.authenticate("login", akey, password).await
    }

    async fn authenticate(
        &mut self,
        operation: &str,
        akey: &str,
        password: &str,
    ) -> Result<Option<String>, ClientError> {
        let payload = json!({ "akey": akey, "password": password });
        let res = self.transport.send(operation, Some(&payload)).await?;
        let token = res.str_field("token");
        self.session.token = token.clone();
        // The account key only sticks alongside a token.
        self.session.akey = token.is_some().then(|| akey.to_owned());
        match &token {
            Some(_) => debug!("{} succeeded for {}", operation, akey),
            None => debug!("{} returned no token (status {})", operation, res.status),
        }
        Ok(token)
    }

    /// Change the account password.
    ///
    /// Resolves to `true` once the backend has replied at all; a transport
    /// fault is the only way to not get `true` back.
    pub async fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> Result<bool, ClientError> {
        let (akey, token) = self.credentials()?;
        let payload = json!({
            "akey": akey,
            "token": token,
            "oldpassword": old_password,
            "newpassword": new_password,
        });
        self.transport.send("password", Some(&payload)).await?;
        Ok(true)
    }

    /// Request a fresh session token.
    ///
    /// Stores and returns the new token when the response carries one;
    /// otherwise the current token stays in place and is returned as-is.
    pub async fn renew_token(&mut self, password: &str) -> Result<String, ClientError> {
        let (akey, current) = self.credentials()?;
        let payload = json!({ "akey": akey, "password": password });
        let res = self.transport.send("renewtoken", Some(&payload)).await?;
        match res.str_field("token") {
            Some(token) => {
                debug!("session token renewed for {}", akey);
                self.session.token = Some(token.clone());
                Ok(token)
            }
            None => Ok(current),
        }
    }

    /// Fetch the stored settings object, `None` when the response carries
    /// none.
    pub async fn get_settings(&self, password: &str) -> Result<Option<Value>, ClientError> {
        let (akey, token) = self.credentials()?;
        let payload = json!({
            "akey": akey,
            "token": token,
            "password": password,
            "option": "GET",
        });
        let res = self.transport.send("settings", Some(&payload)).await?;
        Ok(res.field("settings").cloned())
    }

    /// Store a settings object.
    ///
    /// Same result contract as [`change_password`](AccountClient::change_password):
    /// `true` for any completed exchange.
    pub async fn set_settings(&self, password: &str, settings: &Value) -> Result<bool, ClientError> {
        let (akey, token) = self.credentials()?;
        let payload = json!({
            "akey": akey,
            "token": token,
            "password": password,
            "option": "SET",
            "optionObj": settings,
        });
        self.transport.send("settings", Some(&payload)).await?;
        Ok(true)
    }

    /// Pull the synced settings/stats payload from the backend.
    pub async fn pull_settings(&self) -> Result<Option<Value>, ClientError> {
        let (akey, token) = self.credentials()?;
        let payload = json!({ "akey": akey, "token": token, "type": "PULL" });
        let res = self.transport.send("sync", Some(&payload)).await?;
        Ok(res.field("syncRes").cloned())
    }

    /// Push a settings/stats payload to the backend.
    pub async fn push_settings(&self, sync: &Value) -> Result<Option<Value>, ClientError> {
        let (akey, token) = self.credentials()?;
        let payload = json!({
            "akey": akey,
            "token": token,
            "type": "PUSH",
            "syncObj": sync,
        });
        let res = self.transport.send("sync", Some(&payload)).await?;
        Ok(res.field("syncRes").cloned())
    }

    /// Trigger (or with `abort` set, cancel) a notification for this
    /// account. Returns the backend's `notified` flag when present.
    pub async fn send_notification(&self, abort: bool) -> Result<Option<bool>, ClientError> {
        let (akey, token) = self.credentials()?;
        let payload = json!({ "akey": akey, "token": token, "abort": abort });
        let res = self.transport.send("notification", Some(&payload)).await?;
        Ok(res.bool_field("notified"))
    }

    /// Both credentials, or the local authentication error. Checked before
    /// any request is built, so unauthenticated calls never hit the wire.
    fn credentials(&self) -> Result<(String, String), ClientError> {
        match (&self.session.akey, &self.session.token) {
            (Some(akey), Some(token)) => Ok((akey.clone(), token.clone())),
            _ => Err(ClientError::AuthenticationRequired),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Nothing listens here; an attempted request would come back as a
    // transport fault, not as the authentication sentinel.
    fn anonymous_client() -> AccountClient {
        AccountClient::with_options(ClientOptions {
            base_url: "http://127.0.0.1:9/".to_string(),
            ..ClientOptions::default()
        })
        .unwrap()
    }

    fn assert_auth_required(result: Result<impl std::fmt::Debug, ClientError>) {
        match result {
            Err(ClientError::AuthenticationRequired) => {}
            other => panic!("expected AuthenticationRequired, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn authenticated_operations_short_circuit_when_anonymous() {
        let mut client = anonymous_client();
        assert_auth_required(client.change_password("old", "new").await);
        assert_auth_required(client.renew_token("pw").await);
        assert_auth_required(client.get_settings("pw").await);
        assert_auth_required(client.set_settings("pw", &json!({})).await);
        assert_auth_required(client.pull_settings().await);
        assert_auth_required(client.push_settings(&json!({})).await);
        assert_auth_required(client.send_notification(false).await);
    }

    #[tokio::test]
    async fn akey_without_token_is_still_unauthenticated() {
        let mut client = anonymous_client();
        client.set_session(Session::with_akey("EVNOTIFY1"));
        assert_auth_required(client.get_settings("pw").await);
        assert_auth_required(client.renew_token("pw").await);
    }

    #[tokio::test]
    async fn token_without_akey_is_still_unauthenticated() {
        let mut client = anonymous_client();
        client.set_session(Session {
            akey: None,
            token: Some("abc".to_string()),
        });
        assert_auth_required(client.pull_settings().await);
    }

    #[test]
    fn auth_error_maps_to_401() {
        assert_eq!(ClientError::AuthenticationRequired.status_code(), Some(401));
    }
}
