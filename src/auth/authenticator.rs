//! radiko login session and two-phase token authentication.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::api::area::{resolve_area, AreaPrefecture};
use crate::api::client::HttpClient;
use crate::api::types::{HttpRequest, HttpResponse};
use crate::auth::key::AuthKey;
use crate::error::{Error, Result};

const LOGIN_URL: &str = "https://radiko.jp/v4/api/member/login";
const LOGOUT_URL: &str = "https://radiko.jp/v4/api/member/logout";
const AUTH1_URL: &str = "https://radiko.jp/v2/api/auth1";
const AUTH2_URL: &str = "https://radiko.jp/v2/api/auth2";

const X_RADIKO_APP: &str = "X-Radiko-App";
const X_RADIKO_APP_VERSION: &str = "X-Radiko-App-Version";
const X_RADIKO_DEVICE: &str = "X-Radiko-Device";
const X_RADIKO_USER: &str = "X-Radiko-User";
const X_RADIKO_AUTHTOKEN: &str = "X-Radiko-AuthToken";
const X_RADIKO_PARTIALKEY: &str = "X-Radiko-PartialKey";
const X_RADIKO_KEYOFFSET: &str = "X-Radiko-Keyoffset";
const X_RADIKO_KEYLENGTH: &str = "X-Radiko-Keylength";

const RADIKO_SESSION: &str = "radiko_session";

const APP_NAME: &str = "pc_html5";
const APP_VERSION: &str = "0.0.1";
const DEVICE: &str = "pc";
const USER: &str = "dummy_user";

/// Default time a token is reused before authenticating again.
pub const DEFAULT_REAUTHENTICATION_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Token and area granted by a successful auth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResult {
    pub authtoken: String,
    pub area_id: String,
}

impl AuthResult {
    /// Prefecture for the granted area id.
    pub fn prefecture(&self) -> Result<AreaPrefecture> {
        resolve_area(&self.area_id)
    }
}

/// Source of stream credentials.
#[async_trait]
pub trait Authenticate: Send + Sync {
    /// Return a valid token, authenticating if the cached one expired.
    async fn auth(&self) -> Result<AuthResult>;
}

#[derive(Debug, Default)]
struct AuthState {
    session: Option<String>,
    authtoken: Option<String>,
    area_id: Option<String>,
    acquired_at: Option<Instant>,
}

impl AuthState {
    fn cached(&self, now: Instant, interval: Duration) -> Option<AuthResult> {
        let acquired_at = self.acquired_at?;
        if now.saturating_duration_since(acquired_at) >= interval {
            return None;
        }

        Some(AuthResult {
            authtoken: self.authtoken.clone()?,
            area_id: self.area_id.clone()?,
        })
    }

    fn invalidate_token(&mut self) {
        self.authtoken = None;
        self.area_id = None;
        self.acquired_at = None;
    }
}

/// Output of the first auth phase.
struct Challenge {
    authtoken: String,
    partial_key: String,
    issued_at: Instant,
}

/// Owns the radiko session and the cached auth token.
///
/// Every public operation holds the state lock for its whole duration, so
/// calls on one instance never interleave. Dropping an operation's future
/// cancels the in-flight request and leaves the state untouched.
pub struct Authenticator {
    client: Arc<dyn HttpClient>,
    auth_key: AuthKey,
    reauthentication_interval: Duration,
    state: Mutex<AuthState>,
}

impl Authenticator {
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self {
            client,
            auth_key: AuthKey::default(),
            reauthentication_interval: DEFAULT_REAUTHENTICATION_INTERVAL,
            state: Mutex::new(AuthState::default()),
        }
    }

    /// Replace the key material the partial key is derived from.
    pub fn with_auth_key(mut self, auth_key: AuthKey) -> Self {
        self.auth_key = auth_key;
        self
    }

    /// Set how long a token is reused. Zero authenticates on every call.
    pub fn with_reauthentication_interval(mut self, interval: Duration) -> Self {
        self.reauthentication_interval = interval;
        self
    }

    pub fn reauthentication_interval(&self) -> Duration {
        self.reauthentication_interval
    }

    /// Log in to a premium (area-free) account.
    ///
    /// On success the cached token is discarded so the next [`auth`](Self::auth)
    /// runs with the new session.
    pub async fn login(&self, mail: &str, password: &str) -> Result<()> {
        if mail.is_empty() || password.is_empty() {
            return Err(Error::Validation(
                "mail and password must not be empty".to_string(),
            ));
        }

        let mut state = self.state.lock().await;

        tracing::debug!("POST {}", LOGIN_URL);
        let request = HttpRequest::new(LOGIN_URL)
            .parameter("mail", mail)
            .parameter("pass", password);
        let response = self.client.post_form(&request).await?;
        let body = response.validated_body()?;
        tracing::debug!("Login response: {}", body);

        let session = parse_session(body)?;
        state.session = Some(session);
        state.invalidate_token();

        tracing::info!("Logged in to radiko premium");
        Ok(())
    }

    /// End the premium session. Does nothing when not logged in.
    pub async fn logout(&self) -> Result<()> {
        let mut state = self.state.lock().await;

        let Some(session) = state.session.as_deref().filter(|s| !s.trim().is_empty()) else {
            return Ok(());
        };

        tracing::debug!("POST {}", LOGOUT_URL);
        let request = HttpRequest::new(LOGOUT_URL).parameter(RADIKO_SESSION, session);
        let response = self.client.post_form(&request).await?;
        let body = response.validated_body()?;
        tracing::debug!("Logout response: {}", body);

        state.session = None;
        state.invalidate_token();

        tracing::info!("Logged out of radiko premium");
        Ok(())
    }

    /// Whether a premium session is held.
    pub async fn is_logged_in(&self) -> bool {
        let state = self.state.lock().await;
        state
            .session
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty())
    }

    async fn auth1(&self) -> Result<Challenge> {
        tracing::debug!("GET {}", AUTH1_URL);
        let request = HttpRequest::new(AUTH1_URL)
            .header(X_RADIKO_APP, APP_NAME)
            .header(X_RADIKO_APP_VERSION, APP_VERSION)
            .header(X_RADIKO_DEVICE, DEVICE)
            .header(X_RADIKO_USER, USER);
        let response = self.client.get(&request).await?;
        let body = response.validated_body()?;
        tracing::debug!("auth1 response: {}", body);

        let authtoken = required_header(&response, X_RADIKO_AUTHTOKEN)?.to_string();
        let offset = numeric_header(&response, X_RADIKO_KEYOFFSET)?;
        let length = numeric_header(&response, X_RADIKO_KEYLENGTH)?;
        tracing::debug!("auth1 key offset={}, length={}", offset, length);

        Ok(Challenge {
            authtoken,
            partial_key: self.auth_key.partial_key(offset, length),
            issued_at: Instant::now(),
        })
    }

    async fn auth2(&self, challenge: &Challenge, session: Option<&str>) -> Result<String> {
        tracing::debug!("GET {}", AUTH2_URL);
        let mut request = HttpRequest::new(AUTH2_URL)
            .header(X_RADIKO_DEVICE, DEVICE)
            .header(X_RADIKO_USER, USER)
            .header(X_RADIKO_AUTHTOKEN, challenge.authtoken.as_str())
            .header(X_RADIKO_PARTIALKEY, challenge.partial_key.as_str());
        if let Some(session) = session.filter(|s| !s.trim().is_empty()) {
            request = request.parameter(RADIKO_SESSION, session);
        }

        let response = self.client.get(&request).await?;
        let body = response.validated_body()?;
        tracing::debug!("auth2 response: {}", body);

        // "JP13,tokyo,Japan": the first field is the area id.
        let area_id = body.split(',').next().unwrap_or_default().trim();
        if area_id.is_empty() {
            return Err(Error::response(format!(
                "area id is empty in auth2 response. body={}",
                body
            )));
        }

        Ok(area_id.to_string())
    }
}

#[async_trait]
impl Authenticate for Authenticator {
    async fn auth(&self) -> Result<AuthResult> {
        let mut state = self.state.lock().await;

        if let Some(cached) = state.cached(Instant::now(), self.reauthentication_interval) {
            tracing::debug!("Reusing cached auth token for area {}", cached.area_id);
            return Ok(cached);
        }

        let challenge = self.auth1().await?;
        let area_id = self.auth2(&challenge, state.session.as_deref()).await?;

        state.authtoken = Some(challenge.authtoken.clone());
        state.area_id = Some(area_id.clone());
        state.acquired_at = Some(challenge.issued_at);

        tracing::info!("Authenticated for area {}", area_id);
        Ok(AuthResult {
            authtoken: challenge.authtoken,
            area_id,
        })
    }
}

fn parse_session(body: &str) -> Result<String> {
    let json: Value = serde_json::from_str(body)
        .map_err(|_| Error::response(format!("invalid JSON response. body={}", body)))?;

    match json.get(RADIKO_SESSION) {
        Some(Value::String(session)) => Ok(session.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        _ => Err(Error::response(format!(
            "radiko_session does not exist in response. body={}",
            body
        ))),
    }
}

fn required_header<'a>(response: &'a HttpResponse, name: &str) -> Result<&'a str> {
    response
        .first_header(name)
        .ok_or_else(|| Error::response(format!("{} is not present in header", name)))
}

fn numeric_header(response: &HttpResponse, name: &str) -> Result<usize> {
    let value = required_header(response, name)?;
    value.trim().parse().map_err(|e| {
        Error::response(format!(
            "{} is not a valid non-negative integer: '{}' ({})",
            name, value, e
        ))
    })
}
