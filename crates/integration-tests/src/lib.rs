//! Integration tests for the ComandAS client.
//!
//! The screen controllers run here exactly as a host would drive them,
//! with the three transports swapped for in-process doubles:
//!
//! - [`StubTransport`] answers HTTP-style requests from canned responses
//!   and records every call, so tests can assert which endpoints were
//!   (or were not) reached
//! - `MemoryChannel` is the real in-process live channel, with its
//!   connectivity flag flipped where a scenario needs a dead socket
//! - `MemoryStore` backs the session object
//!
//! # Test Categories
//!
//! - `sign_in` - credential flow, role navigation, error-code mapping
//! - `sign_up` - local validation and the registration round trip
//! - `user_admin` - create/edit/delete with the connectivity gate
//! - `profile` - self-edit and session consistency
//! - `dashboard` - concurrent loads and live increments

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use comandas_app::config::ClientConfig;
use comandas_app::live::{LiveChannel, MemoryChannel};
use comandas_app::provider::{ApiError, ApiTransport, Method};
use comandas_app::state::AppContext;
use comandas_app::storage::{KeyValueStore, MemoryStore};
use comandas_core::Session;

/// One request the stub transport saw.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub params: Option<Value>,
}

#[derive(Default)]
struct StubState {
    responses: HashMap<String, Value>,
    failures: HashMap<String, (Option<String>, String)>,
    calls: Vec<RecordedCall>,
}

/// An [`ApiTransport`] double: canned responses by path, every call
/// recorded.
///
/// Paths with neither a response nor a failure configured answer
/// [`ApiError::NotFound`], which keeps a test honest about the endpoints
/// it expects to be hit.
#[derive(Default)]
pub struct StubTransport {
    state: Mutex<StubState>,
}

impl StubTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, StubState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Answer `path` with `response`.
    pub fn respond(&self, path: &str, response: Value) {
        self.state().responses.insert(path.to_owned(), response);
    }

    /// Reject `path` with a backend-style error.
    pub fn fail(&self, path: &str, code: Option<&str>, message: &str) {
        self.state()
            .failures
            .insert(path.to_owned(), (code.map(str::to_owned), message.to_owned()));
    }

    /// Every call seen so far.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state().calls.clone()
    }

    /// The calls that hit `path`.
    #[must_use]
    pub fn calls_to(&self, path: &str) -> Vec<RecordedCall> {
        self.state()
            .calls
            .iter()
            .filter(|call| call.path == path)
            .cloned()
            .collect()
    }

    /// Total number of requests issued.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.state().calls.len()
    }
}

#[async_trait]
impl ApiTransport for StubTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        params: Option<Value>,
    ) -> Result<Value, ApiError> {
        let mut state = self.state();
        state.calls.push(RecordedCall {
            method,
            path: path.to_owned(),
            params,
        });

        if let Some((code, message)) = state.failures.get(path) {
            return Err(ApiError::Server {
                code: code.clone(),
                message: message.clone(),
            });
        }

        state
            .responses
            .get(path)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(path.to_owned()))
    }
}

/// Everything a scenario needs: the context plus handles to its doubles.
pub struct TestContext {
    pub transport: Arc<StubTransport>,
    pub live: Arc<MemoryChannel>,
    pub store: Arc<MemoryStore>,
    pub ctx: AppContext,
}

impl TestContext {
    /// Build a context with the stock cosmetic delay (1500 ms); pair
    /// with `#[tokio::test(start_paused = true)]` where sign-in runs.
    #[must_use]
    pub fn new() -> Self {
        // Idempotent; lets RUST_LOG surface client traces from any test
        comandas_app::telemetry::init();

        let transport = Arc::new(StubTransport::new());
        let live = Arc::new(MemoryChannel::new());
        let store = Arc::new(MemoryStore::new());

        let config = ClientConfig {
            api_url: "http://localhost:3000/"
                .parse()
                .expect("static test URL parses"),
            socket_url: None,
            session_file: None,
            signin_delay: Duration::from_millis(1500),
        };

        let transport_dyn: Arc<dyn ApiTransport> = transport.clone();
        let live_dyn: Arc<dyn LiveChannel> = live.clone();
        let store_dyn: Arc<dyn KeyValueStore> = store.clone();
        let ctx = AppContext::with_parts(config, transport_dyn, live_dyn, store_dyn);

        Self {
            transport,
            live,
            store,
            ctx,
        }
    }

    /// Persist a signed-in session before the scenario starts.
    pub fn sign_in_as(&self, session: &Session) {
        self.ctx
            .sessions()
            .set(session)
            .expect("memory store never fails");
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A session fixture with the given id and role code.
#[must_use]
pub fn session_fixture(id: i32, rol: i32) -> Session {
    Session {
        idusers: comandas_core::UserId::new(id),
        name: unique_name("user"),
        phone: Some("5512345678".to_owned()),
        email: format!("{}@comandas.mx", unique_name("mail")),
        rol,
        actual_order: None,
    }
}

/// A unique fixture name.
#[must_use]
pub fn unique_name(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4())
}

/// A `{labels, data}` series body with month buckets.
#[must_use]
pub fn monthly_series(data: &[f64]) -> Value {
    let labels: Vec<String> = (1..=data.len()).map(|m| format!("mes {m}")).collect();
    serde_json::json!({ "labels": labels, "data": data })
}
