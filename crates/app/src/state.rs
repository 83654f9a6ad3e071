//! Application context shared across screens.

use std::sync::Arc;

use crate::api::{AuthApi, GraphicsApi, UserApi};
use crate::config::ClientConfig;
use crate::live::{LiveChannel, MemoryChannel};
use crate::provider::{ApiTransport, HttpTransport};
use crate::session::SessionContext;
use crate::storage::{FileStore, KeyValueStore, MemoryStore};

/// Everything a screen needs, bundled once at startup.
///
/// Cheaply cloneable via `Arc`; screens take what they use from a
/// borrowed context at construction time.
#[derive(Clone)]
pub struct AppContext {
    inner: Arc<AppContextInner>,
}

struct AppContextInner {
    config: ClientConfig,
    auth: AuthApi,
    users: UserApi,
    graphics: GraphicsApi,
    live: Arc<dyn LiveChannel>,
    sessions: SessionContext,
}

impl AppContext {
    /// Create a context with the production transports.
    ///
    /// The HTTP side talks to `config.api_url` through `reqwest`; the
    /// session object lands in `config.session_file` when set and in
    /// memory otherwise. The live channel starts as an in-process broker
    /// until a host supplies a socket-backed one via
    /// [`AppContext::with_parts`].
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        let transport: Arc<dyn ApiTransport> = Arc::new(HttpTransport::new(&config));
        let live: Arc<dyn LiveChannel> = Arc::new(MemoryChannel::new());
        let store: Arc<dyn KeyValueStore> = match &config.session_file {
            Some(path) => Arc::new(FileStore::new(path.clone())),
            None => Arc::new(MemoryStore::new()),
        };

        Self::with_parts(config, transport, live, store)
    }

    /// Create a context from explicit transport implementations.
    #[must_use]
    pub fn with_parts(
        config: ClientConfig,
        transport: Arc<dyn ApiTransport>,
        live: Arc<dyn LiveChannel>,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            inner: Arc::new(AppContextInner {
                auth: AuthApi::new(Arc::clone(&transport)),
                users: UserApi::new(Arc::clone(&transport)),
                graphics: GraphicsApi::new(transport),
                live,
                sessions: SessionContext::new(store),
                config,
            }),
        }
    }

    /// Get a reference to the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Get the `auth/*` endpoint client.
    #[must_use]
    pub fn auth(&self) -> &AuthApi {
        &self.inner.auth
    }

    /// Get the `user/*` endpoint client.
    #[must_use]
    pub fn users(&self) -> &UserApi {
        &self.inner.users
    }

    /// Get the `graphics/*` endpoint client.
    #[must_use]
    pub fn graphics(&self) -> &GraphicsApi {
        &self.inner.graphics
    }

    /// Get the live-update channel.
    #[must_use]
    pub fn live(&self) -> &Arc<dyn LiveChannel> {
        &self.inner.live
    }

    /// Get the session context.
    #[must_use]
    pub fn sessions(&self) -> &SessionContext {
        &self.inner.sessions
    }
}
