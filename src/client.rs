use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    context::Context,
    error::Error,
    operation::Operation,
    params::Params,
    result::Result,
    transport::{HttpTransport, Transport},
};

/// What happens to an in-flight request when its context fires first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelPolicy {
    /// Let the request run to completion in the background and drop its outcome.
    #[default]
    Detach,
    /// Abort the task performing the request, closing its connection.
    Abort,
}

/// Settings for a [`Client`].
///
/// Every field has a default, so a partial configuration deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Host the server listens on.
    pub host: String,
    /// Path segment in front of every operation path.
    pub api_prefix: String,
    /// `User-Agent` sent with each request.
    pub user_agent: String,
    /// Turn non-2xx responses into [`Error::UnexpectedStatus`] instead of
    /// returning their body.
    pub error_for_status: bool,
    /// Handling of requests abandoned by cancellation.
    pub on_cancel: CancelPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            api_prefix: "api".to_string(),
            user_agent: "BbsClient/1.0".to_string(),
            error_for_status: false,
            on_cancel: CancelPolicy::Detach,
        }
    }
}

impl ClientConfig {
    /// URL of the operation at `path` on a server listening on `port`.
    pub fn endpoint(&self, port: u16, path: &str) -> String {
        let prefix = self.api_prefix.trim_matches('/');
        if prefix.is_empty() {
            format!("http://{}:{port}/{path}", self.host)
        } else {
            format!("http://{}:{port}/{prefix}/{path}", self.host)
        }
    }
}

/// Executes operations against a local server.
///
/// Cloning is cheap; clones share the same transport.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    config: ClientConfig,
}

impl Client {
    /// Builds a client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClientFormation`] if the HTTP client cannot be built.
    pub fn new() -> Result<Client> {
        Self::with_config(ClientConfig::default())
    }

    /// Builds a client talking HTTP with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClientFormation`] if the HTTP client cannot be built.
    pub fn with_config(config: ClientConfig) -> Result<Client> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }

    /// Builds a client that sends requests through `transport`.
    pub fn with_transport<T: Transport>(config: ClientConfig, transport: T) -> Client {
        Client {
            transport: Arc::new(transport),
            config,
        }
    }

    /// Returns the configuration of this client.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Performs `operation` against the server on `port`.
    ///
    /// The request runs on its own task while this future waits for either
    /// the response or `ctx` to be done, whichever comes first. If both are
    /// ready when the race is checked, the response wins.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// - [`Error::Timeout`] if `ctx` is done first, including when it is
    ///   already done on entry.
    /// - [`Error::Transport`] or [`Error::Body`] if the exchange fails.
    /// - [`Error::Task`] if the request task panicked.
    pub async fn execute(
        &self,
        ctx: &Context,
        port: u16,
        operation: &Operation,
    ) -> Result<Vec<u8>> {
        let url = self.config.endpoint(port, operation.path());
        self.dispatch(ctx, url, operation.params()).await
    }

    async fn dispatch(&self, ctx: &Context, url: String, params: Params) -> Result<Vec<u8>> {
        if ctx.is_done() {
            log::debug!("context already done, not requesting {}", url);
            return Err(Error::Timeout);
        }

        log::debug!("request for {} dispatched", url);
        let transport = Arc::clone(&self.transport);
        let mut task = tokio::spawn(async move { transport.post_form(&url, &params).await });

        tokio::select! {
            biased;
            joined = &mut task => joined?,
            () = ctx.done() => {
                match self.config.on_cancel {
                    CancelPolicy::Detach => log::debug!("request abandoned, detaching"),
                    CancelPolicy::Abort => {
                        log::debug!("request abandoned, aborting");
                        task.abort();
                    }
                }
                Err(Error::Timeout)
            }
        }
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
