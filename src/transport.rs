//! How a request actually reaches the server.

use async_trait::async_trait;
use reqwest::{header::USER_AGENT, Client as ReqwestClient};

use crate::{client::ClientConfig, error::Error, params::Params, result::Result};

/// Performs one form-encoded `POST` and returns the raw response body.
///
/// Implementations are shared across the tasks spawned by a
/// [`Client`](crate::Client), so they must be `Send + Sync + 'static`.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Sends `params` as a form body to `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the body cannot be read.
    async fn post_form(&self, url: &str, params: &Params) -> Result<Vec<u8>>;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: ReqwestClient,
    user_agent: String,
    error_for_status: bool,
}

impl HttpTransport {
    /// Builds a transport from the client configuration.
    ///
    /// Proxies are disabled since the server is always a local process.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClientFormation`] if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = ReqwestClient::builder()
            .no_proxy()
            .build()
            .map_err(Error::ClientFormation)?;
        Ok(Self {
            http,
            user_agent: config.user_agent.clone(),
            error_for_status: config.error_for_status,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_form(&self, url: &str, params: &Params) -> Result<Vec<u8>> {
        let response = self
            .http
            .post(url)
            .header(USER_AGENT, &self.user_agent)
            .form(params)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = response.status();
        log::debug!("response status: {}", status);
        if self.error_for_status && !status.is_success() {
            return Err(Error::UnexpectedStatus(status));
        }

        let body = response.bytes().await.map_err(Error::Body)?;
        log::debug!("read {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}
