use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can be returned by a request or by client set-up.
#[derive(Debug, Error)]
pub enum Error {
    /// The cancellation context fired before the exchange completed.
    ///
    /// Deadlines and explicit cancels both land here.
    #[error("timeout")]
    Timeout,

    /// The request could not be sent (connection refused, DNS, socket write).
    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    /// A response arrived but its body could not be read to the end.
    #[error("could not read response body: {0}")]
    Body(#[source] reqwest::Error),

    /// The server answered with a non-success status and the client was
    /// configured to treat that as an error.
    #[error("unexpected status: {0}")]
    UnexpectedStatus(StatusCode),

    /// The task performing the request panicked or was aborted.
    #[error("{0}")]
    Task(#[from] tokio::task::JoinError),

    /// The underlying HTTP client could not be built.
    #[error("could not start up the client: {0}")]
    ClientFormation(#[source] reqwest::Error),

    /// A string did not name any known operation.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),
}

impl Error {
    /// Returns `true` if the call was cut short by its cancellation context.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout)
    }
}
