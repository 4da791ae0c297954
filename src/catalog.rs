//! One constructor per remote operation.
//!
//! Each constructor only records its arguments and returns a [`ClientFn`];
//! nothing is sent until the function is called. Arguments are not
//! validated here, that is left to the server. A `None` argument is left out
//! of the request.
//!
//! # Example: creating a post
//! ```no_run
//! # async fn post() -> bbsclient::Result<()> {
//! use std::time::Duration;
//! use bbsclient::{catalog, Context};
//!
//! let ctx = Context::background().with_timeout(Duration::from_secs(5));
//! let body = catalog::new_post(Some("board-key"), Some("thread-ref"), Some("hi"), Some("hello"))
//!     .call(&ctx, 7777)
//!     .await?;
//! println!("{}", String::from_utf8_lossy(&body));
//! # Ok(())
//! # }
//! ```

use std::sync::OnceLock;

use crate::{client::Client, context::Context, operation::Operation, result::Result};

static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

fn shared_client() -> Result<&'static Client> {
    if let Some(client) = SHARED_CLIENT.get() {
        return Ok(client);
    }
    let client = Client::new()?;
    Ok(SHARED_CLIENT.get_or_init(|| client))
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(ToString::to_string)
}

/// A request bound to one operation and its arguments.
///
/// Calls are independent of each other and may run concurrently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientFn {
    operation: Operation,
}

impl ClientFn {
    /// The operation this function performs.
    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    /// Performs the request with a process-wide client using the default
    /// [`ClientConfig`](crate::client::ClientConfig).
    ///
    /// # Errors
    ///
    /// See [`Client::execute`]. Also returns
    /// [`Error::ClientFormation`](crate::error::Error::ClientFormation) if
    /// the shared client cannot be built.
    pub async fn call(&self, ctx: &Context, port: u16) -> Result<Vec<u8>> {
        self.call_with(shared_client()?, ctx, port).await
    }

    /// Performs the request with `client`.
    ///
    /// # Errors
    ///
    /// See [`Client::execute`].
    pub async fn call_with(&self, client: &Client, ctx: &Context, port: u16) -> Result<Vec<u8>> {
        client.execute(ctx, port, &self.operation).await
    }
}

impl From<Operation> for ClientFn {
    fn from(operation: Operation) -> Self {
        Self { operation }
    }
}

/// Obtains the boards the node is subscribed to.
pub fn get_boards() -> ClientFn {
    Operation::GetBoards.into()
}

/// Creates a new board.
pub fn new_board(
    name: Option<&str>,
    description: Option<&str>,
    submission_addresses: Option<&str>,
    seed: Option<&str>,
) -> ClientFn {
    Operation::NewBoard {
        name: owned(name),
        description: owned(description),
        submission_addresses: owned(submission_addresses),
        seed: owned(seed),
    }
    .into()
}

/// Removes a board.
pub fn remove_board(board: Option<&str>) -> ClientFn {
    Operation::RemoveBoard {
        board: owned(board),
    }
    .into()
}

/// Obtains the board page of the board with the given public key.
pub fn get_boardpage(board: Option<&str>) -> ClientFn {
    Operation::GetBoardPage {
        board: owned(board),
    }
    .into()
}

/// Obtains the threads of a board.
pub fn get_threads(board: Option<&str>) -> ClientFn {
    Operation::GetThreads {
        board: owned(board),
    }
    .into()
}

/// Creates a new thread on a board.
pub fn new_thread(board: Option<&str>, name: Option<&str>, description: Option<&str>) -> ClientFn {
    Operation::NewThread {
        board: owned(board),
        name: owned(name),
        description: owned(description),
    }
    .into()
}

/// Removes a thread from a board.
pub fn remove_thread(board: Option<&str>, thread: Option<&str>) -> ClientFn {
    Operation::RemoveThread {
        board: owned(board),
        thread: owned(thread),
    }
    .into()
}

/// Obtains the page of a thread.
pub fn get_threadpage(board: Option<&str>, thread: Option<&str>) -> ClientFn {
    Operation::GetThreadPage {
        board: owned(board),
        thread: owned(thread),
    }
    .into()
}

/// Obtains the posts of a thread.
pub fn get_posts(board: Option<&str>, thread: Option<&str>) -> ClientFn {
    Operation::GetPosts {
        board: owned(board),
        thread: owned(thread),
    }
    .into()
}

/// Creates a new post in a thread.
pub fn new_post(
    board: Option<&str>,
    thread: Option<&str>,
    title: Option<&str>,
    body: Option<&str>,
) -> ClientFn {
    Operation::NewPost {
        board: owned(board),
        thread: owned(thread),
        title: owned(title),
        body: owned(body),
    }
    .into()
}

/// Removes a post from a thread.
pub fn remove_post(board: Option<&str>, thread: Option<&str>, post: Option<&str>) -> ClientFn {
    Operation::RemovePost {
        board: owned(board),
        thread: owned(thread),
        post: owned(post),
    }
    .into()
}

/// Imports a thread from one board into another.
pub fn import_thread(
    from_board: Option<&str>,
    thread: Option<&str>,
    to_board: Option<&str>,
) -> ClientFn {
    Operation::ImportThread {
        from_board: owned(from_board),
        thread: owned(thread),
        to_board: owned(to_board),
    }
    .into()
}
