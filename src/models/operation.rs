//! The fixed set of remote operations exposed under `/api/`.
//!
//! Every operation is a single form-encoded `POST` to a path of the same
//! name. [`OperationKind`] names the operation and its parameter schema,
//! [`Operation`] carries the values for one call.

use std::{fmt, str::FromStr};

use crate::{error::Error, models::macros::str_opt_ref, models::params::Params};

/// Names a remote operation without any parameter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Lists the boards the node is subscribed to.
    GetBoards,
    /// Creates a board.
    NewBoard,
    /// Removes a board.
    RemoveBoard,
    /// Fetches the page of a board.
    GetBoardPage,
    /// Lists the threads of a board.
    GetThreads,
    /// Creates a thread on a board.
    NewThread,
    /// Removes a thread from a board.
    RemoveThread,
    /// Fetches the page of a thread.
    GetThreadPage,
    /// Lists the posts of a thread.
    GetPosts,
    /// Creates a post in a thread.
    NewPost,
    /// Removes a post from a thread.
    RemovePost,
    /// Copies a thread from one board to another.
    ImportThread,
}

impl OperationKind {
    /// Every operation, in the order the API documents them.
    pub const ALL: [OperationKind; 12] = [
        OperationKind::GetBoards,
        OperationKind::NewBoard,
        OperationKind::RemoveBoard,
        OperationKind::GetBoardPage,
        OperationKind::GetThreads,
        OperationKind::NewThread,
        OperationKind::RemoveThread,
        OperationKind::GetThreadPage,
        OperationKind::GetPosts,
        OperationKind::NewPost,
        OperationKind::RemovePost,
        OperationKind::ImportThread,
    ];

    /// Server path of the operation, relative to the API prefix.
    pub fn path(self) -> &'static str {
        match self {
            OperationKind::GetBoards => "get_boards",
            OperationKind::NewBoard => "new_board",
            OperationKind::RemoveBoard => "remove_board",
            OperationKind::GetBoardPage => "get_boardpage",
            OperationKind::GetThreads => "get_threads",
            OperationKind::NewThread => "new_thread",
            OperationKind::RemoveThread => "remove_thread",
            OperationKind::GetThreadPage => "get_threadpage",
            OperationKind::GetPosts => "get_posts",
            OperationKind::NewPost => "new_post",
            OperationKind::RemovePost => "remove_post",
            OperationKind::ImportThread => "import_thread",
        }
    }

    /// Form field names the operation sends, in order.
    pub fn param_names(self) -> &'static [&'static str] {
        match self {
            OperationKind::GetBoards => &[],
            OperationKind::NewBoard => &["name", "description", "submission_addresses", "seed"],
            OperationKind::RemoveBoard
            | OperationKind::GetBoardPage
            | OperationKind::GetThreads => &["board"],
            OperationKind::NewThread => &["board", "name", "description"],
            OperationKind::RemoveThread
            | OperationKind::GetThreadPage
            | OperationKind::GetPosts => &["board", "thread"],
            OperationKind::NewPost => &["board", "thread", "title", "body"],
            OperationKind::RemovePost => &["board", "thread", "post"],
            OperationKind::ImportThread => &["from_board", "thread", "to_board"],
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for OperationKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.path() == s)
            .ok_or_else(|| Error::UnknownOperation(s.to_string()))
    }
}

/// One remote operation together with the values of its parameters.
///
/// A `None` field is a parameter that was not supplied; it is omitted from
/// the request body. Field names match the form fields sent to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Lists the boards the node is subscribed to.
    GetBoards,
    /// Creates a board.
    NewBoard {
        /// Board name.
        name: Option<String>,
        /// Board description.
        description: Option<String>,
        /// Addresses allowed to submit to the board.
        submission_addresses: Option<String>,
        /// Seed the board's keys are derived from.
        seed: Option<String>,
    },
    /// Removes a board.
    RemoveBoard {
        /// Public key of the board.
        board: Option<String>,
    },
    /// Fetches the page of a board.
    GetBoardPage {
        /// Public key of the board.
        board: Option<String>,
    },
    /// Lists the threads of a board.
    GetThreads {
        /// Public key of the board.
        board: Option<String>,
    },
    /// Creates a thread on a board.
    NewThread {
        /// Public key of the board.
        board: Option<String>,
        /// Thread name.
        name: Option<String>,
        /// Thread description.
        description: Option<String>,
    },
    /// Removes a thread from a board.
    RemoveThread {
        /// Public key of the board.
        board: Option<String>,
        /// Thread reference.
        thread: Option<String>,
    },
    /// Fetches the page of a thread.
    GetThreadPage {
        /// Public key of the board.
        board: Option<String>,
        /// Thread reference.
        thread: Option<String>,
    },
    /// Lists the posts of a thread.
    GetPosts {
        /// Public key of the board.
        board: Option<String>,
        /// Thread reference.
        thread: Option<String>,
    },
    /// Creates a post in a thread.
    NewPost {
        /// Public key of the board.
        board: Option<String>,
        /// Thread reference.
        thread: Option<String>,
        /// Post title.
        title: Option<String>,
        /// Post body.
        body: Option<String>,
    },
    /// Removes a post from a thread.
    RemovePost {
        /// Public key of the board.
        board: Option<String>,
        /// Thread reference.
        thread: Option<String>,
        /// Post reference.
        post: Option<String>,
    },
    /// Copies a thread from one board to another.
    ImportThread {
        /// Public key of the board the thread comes from.
        from_board: Option<String>,
        /// Thread reference.
        thread: Option<String>,
        /// Public key of the board receiving the thread.
        to_board: Option<String>,
    },
}

impl Operation {
    /// Returns the kind of this operation.
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::GetBoards => OperationKind::GetBoards,
            Operation::NewBoard { .. } => OperationKind::NewBoard,
            Operation::RemoveBoard { .. } => OperationKind::RemoveBoard,
            Operation::GetBoardPage { .. } => OperationKind::GetBoardPage,
            Operation::GetThreads { .. } => OperationKind::GetThreads,
            Operation::NewThread { .. } => OperationKind::NewThread,
            Operation::RemoveThread { .. } => OperationKind::RemoveThread,
            Operation::GetThreadPage { .. } => OperationKind::GetThreadPage,
            Operation::GetPosts { .. } => OperationKind::GetPosts,
            Operation::NewPost { .. } => OperationKind::NewPost,
            Operation::RemovePost { .. } => OperationKind::RemovePost,
            Operation::ImportThread { .. } => OperationKind::ImportThread,
        }
    }

    /// Server path of the operation, relative to the API prefix.
    pub fn path(&self) -> &'static str {
        self.kind().path()
    }

    // Must line up with `OperationKind::param_names`.
    fn values(&self) -> Vec<Option<&str>> {
        match self {
            Operation::GetBoards => vec![],
            Operation::NewBoard {
                name,
                description,
                submission_addresses,
                seed,
            } => vec![
                str_opt_ref!(name),
                str_opt_ref!(description),
                str_opt_ref!(submission_addresses),
                str_opt_ref!(seed),
            ],
            Operation::RemoveBoard { board }
            | Operation::GetBoardPage { board }
            | Operation::GetThreads { board } => vec![str_opt_ref!(board)],
            Operation::NewThread {
                board,
                name,
                description,
            } => vec![
                str_opt_ref!(board),
                str_opt_ref!(name),
                str_opt_ref!(description),
            ],
            Operation::RemoveThread { board, thread }
            | Operation::GetThreadPage { board, thread }
            | Operation::GetPosts { board, thread } => {
                vec![str_opt_ref!(board), str_opt_ref!(thread)]
            }
            Operation::NewPost {
                board,
                thread,
                title,
                body,
            } => vec![
                str_opt_ref!(board),
                str_opt_ref!(thread),
                str_opt_ref!(title),
                str_opt_ref!(body),
            ],
            Operation::RemovePost {
                board,
                thread,
                post,
            } => vec![
                str_opt_ref!(board),
                str_opt_ref!(thread),
                str_opt_ref!(post),
            ],
            Operation::ImportThread {
                from_board,
                thread,
                to_board,
            } => vec![
                str_opt_ref!(from_board),
                str_opt_ref!(thread),
                str_opt_ref!(to_board),
            ],
        }
    }

    /// Returns the parameter set in declaration order.
    pub fn params(&self) -> Params {
        let names = self.kind().param_names().iter().copied();
        let values = self.values().into_iter().map(|v| v.map(ToString::to_string));
        Params::from_pairs(names.zip(values))
    }

    /// Names of the declared parameters that were not supplied.
    ///
    /// Absent parameters are silently omitted from the request; callers that
    /// require every parameter can check this before dispatching.
    pub fn missing_params(&self) -> Vec<&'static str> {
        self.params().missing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn test_paths_round_trip_through_from_str() {
        for kind in OperationKind::ALL {
            assert_eq!(kind.path().parse::<OperationKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.path());
        }
    }

    #[test]
    fn test_unknown_operation() {
        let err = "drop_everything".parse::<OperationKind>().unwrap_err();
        assert!(matches!(err, Error::UnknownOperation(ref name) if name == "drop_everything"));
    }

    #[test]
    fn test_param_schema() {
        assert!(OperationKind::GetBoards.param_names().is_empty());
        assert_eq!(
            OperationKind::NewBoard.param_names(),
            &["name", "description", "submission_addresses", "seed"]
        );
        assert_eq!(
            OperationKind::ImportThread.param_names(),
            &["from_board", "thread", "to_board"]
        );
    }

    #[test]
    fn test_params_follow_schema() {
        let op = Operation::NewPost {
            board: s("b"),
            thread: s("t"),
            title: s("hi"),
            body: s("there"),
        };
        let params = op.params();
        assert_eq!(op.path(), "new_post");
        assert_eq!(params.len(), 4);
        let present: Vec<_> = params.present().collect();
        assert_eq!(
            present,
            vec![("board", "b"), ("thread", "t"), ("title", "hi"), ("body", "there")]
        );
        assert!(op.missing_params().is_empty());
    }

    #[test]
    fn test_missing_params() {
        let op = Operation::ImportThread {
            from_board: s("a"),
            thread: None,
            to_board: None,
        };
        assert_eq!(op.missing_params(), vec!["thread", "to_board"]);
        assert_eq!(op.params().present().count(), 1);
    }

    #[test]
    fn test_get_boards_has_no_params() {
        let op = Operation::GetBoards;
        assert_eq!(op.kind(), OperationKind::GetBoards);
        assert!(op.params().is_empty());
    }
}
