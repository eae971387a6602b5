//! Error types for gh-sponsors

use thiserror::Error;

use crate::sponsors::User;

/// Failure to get any HTTP response at all
#[derive(Error, Debug)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors from asking GitHub for the sponsors of a user
#[derive(Error, Debug)]
pub enum ListSponsorsError {
    /// GitHub answered, but not with a 200
    #[error("list sponsors: non-200 OK status code: {status} body: {body:?}")]
    Status { status: String, body: String },

    #[error("list sponsors: {0}")]
    Transport(#[source] TransportError),

    /// The 200 body was not the JSON we expected
    #[error("list sponsors: {0}")]
    Decode(#[source] serde_json::Error),

    /// GitHub answered 200 but reported GraphQL errors
    #[error("list sponsors: {0}")]
    Graphql(String),

    #[error("list sponsors: could not resolve to a user with the login of '{0}'")]
    UserNotFound(User),
}

/// Top-level error of the sponsors commands
#[derive(Error, Debug)]
pub enum SponsorsError {
    /// Bad command line usage
    #[error("{0}")]
    Flag(String),

    #[error("sponsor list: {0}")]
    List(#[from] ListSponsorsError),

    /// Writing the output failed
    #[error(transparent)]
    Render(#[from] std::io::Error),

    #[error("{0}")]
    Config(String),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl SponsorsError {
    pub fn flag(message: impl Into<String>) -> Self {
        Self::Flag(message.into())
    }

    pub fn is_flag_error(&self) -> bool {
        matches!(self, Self::Flag(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = ListSponsorsError::Status {
            status: "500 Internal Server Error".to_string(),
            body: "oops".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "list sponsors: non-200 OK status code: 500 Internal Server Error body: \"oops\""
        );
    }

    #[test]
    fn test_list_error_is_wrapped_twice() {
        let err = SponsorsError::from(ListSponsorsError::Graphql("boom".to_string()));
        assert_eq!(err.to_string(), "sponsor list: list sponsors: boom");
    }

    #[test]
    fn test_render_error_is_not_wrapped() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = SponsorsError::from(io);
        assert_eq!(err.to_string(), "pipe closed");
    }

    #[test]
    fn test_flag_error() {
        let err = SponsorsError::flag("must specify a user");
        assert!(err.is_flag_error());
        assert_eq!(err.to_string(), "must specify a user");
    }
}
