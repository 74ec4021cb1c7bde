//! Error handling and reporting for this backend

use stackwm_core::SyncError;
use thiserror::Error;
use x11rb::rust_connection::{ConnectError, ConnectionError, ReplyError};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to connect to the X server: {0}")]
    ConnectError(#[from] ConnectError),

    #[error("Connection error occured: {0}")]
    ConnectionError(#[from] ConnectionError),

    #[error("Unable to parse reply: {0}")]
    ReplyError(#[from] ReplyError),

    #[error(transparent)]
    FromUtf8(#[from] std::string::FromUtf8Error),
}

impl From<Error> for SyncError {
    fn from(err: Error) -> Self {
        match err {
            // A window destroyed mid-restack shows up as a protocol error.
            Error::ReplyError(ReplyError::X11Error(x11)) => Self::WindowGone(format!("{x11:?}")),
            Error::ConnectError(_) | Error::ConnectionError(_) => Self::Connection(err.to_string()),
            other => Self::Other(Box::new(other)),
        }
    }
}
