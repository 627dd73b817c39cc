//! Error types for composing and sending update notifications

use lettre::{address::AddressError, message::header::ContentTypeErr};
use thiserror::Error;
use tracing::debug;

use crate::domain::communication::mailer::{MailerError, SendResponse};

/// Errors that can occur while building the MIME message
#[derive(Debug, Error)]
pub enum ComposeError {
    /// An address could not be parsed into a mailbox
    #[error("invalid email address")]
    InvalidAddress(#[from] AddressError),

    /// The attachment's MIME type is not a valid content type
    #[error("invalid attachment content type {0:?}")]
    InvalidContentType(String),

    /// The message builder rejected the message
    #[error("could not build the email message")]
    Build(#[from] lettre::error::Error),
}

impl From<ContentTypeErr> for ComposeError {
    fn from(err: ContentTypeErr) -> Self {
        debug!("ContentTypeErr -> ComposeError");

        ComposeError::InvalidContentType(err.to_string())
    }
}

/// Errors that can occur when sending an update notification
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The email service answered with a non-success status
    #[error("unable to send message, response from SES was: {0}")]
    UnableToSend(SendResponse),

    /// The message could not be composed
    #[error(transparent)]
    Compose(#[from] ComposeError),

    /// The email service could not be reached
    #[error(transparent)]
    Mailer(#[from] MailerError),
}
