//! Email service module

use std::fmt;

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

mod errors;

pub use errors::MailerError;

/// HTTP status the email service returns for an accepted message
pub const SUCCESS_STATUS: u16 = 200;

/// The email service's answer to a send request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SendResponse {
    /// HTTP status code of the response
    pub status_code: u16,

    /// Identifier the service assigned to the message, if it accepted it
    pub message_id: Option<String>,

    /// Full description of the response, for logging
    pub detail: String,
}

impl SendResponse {
    /// A response for a message the service accepted
    pub fn accepted(message_id: &str) -> Self {
        Self {
            status_code: SUCCESS_STATUS,
            message_id: Some(message_id.to_string()),
            detail: format!("MessageId: {message_id}"),
        }
    }

    /// Whether the service accepted the message
    pub fn is_success(&self) -> bool {
        self.status_code == SUCCESS_STATUS
    }
}

impl fmt::Display for SendResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}: {}", self.status_code, self.detail)
    }
}

/// Email service
#[async_trait]
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Send an already serialised RFC 5322 message
    ///
    /// # Arguments
    /// * `raw` - The complete message, headers and MIME body.
    ///
    /// # Returns
    /// - [`Ok`] with the service's [`SendResponse`] whenever the service
    ///   answered, whatever the status code.
    /// - [`Err`] with a [`MailerError`] if no answer was received.
    async fn send_raw_email(&self, raw: &[u8]) -> Result<SendResponse, MailerError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    impl Clone for Mailer {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl Mailer for Mailer {
        async fn send_raw_email(&self, raw: &[u8]) -> Result<SendResponse, MailerError>;
    }
}
