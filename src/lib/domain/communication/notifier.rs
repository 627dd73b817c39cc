//! Update notification service

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::domain::communication::{
    errors::NotifyError,
    mailer::{Mailer, SendResponse},
    message::UpdateNotification,
};

/// Composes update notifications and hands them to a [`Mailer`]
#[derive(Debug, Clone)]
pub struct UpdateNotifier<M>
where
    M: Mailer,
{
    mailer: Arc<M>,
}

impl<M> UpdateNotifier<M>
where
    M: Mailer,
{
    /// Creates a new notifier.
    pub fn new(mailer: Arc<M>) -> Self {
        Self { mailer }
    }

    /// Sends the notification.
    ///
    /// # Returns
    /// - [`Ok`] with the [`SendResponse`] if the service accepted the message.
    /// - [`Err`] containing [`NotifyError::UnableToSend`] if the service
    ///   answered with any status other than 200.
    pub async fn notify(
        &self,
        notification: &UpdateNotification,
    ) -> Result<SendResponse, NotifyError> {
        let raw = notification.formatted()?;

        debug!(
            "sending {} byte message with attachment {} to {}",
            raw.len(),
            notification.attachment.filename,
            notification.to
        );

        let response = self.mailer.send_raw_email(&raw).await?;

        if !response.is_success() {
            error!("Unable to send message.  Response from SES is: {response}");

            return Err(NotifyError::UnableToSend(response));
        }

        info!(
            "sent {} to {} (message id {})",
            notification.attachment.filename,
            notification.to,
            response.message_id.as_deref().unwrap_or("unknown")
        );

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::communication::{
        attachment::{Attachment, JSON_CONTENT_TYPE},
        mailer::{tests::MockMailer, MailerError},
    };

    use super::*;

    fn notification() -> Result<UpdateNotification, Box<dyn std::error::Error>> {
        Ok(UpdateNotification::new(
            "a@x.com",
            "b@x.com",
            None,
            Some("reply@x.com"),
            "Hi",
            "hi",
            "<b>hi</b>",
            Attachment::new("code.json", b"{}".to_vec(), JSON_CONTENT_TYPE),
        )?)
    }

    #[tokio::test]
    async fn test_notify_success() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer
            .expect_send_raw_email()
            .times(1)
            .withf(|raw| {
                let text = String::from_utf8_lossy(raw);
                text.contains("To: b@x.com") && text.contains("filename=\"code.json\"")
            })
            .returning(|_| Ok(SendResponse::accepted("0100018f-abc")));

        let notifier = UpdateNotifier::new(Arc::new(mailer));

        let response = notifier.notify(&notification()?).await?;

        assert_eq!(response.message_id.as_deref(), Some("0100018f-abc"));

        Ok(())
    }

    #[tokio::test]
    async fn test_notify_non_success_status_is_failure() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer.expect_send_raw_email().times(1).returning(|_| {
            Ok(SendResponse {
                status_code: 400,
                message_id: None,
                detail: "MessageRejected: Email address is not verified.".to_string(),
            })
        });

        let notifier = UpdateNotifier::new(Arc::new(mailer));

        let result = notifier.notify(&notification()?).await;

        match result {
            Err(NotifyError::UnableToSend(response)) => {
                assert_eq!(response.status_code, 400);
                assert!(response.detail.contains("not verified"));
            }
            other => panic!("expected UnableToSend, got {other:?}"),
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_notify_transport_failure() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer
            .expect_send_raw_email()
            .times(1)
            .returning(|_| Err(MailerError::Transport(anyhow::anyhow!("connection refused"))));

        let notifier = UpdateNotifier::new(Arc::new(mailer));

        let result = notifier.notify(&notification()?).await;

        assert!(matches!(result, Err(NotifyError::Mailer(_))));

        Ok(())
    }

    #[tokio::test]
    async fn test_notify_does_not_send_uncomposable_message() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer.expect_send_raw_email().times(0);

        let notification = UpdateNotification {
            attachment: Attachment::new("code.json", Vec::new(), "nonsense"),
            ..notification()?
        };

        let notifier = UpdateNotifier::new(Arc::new(mailer));

        let result = notifier.notify(&notification).await;

        assert!(matches!(result, Err(NotifyError::Compose(_))));

        Ok(())
    }
}
