//! Update notification message

use lettre::message::{
    header::{self, ContentDisposition, ContentType},
    Attachment as AttachmentPart, Mailbox, Mailboxes, MultiPart, SinglePart,
};
use lettre::Message;

use crate::domain::communication::{attachment::Attachment, errors::ComposeError};

/// An email announcing that a data file has been updated
#[derive(Clone, Debug)]
pub struct UpdateNotification {
    /// The sender of the email
    pub from: Mailbox,

    /// The recipients of the email
    pub to: Mailboxes,

    /// Carbon-copied recipients, if any
    pub cc: Option<Mailboxes>,

    /// Address replies should go to, if not the sender
    pub reply_to: Option<Mailbox>,

    /// The subject of the email
    pub subject: String,

    /// The plain text body of the email
    pub plain_body: String,

    /// The HTML body of the email
    pub html_body: String,

    /// The updated file
    pub attachment: Attachment,
}

impl UpdateNotification {
    /// Create a notification from raw address strings.
    ///
    /// `to` and `cc` may hold several comma-separated addresses.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        from: &str,
        to: &str,
        cc: Option<&str>,
        reply_to: Option<&str>,
        subject: &str,
        plain_body: &str,
        html_body: &str,
        attachment: Attachment,
    ) -> Result<Self, ComposeError> {
        Ok(Self {
            from: from.parse()?,
            to: to.parse()?,
            cc: cc.map(str::parse).transpose()?,
            reply_to: reply_to.map(str::parse).transpose()?,
            subject: subject.to_string(),
            plain_body: plain_body.to_string(),
            html_body: html_body.to_string(),
            attachment,
        })
    }

    /// Build the MIME message.
    ///
    /// The body is a `multipart/mixed` holding a `multipart/alternative`
    /// (plain text, then HTML marked inline) followed by the attachment.
    pub fn to_message(&self) -> Result<Message, ComposeError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .mailbox(header::To::from(self.to.clone()))
            .subject(self.subject.clone());

        if let Some(cc) = &self.cc {
            builder = builder.mailbox(header::Cc::from(cc.clone()));
        }

        if let Some(reply_to) = &self.reply_to {
            builder = builder.reply_to(reply_to.clone());
        }

        let body = MultiPart::alternative()
            .singlepart(
                SinglePart::builder()
                    .header(ContentType::TEXT_PLAIN)
                    .body(self.plain_body.clone()),
            )
            .singlepart(
                SinglePart::builder()
                    .header(ContentType::TEXT_HTML)
                    .header(ContentDisposition::inline())
                    .body(self.html_body.clone()),
            );

        let attachment = AttachmentPart::new(self.attachment.filename.clone()).body(
            self.attachment.content.clone(),
            ContentType::parse(&self.attachment.content_type)?,
        );

        Ok(builder.multipart(MultiPart::mixed().multipart(body).singlepart(attachment))?)
    }

    /// Build the MIME message and serialise it for sending
    pub fn formatted(&self) -> Result<Vec<u8>, ComposeError> {
        Ok(self.to_message()?.formatted())
    }
}
