//! Update notification emails.

pub mod attachment;
pub mod errors;
pub mod mailer;
pub mod message;
pub mod notifier;

pub use attachment::{Attachment, AttachmentError};
pub use errors::{ComposeError, NotifyError};
pub use mailer::{Mailer, MailerError, SendResponse};
pub use message::UpdateNotification;
pub use notifier::UpdateNotifier;
