//! Command-line front end

use std::{
    fs,
    future::Future,
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

use clap::Parser;
use thiserror::Error;
use tracing::{debug, error};

use crate::{
    domain::communication::{
        attachment::{Attachment, AttachmentError, JSON_CONTENT_TYPE},
        errors::{ComposeError, NotifyError},
        mailer::{Mailer, SendResponse},
        message::UpdateNotification,
        notifier::UpdateNotifier,
    },
    infrastructure::logging::{self, InvalidLogLevel, LogLevel},
};

/// What to send, to whom, and how loudly to log about it
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
pub struct NotificationArgs {
    /// The email address from which the updated JSON file should be sent
    #[arg(short, long, env = "EMAIL_UPDATE_FROM")]
    pub from: String,

    /// The email address(es), comma separated, where the updated JSON file should be sent
    #[arg(short, long, env = "EMAIL_UPDATE_TO")]
    pub to: String,

    /// Email address(es), comma separated, to copy on the message
    #[arg(short, long)]
    pub cc: Option<String>,

    /// The email address to use as the reply-to address
    #[arg(short, long)]
    pub reply: Option<String>,

    /// The subject of the email
    #[arg(short, long, default_value = "code.gov JSON updated")]
    pub subject: String,

    /// The JSON file to attach
    #[arg(long, default_value = "code.json")]
    pub json: PathBuf,

    /// File holding the plain text body
    #[arg(long)]
    pub text: PathBuf,

    /// File holding the HTML body
    #[arg(long)]
    pub html: PathBuf,

    /// One of debug, info, warn, or error
    #[arg(short, long, env = "EMAIL_UPDATE_LOG_LEVEL", default_value = "warning")]
    pub log_level: String,
}

/// Errors that stop a run
#[derive(Debug, Error)]
pub enum RunError {
    /// `--log-level` was not a recognised level
    #[error(transparent)]
    InvalidLogLevel(#[from] InvalidLogLevel),

    /// A body file could not be read
    #[error("could not read {path}")]
    Read {
        /// The file that was being read
        path: String,

        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The attachment could not be loaded
    #[error(transparent)]
    Attachment(#[from] AttachmentError),

    /// The addresses could not be parsed
    #[error(transparent)]
    Compose(#[from] ComposeError),

    /// The message was not sent
    #[error(transparent)]
    Notify(#[from] NotifyError),
}

impl NotificationArgs {
    /// Read the body and attachment files and parse the addresses
    pub fn load(&self) -> Result<UpdateNotification, RunError> {
        let plain_body = read_to_string(&self.text)?;
        let html_body = read_to_string(&self.html)?;
        let attachment = Attachment::from_path(&self.json, JSON_CONTENT_TYPE)?;

        Ok(UpdateNotification::new(
            &self.from,
            &self.to,
            self.cc.as_deref(),
            self.reply.as_deref(),
            &self.subject,
            &plain_body,
            &html_body,
            attachment,
        )?)
    }
}

fn read_to_string(path: &Path) -> Result<String, RunError> {
    fs::read_to_string(path).map_err(|source| RunError::Read {
        path: path.display().to_string(),
        source,
    })
}

/// Set up logging, build the notification and send it.
///
/// The log level is checked before anything else: an invalid level returns
/// without reading any file or calling `connect`.
pub async fn run<M, F, Fut>(args: &NotificationArgs, connect: F) -> Result<SendResponse, RunError>
where
    M: Mailer,
    F: FnOnce() -> Fut,
    Fut: Future<Output = M>,
{
    let level = match args.log_level.parse::<LogLevel>() {
        Ok(level) => level,
        Err(err) => {
            logging::init(LogLevel::DEFAULT);
            error!("{err}");

            return Err(err.into());
        }
    };

    logging::init(level);

    let notification = args.load()?;

    debug!(
        "loaded {} ({} bytes)",
        notification.attachment.filename,
        notification.attachment.content.len()
    );

    let mailer = connect().await;

    Ok(UpdateNotifier::new(Arc::new(mailer))
        .notify(&notification)
        .await?)
}
