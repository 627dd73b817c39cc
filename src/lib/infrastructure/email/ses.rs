//! Amazon SES email service implementation

use anyhow::Context;
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_ses::{error::DisplayErrorContext, primitives::Blob, types::RawMessage, Client};
use clap::Parser;
use tracing::{debug, warn};

use crate::domain::communication::mailer::{Mailer, MailerError, SendResponse};

/// SES configuration
///
/// Credentials always come from the standard AWS provider chain.
#[derive(Clone, Default, Debug, Parser)]
pub struct SesConfig {
    /// The AWS region to send from, overriding the provider chain
    #[clap(long)]
    pub region: Option<String>,

    /// Send to this endpoint instead of the regional SES endpoint
    #[clap(long)]
    pub endpoint_url: Option<String>,
}

/// SES mailer
#[derive(Debug, Clone)]
pub struct SesMailer {
    client: Client,
}

impl SesMailer {
    /// Create a new SES mailer from the AWS provider chain
    #[mutants::skip]
    pub async fn new(config: &SesConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }

        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        let sdk_config = loader.load().await;

        debug!(
            "SES client configured for region {}",
            sdk_config
                .region()
                .map(|region| region.as_ref())
                .unwrap_or("<unset>")
        );

        Self::from_client(Client::new(&sdk_config))
    }

    /// Wrap an already configured SES client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Mailer for SesMailer {
    async fn send_raw_email(&self, raw: &[u8]) -> Result<SendResponse, MailerError> {
        let message = RawMessage::builder()
            .data(Blob::new(raw))
            .build()
            .context("could not build SES raw message")?;

        match self.client.send_raw_email().raw_message(message).send().await {
            Ok(output) => Ok(SendResponse::accepted(output.message_id())),
            Err(err) => {
                let detail = DisplayErrorContext(&err).to_string();

                match err.raw_response().map(|response| response.status().as_u16()) {
                    Some(status_code) => {
                        warn!("SES answered {status_code}");

                        Ok(SendResponse {
                            status_code,
                            message_id: None,
                            detail,
                        })
                    }
                    None => Err(MailerError::Transport(anyhow::anyhow!(detail))),
                }
            }
        }
    }
}
