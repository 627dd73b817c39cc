#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Emails an updated code.gov JSON file through Amazon SES

use std::process::ExitCode;

use clap::Parser;
use email_update::{
    domain::communication::NotifyError,
    infrastructure::{
        cli::{run, NotificationArgs, RunError},
        email::ses::{SesConfig, SesMailer},
    },
};
use tracing::error;

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// The message and logging options
    #[clap(flatten)]
    pub notification: NotificationArgs,

    /// The SES client configuration
    #[clap(flatten)]
    pub ses: SesConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Failed to load environment: {}", e);

            return ExitCode::FAILURE;
        }
    }

    let args = Args::parse();

    match run(&args.notification, || SesMailer::new(&args.ses)).await {
        Ok(_) => ExitCode::SUCCESS,
        // run has already logged these
        Err(RunError::InvalidLogLevel(_) | RunError::Notify(NotifyError::UnableToSend(_))) => {
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{:#}", anyhow::Error::from(e));

            ExitCode::FAILURE
        }
    }
}
