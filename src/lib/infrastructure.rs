//! Adapters for the outside world: command line, logging and SES

pub mod cli;
pub mod email;
pub mod logging;
