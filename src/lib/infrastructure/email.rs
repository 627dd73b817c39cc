//! Email transports

pub mod ses;
