//! Logger setup for binaries and tests.
//!
//! Library code only talks to the `log` facade; this module wires `env_logger`
//! behind it.

mod init;

pub use init::{init_logging, LoggingConfig};
