//! Logging setup.
//!
//! Everything in the engine logs through the `log` facade; this module only
//! installs the `env_logger` backend for binaries that want one.

mod init;

pub use init::{init_logging, LoggingConfig};
