//! Logging setup.
//!
//! The library itself only emits through the `log` facade. Hosts that want the
//! crate's diagnostics on stderr call [`init_logging`] once at startup.

mod init;

pub use init::{init_logging, LoggingConfig};
