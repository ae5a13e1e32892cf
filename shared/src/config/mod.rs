//! Configuration shared by every crate in the workspace
//!
//! Provider-specific settings (hosts, credentials) live next to the
//! provider client; this module only covers the runtime environment
//! and logging.

pub mod environment;

pub use environment::{Environment, LogFormat, LoggingConfig};
