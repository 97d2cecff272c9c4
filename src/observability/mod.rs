//! Structured logging to a rotating file.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → repopin.log
//! ```
//!
//! # Features
//!
//! - **File-Based Output**: `~/.local/share/zellij/repopin/repopin.log`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//!
//! # Configuration
//!
//! The `trace_level` plugin option is an `EnvFilter` directive, `"info"` by
//! default (for example `"repopin=debug"`).
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
