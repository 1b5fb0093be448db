//! File-based structured logging.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → Mutex<RotatingFile> → phrasekeeper.log
//! ```
//!
//! # Features
//!
//! - **File Output**: Logs go to `<data_dir>/phrasekeeper.log` unless
//!   `trace_file` is configured, keeping stdout free for the shell
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//!
//! # Configuration
//!
//! Level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::{RotatingFile, MAX_BACKUP_FILES, MAX_FILE_SIZE_BYTES};
pub use init::init_tracing;
