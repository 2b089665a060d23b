// src/log.rs
//
// Logging goes through `tracing`; the short macros below are what the rest of
// the crate calls. `init` installs the subscriber once per process.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::BoxError;

/// Where log lines end up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogTarget {
    /// Terminal front-end; keep quiet unless RUST_LOG says otherwise.
    Stderr,
    /// GUI front-end; append to the debug log under the store dir.
    File,
}

impl LogTarget {
    fn default_level(self) -> &'static str {
        match self {
            LogTarget::Stderr => "warn",
            LogTarget::File => "info",
        }
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the target's default level.
/// Calling it twice is an error from tracing; callers init once in `main`.
pub fn init(target: LogTarget) -> Result<(), BoxError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(target.default_level()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init()?,
        LogTarget::File => {
            let path = Path::new(crate::config::consts::LOG_FILE);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()?
        }
    }
    Ok(())
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
