//! Tracing subscriber setup for binaries and tests.

use std::io;

use tracing::Level;

use crate::error::{Error, Result};

/// Install a formatting subscriber that writes to stderr at `level` and
/// above. Errors if a global subscriber is already installed.
pub fn init(level: Level) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::Internal(e.to_string()))
}

/// Map a `-v` count onto a level: none is warnings only, each flag adds one
/// level of detail up to trace.
pub fn level_for_verbosity(count: u8) -> Level {
    match count {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for_verbosity(0), Level::WARN);
        assert_eq!(level_for_verbosity(2), Level::DEBUG);
        assert_eq!(level_for_verbosity(9), Level::TRACE);
    }
}
