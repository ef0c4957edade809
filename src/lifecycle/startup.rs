//! Start notice emission.
//!
//! The notice goes to standard output rather than the tracing pipeline so
//! operators and platform log scrapers can confirm the bind parameters without
//! knowing anything about the process's log format. One line, flushed, emitted
//! before the server starts.

use std::io::{self, Write};

use crate::config::BindConfig;

/// Write the one-line start notice for the resolved configuration.
pub fn announce<W: Write>(config: &BindConfig, out: &mut W) -> io::Result<()> {
    writeln!(out, "Starting server on {}:{}", config.host, config.port)
}

/// Emit the start notice to standard output and flush it.
pub fn announce_stdout(config: &BindConfig) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    announce(config, &mut handle)?;
    handle.flush()
}
