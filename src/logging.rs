//! Tracing setup for the command-line tool.
//!
//! Library code only emits `tracing` events; nothing is printed unless the
//! binary installs a subscriber.

use tracing::Level;
use tracing_subscriber::fmt;

/// Install a stderr subscriber at debug level when `verbose` is set.
pub fn init(verbose: bool) {
    if !verbose {
        return;
    }
    let _ = fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_thread_names(true)
        .try_init();
}
