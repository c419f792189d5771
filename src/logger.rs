//! Progress logging capability handed to the sync run.

/// Receives one line per step of a sync run.
pub trait SyncLogger {
    fn info(&self, message: &str);
}

/// Forwards to the `log` facade; the binary decides formatting.
pub struct ConsoleLogger;

impl SyncLogger for ConsoleLogger {
    fn info(&self, message: &str) {
        log::info!("{}", message);
    }
}
