//! Shutdown coordination for the launcher.

use tokio::sync::broadcast;

/// Coordinator for graceful shutdown.
///
/// The serve loop subscribes before launch; the signal listener (or a test)
/// triggers. The channel carries no payload: receiving at all means "drain and
/// exit".
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    ///
    /// Subscribe before spawning any producer; a trigger with no subscribers
    /// is dropped.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
