use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

/// One-shot gate that holds the card on its loading placeholder until the
/// host has finished starting up.
#[derive(Clone)]
pub struct Readiness {
    tx: Arc<watch::Sender<bool>>,
}

impl Readiness {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub fn is_ready(&self) -> bool {
        *self.tx.borrow()
    }

    pub fn mark_ready(&self) {
        let flipped = self.tx.send_if_modified(|ready| {
            let changed = !*ready;
            *ready = true;
            changed
        });
        if flipped {
            info!("host ready");
        }
    }

    pub async fn wait_ready(&self) {
        let mut rx = self.tx.subscribe();
        // The sender lives in `self`, so the channel cannot close while we wait.
        let _ = rx.wait_for(|ready| *ready).await;
    }
}

impl Default for Readiness {
    fn default() -> Self {
        Self::new()
    }
}
