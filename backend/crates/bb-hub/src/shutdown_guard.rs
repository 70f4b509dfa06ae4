use crate::ShutdownCoordinator;

use tokio::sync::broadcast;

/// Waits for a [`ShutdownCoordinator`] to fire
pub struct ShutdownGuard {
    shutdown_rx: broadcast::Receiver<()>,
    already_triggered: bool,
}

impl ShutdownGuard {
    pub fn new(coordinator: &ShutdownCoordinator) -> Self {
        let shutdown_rx = coordinator.subscribe();
        Self {
            // Checked after subscribing so a concurrent trigger is never missed
            already_triggered: coordinator.is_shutdown(),
            shutdown_rx,
        }
    }

    /// Wait for shutdown signal. Also returns if the coordinator is gone.
    pub async fn wait(&mut self) {
        if self.already_triggered {
            return;
        }
        let _ = self.shutdown_rx.recv().await;
        self.already_triggered = true;
    }

    /// Poll for shutdown signal (non-blocking)
    pub fn poll_shutdown(&mut self) -> bool {
        if !self.already_triggered {
            self.already_triggered = !matches!(
                self.shutdown_rx.try_recv(),
                Err(broadcast::error::TryRecvError::Empty)
            );
        }
        self.already_triggered
    }
}
