use tokio::sync::watch;

/// One-shot stop flag shared between the signal handler and the scheduler.
#[derive(Clone)]
pub struct StopSignal {
    stop_tx: watch::Sender<bool>,
}

impl StopSignal {
    pub fn new() -> Self {
        let (stop_tx, _) = watch::channel(false);
        Self { stop_tx }
    }

    /// Request a stop. Idempotent.
    pub fn stop(&self) {
        if !self.is_stopped() {
            log::info!("Stop requested, no further ticks will be scheduled");
        }
        self.stop_tx.send_replace(true);
    }

    pub fn is_stopped(&self) -> bool {
        *self.stop_tx.borrow()
    }

    pub fn subscribe(&self) -> StopListener {
        StopListener {
            stop_rx: self.stop_tx.subscribe(),
        }
    }
}

impl Default for StopSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving side of a [`StopSignal`].
pub struct StopListener {
    stop_rx: watch::Receiver<bool>,
}

impl StopListener {
    /// Resolve once stop was requested (or every `StopSignal` was dropped).
    pub async fn wait(&mut self) {
        let _ = self.stop_rx.wait_for(|stopped| *stopped).await;
    }

    pub fn is_stopped(&self) -> bool {
        *self.stop_rx.borrow()
    }
}
