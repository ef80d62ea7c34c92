use tokio::sync::oneshot;

/// Carries a value exactly once, when the process is asked to stop.
pub struct InterruptHandle {
    rx: Option<oneshot::Receiver<()>>
}

/// Fires the paired [`InterruptHandle`] by hand.
pub struct InterruptTrigger {
    tx: oneshot::Sender<()>
}

impl InterruptTrigger {
    pub fn fire(self) {
        let _ = self.tx.send(());
    }
}

impl InterruptHandle {

    /// Subscribes to Ctrl-C for the rest of the process lifetime.
    pub fn setup() -> InterruptHandle {
        let (trigger, handle) = InterruptHandle::manual();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => trigger.fire(),
                Err(e) => log::error!("Unable to listen for the interrupt signal. {:?}", e)
            }
        });
        handle
    }

    pub fn manual() -> (InterruptTrigger, InterruptHandle) {
        let (tx, rx) = oneshot::channel();
        (InterruptTrigger { tx }, InterruptHandle { rx: Some(rx) })
    }

    /// Resolves once the interrupt arrives and never again afterwards.
    /// A dropped trigger never fires.
    pub async fn recv(&mut self) {
        if let Some(rx) = self.rx.as_mut() {
            let fired = rx.await.is_ok();
            self.rx = None;
            if fired {
                return;
            }
        }
        std::future::pending::<()>().await
    }
}
