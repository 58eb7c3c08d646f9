use log::{error, info};
use std::sync::Arc;
use tokio::signal;
use tokio::sync::Notify;

pub(crate) struct ShutdownSignal {
    notify: Arc<Notify>,
}

impl ShutdownSignal {
    fn new(notify: Arc<Notify>) -> Self {
        Self { notify }
    }

    /// Waits for `run_for_millis` if given, Ctrl+C otherwise, then signals the control loop.
    async fn listen_for_shutdown(&self, run_for_millis: Option<u64>) {
        match run_for_millis {
            Some(time_to_live_millis) => {
                tokio::time::sleep(std::time::Duration::from_millis(time_to_live_millis)).await;
                info!("Run time of {} ms elapsed. Sending stop signal...", time_to_live_millis);
            }
            None => {
                if let Err(e) = signal::ctrl_c().await {
                    error!("Error while waiting for Ctrl+C: {}", e);
                    return;
                }
                info!("Ctrl+C received. Sending stop signal...");
            }
        }
        // Permit is stored if the loop is busy, so the stop can't be missed.
        self.notify.notify_one();
    }
}

/// Spawns a task that notifies `notify` on Ctrl+C or after `run_for_millis`.
pub fn listen_for_shutdown(
    notify: Arc<Notify>,
    run_for_millis: Option<u64>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let shutdown_signal = ShutdownSignal::new(notify);
        shutdown_signal.listen_for_shutdown(run_for_millis).await;
    })
}
