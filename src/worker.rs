use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::state::SharedState;

/// Periodically drop expired rate-limit windows until shutdown is signaled.
pub fn spawn_cleanup(state: SharedState, mut shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let window = state.submission_limiter.window();
        let period = window.max(Duration::from_secs(60));
        let mut ticker = tokio::time::interval(period);
        // First tick completes immediately
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    state.submission_limiter.cleanup(window);
                    tracing::debug!(
                        tracked = state.submission_limiter.tracked(),
                        "Rate limiter cleanup"
                    );
                }
                _ = shutdown.changed() => break,
            }

            if *shutdown.borrow() {
                break;
            }
        }

        tracing::debug!("Cleanup task stopped");
    })
}
