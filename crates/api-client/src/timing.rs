//! Timers that work both in the browser and natively.

use std::time::Duration;

/// Suspend the current task for `duration`.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Show something for `duration`, then hide it.
pub async fn flash<F: FnMut(bool)>(duration: Duration, mut set_visible: F) {
    set_visible(true);
    sleep(duration).await;
    set_visible(false);
}

/// Convenience for the millisecond values kept in configuration.
pub fn millis(ms: u64) -> Duration {
    Duration::from_millis(ms)
}
