//! One-shot delays that work in the browser and natively.
//!
//! Browser builds sleep on `setTimeout` via `gloo-timers`; native builds
//! (SSR and tests) sleep on the tokio timer, so paused-clock tests advance
//! instantly.

use std::time::Duration;

/// Resolve once after `duration`.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::sleep(duration).await;
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(duration).await;
    }
}
