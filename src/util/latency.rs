//! Artificial latency used to exercise loading indicators.
//!
//! Browser builds schedule a timer and resume later without blocking other
//! handlers; other builds resolve immediately.

/// Wait `ms` milliseconds before resuming.
pub async fn simulate(ms: u32) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ms;
    }
}
