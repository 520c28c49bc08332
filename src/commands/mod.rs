//! Service Wrappers
//!
//! Frontend bindings to the trip backend, organized by domain.
//! The backend is mocked: calls resolve after a simulated latency.

mod trip;

use gloo_timers::future::TimeoutFuture;

/// Simulated network round trip
async fn latency(ms: u32) {
    if ms > 0 {
        TimeoutFuture::new(ms).await;
    }
}

// Re-export all public items
pub use trip::*;
