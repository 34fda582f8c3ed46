//! Deadline for in-flight auth requests
//!
//! Server builds race the future against a tokio timer; browser builds use a
//! `gloo-timers` timeout instead.

use std::future::Future;
use std::time::Duration;

/// The deadline passed before the future completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no response within {}ms", .0.as_millis())]
pub struct Elapsed(pub Duration);

/// Resolve `future`, or fail with [`Elapsed`] once `duration` has passed
#[cfg(feature = "ssr")]
pub async fn with_timeout<F: Future>(duration: Duration, future: F) -> Result<F::Output, Elapsed> {
    tokio::time::timeout(duration, future)
        .await
        .map_err(|_| Elapsed(duration))
}

/// Resolve `future`, or fail with [`Elapsed`] once `duration` has passed
#[cfg(not(feature = "ssr"))]
pub async fn with_timeout<F: Future>(duration: Duration, future: F) -> Result<F::Output, Elapsed> {
    use futures::future::{Either, select};
    use gloo_timers::future::TimeoutFuture;

    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    let deadline = std::pin::pin!(TimeoutFuture::new(millis));
    let future = std::pin::pin!(future);

    match select(future, deadline).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => Err(Elapsed(duration)),
    }
}
