use std::fmt::Display;
use std::future::Future;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Run `operation` in the background without joining it into the caller.
///
/// The outcome never reaches the caller; failures are logged and dropped.
/// The returned handle may be ignored.
pub fn detach<F, T, E>(operation: &'static str, fut: F) -> JoinHandle<()>
where
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Display + Send + 'static,
{
    tokio::spawn(async move {
        match fut.await {
            Ok(_) => debug!("Detached {} completed", operation),
            Err(e) => warn!("Detached {} failed: {}", operation, e),
        }
    })
}
