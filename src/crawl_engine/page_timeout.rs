//! Timeout utilities for page fetches
//!
//! Static hosts sometimes hold a connection open without answering; without a
//! bound the indexing pass would never reach `Ready`.

use std::future::Future;
use std::time::Duration;

use crate::search::errors::IndexingError;

/// Wrap a fetch future with an explicit timeout
///
/// # Returns
/// * `Ok(T)` - Operation completed successfully
/// * `Err(IndexingError::Timeout)` - The timeout was reached first
/// * `Err(other)` - The operation itself failed
pub async fn with_fetch_timeout<F, T>(
    operation: F,
    timeout_secs: u64,
    url: &str,
) -> Result<T, IndexingError>
where
    F: Future<Output = Result<T, IndexingError>>,
{
    match tokio::time::timeout(Duration::from_secs(timeout_secs), operation).await {
        Ok(result) => result,
        Err(_) => Err(IndexingError::Timeout {
            url: url.to_string(),
            secs: timeout_secs,
        }),
    }
}
