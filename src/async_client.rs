//! Async wrapper around [`TrendRadar`] for use in async runtimes (Tokio, etc.).
//!
//! Runs every client call on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//! Independent calls can then be awaited concurrently.
//!
//! # Example
//!
//! ```no_run
//! use trend_radar::{AsyncTrendRadar, FilterState};
//!
//! #[tokio::main]
//! async fn main() {
//!     let radar = AsyncTrendRadar::builder().build().await.unwrap();
//!
//!     // Run any sync client method via closure
//!     let categories = radar.run(|r| r.trends().categories()).await.unwrap();
//!
//!     // Product and prediction fetched concurrently
//!     let (product, prediction) = radar.product_detail("p-1").await.unwrap();
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::error::{Result, TrendRadarError};
use crate::filter::FilterState;
use crate::models::{Product, TrendPrediction};
use crate::{TrendRadar, TrendRadarBuilder};

// ---------------------------------------------------------------------------
// AsyncTrendRadarBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncTrendRadar`] instance.
#[derive(Default)]
pub struct AsyncTrendRadarBuilder {
    inner: TrendRadarBuilder,
}

impl AsyncTrendRadarBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.inner = self.inner.base_url(url);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    /// Build the client on the blocking pool; the blocking HTTP client must
    /// not be constructed on an async worker thread.
    pub async fn build(self) -> Result<AsyncTrendRadar> {
        let inner = self.inner;
        tokio::task::spawn_blocking(move || {
            let radar = inner.build()?;
            Ok(AsyncTrendRadar {
                inner: Arc::new(radar),
            })
        })
        .await
        .map_err(join_error)?
    }
}

// ---------------------------------------------------------------------------
// AsyncTrendRadar
// ---------------------------------------------------------------------------

/// Async wrapper around [`TrendRadar`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The client is shared behind an [`Arc`];
/// it holds no mutable state.
#[derive(Clone)]
pub struct AsyncTrendRadar {
    inner: Arc<TrendRadar>,
}

impl AsyncTrendRadar {
    pub fn builder() -> AsyncTrendRadarBuilder {
        AsyncTrendRadarBuilder::default()
    }

    /// Run a sync client operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&TrendRadar) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let radar = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || f(&radar))
            .await
            .map_err(join_error)?
    }

    pub async fn products(&self, filters: &FilterState) -> Result<Vec<Product>> {
        let filters = filters.clone();
        self.run(move |r| r.trends().products(&filters)).await
    }

    /// Fetch a product and its prediction concurrently.
    ///
    /// Fails as a whole if either request fails.
    pub async fn product_detail(&self, product_id: &str) -> Result<(Product, TrendPrediction)> {
        let id = product_id.to_string();
        let product = self.run({
            let id = id.clone();
            move |r| r.trends().product(&id)
        });
        let prediction = self.run(move |r| r.trends().prediction(&id));
        tokio::try_join!(product, prediction)
    }

    /// Release the client on the blocking pool.
    pub async fn close(self) -> Result<()> {
        let inner = self.inner;
        tokio::task::spawn_blocking(move || drop(inner))
            .await
            .map_err(join_error)
    }
}

fn join_error(e: tokio::task::JoinError) -> TrendRadarError {
    TrendRadarError::InvalidArgument(format!("Task join error: {e}"))
}
