//! Async wrapper around [`MiningCalculator`] for use in async runtimes (Tokio, etc.).
//!
//! Grid recomputes run on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//!
//! Every [`matrix()`](AsyncMiningCalculator::matrix) call takes a new
//! generation number. When a newer call has started by the time a
//! computation finishes, the older result is discarded instead of being
//! returned or cached, so callers only ever see the grid for the latest
//! inputs.
//!
//! # Example
//!
//! ```no_run
//! use mining_econ::{AsyncMiningCalculator, MatrixRequest};
//!
//! # async fn example(request: MatrixRequest) -> mining_econ::Result<()> {
//! let calc = AsyncMiningCalculator::builder().build()?;
//!
//! if let Some(grid) = calc.matrix(request).await? {
//!     println!("{} cells", grid.cells().count());
//! }
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use log::debug;

use crate::config::EngineConfig;
use crate::error::{MiningError, Result};
use crate::matrix::{compute_matrix, MatrixRequest, ProfitabilityMatrix};
use crate::{MiningCalculator, MiningCalculatorBuilder};

// ---------------------------------------------------------------------------
// AsyncMiningCalculatorBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncMiningCalculator`].
#[derive(Default)]
pub struct AsyncMiningCalculatorBuilder {
    inner: MiningCalculatorBuilder,
}

impl AsyncMiningCalculatorBuilder {
    /// Replace all network constants at once.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.inner = self.inner.config(config);
        self
    }

    /// Compute matrix cells on the rayon thread pool.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.inner = self.inner.parallel(parallel);
        self
    }

    pub fn build(self) -> Result<AsyncMiningCalculator> {
        Ok(AsyncMiningCalculator::from(self.inner.build()?))
    }
}

// ---------------------------------------------------------------------------
// AsyncMiningCalculator
// ---------------------------------------------------------------------------

/// Async wrapper around [`MiningCalculator`].
///
/// The calculator (and its cache) sits behind a [`Mutex`] since it uses
/// `RefCell` internally. The lock is not held while a grid is being computed.
pub struct AsyncMiningCalculator {
    inner: Arc<Mutex<MiningCalculator>>,
    generation: Arc<AtomicU64>,
}

impl From<MiningCalculator> for AsyncMiningCalculator {
    fn from(calc: MiningCalculator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(calc)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }
}

fn poisoned<T>(_: T) -> MiningError {
    MiningError::Task("calculator lock poisoned".into())
}

impl AsyncMiningCalculator {
    /// Create a new builder for configuring the async calculator.
    pub fn builder() -> AsyncMiningCalculatorBuilder {
        AsyncMiningCalculatorBuilder::default()
    }

    /// Run a sync calculator operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&MiningCalculator) -> T + Send + 'static,
        T: Send + 'static,
    {
        let calc = self.inner.clone();
        tokio::task::spawn_blocking(move || -> Result<T> {
            let guard = calc.lock().map_err(poisoned)?;
            Ok(f(&guard))
        })
        .await
        .map_err(|e| MiningError::Task(format!("Task join error: {e}")))?
    }

    /// Compute the grid for `request`, superseding any call still in flight.
    ///
    /// The generation is taken when `matrix()` is called, not when the
    /// returned future is first polled, so call order decides which request
    /// is the latest. Resolves to `Ok(None)` when another `matrix()` call was
    /// made before this one finished; the superseded result is neither
    /// returned nor cached.
    pub fn matrix(
        &self,
        request: MatrixRequest,
    ) -> impl Future<Output = Result<Option<ProfitabilityMatrix>>> + Send + 'static {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let latest = self.generation.clone();
        let calc = self.inner.clone();

        async move {
            tokio::task::spawn_blocking(move || -> Result<Option<ProfitabilityMatrix>> {
                let (config, parallel) = {
                    let guard = calc.lock().map_err(poisoned)?;
                    if !guard.is_stale(&request) {
                        let grid = guard.matrix(&request);
                        return Ok(current(&latest, generation).then_some(grid));
                    }
                    (*guard.config(), guard.is_parallel())
                };

                let grid = compute_matrix(&config, &request, parallel);

                let guard = calc.lock().map_err(poisoned)?;
                if !current(&latest, generation) {
                    debug!("discarding superseded matrix computation #{}", generation);
                    return Ok(None);
                }
                guard.commit(&request, grid.clone());
                Ok(Some(grid))
            })
            .await
            .map_err(|e| MiningError::Task(format!("Task join error: {e}")))?
        }
    }

    /// Drop any cached grid.
    pub async fn invalidate(&self) -> Result<()> {
        self.run(|c| c.invalidate()).await
    }

    /// Number of `matrix()` calls issued so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}

fn current(latest: &AtomicU64, generation: u64) -> bool {
    latest.load(Ordering::SeqCst) == generation
}
