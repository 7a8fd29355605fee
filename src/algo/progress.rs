//! Progress callbacks for the pass-based operations.
//!
//! [`dedupe`](super::dedupe) can run many rescans on large inputs; a
//! [`Progress`] lets the caller watch it.
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! use mshkit::algo::Progress;
//!
//! let calls = Arc::new(AtomicUsize::new(0));
//! let seen = Arc::clone(&calls);
//! let progress = Progress::new(move |_pass, _max, _message| {
//!     seen.fetch_add(1, Ordering::Relaxed);
//! });
//! progress.report(1, 10, "merging nodes");
//! assert_eq!(calls.load(Ordering::Relaxed), 1);
//! ```

use std::sync::Arc;

type Callback = dyn Fn(usize, usize, &str) + Send + Sync;

/// A progress callback.
///
/// The callback receives the current step, the maximum number of steps,
/// and a short description of the work being done. The maximum is an upper
/// bound; operations may finish early.
#[derive(Clone)]
pub struct Progress {
    callback: Arc<Callback>,
}

impl Progress {
    /// Create a progress reporter from a callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(usize, usize, &str) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
        }
    }

    /// Report progress.
    #[inline]
    pub fn report(&self, current: usize, total: usize, message: &str) {
        (self.callback)(current, total, message);
    }

    /// A reporter that discards all updates.
    pub fn none() -> Self {
        Self::new(|_, _, _| {})
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::none()
    }
}

impl std::fmt::Debug for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Progress").finish_non_exhaustive()
    }
}
