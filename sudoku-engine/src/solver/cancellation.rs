//! Cancelling long solver operations requires a [`Cancellation`].

use std::sync::Arc;

/// A cooperative cancellation check, polled at every search node and
/// propagation iteration.
///
/// The predicate is shared behind an `Arc`, so a cancellation can be cloned
/// into parallel workers.
///
/// ```
/// # use sudoku_engine::solver::cancellation::Cancellation;
/// # use std::sync::Arc;
/// # use std::sync::atomic::{AtomicBool, Ordering};
/// let cancel_token = Arc::new(AtomicBool::new(false));
/// let cancellation = Cancellation::new({
///     let cancel_token = Arc::clone(&cancel_token);
///     move || cancel_token.load(Ordering::SeqCst)
/// });
///
/// assert!(!cancellation.check());
/// cancel_token.store(true, Ordering::SeqCst);
/// assert!(cancellation.check());
/// ```
#[derive(Clone)]
pub struct Cancellation {
    func: Arc<dyn Fn() -> bool + Send + Sync>,
}

impl Cancellation {
    pub fn new<F>(func: F) -> Self
    where
        F: (Fn() -> bool) + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }

    /// Whether cancellation has been requested.
    pub fn check(&self) -> bool {
        (self.func)()
    }
}

impl<F> From<F> for Cancellation
where
    F: (Fn() -> bool) + Send + Sync + 'static,
{
    fn from(func: F) -> Self {
        Self::new(func)
    }
}

/// The marker returned through internal call stacks when a cancellation
/// fires; public APIs convert it into their error-valued results.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CancelledError;

pub(crate) fn is_cancelled(cancellation: &Option<Cancellation>) -> bool {
    cancellation.as_ref().map_or(false, |c| c.check())
}
