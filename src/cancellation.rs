//! Cooperative cancellation of a running training call.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;


/// A cloneable abort flag polled by the training loop.
///
/// Cancellation is cooperative: the loop checks the token at the top of
/// every boosting round and again between a component's training call and
/// the weight update. A component classifier's own `train` call is never
/// preempted mid-flight; interrupting that is the component's business.
///
/// ```
/// use voteboost::CancelToken;
///
/// let token = CancelToken::new();
/// let handle = token.clone();
///
/// // ... hand `token` to the training call on a worker thread ...
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}


impl CancelToken {
    /// A fresh, un-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }


    /// Request cancellation. Irrevocable for this token and its clones.
    #[inline]
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }


    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
