use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lock widget state. A panicked task cannot leave widget state half
/// written (every update is a single assignment), so poisoning is ignored.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
