use crate::activity::Directory;
use crate::error::{Result, SignupError};
use std::sync::{Mutex, MutexGuard};

/// Storage seam between request handlers and the directory.
///
/// Methods are synchronous; async callers are expected to run them on a
/// blocking thread so that slower backends can be swapped in.
pub trait ActivityStore: Send + Sync {
    /// Snapshot of every activity and its current roster.
    fn list(&self) -> Result<Directory>;

    /// Add `email` to the roster of `activity`; returns the confirmation message.
    fn signup(&self, activity: &str, email: &str) -> Result<String>;

    /// Remove `email` from the roster of `activity`; returns the confirmation message.
    fn unregister(&self, activity: &str, email: &str) -> Result<String>;
}

// ---------------------------------------------------------------------------
// InMemoryStore
// ---------------------------------------------------------------------------

/// Process-resident store. One lock covers each whole check-then-mutate step.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    directory: Mutex<Directory>,
}

impl InMemoryStore {
    pub fn new(directory: Directory) -> Self {
        Self {
            directory: Mutex::new(directory),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Directory> {
        // Mutations are a single push or remove, so a poisoned roster is still whole.
        self.directory
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ActivityStore for InMemoryStore {
    fn list(&self) -> Result<Directory> {
        Ok(self.lock().clone())
    }

    fn signup(&self, activity: &str, email: &str) -> Result<String> {
        let result = self.lock().signup(activity, email);
        log_outcome("signup", activity, email, &result);
        result
    }

    fn unregister(&self, activity: &str, email: &str) -> Result<String> {
        let result = self.lock().unregister(activity, email);
        log_outcome("unregister", activity, email, &result);
        result
    }
}

fn log_outcome(op: &str, activity: &str, email: &str, result: &Result<String>) {
    match result {
        Ok(_) => tracing::info!(op, activity, email, "roster updated"),
        Err(
            e @ (SignupError::ActivityNotFound(_)
            | SignupError::AlreadySignedUp { .. }
            | SignupError::ParticipantNotFound { .. }),
        ) => tracing::debug!(op, activity, email, reason = %e, "roster change rejected"),
        Err(e) => tracing::warn!(op, activity, email, error = %e, "roster change failed"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
