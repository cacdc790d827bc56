use signup_core::ActivityStore;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ActivityStore>,
    /// Serve `/static` from this directory instead of the embedded assets.
    pub static_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(store: Arc<dyn ActivityStore>) -> Self {
        Self {
            store,
            static_dir: None,
        }
    }

    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signup_core::InMemoryStore;

    #[test]
    fn new_state_has_no_static_override() {
        let state = AppState::new(Arc::new(InMemoryStore::default()));
        assert!(state.static_dir.is_none());
    }

    #[test]
    fn clones_share_the_store() {
        let state = AppState::new(Arc::new(InMemoryStore::new(
            signup_core::seed::default_directory(),
        )));
        let copy = state.clone();
        state.store.signup("Chess Club", "a@x.edu").unwrap();
        let dir = copy.store.list().unwrap();
        assert!(dir.get("Chess Club").unwrap().has_participant("a@x.edu"));
    }
}
