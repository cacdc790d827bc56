pub mod activity;
pub mod error;
pub mod seed;
pub mod store;

pub use activity::{Activity, Directory};
pub use error::{Result, SignupError};
pub use store::{ActivityStore, InMemoryStore};
