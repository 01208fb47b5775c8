pub mod counter;
pub mod entries;
pub mod random;
pub mod vibes;

pub use counter::SmashCounter;
pub use entries::{Entry, EntryStore};
pub use random::{IndexPicker, ThreadRngPicker};
pub use vibes::{Vibe, VibeRecord, VibeStore};

use thiserror::Error;

/// Errors produced by store operations. Each variant carries the
/// client-facing message; the HTTP layer maps variants to status codes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),
}
