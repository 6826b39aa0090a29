//! tm_io — session-scoped persistence for the submission → results handoff.
//!
//! The handoff store is the only channel between the submission view and the
//! results view. It is a single shared slot: `put` replaces the whole record,
//! `take` reads the most recent one. Records cross the boundary as JSON
//! strings, so the reader never aliases the writer's memory and the two need
//! not share a process.
//!
//! - Shared error type (`StoreError`); absence and malformed data are
//!   distinct, and neither is silently defaulted.
//! - Backends live in submodules; the record-level API is in `handoff`.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Unified error for the session store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Nothing has been handed off in this session.
    #[error("No analysis data found. Please perform an analysis first.")]
    Absent,

    /// An entry exists but does not decode to the expected shape.
    #[error("invalid {key} entry: {msg}")]
    Malformed { key: &'static str, msg: String },

    /// The backend itself failed (filesystem, poisoned lock, encoding).
    #[error("session store error: {0}")]
    Backend(String),
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Backend(e.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// String key/value persistence scoped to the current session.
///
/// Implementations must not assume the writer and the reader are the same
/// in-memory process; the file backend exists precisely for that case.
pub trait SessionStore {
    /// Store `value` under `key`, overwriting any prior entry.
    fn put(&self, key: &str, value: String) -> StoreResult<()>;

    /// Read the entry under `key`, or `None` when absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
}

pub mod handoff;
pub mod memory;
pub mod session_file;

pub use handoff::{HandoffRecord, HandoffStore, INPUT_KEY, RESULTS_KEY};
pub use memory::MemoryStore;
pub use session_file::FileStore;
