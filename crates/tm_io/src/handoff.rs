//! Record-level API over a [`SessionStore`] backend.

use serde::{Deserialize, Serialize};
use tm_core::{AnalysisInput, AnalysisResult};

use crate::{SessionStore, StoreError, StoreResult};

/// Entry holding the JSON-encoded `AnalysisResult`.
pub const RESULTS_KEY: &str = "analysisResults";
/// Entry holding the JSON-encoded `AnalysisInput`.
pub const INPUT_KEY: &str = "analysisInput";

/// The (input, result) pair carried from the submission view to the results
/// view. Written once per submission; never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandoffRecord {
    pub input: AnalysisInput,
    pub result: AnalysisResult,
}

/// Typed put/take over two string entries.
pub struct HandoffStore<S: SessionStore> {
    backend: S,
}

impl<S: SessionStore> HandoffStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Serialize and store the record, overwriting any prior one.
    pub fn put(&self, record: &HandoffRecord) -> StoreResult<()> {
        let result = serde_json::to_string(&record.result)
            .map_err(|e| StoreError::Backend(format!("encode {RESULTS_KEY}: {e}")))?;
        let input = serde_json::to_string(&record.input)
            .map_err(|e| StoreError::Backend(format!("encode {INPUT_KEY}: {e}")))?;
        self.backend.put(RESULTS_KEY, result)?;
        self.backend.put(INPUT_KEY, input)?;
        Ok(())
    }

    /// Read and decode the most recent record. The record stays in place;
    /// clearing it is the session boundary's job, not ours.
    pub fn take(&self) -> StoreResult<HandoffRecord> {
        let raw_result = self.backend.get(RESULTS_KEY)?.ok_or(StoreError::Absent)?;
        let raw_input = self.backend.get(INPUT_KEY)?.ok_or(StoreError::Absent)?;

        let result: AnalysisResult =
            serde_json::from_str(&raw_result).map_err(|e| StoreError::Malformed {
                key: RESULTS_KEY,
                msg: e.to_string(),
            })?;
        let input: AnalysisInput =
            serde_json::from_str(&raw_input).map_err(|e| StoreError::Malformed {
                key: INPUT_KEY,
                msg: e.to_string(),
            })?;
        Ok(HandoffRecord { input, result })
    }
}
