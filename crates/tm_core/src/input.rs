//! The creator profile submitted for analysis.

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// The four-field request body for `/api/analyze`. All fields are mandatory
/// and must be non-empty after trimming; beyond that the service accepts any
/// text. Treated as immutable once submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisInput {
    pub niche: String,
    pub platform: String,
    pub target_audience: String,
    pub content_style: String,
}

impl AnalysisInput {
    /// Check every field, reporting the first one that is empty after
    /// trimming. Field order matches the submission form.
    pub fn validate(&self) -> Result<(), CoreError> {
        let fields: [(&'static str, &str); 4] = [
            ("niche", &self.niche),
            ("platform", &self.platform),
            ("target_audience", &self.target_audience),
            ("content_style", &self.content_style),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(CoreError::MissingField(name));
            }
        }
        Ok(())
    }
}
