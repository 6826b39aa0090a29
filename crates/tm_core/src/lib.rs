//! tm_core — Core request/result types for the TrendMaster client.
//!
//! This crate is **I/O-free**. It defines the stable types used across the
//! workspace (`tm_io`, `tm_client`, `tm_report`, `tm_pipeline`, `tm_cli`):
//!
//! - `AnalysisInput`: the four-field creator profile, with trim-aware
//!   validation of every field.
//! - `AnalysisResult` and its seven section types, mirroring the service's
//!   wire shape. A missing section is a deserialization error; an empty
//!   sequence is valid data.
//! - Presentation domains: `GrowthTrend`/`Sentiment` and `CostTier`.
//!
//! Sequence order inside a result is meaningful and must survive every
//! transformation downstream; nothing here sorts or deduplicates.

#![forbid(unsafe_code)]

pub mod errors;
pub mod input;
pub mod analysis;

pub use analysis::{
    AnalysisResult, CompetitorInsights, ContentTemplate, CostTier, GrowthTrend, HashtagEntry,
    PostingTime, Sentiment, ToolResource, TrendingTopic,
};
pub use errors::CoreError;
pub use input::AnalysisInput;
