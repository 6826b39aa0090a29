//! Typed mirror of the analysis service's result document.
//!
//! Every section is mandatory on the wire; deserialization fails when one is
//! absent. Empty sequences are legal and distinct from absent fields. The
//! order of every `Vec` is the service's order and is preserved as-is.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Full analysis document returned by `POST /api/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub trending_topics: Vec<TrendingTopic>,
    pub hashtag_strategy: Vec<HashtagEntry>,
    pub content_templates: Vec<ContentTemplate>,
    pub best_posting_times: Vec<PostingTime>,
    pub content_calendar_suggestions: Vec<String>,
    pub competitor_insights: CompetitorInsights,
    pub tools_and_resources: Vec<ToolResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingTopic {
    pub topic: String,
    /// Service-controlled score in [0, 100].
    pub relevance_score: f64,
    pub search_volume: String,
    pub growth_trend: GrowthTrend,
    pub audience_interest: String,
}

/// Direction of a topic's growth, as reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthTrend {
    Increasing,
    Stable,
    Decreasing,
}

impl GrowthTrend {
    /// Presentational category only; never drives logic.
    pub fn sentiment(self) -> Sentiment {
        match self {
            GrowthTrend::Increasing => Sentiment::Positive,
            GrowthTrend::Stable => Sentiment::Neutral,
            GrowthTrend::Decreasing => Sentiment::Negative,
        }
    }
}

impl fmt::Display for GrowthTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GrowthTrend::Increasing => "increasing",
            GrowthTrend::Stable => "stable",
            GrowthTrend::Decreasing => "decreasing",
        };
        f.write_str(label)
    }
}

/// Visual styling category for a trend label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_class(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashtagEntry {
    pub hashtag: String,
    /// Free-text category (e.g. trending/niche/brand). `type` on the wire.
    #[serde(rename = "type")]
    pub kind: String,
    pub expected_reach: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentTemplate {
    pub template_name: String,
    pub duration: String,
    pub structure: String,
    pub key_hooks: Vec<String>,
    pub engagement_tactics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostingTime {
    pub day: String,
    pub time: String,
    pub expected_engagement: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorInsights {
    pub top_performing_formats: Vec<String>,
    pub common_pain_points: Vec<String>,
    pub opportunities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResource {
    pub tool_name: String,
    pub purpose: String,
    /// Free-text cost category; see [`ToolResource::cost_tier`].
    pub cost: String,
}

impl ToolResource {
    /// Case-insensitive mapping of the cost text onto a presentation tier.
    /// Unrecognized categories get their own tier rather than failing.
    pub fn cost_tier(&self) -> CostTier {
        match self.cost.trim().to_ascii_lowercase().as_str() {
            "free" => CostTier::Free,
            "freemium" => CostTier::Freemium,
            "paid" => CostTier::Paid,
            _ => CostTier::Unknown,
        }
    }
}

/// Presentation tier for a tool's cost category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostTier {
    Free,
    Freemium,
    Paid,
    Unknown,
}

impl CostTier {
    pub fn as_class(self) -> &'static str {
        match self {
            CostTier::Free => "free",
            CostTier::Freemium => "freemium",
            CostTier::Paid => "paid",
            CostTier::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_DOC: &str = r##"{
        "trending_topics": [{
            "topic": "Home workouts",
            "relevance_score": 87,
            "search_volume": "120K",
            "growth_trend": "increasing",
            "audience_interest": "High engagement among 18-24"
        }],
        "hashtag_strategy": [{
            "hashtag": "#fitness",
            "type": "niche",
            "expected_reach": "10K-50K"
        }],
        "content_templates": [{
            "template_name": "Myth buster",
            "duration": "30s",
            "structure": "Hook, myth, truth, CTA",
            "key_hooks": ["You have been lied to"],
            "engagement_tactics": ["Pin a question"]
        }],
        "best_posting_times": [{
            "day": "Tuesday",
            "time": "18:00",
            "expected_engagement": "High"
        }],
        "content_calendar_suggestions": ["Monday: myth busting"],
        "competitor_insights": {
            "top_performing_formats": ["Short tutorials"],
            "common_pain_points": ["No time"],
            "opportunities": ["Beginner series"]
        },
        "tools_and_resources": [{
            "tool_name": "CapCut",
            "purpose": "Editing",
            "cost": "Free"
        }]
    }"##;

    #[test]
    fn full_document_parses() {
        let result: AnalysisResult = serde_json::from_str(FULL_DOC).unwrap();
        assert_eq!(result.trending_topics[0].relevance_score, 87.0);
        assert_eq!(
            result.trending_topics[0].growth_trend,
            GrowthTrend::Increasing
        );
        assert_eq!(result.hashtag_strategy[0].kind, "niche");
    }

    #[test]
    fn missing_section_is_an_error() {
        let doc: serde_json::Value = serde_json::from_str(FULL_DOC).unwrap();
        let mut map = doc.as_object().unwrap().clone();
        map.remove("best_posting_times");
        let truncated = serde_json::Value::Object(map).to_string();
        assert!(serde_json::from_str::<AnalysisResult>(&truncated).is_err());
    }

    #[test]
    fn empty_sections_are_valid() {
        let doc = r#"{
            "trending_topics": [],
            "hashtag_strategy": [],
            "content_templates": [],
            "best_posting_times": [],
            "content_calendar_suggestions": [],
            "competitor_insights": {
                "top_performing_formats": [],
                "common_pain_points": [],
                "opportunities": []
            },
            "tools_and_resources": []
        }"#;
        let result: AnalysisResult = serde_json::from_str(doc).unwrap();
        assert!(result.trending_topics.is_empty());
    }

    #[test]
    fn unknown_growth_trend_is_rejected() {
        let doc = r#"{"topic":"x","relevance_score":1,"search_volume":"low",
                      "growth_trend":"sideways","audience_interest":"y"}"#;
        assert!(serde_json::from_str::<TrendingTopic>(doc).is_err());
    }

    #[test]
    fn trend_sentiment_mapping() {
        assert_eq!(GrowthTrend::Increasing.sentiment(), Sentiment::Positive);
        assert_eq!(GrowthTrend::Stable.sentiment(), Sentiment::Neutral);
        assert_eq!(GrowthTrend::Decreasing.sentiment(), Sentiment::Negative);
    }

    #[test]
    fn cost_tier_is_case_insensitive() {
        let tool = |cost: &str| ToolResource {
            tool_name: "t".into(),
            purpose: "p".into(),
            cost: cost.into(),
        };
        assert_eq!(tool("FREE").cost_tier(), CostTier::Free);
        assert_eq!(tool("Freemium").cost_tier(), CostTier::Freemium);
        assert_eq!(tool("paid").cost_tier(), CostTier::Paid);
        assert_eq!(tool("$12/mo").cost_tier(), CostTier::Unknown);
    }
}
