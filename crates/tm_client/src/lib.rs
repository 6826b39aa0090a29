//! tm_client — client for the remote analysis service.
//!
//! One request, one attempt: `analyze` POSTs the creator profile to
//! `/api/analyze` and decodes the result document. There is no retry and no
//! default timeout; callers that want a bound set one in [`ServiceConfig`].
//! The service itself is out of scope here — only its contract lives in this
//! crate.

#![forbid(unsafe_code)]

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tm_core::{AnalysisInput, AnalysisResult};

/// Failures of a single analysis request.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The service answered with a non-2xx status.
    #[error("analysis service returned HTTP {status}")]
    Status { status: u16 },

    /// The request never completed (connect, timeout, transport).
    #[error("could not reach analysis service: {0}")]
    Transport(String),

    /// 2xx answer whose body is not an analysis document.
    #[error("analysis response did not match the expected shape: {0}")]
    Decode(String),

    /// The client itself could not be constructed.
    #[error("invalid service configuration: {0}")]
    Config(String),
}

/// Where and how to reach the service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub base_url: String,
    /// Bound on each request. `None` waits indefinitely, matching the
    /// submission flow's "no cancellation" posture.
    pub timeout: Option<Duration>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout: None,
        }
    }
}

/// Seam between the submission flow and the network. The flow is generic
/// over this, so tests can count calls without a socket.
#[async_trait]
pub trait AnalysisService {
    async fn analyze(&self, input: &AnalysisInput) -> Result<AnalysisResult, ClientError>;
}

/// Liveness answer from `GET /api/health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

pub struct AnalysisClient {
    http: reqwest::Client,
    base_url: String,
}

impl AnalysisClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| ClientError::Config(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let url = format!("{}/api/health", self.base_url);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }
        resp.json::<HealthStatus>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[async_trait]
impl AnalysisService for AnalysisClient {
    async fn analyze(&self, input: &AnalysisInput) -> Result<AnalysisResult, ClientError> {
        let url = format!("{}/api/analyze", self.base_url);
        tracing::debug!(%url, niche = %input.niche, "submitting analysis request");

        let resp = self
            .http
            .post(&url)
            .json(input)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "analysis request rejected");
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }

        // Decode from the raw body so shape errors stay distinguishable from
        // transport errors.
        let body = resp
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> AnalysisInput {
        AnalysisInput {
            niche: "fitness".into(),
            platform: "TikTok".into(),
            target_audience: "Gen Z".into(),
            content_style: "humorous".into(),
        }
    }

    const RESULT_BODY: &str = r#"{
        "trending_topics": [{
            "topic": "Home workouts",
            "relevance_score": 87,
            "search_volume": "120K",
            "growth_trend": "increasing",
            "audience_interest": "High engagement among 18-24"
        }],
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

    #[tokio::test]
    async fn analyze_decodes_a_success_response() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/analyze")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(RESULT_BODY)
            .create_async()
            .await;

        let client = AnalysisClient::new(&ServiceConfig {
            base_url: server.url(),
            timeout: None,
        })
        .unwrap();

        let result = client.analyze(&sample_input()).await.unwrap();
        assert_eq!(result.trending_topics.len(), 1);
        assert_eq!(result.trending_topics[0].topic, "Home workouts");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_2xx_keeps_the_status_code() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/analyze")
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;

        let client = AnalysisClient::new(&ServiceConfig {
            base_url: server.url(),
            timeout: None,
        })
        .unwrap();

        let err = client.analyze(&sample_input()).await.unwrap_err();
        assert!(matches!(err, ClientError::Status { status: 500 }));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn misshapen_body_is_a_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/analyze")
            .with_status(200)
            .with_body(r#"{"trending_topics": []}"#)
            .create_async()
            .await;

        let client = AnalysisClient::new(&ServiceConfig {
            base_url: server.url(),
            timeout: None,
        })
        .unwrap();

        let err = client.analyze(&sample_input()).await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_service_is_a_transport_error() {
        // Port 9 (discard) is a safe never-listening target.
        let client = AnalysisClient::new(&ServiceConfig {
            base_url: "http://127.0.0.1:9".into(),
            timeout: Some(Duration::from_millis(250)),
        })
        .unwrap();

        let err = client.analyze(&sample_input()).await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
    }

    #[tokio::test]
    async fn health_round_trips() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/health")
            .with_status(200)
            .with_body(r#"{"status": "healthy", "service": "Content Trend Analyzer"}"#)
            .create_async()
            .await;

        let client = AnalysisClient::new(&ServiceConfig {
            base_url: server.url(),
            timeout: None,
        })
        .unwrap();

        let health = client.health().await.unwrap();
        assert_eq!(health.status, "healthy");
    }
}
