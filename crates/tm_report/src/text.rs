//! Flat-text report rendering and the download filename.
//!
//! Pure over (input, result, generated): identical arguments give
//! byte-identical output. Plain text carries no markup risk, so nothing is
//! escaped and nothing is dropped or reordered relative to the source.

use std::fmt::Write as _;

use chrono::NaiveDate;
use tm_core::{AnalysisInput, AnalysisResult};

const RULE_HEAVY: &str =
    "==================================================";
const RULE_LIGHT: &str =
    "--------------------------------------------------";

/// Name for the downloadable artifact: `TrendMaster_Report_<ISO-date>.txt`.
pub fn report_filename(date: NaiveDate) -> String {
    format!("TrendMaster_Report_{}.txt", date.format("%Y-%m-%d"))
}

/// Render the full report. `generated` is the caller-formatted timestamp
/// echoed in the details block.
pub fn render_report(input: &AnalysisInput, result: &AnalysisResult, generated: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "TRENDMASTER ANALYSIS REPORT");
    let _ = writeln!(out, "{RULE_HEAVY}");
    let _ = writeln!(out);

    let _ = writeln!(out, "ANALYSIS DETAILS");
    let _ = writeln!(out, "{RULE_LIGHT}");
    let _ = writeln!(out, "Niche: {}", input.niche);
    let _ = writeln!(out, "Platform: {}", input.platform);
    let _ = writeln!(out, "Target Audience: {}", input.target_audience);
    let _ = writeln!(out, "Content Style: {}", input.content_style);
    let _ = writeln!(out, "Generated: {generated}");
    let _ = writeln!(out);

    let _ = writeln!(out, "TRENDING TOPICS");
    let _ = writeln!(out, "{RULE_LIGHT}");
    for topic in &result.trending_topics {
        let _ = writeln!(out);
        let _ = writeln!(out, "• {}", topic.topic);
        let _ = writeln!(
            out,
            "  Relevance: {}% | Trend: {} | Volume: {}",
            topic.relevance_score, topic.growth_trend, topic.search_volume
        );
        let _ = writeln!(out, "  Interest: {}", topic.audience_interest);
    }

    let _ = writeln!(out);
    let _ = writeln!(out);
    let _ = writeln!(out, "HASHTAG STRATEGY");
    let _ = writeln!(out, "{RULE_LIGHT}");
    for entry in &result.hashtag_strategy {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} ({})", entry.hashtag, entry.kind);
        let _ = writeln!(out, "  Expected Reach: {}", entry.expected_reach);
    }

    let _ = writeln!(out);
    let _ = writeln!(out);
    let _ = writeln!(out, "CONTENT TEMPLATES");
    let _ = writeln!(out, "{RULE_LIGHT}");
    for template in &result.content_templates {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} ({})", template.template_name, template.duration);
        let _ = writeln!(out, "  Structure: {}", template.structure);
        let _ = writeln!(out, "  Key Hooks: {}", template.key_hooks.join(", "));
        let _ = writeln!(
            out,
            "  Engagement Tactics: {}",
            template.engagement_tactics.join(", ")
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out);
    let _ = writeln!(out, "BEST POSTING TIMES");
    let _ = writeln!(out, "{RULE_LIGHT}");
    for slot in &result.best_posting_times {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} at {}", slot.day, slot.time);
        let _ = writeln!(out, "  Expected Engagement: {}", slot.expected_engagement);
    }

    let _ = writeln!(out);
    let _ = writeln!(out);
    let _ = writeln!(out, "CONTENT CALENDAR SUGGESTIONS");
    let _ = writeln!(out, "{RULE_LIGHT}");
    for (index, suggestion) in result.content_calendar_suggestions.iter().enumerate() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}. {}", index + 1, suggestion);
    }

    let _ = writeln!(out);
    let _ = writeln!(out);
    let _ = writeln!(out, "COMPETITOR INSIGHTS");
    let _ = writeln!(out, "{RULE_LIGHT}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Top Performing Formats:");
    for format in &result.competitor_insights.top_performing_formats {
        let _ = writeln!(out, "  • {format}");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Common Pain Points:");
    for point in &result.competitor_insights.common_pain_points {
        let _ = writeln!(out, "  • {point}");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Opportunities:");
    for opportunity in &result.competitor_insights.opportunities {
        let _ = writeln!(out, "  • {opportunity}");
    }

    let _ = writeln!(out);
    let _ = writeln!(out);
    let _ = writeln!(out, "RECOMMENDED TOOLS");
    let _ = writeln!(out, "{RULE_LIGHT}");
    for tool in &result.tools_and_resources {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} ({})", tool.tool_name, tool.cost);
        let _ = writeln!(out, "  Purpose: {}", tool.purpose);
    }

    let _ = writeln!(out);
    let _ = writeln!(out);
    let _ = writeln!(out, "{RULE_HEAVY}");
    let _ = writeln!(out, "Report generated by TrendMaster");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tm_core::{CompetitorInsights, GrowthTrend, ToolResource, TrendingTopic};

    fn sample_input() -> AnalysisInput {
        AnalysisInput {
            niche: "fitness".into(),
            platform: "TikTok".into(),
            target_audience: "Gen Z".into(),
            content_style: "humorous".into(),
        }
    }

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            trending_topics: vec![TrendingTopic {
                topic: "Home workouts".into(),
                relevance_score: 87.0,
                search_volume: "120K".into(),
                growth_trend: GrowthTrend::Increasing,
                audience_interest: "High engagement among 18-24".into(),
            }],
            hashtag_strategy: vec![],
            content_templates: vec![],
            best_posting_times: vec![],
            content_calendar_suggestions: vec!["Monday: myth busting".into(), "Friday: Q&A".into()],
            competitor_insights: CompetitorInsights {
                top_performing_formats: vec!["Short tutorials".into()],
                common_pain_points: vec![],
                opportunities: vec![],
            },
            tools_and_resources: vec![ToolResource {
                tool_name: "CapCut".into(),
                purpose: "Editing".into(),
                cost: "free".into(),
            }],
        }
    }

    #[test]
    fn topic_line_has_the_fixed_layout() {
        let report = render_report(&sample_input(), &sample_result(), "2026-08-07 10:00:00");
        assert!(report.contains("Relevance: 87% | Trend: increasing | Volume: 120K"));
        assert!(report.contains("• Home workouts"));
    }

    #[test]
    fn details_echo_every_input_field() {
        let report = render_report(&sample_input(), &sample_result(), "2026-08-07 10:00:00");
        assert!(report.contains("Niche: fitness"));
        assert!(report.contains("Platform: TikTok"));
        assert!(report.contains("Target Audience: Gen Z"));
        assert!(report.contains("Content Style: humorous"));
        assert!(report.contains("Generated: 2026-08-07 10:00:00"));
    }

    #[test]
    fn identical_arguments_give_identical_bytes() {
        let a = render_report(&sample_input(), &sample_result(), "stamp");
        let b = render_report(&sample_input(), &sample_result(), "stamp");
        assert_eq!(a, b);
    }

    #[test]
    fn calendar_suggestions_are_numbered_in_order() {
        let report = render_report(&sample_input(), &sample_result(), "stamp");
        let first = report.find("1. Monday: myth busting").unwrap();
        let second = report.find("2. Friday: Q&A").unwrap();
        assert!(first < second);
    }

    #[test]
    fn text_output_is_not_escaped() {
        let mut result = sample_result();
        result.trending_topics[0].topic = "<Home & workouts>".into();
        let report = render_report(&sample_input(), &result, "stamp");
        assert!(report.contains("• <Home & workouts>"));
        assert!(!report.contains("&lt;"));
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let report = render_report(&sample_input(), &sample_result(), "stamp");
        let order = [
            "TRENDING TOPICS",
            "HASHTAG STRATEGY",
            "CONTENT TEMPLATES",
            "BEST POSTING TIMES",
            "CONTENT CALENDAR SUGGESTIONS",
            "COMPETITOR INSIGHTS",
            "RECOMMENDED TOOLS",
        ];
        let mut last = 0;
        for heading in order {
            let at = report.find(heading).unwrap();
            assert!(at > last, "{heading} out of order");
            last = at;
        }
    }

    #[test]
    fn filename_is_date_qualified() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(report_filename(date), "TrendMaster_Report_2026-08-07.txt");
    }
}
