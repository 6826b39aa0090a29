//! Section renderers and the fixed-order assembler.
//!
//! One pure function per section, each producing a [`Fragment`] of markup.
//! Empty sequences produce empty containers, not placeholder text — an
//! absent section can never reach this module (it fails decoding upstream).

use core::fmt;

use tm_core::{
    AnalysisResult, CompetitorInsights, ContentTemplate, HashtagEntry, PostingTime, ToolResource,
    TrendingTopic,
};

use crate::escape::escape_html;

/// A renderable unit of markup, not yet attached to any display surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    fn new() -> Self {
        Self(String::new())
    }

    fn push(&mut self, markup: &str) {
        self.0.push_str(markup);
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn list_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect()
}

/// Topic cards with score, volume, trend label, and audience note.
pub fn render_trending_topics(topics: &[TrendingTopic]) -> Fragment {
    let mut out = Fragment::new();
    for topic in topics {
        out.push(&format!(
            r#"<div class="topic-card">
  <div class="topic-name">{name}</div>
  <div class="topic-meta">
    <div class="meta-item"><div class="meta-label">Relevance</div><div class="meta-value">{score}%</div></div>
    <div class="meta-item"><div class="meta-label">Volume</div><div class="meta-value">{volume}</div></div>
  </div>
  <div class="topic-trend {trend_class}">{trend}</div>
  <div class="topic-interest">{interest}</div>
</div>
"#,
            name = escape_html(&topic.topic),
            score = topic.relevance_score,
            volume = escape_html(&topic.search_volume),
            trend_class = topic.growth_trend.sentiment().as_class(),
            trend = topic.growth_trend,
            interest = escape_html(&topic.audience_interest),
        ));
    }
    out
}

/// Badge row plus one detail card per hashtag.
pub fn render_hashtag_strategy(hashtags: &[HashtagEntry]) -> Fragment {
    let badges: String = hashtags
        .iter()
        .map(|h| format!(r#"<span class="hashtag-badge">{}</span>"#, escape_html(&h.hashtag)))
        .collect();

    let cards: String = hashtags
        .iter()
        .map(|h| {
            format!(
                r#"<div class="hashtag-card">
  <div class="hashtag-card-title">{tag}</div>
  <div class="hashtag-card-type">{kind}</div>
  <div class="hashtag-card-reach">{reach}</div>
</div>
"#,
                tag = escape_html(&h.hashtag),
                kind = escape_html(&h.kind),
                reach = escape_html(&h.expected_reach),
            )
        })
        .collect();

    let mut out = Fragment::new();
    out.push(&format!(
        "<div class=\"hashtags-container\">{badges}</div>\n<div class=\"hashtag-info\">{cards}</div>\n"
    ));
    out
}

/// Template cards: name, duration, structure, hooks and tactics lists.
pub fn render_content_templates(templates: &[ContentTemplate]) -> Fragment {
    let mut out = Fragment::new();
    for template in templates {
        out.push(&format!(
            r#"<div class="template-card">
  <div class="template-name">{name}</div>
  <span class="template-duration">{duration}</span>
  <div class="template-structure">
    <div class="template-structure-title">Structure</div>
    <div class="template-structure-text">{structure}</div>
  </div>
  <div class="template-hooks">
    <div class="hooks-title">Key Hooks</div>
    <ul class="hooks-list">{hooks}</ul>
  </div>
  <div class="template-tactics">
    <div class="tactics-title">Engagement Tactics</div>
    <ul class="tactics-list">{tactics}</ul>
  </div>
</div>
"#,
            name = escape_html(&template.template_name),
            duration = escape_html(&template.duration),
            structure = escape_html(&template.structure),
            hooks = list_items(&template.key_hooks),
            tactics = list_items(&template.engagement_tactics),
        ));
    }
    out
}

pub fn render_posting_times(times: &[PostingTime]) -> Fragment {
    let mut out = Fragment::new();
    for slot in times {
        out.push(&format!(
            r#"<div class="time-card">
  <div class="time-day">{day}</div>
  <div class="time-value">{time}</div>
  <div class="time-engagement">{engagement}</div>
</div>
"#,
            day = escape_html(&slot.day),
            time = escape_html(&slot.time),
            engagement = escape_html(&slot.expected_engagement),
        ));
    }
    out
}

pub fn render_calendar_suggestions(suggestions: &[String]) -> Fragment {
    let mut out = Fragment::new();
    for suggestion in suggestions {
        out.push(&format!(
            "<div class=\"suggestion-item\">{}</div>\n",
            escape_html(suggestion)
        ));
    }
    out
}

/// Three fixed cards: formats, pain points, opportunities.
pub fn render_competitor_insights(insights: &CompetitorInsights) -> Fragment {
    let card = |title: &str, items: &[String]| {
        format!(
            r#"<div class="insight-card">
  <div class="insight-title">{title}</div>
  <ul class="insight-list">{items}</ul>
</div>
"#,
            items = list_items(items),
        )
    };

    let mut out = Fragment::new();
    out.push(&card(
        "Top Performing Formats",
        &insights.top_performing_formats,
    ));
    out.push(&card("Common Pain Points", &insights.common_pain_points));
    out.push(&card("Opportunities", &insights.opportunities));
    out
}

pub fn render_tools(tools: &[ToolResource]) -> Fragment {
    let mut out = Fragment::new();
    for tool in tools {
        out.push(&format!(
            r#"<div class="tool-card">
  <div class="tool-name">{name}</div>
  <div class="tool-purpose">{purpose}</div>
  <span class="tool-cost {tier}">{cost}</span>
</div>
"#,
            name = escape_html(&tool.tool_name),
            purpose = escape_html(&tool.purpose),
            tier = tool.cost_tier().as_class(),
            cost = escape_html(&tool.cost),
        ));
    }
    out
}

/// Section order of the interactive view. Fixed by design; never derived
/// from the data.
const SECTIONS: [(&str, &str); 7] = [
    ("trendingTopics", "Trending Topics"),
    ("hashtagStrategy", "Hashtag Strategy"),
    ("contentTemplates", "Content Templates"),
    ("postingTimes", "Best Posting Times"),
    ("contentCalendar", "Content Calendar Suggestions"),
    ("competitorInsights", "Competitor Insights"),
    ("toolsResources", "Tools &amp; Resources"),
];

/// Compose the seven section fragments into the full interactive view.
pub fn assemble(result: &AnalysisResult) -> Fragment {
    let bodies = [
        render_trending_topics(&result.trending_topics),
        render_hashtag_strategy(&result.hashtag_strategy),
        render_content_templates(&result.content_templates),
        render_posting_times(&result.best_posting_times),
        render_calendar_suggestions(&result.content_calendar_suggestions),
        render_competitor_insights(&result.competitor_insights),
        render_tools(&result.tools_and_resources),
    ];

    let mut out = Fragment::new();
    for ((id, title), body) in SECTIONS.iter().zip(bodies) {
        out.push(&format!(
            "<section id=\"{id}\" class=\"results-section\">\n<h2>{title}</h2>\n{body}</section>\n",
            body = body.as_str(),
        ));
    }
    out
}
