//! Static page shell around the assembled fragment. This is the adapter
//! layer: the renderers know nothing about documents, heads, or styling.

use tm_report::{escape_html, Fragment};

const PAGE_CSS: &str = r#"
body { font-family: system-ui, -apple-system, 'Segoe UI', sans-serif; margin: 0; background: #f8fafc; color: #0f172a; }
.container { max-width: 960px; margin: 0 auto; padding: 24px; }
h1 { font-size: 20px; }
.results-section { background: #ffffff; border-radius: 12px; padding: 16px 20px; margin: 16px 0; }
.results-section h2 { font-size: 16px; margin-top: 0; }
.topic-card, .hashtag-card, .template-card, .time-card, .insight-card, .tool-card { border: 1px solid #e2e8f0; border-radius: 8px; padding: 12px; margin: 8px 0; }
.topic-name, .hashtag-card-title, .template-name, .tool-name { font-weight: 700; }
.meta-label, .hooks-title, .tactics-title, .insight-title, .template-structure-title { font-size: 12px; text-transform: uppercase; color: #64748b; font-weight: 600; }
.hashtag-badge { display: inline-block; background: #eef2ff; border-radius: 999px; padding: 2px 10px; margin: 2px; }
.topic-trend.positive { color: #10b981; font-weight: 700; }
.topic-trend.neutral { color: #f59e0b; font-weight: 700; }
.topic-trend.negative { color: #ef4444; font-weight: 700; }
.tool-cost { font-size: 12px; border-radius: 6px; padding: 2px 8px; background: #e2e8f0; }
.tool-cost.free { background: #dcfce7; }
.tool-cost.freemium { background: #fef9c3; }
.tool-cost.paid { background: #fee2e2; }
.tool-cost.unknown { background: #e2e8f0; }
"#;

/// Wrap the assembled view into a self-contained HTML document.
pub fn wrap_page(heading: &str, body: &Fragment) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>TrendMaster Analysis</title>
<style>{css}</style>
</head>
<body>
<div class="container">
<h1>{heading}</h1>
{body}</div>
</body>
</html>
"#,
        css = PAGE_CSS,
        heading = escape_html(heading),
        body = body.as_str(),
    )
}
