//! Landing pages shown at `/` by every demo.

use std::fmt::Write;

use axum::response::Html;
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

/// Colors of a landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub accent: &'static str,
	pub accent_dark: &'static str,
}

pub const INFO_THEME: Theme = Theme {
	accent: "#0c4b33",
	accent_dark: "#093a27",
};
pub const ITEMS_THEME: Theme = Theme {
	accent: "#667eea",
	accent_dark: "#764ba2",
};
pub const USERS_THEME: Theme = Theme {
	accent: "#336791",
	accent_dark: "#2a5470",
};
pub const COUNTER_THEME: Theme = Theme {
	accent: "#dc3545",
	accent_dark: "#c82333",
};

const NOW_FORMAT: &[BorrowedFormatItem<'static>] =
	format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");

/// Current UTC time for display on a page.
pub fn now() -> String {
	OffsetDateTime::now_utc()
		.format(NOW_FORMAT)
		.unwrap_or_default()
}

#[derive(Debug, Clone, Default)]
pub struct Page<'a> {
	pub title: &'a str,
	pub message: &'a str,
	pub theme: Option<Theme>,
	/// Label and value pairs listed in the info box.
	pub facts: Vec<(&'a str, String)>,
	/// Value displayed in large print below the info box.
	pub highlight: Option<String>,
	pub endpoints: &'a [&'a str],
	/// Button captions and their targets.
	pub links: &'a [(&'a str, &'a str)],
}

impl Page<'_> {
	pub fn render(&self) -> Html<String> {
		let theme = self.theme.unwrap_or(ITEMS_THEME);
		let mut body = String::new();

		let _ = write!(
			body,
			r#"<span class="status">&#10003; Running</span>
<h1>{title}</h1>
<p class="lead">{message}</p>
<div class="info-box">
"#,
			title = escape(self.title),
			message = escape(self.message),
		);
		for (label, value) in &self.facts {
			let _ = writeln!(
				body,
				"<strong>{}:</strong> {}<br>",
				escape(label),
				escape(value)
			);
		}
		body.push_str("</div>\n");

		if let Some(highlight) = &self.highlight {
			let _ = writeln!(body, r#"<div class="highlight">{}</div>"#, escape(highlight));
		}

		if !self.endpoints.is_empty() {
			body.push_str("<div class=\"endpoints\">\n<h3>Available Endpoints:</h3>\n");
			for endpoint in self.endpoints {
				let _ = writeln!(body, r#"<div class="endpoint">{}</div>"#, escape(endpoint));
			}
			body.push_str("</div>\n");
		}

		for (caption, href) in self.links {
			let _ = writeln!(
				body,
				r#"<a href="{}" class="btn">{}</a>"#,
				escape(href),
				escape(caption)
			);
		}

		Html(format!(
			r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>
* {{ margin: 0; padding: 0; box-sizing: border-box; }}
body {{
	font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
	background: linear-gradient(135deg, {accent} 0%, {accent_dark} 100%);
	min-height: 100vh;
	display: flex;
	justify-content: center;
	align-items: center;
	padding: 20px;
}}
.container {{
	background: white;
	border-radius: 20px;
	padding: 40px;
	max-width: 700px;
	width: 100%;
	box-shadow: 0 20px 60px rgba(0,0,0,0.3);
}}
h1 {{ color: {accent}; margin-bottom: 20px; font-size: 2.5em; }}
.lead {{ font-size: 1.2em; color: #333; margin-bottom: 30px; }}
.status {{
	display: inline-block;
	padding: 5px 15px;
	background: #28a745;
	color: white;
	border-radius: 20px;
	font-size: 0.9em;
	margin-bottom: 20px;
}}
.info-box {{
	background: #f8f9fa;
	border-left: 4px solid {accent};
	padding: 15px;
	margin: 15px 0;
	border-radius: 5px;
}}
.info-box strong {{ color: {accent}; }}
.highlight {{ font-size: 3em; color: {accent}; text-align: center; margin: 20px 0; }}
.endpoints {{ margin-top: 30px; }}
.endpoint {{
	background: #f8f9fa;
	padding: 10px;
	margin: 10px 0;
	border-radius: 5px;
	font-family: monospace;
}}
.btn {{
	display: inline-block;
	padding: 12px 24px;
	margin: 20px 10px 0 0;
	background: {accent};
	color: white;
	text-decoration: none;
	border-radius: 5px;
	transition: background 0.3s;
}}
.btn:hover {{ background: {accent_dark}; }}
</style>
</head>
<body>
<div class="container">
{body}</div>
</body>
</html>
"#,
			title = escape(self.title),
			accent = theme.accent,
			accent_dark = theme.accent_dark,
		))
	}
}

/// Escapes text for HTML element content and attribute values.
pub fn escape(text: &str) -> String {
	let mut output = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'&' => output.push_str("&amp;"),
			'<' => output.push_str("&lt;"),
			'>' => output.push_str("&gt;"),
			'"' => output.push_str("&quot;"),
			'\'' => output.push_str("&#x27;"),
			_ => output.push(ch),
		}
	}
	output
}
