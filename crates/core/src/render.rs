/// Render the constrained markdown subset the summarizer produces into an
/// HTML fragment.
///
/// Recognized line shapes, longest heading prefix first: `###`, `##`, `#`
/// headings, `* ` bullets, and plain paragraphs. Consecutive bullets share
/// one enclosing `<ul>`. Blank lines are dropped before processing. No
/// inline emphasis is parsed; anything unrecognized degrades to a
/// paragraph.
pub fn render_summary(markdown: &str) -> String {
    let mut html = String::new();
    let mut in_list = false;

    for raw in markdown.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if in_list && !line.starts_with("* ") {
            html.push_str("</ul>");
            in_list = false;
        }

        if let Some(text) = line.strip_prefix("###") {
            html.push_str(&format!("<h3>{}</h3>", text.trim_start()));
        } else if let Some(text) = line.strip_prefix("##") {
            html.push_str(&format!("<h2>{}</h2>", text.trim_start()));
        } else if let Some(text) = line.strip_prefix('#') {
            html.push_str(&format!("<h1>{}</h1>", text.trim_start()));
        } else if let Some(text) = line.strip_prefix("* ") {
            if !in_list {
                html.push_str("<ul>");
                in_list = true;
            }
            html.push_str(&format!("<li>{}</li>", text.trim_start()));
        } else {
            html.push_str(&format!("<p>{}</p>", line));
        }
    }

    if in_list {
        html.push_str("</ul>");
    }
    html
}
