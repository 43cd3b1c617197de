use std::collections::BTreeMap;
use std::fmt;

use crate::highlight::HighlightedCode;

#[derive(Debug, PartialEq, Clone, Default)]
/// A renderer that will output proper HTML code
pub struct HtmlRenderer {
    /// Any metadata we want to add as `<code>` data-* attribute
    pub other_metadata: BTreeMap<String, String>,
}

impl HtmlRenderer {
    /// Renders the given highlighted code to an HTML string, escaping characters.
    pub fn render(&self, highlighted: &HighlightedCode) -> String {
        let mut content = String::with_capacity(highlighted.text.len() * 2);
        for segment in highlighted.segments() {
            let escaped = HtmlEscaped(segment.text);
            match segment.color {
                Some(color) => content.push_str(&format!(
                    r#"<span style="{}">{escaped}</span>"#,
                    color.as_css_color_property()
                )),
                None => content.push_str(&escaped.to_string()),
            }
        }

        // Build data attributes from other_metadata
        let mut data_attrs = String::from(r#"data-lang="lua""#);
        for (key, value) in &self.other_metadata {
            // lowercase and replace non-alphanumeric chars with hyphens
            let slugified_key: String = key
                .to_lowercase()
                .chars()
                .map(|c| {
                    if c.is_alphanumeric() || c == '-' {
                        c
                    } else {
                        '-'
                    }
                })
                .collect();
            data_attrs.push_str(&format!(
                r#" data-{slugified_key}="{}""#,
                HtmlEscaped(value)
            ));
        }

        format!(r#"<pre class="lunaria"><code {data_attrs}>{content}</code></pre>"#)
    }
}

// From syntect
pub(crate) struct HtmlEscaped<'a>(pub &'a str);
impl fmt::Display for HtmlEscaped<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(s) = *self;
        let mut last = 0;
        for (i, ch) in s.bytes().enumerate() {
            let escaped = match ch {
                b'>' => "&gt;",
                b'<' => "&lt;",
                b'&' => "&amp;",
                b'\'' => "&#39;",
                b'"' => "&quot;",
                _ => continue,
            };
            fmt.write_str(&s[last..i])?;
            fmt.write_str(escaped)?;
            last = i + 1;
        }

        if last < s.len() {
            fmt.write_str(&s[last..])?;
        }
        Ok(())
    }
}
