use crate::highlight::HighlightedCode;

const CLOSE_TAG: &str = "</color>";

/// Renders `<color=#rrggbb>token</color>` rich text, the markup understood by text widgets
/// that accept inline color tags.
///
/// Nothing is escaped: the output has to line up character for character with the plain text
/// it is drawn over.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct RichTextRenderer;

impl RichTextRenderer {
    pub fn render(&self, highlighted: &HighlightedCode) -> String {
        let segments = highlighted.segments();
        let mut output = String::with_capacity(highlighted.text.len() + segments.len() * 12);

        for segment in segments {
            match segment.color {
                Some(color) => {
                    output.push_str("<color=");
                    output.push_str(&color.as_hex());
                    output.push('>');
                    output.push_str(segment.text);
                    output.push_str(CLOSE_TAG);
                }
                None => output.push_str(segment.text),
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Highlighter;

    #[test]
    fn renders_color_tags() {
        let highlighter = Highlighter::new().unwrap();
        let code = highlighter
            .highlight_code("--[[ doc ]]\nlocal t = {'a', 1}\n")
            .unwrap();
        assert_eq!(
            RichTextRenderer.render(&code),
            "<color=#5c6370>--[[ doc ]]</color>\n\
             <color=#c678dd>local</color> t = {<color=#98c379>'a'</color>, <color=#d19a66>1</color>}\n"
        );
    }

    #[test]
    fn plain_text_is_untouched() {
        let highlighter = Highlighter::new().unwrap();
        let code = highlighter.highlight_code("x = y\n").unwrap();
        assert_eq!(RichTextRenderer.render(&code), "x = y\n");
    }
}
