use crate::highlight::HighlightedCode;

/// Terminal renderer via ANSI escape codes. Requires a terminal that supports truecolor
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct TerminalRenderer;

impl TerminalRenderer {
    /// Render to the terminal with ANSI escape codes
    pub fn render(&self, highlighted: &HighlightedCode) -> String {
        let mut output = String::with_capacity(highlighted.text.len() * 2);

        for segment in highlighted.segments() {
            let Some(color) = segment.color else {
                output.push_str(segment.text);
                continue;
            };
            // Reset before every newline so a multi-line token doesn't bleed into
            // line-oriented tools such as `less -R`
            for (idx, line) in segment.text.split('\n').enumerate() {
                if idx > 0 {
                    output.push('\n');
                }
                if line.is_empty() {
                    continue;
                }
                output.push_str("\x1b[");
                color.as_ansi_fg(&mut output);
                output.push('m');
                output.push_str(line);
                output.push_str("\x1b[0m");
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
    fn colors_each_line_of_a_token() {
        let highlighter = Highlighter::new().unwrap();
        let code = highlighter.highlight_code("x = [[a\nb]] 7").unwrap();
        assert_eq!(
            TerminalRenderer.render(&code),
            "x = \x1b[38;2;152;195;121m[[a\x1b[0m\n\x1b[38;2;152;195;121mb]]\x1b[0m \
             \x1b[38;2;209;154;102m7\x1b[0m"
        );
    }

    #[test]
    fn trailing_newline_of_comment_is_not_wrapped() {
        let highlighter = Highlighter::new().unwrap();
        let code = highlighter.highlight_code("-- c\n").unwrap();
        assert_eq!(
            TerminalRenderer.render(&code),
            "\x1b[38;2;92;99;112m-- c\x1b[0m\n"
        );
    }
}
