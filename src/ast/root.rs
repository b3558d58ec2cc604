use crate::ast::node::{stream_children, Node};
use crate::css::output_style::OutputStyle;
use crate::error::Result;

use std::io::Write;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Root {
    pub nodes: Vec<Node>,
}

impl Root {
    pub fn new(nodes: Vec<Node>) -> Root {
        Root { nodes }
    }

    pub fn stream<W: Write>(&self, output: &mut W, style: OutputStyle) -> Result<()> {
        if style == OutputStyle::Debug {
            write!(output, "{:#?}\n", self.nodes)?;
            return Ok(())
        }

        stream_children(output, style, 0, &self.nodes, style.rule_separator())?;

        if style != OutputStyle::Compressed && !self.nodes.is_empty() {
            write!(output, "\n")?;
        }
        Ok(())
    }

    pub fn to_css(&self, style: OutputStyle) -> Result<String> {
        let mut output = Vec::new();
        self.stream(&mut output, style)?;
        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    fn render(css: &str, style: OutputStyle) -> String {
        Parser::new(css).parse().unwrap().to_css(style).unwrap()
    }

    const SHEET: &str = "@import \"a.css\";\n@media print { a { top: 0; } }\nb { }";

    #[test]
    fn it_streams_expanded() {
        assert_eq!(
            render(SHEET, OutputStyle::Expanded),
            "@import \"a.css\";\n\n@media print {\n  a {\n    top: 0;\n  }\n}\n\nb {\n}\n"
        );
    }

    #[test]
    fn it_streams_compact() {
        assert_eq!(
            render(SHEET, OutputStyle::Compact),
            "@import \"a.css\";\n@media print { a { top: 0; } }\nb { }\n"
        );
    }

    #[test]
    fn it_streams_compressed() {
        assert_eq!(
            render(SHEET, OutputStyle::Compressed),
            "@import \"a.css\";@media print{a{top:0}}b{}"
        );
    }

    #[test]
    fn it_streams_nothing_for_an_empty_root() {
        assert_eq!(render("", OutputStyle::Expanded), "");
    }
}
