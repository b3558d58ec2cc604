use crate::css::output_style::OutputStyle;
use crate::error::Result;

use std::io::Write;

#[derive(Debug, Clone, PartialEq)]
pub struct CssComment {
    pub content: String,
    pub offset: usize,
}

impl CssComment {
    pub fn stream<W: Write>(&self, output: &mut W, style: OutputStyle, depth: usize) -> Result<()> {
        match style {
            OutputStyle::Compressed => {},
            OutputStyle::Compact => {
                let squashed = self.content.lines().map(|s| s.trim()).collect::<Vec<_>>().join(" ");
                write!(output, "{}", squashed)?;
            },
            _ => write!(output, "{}{}", style.indent(depth), self.content)?,
        }
        Ok(())
    }
}
