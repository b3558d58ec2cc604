use crate::ast::node::{stream_block, Node};
use crate::css::output_style::OutputStyle;
use crate::error::Result;

use std::io::Write;

/// `@name params;` or `@name params { children }`.
#[derive(Debug, Clone, PartialEq)]
pub struct CssAtRule {
    pub name: String,
    pub params: String,
    pub children: Option<Vec<Node>>,
    pub offset: usize,
}

impl CssAtRule {
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    pub fn header(&self) -> String {
        if self.params.is_empty() {
            format!("@{}", self.name)
        } else {
            format!("@{} {}", self.name, self.params)
        }
    }

    pub fn stream<W: Write>(&self, output: &mut W, style: OutputStyle, depth: usize) -> Result<()> {
        match self.children {
            Some(ref children) => stream_block(output, style, depth, &self.header(), children),
            None => {
                write!(output, "{}{};", style.indent(depth), self.header())?;
                Ok(())
            },
        }
    }
}
