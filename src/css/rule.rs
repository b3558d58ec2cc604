use crate::ast::node::{stream_block, Node};
use crate::css::output_style::OutputStyle;
use crate::css::selector::CssSelector;
use crate::error::Result;

use std::io::Write;

#[derive(Debug, Clone, PartialEq)]
pub struct CssRule {
    pub selectors: Vec<CssSelector>,
    pub children: Vec<Node>,
    pub offset: usize,
}

impl CssRule {
    pub fn new(offset: usize) -> CssRule {
        CssRule {
            selectors: Vec::new(),
            children: Vec::new(),
            offset,
        }
    }

    pub fn selector_string(&self, style: OutputStyle) -> String {
        self.selectors.iter().map(|s| match style {
            OutputStyle::Compressed => s.compressed(),
            _ => s.to_string(),
        }).collect::<Vec<_>>().join(style.selector_separator())
    }

    pub fn stream<W: Write>(&self, output: &mut W, style: OutputStyle, depth: usize) -> Result<()> {
        stream_block(output, style, depth, &self.selector_string(style), &self.children)
    }
}
