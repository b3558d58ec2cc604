use crate::css::output_style::OutputStyle;
use crate::error::Result;

use std::io::Write;

#[derive(Debug, Clone, PartialEq)]
pub struct CssDeclaration {
    pub property: String,
    pub value: String,
    pub offset: usize,
}

impl CssDeclaration {
    pub fn new(property: &str, value: &str, offset: usize) -> CssDeclaration {
        CssDeclaration {
            property: property.trim().to_string(),
            value: value.trim().to_string(),
            offset,
        }
    }

    /// Writes `property: value` without the trailing semicolon; the
    /// enclosing block decides on separators.
    pub fn stream<W: Write>(&self, output: &mut W, style: OutputStyle, depth: usize) -> Result<()> {
        write!(
            output,
            "{}{}{}{}",
            style.indent(depth),
            self.property,
            style.property_value_separator(),
            self.value,
        )?;
        Ok(())
    }
}
