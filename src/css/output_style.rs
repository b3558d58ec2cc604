use crate::error::{Result, CssError, ErrorKind};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputStyle {
    Expanded,
    Compact,
    Compressed,
    Debug,
}

impl Default for OutputStyle {
    fn default() -> OutputStyle {
        OutputStyle::Expanded
    }
}

impl FromStr for OutputStyle {
    type Err = CssError;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "expanded"   => Ok(OutputStyle::Expanded),
            "compact"    => Ok(OutputStyle::Compact),
            "compressed" => Ok(OutputStyle::Compressed),
            "debug"      => Ok(OutputStyle::Debug),
            style        => Err(CssError {
                offset: 0,
                kind: ErrorKind::InvalidOutputStyle,
                // Intentionally hiding debug
                message: format!("Unknown output style {:?}. Please specify one of expanded, compact, or compressed.", style),
            }),
        }
    }
}

impl OutputStyle {
    pub fn rule_separator(&self) -> &'static str {
        match *self {
            OutputStyle::Compressed => "",
            OutputStyle::Compact => "\n",
            _ => "\n\n",
        }
    }

    pub fn selector_separator(&self) -> &'static str {
        match *self {
            OutputStyle::Compressed => ",",
            _ => ", ",
        }
    }

    pub fn selector_brace_separator(&self) -> &'static str {
        match *self {
            OutputStyle::Compressed => "",
            _ => " ",
        }
    }

    pub fn brace_child_separator(&self) -> &'static str {
        match *self {
            OutputStyle::Expanded => "\n",
            OutputStyle::Compact => " ",
            _ => "",
        }
    }

    pub fn child_separator(&self) -> &'static str {
        match *self {
            OutputStyle::Expanded => "\n",
            OutputStyle::Compact => " ",
            _ => "",
        }
    }

    pub fn property_value_separator(&self) -> &'static str {
        match *self {
            OutputStyle::Compressed => ":",
            _ => ": ",
        }
    }

    pub fn indent(&self, depth: usize) -> String {
        match *self {
            OutputStyle::Expanded => "  ".repeat(depth),
            _ => String::new(),
        }
    }

    pub fn emits_comments(&self) -> bool {
        *self != OutputStyle::Compressed
    }
}
