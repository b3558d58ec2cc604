//! `@mixin` / `@apply` expansion for CSS.
//!
//! ```
//! use mixers::{compile, Options, OutputStyle};
//!
//! let css = "@mixin --center(--w) { margin: 0 auto; width: --w; }\n.box { @apply --center(40rem); }";
//! let output = compile(css, &Options::new(), OutputStyle::Compact).unwrap();
//! assert_eq!(output.css, ".box { margin: 0 auto; width: 40rem; }\n");
//! ```

#[macro_use]
extern crate log;

pub mod ast;
pub mod css;
pub mod error;
pub mod expander;
pub mod loader;
pub mod mixin;
pub mod options;
pub mod parser;
pub mod substituter;
pub mod toker;
pub mod tokenizer_utils;
pub mod warning;

pub use crate::ast::root::Root;
pub use crate::css::output_style::OutputStyle;
pub use crate::error::{CssError, ErrorKind, Result};
pub use crate::expander::Expander;
pub use crate::options::Options;
pub use crate::parser::Parser;
pub use crate::warning::Warning;

use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    pub css: String,
    pub warnings: Vec<Warning>,
}

pub fn compile(input: &str, options: &Options, style: OutputStyle) -> Result<Output> {
    let expander = Expander::new(options.clone())?;
    let mut root = Parser::new(input).parse()?;
    let warnings = expander.process(&mut root);
    let css = root.to_css(style)?;
    Ok(Output { css, warnings })
}

pub fn compile_file<P: AsRef<Path>>(path: P, options: &Options, style: OutputStyle) -> Result<Output> {
    let input = fs::read_to_string(path)?;
    compile(&input, options, style)
}
