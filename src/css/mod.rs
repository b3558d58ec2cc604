pub mod at_rule;
pub mod comment;
pub mod declaration;
pub mod output_style;
pub mod rule;
pub mod selector;
