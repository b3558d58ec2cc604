use crate::css::at_rule::CssAtRule;
use crate::css::comment::CssComment;
use crate::css::declaration::CssDeclaration;
use crate::css::output_style::OutputStyle;
use crate::css::rule::CssRule;
use crate::error::Result;

use std::io::Write;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Rule(CssRule),
    AtRule(CssAtRule),
    Declaration(CssDeclaration),
    Comment(CssComment),
}

impl Node {
    pub fn stream<W: Write>(&self, output: &mut W, style: OutputStyle, depth: usize) -> Result<()> {
        match *self {
            Node::Rule(ref rule) => rule.stream(output, style, depth),
            Node::AtRule(ref at_rule) => at_rule.stream(output, style, depth),
            Node::Declaration(ref decl) => decl.stream(output, style, depth),
            Node::Comment(ref comment) => comment.stream(output, style, depth),
        }
    }

    pub fn is_declaration(&self) -> bool {
        match *self {
            Node::Declaration(..) => true,
            _ => false,
        }
    }

    pub fn is_comment(&self) -> bool {
        match *self {
            Node::Comment(..) => true,
            _ => false,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match *self {
            Node::Rule(ref mut rule) => Some(&mut rule.children),
            Node::AtRule(CssAtRule { children: Some(ref mut children), .. }) => Some(children),
            _ => None,
        }
    }

    /// Visits every at-rule in this node and its descendants, in document
    /// order, including at-rules nested inside other at-rules.
    pub fn walk_at_rules<F>(&self, f: &mut F)
        where F: FnMut(&CssAtRule)
    {
        match *self {
            Node::Rule(ref rule) => {
                for child in rule.children.iter() {
                    child.walk_at_rules(f);
                }
            },
            Node::AtRule(ref at_rule) => {
                f(at_rule);
                if let Some(ref children) = at_rule.children {
                    for child in children.iter() {
                        child.walk_at_rules(f);
                    }
                }
            },
            _ => {},
        }
    }
}

/// Writes a sequence of sibling nodes. Declarations are terminated with `;`
/// except for the last one in a compressed block.
pub fn stream_children<W: Write>(
    output: &mut W,
    style: OutputStyle,
    depth: usize,
    children: &[Node],
    separator: &str,
) -> Result<()> {
    let visible = children.iter()
        .filter(|c| style.emits_comments() || !c.is_comment())
        .collect::<Vec<_>>();

    for (i, child) in visible.iter().enumerate() {
        if i > 0 {
            write!(output, "{}", separator)?;
        }
        child.stream(output, style, depth)?;
        if child.is_declaration() &&
           (style != OutputStyle::Compressed || i + 1 < visible.len()) {
            write!(output, ";")?;
        }
    }
    Ok(())
}

pub fn stream_block<W: Write>(
    output: &mut W,
    style: OutputStyle,
    depth: usize,
    header: &str,
    children: &[Node],
) -> Result<()> {
    let indent = style.indent(depth);
    write!(output, "{}{}{}{{", indent, header, style.selector_brace_separator())?;

    let has_visible = children.iter().any(|c| style.emits_comments() || !c.is_comment());
    if has_visible {
        write!(output, "{}", style.brace_child_separator())?;
        stream_children(output, style, depth + 1, children, style.child_separator())?;
        write!(output, "{}{}", style.brace_child_separator(), indent)?;
    } else {
        write!(output, "{}", match style {
            OutputStyle::Expanded => format!("\n{}", indent),
            OutputStyle::Compact => String::from(" "),
            _ => String::new(),
        })?;
    }

    write!(output, "}}")?;
    Ok(())
}
