use crate::ast::node::Node;
use crate::tokenizer_utils::{is_ascii_whitespace, valid_name_char};

/// Functions whose first argument may name a mixin parameter. The whole call,
/// fallback included, is replaced by the argument.
pub const SUBSTITUTION_FUNCTIONS: &[&str] = &["var", "substitute"];

/// Binds `parameters` to `arguments` by position and rewrites every
/// declaration value in `body`, including those in nested blocks. The
/// params of nested `@apply` calls are rewritten too, so arguments flow
/// into mixins applied from a mixin body. Parameters without an argument
/// are left as they are.
pub fn substitute_parameters(body: &mut [Node], parameters: &[String], arguments: &[String]) {
    for node in body.iter_mut() {
        substitute_node(node, parameters, arguments);
    }
}

fn substitute_node(node: &mut Node, parameters: &[String], arguments: &[String]) {
    let bind = |text: &str| {
        parameters.iter().zip(arguments.iter()).fold(text.to_string(), |acc, (param, arg)| {
            substitute_value(&acc, param, arg)
        })
    };

    match *node {
        Node::Declaration(ref mut decl) => decl.value = bind(&decl.value),
        Node::AtRule(ref mut at_rule) if at_rule.is_named("apply") => {
            // only the argument list, never the mixin name
            if let Some(open) = at_rule.params.find('(') {
                let bound = bind(&at_rule.params[open..]);
                at_rule.params.truncate(open);
                at_rule.params.push_str(&bound);
            }
        },
        _ => {},
    }

    if let Some(children) = node.children_mut() {
        for child in children.iter_mut() {
            substitute_node(child, parameters, arguments);
        }
    }
}

/// Replaces `var(param)`, `var(param, fallback)` and their `substitute(...)`
/// spellings with `arg`, then every remaining bare `param`.
///
/// Bare replacement has no notion of identifier boundaries, so a parameter
/// that is a prefix of another (`--c` and `--color`) also rewrites inside
/// the longer one.
pub fn substitute_value(value: &str, param: &str, arg: &str) -> String {
    let replaced = replace_functional(value, param, arg);
    replaced.replace(param, arg)
}

fn replace_functional(value: &str, param: &str, arg: &str) -> String {
    let bytes = value.as_bytes();
    let mut output = String::with_capacity(value.len());
    let mut copied_to = 0;
    let mut i = 0;

    while i < bytes.len() {
        match functional_call_end(value, i, param) {
            Some(end) => {
                output.push_str(&value[copied_to..i]);
                output.push_str(arg);
                copied_to = end;
                i = end;
            },
            None => i += 1,
        }
    }
    output.push_str(&value[copied_to..]);
    output
}

// If a substitution call naming `param` starts at `start`, returns the offset
// just past its closing parenthesis.
fn functional_call_end(value: &str, start: usize, param: &str) -> Option<usize> {
    let bytes = value.as_bytes();
    if !value.is_char_boundary(start) || (start > 0 && valid_name_char(bytes[start - 1])) {
        return None
    }

    let rest = &value[start..];
    let function = SUBSTITUTION_FUNCTIONS.iter().find(|f| {
        rest.starts_with(**f) && rest[f.len()..].starts_with('(')
    })?;

    let mut i = start + function.len() + 1;
    i += skip_whitespace(&bytes[i..]);
    if !value[i..].starts_with(param) {
        return None
    }
    i += param.len();
    i += skip_whitespace(&bytes[i..]);

    match bytes.get(i) {
        Some(b')') => Some(i + 1),
        Some(b',') => {
            let mut depth = 0usize;
            for (n, &c) in bytes[i + 1..].iter().enumerate() {
                match c {
                    b'(' => depth += 1,
                    b')' if depth == 0 => return Some(i + 1 + n + 1),
                    b')' => depth -= 1,
                    _ => {},
                }
            }
            None
        },
        _ => None,
    }
}

fn skip_whitespace(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|&&c| is_ascii_whitespace(c)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::at_rule::CssAtRule;
    use crate::css::declaration::CssDeclaration;
    use crate::css::rule::CssRule;
    use crate::css::selector::CssSelector;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn it_replaces_bare_parameters() {
        assert_eq!(substitute_value("--c", "--c", "red"), "red");
        assert_eq!(substitute_value("1px solid --c", "--c", "red"), "1px solid red");
    }

    #[test]
    fn it_replaces_substitution_calls_and_discards_fallbacks() {
        assert_eq!(substitute_value("substitute(--c, 10px)", "--c", "20px"), "20px");
        assert_eq!(substitute_value("var(--c)", "--c", "20px"), "20px");
        assert_eq!(substitute_value("var( --c , calc(1px + 2px) ) auto", "--c", "5px"), "5px auto");
    }

    #[test]
    fn it_inserts_arguments_literally() {
        assert_eq!(substitute_value("var(--c)", "--c", "$1"), "$1");
    }

    #[test]
    fn it_leaves_other_custom_properties_alone() {
        assert_eq!(substitute_value("var(--other, --c)", "--c", "red"), "var(--other, red)");
    }

    #[test]
    fn it_does_not_treat_longer_function_names_as_substitutions() {
        assert_eq!(substitute_value("myvar(--c)", "--c", "red"), "myvar(red)");
    }

    #[test]
    fn it_rewrites_prefixed_parameter_names_too() {
        assert_eq!(substitute_value("--color", "--c", "red"), "redolor");
    }

    #[test]
    fn it_binds_by_position_and_ignores_missing_or_extra_arguments() {
        let mut body = vec![
            Node::Declaration(CssDeclaration::new("color", "--a", 0)),
            Node::Declaration(CssDeclaration::new("width", "--b", 0)),
        ];
        substitute_parameters(&mut body, &strings(&["--a", "--b"]), &strings(&["red"]));
        assert_eq!(body, vec![
            Node::Declaration(CssDeclaration::new("color", "red", 0)),
            Node::Declaration(CssDeclaration::new("width", "--b", 0)),
        ]);

        let mut body = vec![Node::Declaration(CssDeclaration::new("color", "--a", 0))];
        substitute_parameters(&mut body, &strings(&["--a"]), &strings(&["red", "blue"]));
        assert_eq!(body, vec![Node::Declaration(CssDeclaration::new("color", "red", 0))]);
    }

    #[test]
    fn it_substitutes_into_nested_apply_params() {
        let mut body = vec![Node::AtRule(CssAtRule {
            name: String::from("apply"),
            params: String::from("--inner(--c, 2px)"),
            children: None,
            offset: 0,
        })];
        substitute_parameters(&mut body, &strings(&["--c"]), &strings(&["red"]));
        match body[0] {
            Node::AtRule(ref at_rule) => assert_eq!(at_rule.params, "--inner(red, 2px)"),
            ref other => panic!("expected @apply, got {:?}", other),
        }
    }

    #[test]
    fn it_never_rewrites_nested_mixin_names() {
        let mut body = vec![Node::AtRule(CssAtRule {
            name: String::from("apply"),
            params: String::from("--card(--c)"),
            children: None,
            offset: 0,
        })];
        substitute_parameters(&mut body, &strings(&["--c"]), &strings(&["red"]));
        match body[0] {
            Node::AtRule(ref at_rule) => assert_eq!(at_rule.params, "--card(red)"),
            ref other => panic!("expected @apply, got {:?}", other),
        }
    }

    #[test]
    fn it_substitutes_inside_nested_rules() {
        let mut body = vec![Node::Rule(CssRule {
            selectors: vec![CssSelector::new("&:hover")],
            children: vec![Node::Declaration(CssDeclaration::new("color", "var(--c, blue)", 0))],
            offset: 0,
        })];
        substitute_parameters(&mut body, &strings(&["--c"]), &strings(&["red"]));
        assert_eq!(body, vec![Node::Rule(CssRule {
            selectors: vec![CssSelector::new("&:hover")],
            children: vec![Node::Declaration(CssDeclaration::new("color", "red", 0))],
            offset: 0,
        })]);
    }
}
