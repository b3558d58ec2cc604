use crate::ast::node::Node;
use crate::css::at_rule::CssAtRule;
use crate::tokenizer_utils::split_top_level;

use regex::Regex;

use std::collections::HashMap;
use std::sync::OnceLock;

/// A stored `@mixin`: its parameter names and a detached copy of its body.
#[derive(Clone, Debug, PartialEq)]
pub struct MixinDefinition {
    pub name: String,
    pub parameters: Vec<String>,
    pub body: Vec<Node>,
}

impl MixinDefinition {
    /// Builds a definition from an `@mixin` at-rule, detaching a copy of its
    /// body. Returns `None` when the params do not start with `--name`.
    pub fn from_at_rule(at_rule: &CssAtRule) -> Option<MixinDefinition> {
        let name = parse_name(&at_rule.params)?;
        Some(MixinDefinition {
            name,
            parameters: parse_parameters(&at_rule.params),
            body: at_rule.children.clone().unwrap_or_default(),
        })
    }
}

/// A parsed `@apply --name(args)` call.
#[derive(Clone, Debug, PartialEq)]
pub struct ApplyInvocation {
    pub name: String,
    pub arguments: Vec<String>,
}

/// Mixins known to a single processing run, keyed by name without the
/// leading `--`.
#[derive(Clone, Debug, Default)]
pub struct MixinRegistry {
    mixins: HashMap<String, MixinDefinition>,
}

impl MixinRegistry {
    pub fn new() -> MixinRegistry {
        MixinRegistry {
            mixins: HashMap::new(),
        }
    }

    /// Stores a definition. A later definition with the same name replaces
    /// the earlier one.
    pub fn register(&mut self, definition: MixinDefinition) {
        debug!("registering mixin --{} with parameters {:?}", definition.name, definition.parameters);
        self.mixins.insert(definition.name.clone(), definition);
    }

    pub fn get(&self, name: &str) -> Option<&MixinDefinition> {
        self.mixins.get(name)
    }

    pub fn len(&self) -> usize {
        self.mixins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mixins.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names = self.mixins.keys().map(|k| k.as_str()).collect::<Vec<_>>();
        names.sort();
        names
    }

    /// `--a, --b` style listing used in diagnostics.
    pub fn describe_names(&self) -> String {
        self.names().iter().map(|n| format!("--{}", n)).collect::<Vec<_>>().join(", ")
    }
}

fn name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^--([a-zA-Z0-9_-]+)").unwrap())
}

/// Extracts the mixin name from `@mixin`/`@apply` params, without the
/// leading `--`.
pub fn parse_name(params: &str) -> Option<String> {
    name_regex().captures(params.trim()).map(|caps| caps[1].to_string())
}

/// Returns the text between the first `(` and its matching `)`. An
/// unbalanced list runs to the end of the input.
fn parenthesized(params: &str) -> Option<&str> {
    let open = params.find('(')?;
    let inner = &params[open + 1..];
    let mut depth = 0usize;

    for (i, c) in inner.char_indices() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => return Some(&inner[..i]),
            ')' => depth -= 1,
            _ => {},
        }
    }
    Some(inner)
}

fn parse_list(params: &str) -> Vec<String> {
    match parenthesized(params) {
        Some(list) => split_top_level(list, b',')
            .into_iter()
            .filter(|entry| !entry.is_empty())
            .map(|entry| entry.to_string())
            .collect(),
        None => Vec::new(),
    }
}

/// Parameter names declared by `@mixin --name(--a, --b: default)`. Entries
/// that start with a `--ident` are reduced to it; others are kept whole.
pub fn parse_parameters(params: &str) -> Vec<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^(--[a-zA-Z0-9_-]+)").unwrap());

    let after_name = skip_name(params);
    parse_list(after_name).into_iter().map(|param| {
        match re.captures(&param) {
            Some(caps) => caps[1].to_string(),
            None => param,
        }
    }).collect()
}

/// Parses `@apply` params. Returns `None` when there is no `--name`.
pub fn parse_apply(params: &str) -> Option<ApplyInvocation> {
    let name = parse_name(params)?;
    let after_name = skip_name(params);
    let arguments = if after_name.starts_with('(') {
        parse_list(after_name)
    } else {
        Vec::new()
    };

    Some(ApplyInvocation { name, arguments })
}

fn skip_name(params: &str) -> &str {
    let trimmed = params.trim();
    match name_regex().find(trimmed) {
        Some(m) => &trimmed[m.end()..],
        None => trimmed,
    }
}
