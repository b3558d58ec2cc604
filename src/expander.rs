use crate::ast::node::Node;
use crate::ast::root::Root;
use crate::css::at_rule::CssAtRule;
use crate::error::{Result, CssError, ErrorKind};
use crate::loader;
use crate::mixin::{parse_apply, MixinDefinition, MixinRegistry};
use crate::options::Options;
use crate::parser::Parser;
use crate::substituter::substitute_parameters;
use crate::warning::Warning;

use std::mem;

/// Expands `@apply` at-rules using `@mixin` definitions. An `Expander` can
/// process any number of trees; each call to `process` starts from a fresh
/// registry holding only the predefined and pre-loaded mixins.
#[derive(Debug, Clone)]
pub struct Expander {
    options: Options,
    predefined: Vec<MixinDefinition>,
}

impl Expander {
    pub fn new(options: Options) -> Result<Expander> {
        let mut predefined = Vec::with_capacity(options.mixins.len());

        for (name, css) in options.mixins.iter() {
            let body = Parser::new(css).parse().map_err(|e| CssError {
                offset: e.offset,
                kind: ErrorKind::InvalidConfig,
                message: format!("Predefined mixin `{}` could not be parsed: {}", name, e.message),
            })?;
            predefined.push(MixinDefinition {
                name: name.trim_start_matches("--").to_string(),
                parameters: Vec::new(),
                body: body.nodes,
            });
        }

        Ok(Expander { options, predefined })
    }

    /// Rewrites `root` in place: every `@mixin` is removed and every
    /// `@apply` is replaced by the expanded body. Returns the warnings
    /// produced along the way.
    pub fn process(&self, root: &mut Root) -> Vec<Warning> {
        let mut run = ExpansionRun::new();

        for definition in self.predefined.iter() {
            run.registry.register(definition.clone());
        }
        loader::load_mixins(&self.options, &mut run.registry, &mut run.warnings);
        debug!("{} mixins available before processing", run.registry.len());

        let nodes = mem::take(&mut root.nodes);
        root.nodes = run.walk(nodes);
        run.warnings
    }
}

struct ExpansionRun {
    registry: MixinRegistry,
    warnings: Vec<Warning>,
    // names of the mixins currently being inlined, innermost last
    applying: Vec<String>,
}

impl ExpansionRun {
    fn new() -> ExpansionRun {
        ExpansionRun {
            registry: MixinRegistry::new(),
            warnings: Vec::new(),
            applying: Vec::new(),
        }
    }

    fn warn(&mut self, message: String, offset: usize) {
        Warning::new(message, Some(offset)).emit(&mut self.warnings);
    }

    fn walk(&mut self, nodes: Vec<Node>) -> Vec<Node> {
        let mut output = Vec::with_capacity(nodes.len());

        for node in nodes.into_iter() {
            match node {
                Node::AtRule(ref at_rule) if at_rule.is_named("mixin") => self.define(at_rule),
                Node::AtRule(ref at_rule) if at_rule.is_named("apply") => {
                    let expanded = self.apply(at_rule);
                    output.extend(expanded);
                },
                Node::Rule(mut rule) => {
                    rule.children = self.walk(rule.children);
                    output.push(Node::Rule(rule));
                },
                Node::AtRule(mut at_rule) => {
                    at_rule.children = at_rule.children.map(|children| self.walk(children));
                    output.push(Node::AtRule(at_rule));
                },
                other => output.push(other),
            }
        }
        output
    }

    fn define(&mut self, at_rule: &CssAtRule) {
        match MixinDefinition::from_at_rule(at_rule) {
            Some(definition) => self.registry.register(definition),
            None => self.warn(format!("Invalid mixin name: {}", at_rule.params), at_rule.offset),
        }
    }

    fn apply(&mut self, at_rule: &CssAtRule) -> Vec<Node> {
        let invocation = match parse_apply(&at_rule.params) {
            Some(invocation) => invocation,
            None => {
                self.warn(format!("Invalid apply syntax: {}", at_rule.params), at_rule.offset);
                return Vec::new()
            },
        };

        if self.applying.contains(&invocation.name) {
            self.warn(
                format!("Mixin \"--{}\" applies itself recursively; skipping.", invocation.name),
                at_rule.offset,
            );
            return Vec::new()
        }

        let found = self.registry.get(&invocation.name)
            .map(|definition| (definition.body.clone(), definition.parameters.clone()));
        let (mut body, parameters) = match found {
            Some(found) => found,
            None => {
                let message = format!(
                    "Mixin \"--{}\" is not defined. Available mixins: {}",
                    invocation.name,
                    self.registry.describe_names(),
                );
                self.warn(message, at_rule.offset);
                return Vec::new()
            },
        };

        if !parameters.is_empty() && !invocation.arguments.is_empty() {
            substitute_parameters(&mut body, &parameters, &invocation.arguments);
        }
        debug!("applying mixin --{} with arguments {:?}", invocation.name, invocation.arguments);

        self.applying.push(invocation.name);
        let expanded = self.walk(body);
        self.applying.pop();
        expanded
    }
}
