use crate::ast::node::Node;
use crate::ast::root::Root;
use crate::css::at_rule::CssAtRule;
use crate::css::comment::CssComment;
use crate::css::declaration::CssDeclaration;
use crate::css::rule::CssRule;
use crate::css::selector::CssSelector;
use crate::error::{Result, CssError, ErrorKind};
use crate::toker::Toker;
use crate::tokenizer_utils::split_top_level;

pub struct Parser<'a> {
    pub toker: Toker<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(text: &'a str) -> Parser<'a> {
        Parser {
            toker: Toker::new(text),
        }
    }

    pub fn parse(&mut self) -> Result<Root> {
        let nodes = self.parse_body(false)?;
        Ok(Root::new(nodes))
    }

    fn parse_body(&mut self, nested: bool) -> Result<Vec<Node>> {
        let mut body = vec![];

        loop {
            self.toker.skip_leading_whitespace();

            if self.toker.at_eof() {
                if nested {
                    return Err(CssError {
                        offset: self.toker.limit(),
                        kind: ErrorKind::UnexpectedEof,
                        message: String::from(
                            "Expected to see rule body ending in `}`, instead reached EOF."
                        ),
                    })
                }
                return Ok(body)
            }

            let c = self.toker.curr_byte();

            if c == b'}' {
                if nested {
                    self.toker.offset += 1;
                    return Ok(body)
                }
                return Err(CssError {
                    offset: self.toker.offset,
                    kind: ErrorKind::ParserError,
                    message: String::from("Unexpected `}` outside of a rule body."),
                })
            }

            if c == b';' {
                self.toker.offset += 1;
                continue
            }

            if self.toker.at_comment() {
                let offset = self.toker.offset;
                let content = self.toker.next_comment()?;
                body.push(Node::Comment(CssComment {
                    content: content.to_string(),
                    offset,
                }));
                continue
            }

            if c == b'@' {
                body.push(self.next_at_rule()?);
            } else {
                body.push(self.next_rule_or_declaration()?);
            }
        }
    }

    fn next_at_rule(&mut self) -> Result<Node> {
        let beginning = self.toker.offset;
        self.toker.eat("@")?;

        let name = self.toker.next_name();
        if name.is_empty() {
            return Err(CssError {
                offset: beginning,
                kind: ErrorKind::ParserError,
                message: String::from("Expected to see an at-rule name after `@`."),
            })
        }

        let params_beginning = self.toker.offset;
        let (params_end, children) = match self.toker.find_terminator(b";{}") {
            Some((i, b'{')) => {
                self.toker.offset = i + 1;
                (i, Some(self.parse_body(true)?))
            },
            Some((i, b';')) => {
                self.toker.offset = i + 1;
                (i, None)
            },
            Some((i, _)) => {
                // leave the `}` for the enclosing block
                self.toker.offset = i;
                (i, None)
            },
            None => {
                self.toker.offset = self.toker.limit();
                (self.toker.limit(), None)
            },
        };

        Ok(Node::AtRule(CssAtRule {
            name: name.to_string(),
            params: self.toker.inner_str[params_beginning..params_end].trim().to_string(),
            children,
            offset: beginning,
        }))
    }

    fn next_rule_or_declaration(&mut self) -> Result<Node> {
        let beginning = self.toker.offset;

        match self.toker.find_terminator(b";{}") {
            Some((i, b'{')) => {
                let mut rule = CssRule::new(beginning);
                rule.selectors = split_top_level(&self.toker.inner_str[beginning..i], b',')
                    .into_iter()
                    .filter(|s| !s.is_empty())
                    .map(CssSelector::new)
                    .collect();

                if rule.selectors.is_empty() {
                    return Err(CssError {
                        offset: beginning,
                        kind: ErrorKind::ParserError,
                        message: String::from("Expected to see a selector before `{`."),
                    })
                }

                self.toker.offset = i + 1;
                rule.children = self.parse_body(true)?;
                Ok(Node::Rule(rule))
            },
            Some((i, c)) => {
                let decl = self.declaration(beginning, i)?;
                self.toker.offset = if c == b';' { i + 1 } else { i };
                Ok(decl)
            },
            None => {
                let end = self.toker.limit();
                let decl = self.declaration(beginning, end)?;
                self.toker.offset = end;
                Ok(decl)
            },
        }
    }

    fn declaration(&self, beginning: usize, end: usize) -> Result<Node> {
        let text = &self.toker.inner_str[beginning..end];

        match text.find(':') {
            Some(colon) if !text[..colon].trim().is_empty() => {
                Ok(Node::Declaration(CssDeclaration::new(
                    &text[..colon],
                    &text[colon + 1..],
                    beginning,
                )))
            },
            _ => Err(CssError {
                offset: beginning,
                kind: ErrorKind::ParserError,
                message: format!("Expected to see `:`, instead saw `{}`.", text.trim()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl(property: &str, value: &str, offset: usize) -> Node {
        Node::Declaration(CssDeclaration::new(property, value, offset))
    }

    #[test]
    fn it_returns_empty_root_for_empty_string() {
        let mut parser = Parser::new("");
        assert_eq!(parser.parse(), Ok(Root::new(vec![])));
    }

    #[test]
    fn it_returns_a_rule() {
        let mut parser = Parser::new("a { color: blue; }");
        assert_eq!(parser.parse(), Ok(Root::new(vec![
            Node::Rule(CssRule {
                selectors: vec![CssSelector::new("a")],
                children: vec![decl("color", "blue", 4)],
                offset: 0,
            }),
        ])));
    }

    #[test]
    fn it_returns_nested_rules() {
        let mut parser = Parser::new("div { span img, span a { color: blue; } }");
        assert_eq!(parser.parse(), Ok(Root::new(vec![
            Node::Rule(CssRule {
                selectors: vec![CssSelector::new("div")],
                children: vec![Node::Rule(CssRule {
                    selectors: vec![
                        CssSelector::new("span img"),
                        CssSelector::new("span a"),
                    ],
                    children: vec![decl("color", "blue", 25)],
                    offset: 6,
                })],
                offset: 0,
            }),
        ])));
    }

    #[test]
    fn it_tells_pseudo_class_selectors_from_declarations() {
        let mut parser = Parser::new("a { b:hover { color: red } top: 0 }");
        assert_eq!(parser.parse(), Ok(Root::new(vec![
            Node::Rule(CssRule {
                selectors: vec![CssSelector::new("a")],
                children: vec![
                    Node::Rule(CssRule {
                        selectors: vec![CssSelector::new("b:hover")],
                        children: vec![decl("color", "red", 14)],
                        offset: 4,
                    }),
                    decl("top", "0", 27),
                ],
                offset: 0,
            }),
        ])));
    }

    #[test]
    fn it_returns_at_rules_with_and_without_blocks() {
        let mut parser = Parser::new("@import \"a.css\";\n@media (min-width: 10px) { a { top: 0; } }");
        let root = parser.parse().unwrap();
        assert_eq!(root.nodes.len(), 2);
        assert_eq!(root.nodes[0], Node::AtRule(CssAtRule {
            name: String::from("import"),
            params: String::from("\"a.css\""),
            children: None,
            offset: 0,
        }));
        match root.nodes[1] {
            Node::AtRule(ref media) => {
                assert_eq!(media.name, "media");
                assert_eq!(media.params, "(min-width: 10px)");
                assert_eq!(media.children.as_ref().map(|c| c.len()), Some(1));
            },
            ref other => panic!("expected @media, got {:?}", other),
        }
    }

    #[test]
    fn it_returns_mixin_and_apply_at_rules() {
        let mut parser = Parser::new("@mixin --foo(--c) { color: --c; }\na { @apply --foo(red); }");
        let root = parser.parse().unwrap();
        assert_eq!(root.nodes[0], Node::AtRule(CssAtRule {
            name: String::from("mixin"),
            params: String::from("--foo(--c)"),
            children: Some(vec![decl("color", "--c", 20)]),
            offset: 0,
        }));
        assert_eq!(root.nodes[1], Node::Rule(CssRule {
            selectors: vec![CssSelector::new("a")],
            children: vec![Node::AtRule(CssAtRule {
                name: String::from("apply"),
                params: String::from("--foo(red)"),
                children: None,
                offset: 38,
            })],
            offset: 34,
        }));
    }

    #[test]
    fn it_keeps_semicolons_inside_urls_and_strings() {
        let mut parser = Parser::new("a { background: url(\"x;y.png\"); content: ';'; }");
        let root = parser.parse().unwrap();
        match root.nodes[0] {
            Node::Rule(ref rule) => assert_eq!(rule.children, vec![
                decl("background", "url(\"x;y.png\")", 4),
                decl("content", "';'", 32),
            ]),
            ref other => panic!("expected a rule, got {:?}", other),
        }
    }

    #[test]
    fn it_returns_a_comment() {
        let mut parser = Parser::new("/* hi */");
        assert_eq!(parser.parse(), Ok(Root::new(vec![
            Node::Comment(CssComment { content: String::from("/* hi */"), offset: 0 }),
        ])));
    }

    #[test]
    fn it_errors_with_malformed_declaration() {
        let mut parser = Parser::new("a { no-colon; }");
        assert_eq!(parser.parse(), Err(CssError {
            offset: 4,
            kind: ErrorKind::ParserError,
            message: String::from("Expected to see `:`, instead saw `no-colon`."),
        }));
    }

    #[test]
    fn it_errors_on_unclosed_block() {
        let mut parser = Parser::new("a { color: red;");
        assert_eq!(parser.parse(), Err(CssError {
            offset: 15,
            kind: ErrorKind::UnexpectedEof,
            message: String::from(
                "Expected to see rule body ending in `}`, instead reached EOF."
            ),
        }));
    }

    #[test]
    fn it_errors_on_stray_closing_brace() {
        let mut parser = Parser::new("a { } }");
        assert_eq!(parser.parse(), Err(CssError {
            offset: 6,
            kind: ErrorKind::ParserError,
            message: String::from("Unexpected `}` outside of a rule body."),
        }));
    }
}
