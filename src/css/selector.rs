use regex::{Captures, Regex};

use std::fmt;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq)]
pub struct CssSelector {
    pub name: String,
}

fn squeeze(data: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s+").unwrap());
    re.replace_all(data.trim(), " ").into_owned()
}

fn compress_attr_selectors(data: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"\[\s*(?P<attrname>[^\s*~^|=\]]+)\s*(?P<operator>[*~^$|]?=)\s*(?P<attrval>[^\s\]]+)\s*\]").unwrap()
    });
    re.replace_all(data, |caps: &Captures| {
        format!("[{}{}{}]", &caps["attrname"], &caps["operator"], &caps["attrval"])
    }).into_owned()
}

impl CssSelector {
    pub fn new(selector: &str) -> CssSelector {
        CssSelector {
            name: compress_attr_selectors(&squeeze(selector)),
        }
    }

    pub fn compressed(&self) -> String {
        self.name.replace(" > ", ">").replace(" + ", "+").replace(" ~ ", "~")
    }
}

impl fmt::Display for CssSelector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_squeezes_whitespace() {
        assert_eq!(CssSelector::new("  div \n   span  ").to_string(), "div span");
    }

    #[test]
    fn it_compresses_attribute_selectors() {
        assert_eq!(CssSelector::new("a[ href ^= \"http\" ]").name, "a[href^=\"http\"]");
    }

    #[test]
    fn it_tightens_combinators_when_compressed() {
        assert_eq!(CssSelector::new("ul > li + li").compressed(), "ul>li+li");
    }
}
