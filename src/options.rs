use std::collections::BTreeMap;
use std::path::PathBuf;

/// Where mixins come from besides the stylesheet being processed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    /// Directories whose `.css` and `.pcss` files are scanned for `@mixin`.
    pub mixins_dir: Vec<PathBuf>,
    /// Individual files scanned for `@mixin`.
    pub mixins_files: Vec<PathBuf>,
    /// Parameterless mixins given as raw CSS block bodies, keyed by name.
    pub mixins: BTreeMap<String, String>,
}

impl Options {
    pub fn new() -> Options {
        Options::default()
    }

    pub fn mixins_dir<P: Into<PathBuf>>(mut self, dir: P) -> Options {
        self.mixins_dir.push(dir.into());
        self
    }

    pub fn mixins_file<P: Into<PathBuf>>(mut self, file: P) -> Options {
        self.mixins_files.push(file.into());
        self
    }

    pub fn mixin(mut self, name: &str, body: &str) -> Options {
        self.mixins.insert(name.to_string(), body.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_builds_options() {
        let options = Options::new()
            .mixins_dir("styles/mixins")
            .mixins_file("extra.pcss")
            .mixin("--reset", "margin: 0;");
        assert_eq!(options.mixins_dir, vec![PathBuf::from("styles/mixins")]);
        assert_eq!(options.mixins_files, vec![PathBuf::from("extra.pcss")]);
        assert_eq!(options.mixins.get("--reset").map(|s| s.as_str()), Some("margin: 0;"));
    }
}
