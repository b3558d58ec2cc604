use crate::mixin::{MixinDefinition, MixinRegistry};
use crate::options::Options;
use crate::parser::Parser;
use crate::warning::Warning;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const MIXIN_EXTENSIONS: &[&str] = &["css", "pcss"];

/// Registers every `@mixin` found in the configured directories and files.
/// Directories are read first, their files in name order, then the explicit
/// files. Sources that cannot be read or parsed are skipped with a warning.
pub fn load_mixins(options: &Options, registry: &mut MixinRegistry, warnings: &mut Vec<Warning>) {
    for dir in options.mixins_dir.iter() {
        match mixin_files_in(dir) {
            Ok(files) => {
                debug!("found {} mixin files in {}", files.len(), dir.display());
                for file in files.iter() {
                    load_file(file, registry, warnings);
                }
            },
            Err(ref e) if e.kind() == io::ErrorKind::NotFound => {
                Warning::new(format!("Mixin directory not found: {}", dir.display()), None)
                    .emit(warnings);
            },
            Err(e) => {
                Warning::new(format!("Failed to read mixin directory {}: {}", dir.display(), e), None)
                    .emit(warnings);
            },
        }
    }

    for file in options.mixins_files.iter() {
        load_file(file, registry, warnings);
    }
}

fn mixin_files_in(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_mixin_source = path.extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| MIXIN_EXTENSIONS.contains(&ext));
        if is_mixin_source && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Registers the `@mixin` at-rules of one file, at any nesting depth.
/// `@apply` is left alone here. Returns how many definitions were stored.
pub fn load_file(path: &Path, registry: &mut MixinRegistry, warnings: &mut Vec<Warning>) -> usize {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            Warning::new(format!("Failed to load mixins from {}: {}", path.display(), e), None)
                .emit(warnings);
            return 0
        },
    };

    let root = match Parser::new(&text).parse() {
        Ok(root) => root,
        Err(e) => {
            Warning::new(format!("Failed to load mixins from {}: {}", path.display(), e), None)
                .emit(warnings);
            return 0
        },
    };

    let mut loaded = 0;
    for node in root.nodes.iter() {
        node.walk_at_rules(&mut |at_rule| {
            if !at_rule.is_named("mixin") {
                return
            }
            match MixinDefinition::from_at_rule(at_rule) {
                Some(definition) => {
                    registry.register(definition);
                    loaded += 1;
                },
                None => {
                    Warning::new(
                        format!("Invalid mixin name in {}: {}", path.display(), at_rule.params),
                        Some(at_rule.offset),
                    ).emit(warnings);
                },
            }
        });
    }
    debug!("loaded {} mixins from {}", loaded, path.display());
    loaded
}
