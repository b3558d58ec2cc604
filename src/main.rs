use docopt::Docopt;
use mixers::{Options, OutputStyle};

use std::fs;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    const VERSION: &'static str = env!("CARGO_PKG_VERSION");
    static USAGE: &'static str = "
Usage:
    mixers [-t <style>] [-o <outfile>] [--mixins-dir=<dir>]... [--mixins-file=<file>]... <inputfile>
    mixers [-vh]

Options:
    -h, --help                        Show this message
    -v, --version                     Show the version
    -t <style>, --style <style>       Output style (expanded, compact or compressed)
    -o <outfile>, --output <outfile>  Write to a file instead of stdout
    --mixins-dir=<dir>                Load @mixin definitions from the .css/.pcss files in a directory
    --mixins-file=<file>              Load @mixin definitions from a file
    ";

    let args = Docopt::new(USAGE)
                      .and_then(|d| d.parse())
                      .unwrap_or_else(|e| e.exit());

    if args.get_bool("-v") {
        println!("{}", VERSION);
        return
    }

    let style = match args.get_str("-t") {
        "" => Ok(OutputStyle::default()),
        name => name.parse::<OutputStyle>(),
    };
    let style = match style {
        Ok(style) => style,
        Err(e) => {
            eprintln!("Compilation failed: {}", e.message);
            process::exit(1);
        },
    };

    let mut options = Options::new();
    for dir in args.get_vec("--mixins-dir") {
        options = options.mixins_dir(dir);
    }
    for file in args.get_vec("--mixins-file") {
        options = options.mixins_file(file);
    }

    let inputfile = args.get_str("<inputfile>");
    let output = match mixers::compile_file(inputfile, &options, style) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Compilation failed: {}", e.message);
            process::exit(1);
        },
    };

    match args.get_str("-o") {
        "" => print!("{}", output.css),
        outfile => {
            if let Err(e) = fs::write(outfile, &output.css) {
                eprintln!("Could not write {}: {}", outfile, e);
                process::exit(1);
            }
        },
    }
}
