// Command-line interface for graft
//
// This binary resolves multi-file documents into one and converts between
// formats. The heavy lifting lives in the graft-doc crate; this layer wires
// files, configuration and flags together and surfaces resolution warnings
// on stderr.
//
// Resolving and converting:
//
//  graft <input> [--to <format>] [--from <format>] [--output <file>]
//
// The source format is detected from the file extension, overridable with an
// explicit --from flag. Include directives are resolved unless --no-resolve
// is given. A broken include never fails the run: the rest of the document
// still assembles and the problem is reported on stderr (best-effort
// assembly, the point of the tool). Only an unreadable input file or an
// unknown format exits non-zero.

use clap::{Arg, ArgAction, Command, ValueHint};
use graft_config::{ConfigError, GraftConfig, Loader};
use graft_doc::{FormatRegistry, ResolveOptions, Resolver};
use std::fs;
use std::path::Path;
use std::process::exit;

fn build_cli() -> Command {
    Command::new("graft")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve multi-file documents and convert between formats")
        .long_about(
            "graft reads a document, splices in the files its include\n\
            directives name (recursively, with heading-level shifting and\n\
            resource path rewriting), and writes the merged result in the\n\
            requested format.\n\n\
            Examples:\n  \
            graft book.md                          # Resolve includes, print markdown\n  \
            graft book.md --to json                # Resolved tree as JSON\n  \
            graft book.md -o book-flat.md          # Write to a file\n  \
            graft notes.md --no-resolve --to json  # Inspect the unresolved tree",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Path to the input document")
                .required_unless_present("list-formats")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .value_name("FORMAT")
                .help("Target format (default from configuration)"),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .value_name("FORMAT")
                .help("Source format (default: detect from file extension)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("FILE")
                .help("Write output to a file instead of stdout")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("no-resolve")
                .long("no-resolve")
                .help("Convert without resolving include directives")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("auto-shift")
                .long("auto-shift")
                .help("Infer heading shifts from the surrounding outline")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("update-paths")
                .long("update-paths")
                .help("Rebase relative resource paths in included content")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a graft.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue),
        )
}

fn load_config(
    config_path: Option<&String>,
    auto_shift: bool,
    update_paths: bool,
) -> Result<GraftConfig, ConfigError> {
    let mut loader = Loader::new().with_optional_file("graft.toml");
    if let Some(path) = config_path {
        loader = loader.with_file(path);
    }
    if auto_shift {
        loader = loader.set_override("resolve.auto_shift", true)?;
    }
    if update_paths {
        loader = loader.set_override("resolve.update_paths", true)?;
    }
    loader.build()
}

fn main() {
    let matches = build_cli().get_matches();
    let registry = FormatRegistry::with_defaults();

    if matches.get_flag("list-formats") {
        for name in registry.list_formats() {
            let format = registry.get(&name).expect("listed format to exist");
            println!("{name} - {}", format.description());
        }
        return;
    }

    let input = matches
        .get_one::<String>("input")
        .expect("clap enforces the input argument");

    let config = match load_config(
        matches.get_one::<String>("config"),
        matches.get_flag("auto-shift"),
        matches.get_flag("update-paths"),
    ) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("graft: configuration error: {error}");
            exit(1);
        }
    };

    let source = match fs::read_to_string(input) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("graft: cannot read '{input}': {error}");
            exit(1);
        }
    };

    let from = match matches.get_one::<String>("from") {
        Some(format) => format.clone(),
        None => registry
            .detect_format_from_filename(input)
            .unwrap_or_else(|| config.resolve.default_format.clone()),
    };

    let doc = match registry.parse(&source, &from) {
        Ok(doc) => doc,
        Err(error) => {
            eprintln!("graft: {error}");
            exit(1);
        }
    };

    let doc = if matches.get_flag("no-resolve") {
        doc
    } else {
        let options: ResolveOptions = (&config.resolve).into();
        let base_dir = Path::new(input).parent().unwrap_or(Path::new(""));
        let mut resolver = Resolver::new(&registry, options);
        let resolved = resolver.resolve(doc, base_dir);
        for warning in resolver.diagnostics().iter() {
            eprintln!("graft: warning: {warning}");
        }
        resolved
    };

    let to = matches
        .get_one::<String>("to")
        .cloned()
        .unwrap_or_else(|| config.convert.default_to.clone());

    let output = match registry.serialize(&doc, &to) {
        Ok(output) => output,
        Err(error) => {
            eprintln!("graft: {error}");
            exit(1);
        }
    };

    match matches.get_one::<String>("output") {
        Some(path) => {
            if let Err(error) = fs::write(path, output) {
                eprintln!("graft: cannot write '{path}': {error}");
                exit(1);
            }
        }
        None => print!("{output}"),
    }
}
