// Command-line interface for tinta
//
// Converts a tinta source file into an HTML, LaTeX or Kindle fragment. The
// conversion itself lives in tinta-markup; this binary wires it to the
// filesystem: configuration files, extra rule files, image headers and the
// output file.
//
// Usage:
//  tinta <input> [--to html|latex|kindle] [-o <file>]   - Convert (stdout by default)
//  tinta <input> --rules extra.toml                     - Layer extra tag rules
//  tinta --list-rules [--to <backend>]                  - Show the rules in effect
//
// Configuration is read from ./tinta.toml when present, then from --config.
// Command line flags override both.

mod images;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use images::FsImageResolver;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tinta_config::{Loader, TintaConfig};
use tinta_markup::{Assembler, Backend, Layout, MarkupEngine, RuleRegistry, RuleSource};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] tinta_config::ConfigError),
    #[error(transparent)]
    Rules(#[from] tinta_markup::ConfigError),
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn build_cli() -> Command {
    Command::new("tinta")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert tinta markup to HTML, LaTeX or Kindle fragments")
        .long_about(
            "tinta converts documents written in the tinta markup language.\n\n\
            Backends:\n  \
            - html:   HTML fragment for the web\n  \
            - latex:  LaTeX source fragment\n  \
            - kindle: HTML subset supported by e-readers\n\n\
            Examples:\n  \
            tinta chapter.tnt                        # HTML to stdout\n  \
            tinta chapter.tnt --to latex -o ch.tex   # LaTeX file\n  \
            tinta chapter.tnt --rules house.toml     # Extra tag rules\n  \
            tinta --list-rules --to kindle           # Rules in effect",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Path to the tinta source file")
                .required_unless_present("list-rules")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .short('t')
                .help("Output backend (defaults to convert.backend from the configuration)")
                .value_parser(clap::builder::PossibleValuesParser::new(
                    Backend::ALL.map(Backend::name),
                ))
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output file path (defaults to stdout)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a tinta.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("rules")
                .long("rules")
                .value_name("PATH")
                .help("Extra rule file layered over the built-in rules (repeatable)")
                .action(ArgAction::Append)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("list-rules")
                .long("list-rules")
                .help("List the rules in effect for the backend and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log progress to stderr")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if matches.get_flag("verbose") {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(&matches) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        matches.get_one::<String>("to").map(|s| s.as_str()),
    )?;
    let backend = config.convert.backend;

    let mut sources = config.rules.sources();
    if let Some(paths) = matches.get_many::<String>("rules") {
        sources.extend(paths.map(RuleSource::path));
    }
    let registry = RuleRegistry::with_extra(backend, &sources)?;

    if matches.get_flag("list-rules") {
        print!("{}", list_rules(&registry));
        return Ok(());
    }

    // required unless --list-rules
    let Some(input) = matches.get_one::<String>("input") else {
        return Ok(());
    };
    let input = Path::new(input);
    let source = fs::read_to_string(input).map_err(|source| CliError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let root = input.parent().unwrap_or_else(|| Path::new("."));
    let assembler = Assembler::new(MarkupEngine::new(registry))
        .with_layout(Layout::from(&config.layout))
        .with_image_resolver(FsImageResolver::new(root, config.images.default_dpi))
        .with_max_chunk_bytes(config.engine.max_chunk_bytes);

    tracing::info!(input = %input.display(), %backend, "converting");
    let output = assembler.assemble(&source);

    match matches.get_one::<String>("output") {
        Some(path) => {
            fs::write(path, output).map_err(|source| CliError::Write {
                path: PathBuf::from(path),
                source,
            })?;
            tracing::info!(output = %path, "written");
        }
        None => println!("{output}"),
    }
    Ok(())
}

fn load_cli_config(
    explicit_path: Option<&str>,
    backend: Option<&str>,
) -> Result<TintaConfig, CliError> {
    let loader = Loader::new().with_optional_file("tinta.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };
    let loader = match backend {
        Some(backend) => loader.set_override("convert.backend", backend)?,
        None => loader,
    };
    Ok(loader.build()?)
}

fn list_rules(registry: &RuleRegistry) -> String {
    let mut out = format!("Rules for {}:\n\nTags:\n", registry.backend());
    for rule in registry.tags() {
        out.push_str(&format!(
            "  {:<12} {:<10} {:>4}  {}\n",
            rule.key(),
            rule.element().key(),
            rule.precedence(),
            rule.pattern().as_str()
        ));
    }
    out.push_str("\nEscapes:\n");
    for rule in registry.escapes() {
        out.push_str(&format!(
            "  {:<12} {} -> {}\n",
            rule.key(),
            rule.pattern().as_str(),
            rule.replacement()
        ));
    }
    out
}
