use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the backends in tinta-markup; build scripts can't depend on the
// crate they are building for
const BACKENDS: &[&str] = &["html", "latex", "kindle"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("tinta")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert tinta markup to HTML, LaTeX or Kindle fragments")
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
                .help("Output backend")
                .value_parser(clap::builder::PossibleValuesParser::new(BACKENDS))
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
                .help("Extra rule file layered over the built-in rules")
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
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "tinta", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "tinta", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "tinta", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
