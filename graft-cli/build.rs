use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the CLI definition in src/main.rs. Build scripts can't access
// src/ modules, so the completion-relevant surface is duplicated here.
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("graft")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve multi-file documents and convert between formats")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Path to the input document")
                .required_unless_present("list-formats")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(Arg::new("to").long("to").value_name("FORMAT"))
        .arg(Arg::new("from").long("from").value_name("FORMAT"))
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("FILE")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("no-resolve")
                .long("no-resolve")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("auto-shift")
                .long("auto-shift")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("update-paths")
                .long("update-paths")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .action(ArgAction::SetTrue),
        );

    generate_to(Bash, &mut cmd, "graft", &outdir)?;
    generate_to(Zsh, &mut cmd, "graft", &outdir)?;
    generate_to(Fish, &mut cmd, "graft", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
