//! crates/cli/src/frontend.rs
//!
//! The [`clap`](https://docs.rs/clap/) command definition performs a
//! light-weight parse of the md5sum-style surface: output tweaks plus a list
//! of file operands, with standard input standing in when no operand (or the
//! literal `-`) is given.

use std::ffi::OsString;

use clap::{Arg, ArgAction, Command as ClapCommand, builder::OsStringValueParser};

/// Name the command advertises in usage and diagnostics.
pub const PROGRAM_NAME: &str = "oc-md5sum";

/// Options recovered from the command line.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct ParsedArgs {
    /// File operands in argument order; empty means standard input.
    pub(crate) files: Vec<OsString>,
    /// Emit BSD-style `MD5 (file) = digest` lines.
    pub(crate) tag: bool,
    /// Terminate output lines with NUL instead of newline.
    pub(crate) zero: bool,
}

/// Builds the `clap` command used for parsing.
fn clap_command() -> ClapCommand {
    ClapCommand::new(PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print MD5 (128-bit) fingerprints of file contents")
        .arg(
            Arg::new("tag")
                .long("tag")
                .help("create a BSD-style checksum line")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("zero")
                .short('z')
                .long("zero")
                .help("end each output line with NUL, not newline")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("files")
                .value_name("FILE")
                .num_args(0..)
                .value_parser(OsStringValueParser::new())
                .help("files to fingerprint; with no FILE, or when FILE is -, read standard input"),
        )
}

/// Parses `arguments` (including the program name) into [`ParsedArgs`].
pub(crate) fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    let matches = clap_command().try_get_matches_from(arguments)?;

    let files = matches
        .get_many::<OsString>("files")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    Ok(ParsedArgs {
        files,
        tag: matches.get_flag("tag"),
        zero: matches.get_flag("zero"),
    })
}
