#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! Command-line frontend for `oc-md5sum`: parse md5sum-style arguments, drive
//! the [`fingerprint`] crate over each operand, and print one
//! `<digest>  <path>` line per input. The entry point [`run_with`] takes the
//! argument iterator and both output streams explicitly so binaries stay thin
//! and tests can capture output without a child process.
//!
//! Per-operand failures are reported to stderr and do not stop the remaining
//! operands; the exit code is non-zero when any operand failed.

mod frontend;

pub use frontend::PROGRAM_NAME;

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use checksums::Md5Digest;
use fingerprint::{FingerprintError, fingerprint_file, fingerprint_reader};

use crate::frontend::ParsedArgs;

/// Parses `arguments` and fingerprints every operand, writing results to
/// `stdout` and diagnostics to `stderr`.
///
/// Returns success only when every operand was hashed and written; clap's
/// own exit code is forwarded for parse failures, help, and version output.
pub fn run_with<Args, W, E>(arguments: Args, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    Args: IntoIterator,
    Args::Item: Into<OsString> + Clone,
    W: Write,
    E: Write,
{
    let parsed = match frontend::parse_args(arguments) {
        Ok(parsed) => parsed,
        Err(err) => return render_parse_outcome(&err, stdout, stderr),
    };

    let operands = if parsed.files.is_empty() {
        vec![OsString::from("-")]
    } else {
        parsed.files.clone()
    };
    tracing::debug!(operands = operands.len(), "fingerprinting operands");

    let mut failed = false;
    for name in &operands {
        match hash_operand(name) {
            Ok(digest) => {
                if let Err(err) = write_result_line(stdout, &parsed, name, digest) {
                    // stdout is gone; nothing further can be reported there.
                    let _ = writeln!(stderr, "{PROGRAM_NAME}: failed to write output: {err}");
                    return ExitCode::FAILURE;
                }
            }
            Err(err) => {
                failed = true;
                let _ = writeln!(stderr, "{PROGRAM_NAME}: {err}");
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Failure to hash a single operand.
#[derive(Debug)]
enum OperandError {
    Stdin(io::Error),
    File(FingerprintError),
}

impl fmt::Display for OperandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin(err) => write!(f, "failed to read standard input: {err}"),
            Self::File(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for OperandError {}

fn hash_operand(name: &OsStr) -> Result<Md5Digest, OperandError> {
    if name == "-" {
        let mut stdin = io::stdin().lock();
        return fingerprint_reader(&mut stdin).map_err(OperandError::Stdin);
    }

    fingerprint_file(Path::new(name))
        .map(|fingerprint| fingerprint.digest())
        .map_err(OperandError::File)
}

fn write_result_line<W: Write>(
    out: &mut W,
    parsed: &ParsedArgs,
    name: &OsStr,
    digest: Md5Digest,
) -> io::Result<()> {
    let terminator = if parsed.zero { '\0' } else { '\n' };
    let display = Path::new(name).display();
    if parsed.tag {
        write!(out, "MD5 ({display}) = {digest}{terminator}")
    } else {
        write!(out, "{digest}  {display}{terminator}")
    }
}

fn render_parse_outcome<W: Write, E: Write>(
    err: &clap::Error,
    stdout: &mut W,
    stderr: &mut E,
) -> ExitCode {
    let rendered = err.render();
    if err.use_stderr() {
        let _ = write!(stderr, "{rendered}");
    } else {
        let _ = write!(stdout, "{rendered}");
    }
    u8::try_from(err.exit_code()).map_or(ExitCode::FAILURE, ExitCode::from)
}
