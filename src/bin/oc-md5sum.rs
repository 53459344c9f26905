#![deny(unsafe_code)]

use mimalloc::MiMalloc;

/// High-performance memory allocator for improved allocation throughput.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::{env, io, process::ExitCode};

use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Diagnostics are opt-in via RUST_LOG so default output stays line-compatible
    // with md5sum.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    cli::run_with(env::args_os(), &mut stdout, &mut stderr)
}
