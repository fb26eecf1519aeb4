use std::io::{self, Write};

use clap::Parser;
use weld_lib::bundler::*;

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Expand include directives without constant substitution"
)]
struct Args {
    /// Entry source file to expand
    entry: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run(args: &Args) -> Result<(), BundleError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut env = BundlerEnv::new(OsSystemApi::new());
    env.expand_to(&mut out, &args.entry)?;
    out.flush().map_err(BundleError::output)
}
