use std::io::{self, Write};

use clap::Parser;
use weld_lib::bundler::*;

#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Entry source file to expand
    entry: String,
    /// Constant definitions file
    defs: String,
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
    let mut sys = OsSystemApi::new();
    let table = ConstTable::from_file(&mut sys, &args.defs)?;
    for name in table.repeated_names() {
        eprintln!("Warning: constant name '{}' defined more than once", name);
    }
    let decls = table.render();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut env = BundlerEnv::new(sys);
    env.bundle_to(&mut out, &args.entry, &decls)?;
    out.flush().map_err(BundleError::output)
}
