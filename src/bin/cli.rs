// src/bin/cli.rs
use clap::Parser;
use cucm_params::{cli, log};

fn main() {
    let args = cli::Args::parse();
    log::init(args.verbose);

    if let Err(e) = cli::run(args) {
        eprintln!("{}", cli::error_line(&e));
        std::process::exit(1);
    }
}
