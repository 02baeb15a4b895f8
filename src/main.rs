// src/main.rs
use clap::Parser;
use colorful::Colorful;
use env_logger::Env;

use timbrecheckr::cli::{self, Args};

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    if let Err(err) = cli::run(&args) {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}
