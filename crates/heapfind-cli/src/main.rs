use clap::Parser;
use env_logger::Env;

mod cli;
mod cmd;
mod error;
mod io;
mod parse;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};

use error::CliError;

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_level()))
        .format_timestamp(None)
        .init();

    if let Err(e) = dispatch(&cli) {
        eprintln!("{e}");
        std::process::exit(e.exit_code());
    }
}

fn dispatch(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Version => {
            println!("{}", heapfind_core::version());
            Ok(())
        }
        Command::Sort { file, remove } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::sort::run(&content, remove, cli.format)
        }
        Command::Components { file, size } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::components::run(&content, *size, cli.format)
        }
        Command::Connected { file, size, p, q } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::connected::run(&content, *size, *p, *q, cli.format)
        }
    }
}
