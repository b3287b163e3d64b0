use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use stockroom_cli::{Cli, Commands, Shell, ShellConfig, run_query};

fn main() -> ExitCode {
    stockroom_observability::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "stockroom failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ShellConfig::from_env()?;
    let catalog = config.load_catalog()?;

    match cli.command {
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Shell::new(&catalog, config, stdin.lock(), stdout.lock()).run()?;
        }
        Some(command) => {
            let format = command.output_format();
            let Commands::Query { request, .. } = command;
            print(&run_query(&catalog, &request, format)?)?;
        }
    }
    Ok(())
}

fn print(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}
