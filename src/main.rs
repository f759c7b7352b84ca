//! appmixer - set the per-application mixer volume, mute and pan.

use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use appmixer::{
    Result,
    cli::{Args, CliService, formatting::format_failure},
    config::Config,
    mixer::Console,
    services::audio::backend::SystemBackend,
    tracing_config,
};
use clap::Parser;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let color = io::stderr().is_terminal();
            eprintln!("{}", format_failure(&e.to_string(), color));
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;
    let _log_guard = tracing_config::init(&config.general)?;

    let service = CliService::new(SystemBackend::new()?, config.defaults);
    let mut console = Console::new(io::stdout().lock(), io::stderr().lock());
    service.execute(args, &mut console)?;

    Ok(())
}
