//! Noteshape CLI - classify exported notes and extract structured records.

use clap::Parser;
use noteshape_cli::commands;
use noteshape_cli::{logging, Cli, Command, Config, Formatter};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> noteshape_cli::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Run(args) => commands::execute_run(args, &config, &formatter)?,
        Command::Parse(args) => commands::execute_parse(args, &config, &formatter)?,
        Command::Detect(args) => commands::execute_detect(args, &config, &formatter)?,
        Command::Extractors => commands::execute_extractors(&config, &formatter)?,
        Command::Schema(args) => commands::execute_schema(args, &config)?,
    }

    Ok(())
}
