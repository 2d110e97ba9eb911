use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use edudesk::cli::args::{Cli, Commands};
use edudesk::cli::commands;
use edudesk::config::{ColorSetting, Config};
use edudesk::error::EdudeskError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        let code = e
            .downcast_ref::<EdudeskError>()
            .map_or(1, EdudeskError::exit_code);
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    edudesk::logging::init(cli.verbose);

    let mut config = Config::load().context("loading configuration")?;
    match config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {}
    }
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Chat(args) => commands::chat(args.command, config.chat.default_role, format)?,
        Commands::Focus(args) => commands::focus(args.command, &mut config, format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
