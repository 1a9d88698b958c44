//! Prompt Studio CLI - Turn a requirement into a ready-to-use prompt.

use clap::Parser;
use promptstudio_cli::commands;
use promptstudio_cli::logging;
use promptstudio_cli::repl;
use promptstudio_cli::{Cli, Command, Config, Formatter};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> promptstudio_cli::Result<()> {
    let Cli {
        format,
        no_color,
        config: config_path,
        api_url,
        marker,
        verbose,
        command,
    } = Cli::parse();

    logging::init(verbose);

    let config_path = match config_path {
        Some(path) => path,
        None => Config::path()?,
    };
    let mut config = Config::load_from(&config_path)?;

    // Determine output format
    let format = format.map(Into::into).unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match command {
        None | Some(Command::Repl) => {
            let mut session = commands::connect(&config, api_url.as_deref(), marker.as_deref())?;
            repl::run_repl(&mut session, &formatter, config.settings.history_size).await?;
        }
        Some(Command::Generate(args)) => {
            let mut session = commands::connect(&config, api_url.as_deref(), marker.as_deref())?;
            commands::execute_generate(args, &mut session, &formatter).await?;
        }
        Some(Command::Extract(args)) => {
            commands::execute_extract(args, &config, marker.as_deref(), &formatter)?;
        }
        Some(Command::Config(args)) => {
            commands::execute_config(
                args,
                &mut config,
                &config_path,
                api_url.as_deref(),
                &formatter,
            )?;
        }
    }

    Ok(())
}
