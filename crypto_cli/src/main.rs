mod args;
mod output;

use std::process::ExitCode;

use clap::Parser;
use console::style;
use crypto_core::{CryptoResult, CryptoService};
use tracing_subscriber::filter::LevelFilter;

use args::{AnalyzeCommand, Cli, Command};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let service = CryptoService::from_env();

    match run(&service, cli.cmd).await {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("Command failed: {:?}", e);
            eprintln!("{}", style(format!("Error: {}", e)).for_stderr().red());
            ExitCode::FAILURE
        }
    }
}

async fn run(service: &CryptoService, cmd: Command) -> CryptoResult<Vec<String>> {
    let lines = match cmd {
        Command::Price { coin } => vec![output::price_line(&service.price(&coin).await?)],
        Command::Changes { coin, periods } => {
            output::changes_lines(&service.changes(&coin, &periods).await?)
        }
        Command::Analyze { indicator } => {
            let result = match indicator {
                AnalyzeCommand::Sma(args) => service.sma(&args.coin, args.period).await?,
                AnalyzeCommand::Rsi(args) => service.rsi(&args.coin, args.period).await?,
            };
            output::indicator_lines(&result)
        }
        Command::Top { limit } => {
            output::top_lines(&service.top_coins(usize::from(limit)).await?)
        }
        Command::Search { query } => output::search_lines(&service.search(&query).await?),
        Command::Details { coin } => output::details_lines(&service.details(&coin).await?),
    };

    Ok(lines)
}
