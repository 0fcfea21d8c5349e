mod cli;
mod cli_utils;
mod commands;
mod shutdown;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("hitcircle_cli=info,hitcircle_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli_utils::load_config(args.config.as_deref());

    match args.command {
        Command::Play {
            chart,
            replay,
            auto,
            realtime,
            record,
            save_replay,
            json,
        } => commands::play::run(
            &config,
            &chart,
            commands::play::PlayOptions {
                replay,
                auto,
                realtime,
                record,
                save_replay,
                json,
            },
        ),
        Command::Info { chart, json } => commands::info::run(&chart, json),
        Command::Extract { source, output } => commands::extract::run(&source, &output),
        Command::Library { dir, json } => commands::library::run(&dir, json),
        Command::History {
            record,
            limit,
            json,
        } => commands::history::run(&record, limit, json),
    }
}
