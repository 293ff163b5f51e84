use anyhow::Result;
use clap::Parser;

use yantra_cli::cli::commands::{ask, chat, configure, health, models};
use yantra_cli::cli::{Args, Command};
use yantra_cli::config::ResolveOptions;
use yantra_cli::logging;
use yantra_cli::session::TurnOutcome;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let resolve = ResolveOptions {
        endpoint: args.endpoint,
        model: args.model,
    };

    match args.command {
        None | Some(Command::Chat) => {
            chat::run_chat(&resolve).await?;
        }
        Some(Command::Ask { prompt, file }) => {
            let options = ask::AskOptions {
                resolve,
                prompt,
                file,
            };
            if ask::run_ask(options).await? == TurnOutcome::Failed {
                std::process::exit(exitcode::UNAVAILABLE);
            }
        }
        Some(Command::Models) => {
            models::print_models(&resolve)?;
        }
        Some(Command::Health) => {
            health::run_health(&resolve).await?;
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
    }

    Ok(())
}
