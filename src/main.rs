use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = try_main().await {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn try_main() -> anyhow::Result<()> {
    booktasks::logging::init().context("init logging")?;

    let cli = booktasks::cli::Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    match cli.command {
        booktasks::cli::Command::Create(args) => {
            booktasks::create::run(args).await.context("create")?;
        }
        booktasks::cli::Command::Plan(args) => {
            booktasks::create::plan(args).context("plan")?;
        }
    }

    Ok(())
}
