use std::io::Write as _;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context as _;

use crate::cli::{CreateArgs, PlanArgs};
use crate::config::TodoistConfig;
use crate::dispatch::{self, TodoistSink};
use crate::formats::{BookPlan, Destination};
use crate::prompt::{InvalidInputPolicy, Prompter};

pub async fn run(args: CreateArgs) -> anyhow::Result<()> {
    // Config is resolved before the first prompt is shown.
    let config = TodoistConfig::from_env(
        args.api_base_url.as_deref(),
        Duration::from_secs(args.timeout_secs),
        args.concurrency,
    )
    .context("load Todoist config")?;
    tracing::debug!(
        base_url = %config.base_url,
        timeout_secs = config.timeout.as_secs(),
        concurrency = config.concurrency,
        "loaded config"
    );
    let sink = Arc::new(TodoistSink::new(&config)?);

    println!("--- creating tasks ---");
    let (plan, destination) = read_interactive(args.on_invalid_input)?;

    let started_at = Instant::now();
    let report = dispatch::dispatch(&plan, &destination, sink, config.concurrency)
        .await
        .context("dispatch tasks")?;
    let elapsed = started_at.elapsed();

    println!("--- tasks created ---");
    println!(
        "--- created: {}, failed: {} ---",
        report.succeeded, report.failed
    );
    println!("--- elapsed: {:.6}s ---", elapsed.as_secs_f64());

    if report.failed > 0 {
        anyhow::bail!(
            "{} of {} task(s) failed: {}",
            report.failed,
            report.submitted,
            report.failed_labels.join(", ")
        );
    }
    Ok(())
}

pub fn plan(args: PlanArgs) -> anyhow::Result<()> {
    let (plan, destination) = read_interactive(args.on_invalid_input)?;
    tracing::info!(
        project_id = %destination.project_id,
        section_id = %destination.section_id,
        tasks = plan.total_sections(),
        "plan"
    );

    let mut out = std::io::stdout().lock();
    for unit in plan.task_units() {
        writeln!(out, "{}", unit.content()).context("write task label")?;
    }
    out.flush().context("flush stdout")?;
    Ok(())
}

fn read_interactive(policy: InvalidInputPolicy) -> anyhow::Result<(BookPlan, Destination)> {
    let stdin = std::io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), std::io::stdout(), policy);
    let plan = prompter.read_book_plan().context("read book structure")?;
    let destination = prompter
        .read_destination()
        .context("read Todoist destination")?;
    // Prompts leave the cursor mid-line when input is piped.
    println!();
    Ok((plan, destination))
}
