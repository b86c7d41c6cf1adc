use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Context as _;
use async_trait::async_trait;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::config::TodoistConfig;
use crate::formats::{BookPlan, CreateTaskForm, Destination, DispatchReport, TaskUnit};
use crate::todoist;

#[async_trait]
pub trait TaskSink: Send + Sync {
    async fn submit(&self, unit: &TaskUnit, destination: &Destination) -> anyhow::Result<()>;
}

#[derive(Clone)]
pub struct TodoistSink {
    client: reqwest::Client,
    endpoint: String,
    api_token: String,
}

impl TodoistSink {
    pub fn new(config: &TodoistConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("build http client")?;
        Ok(Self {
            client,
            endpoint: config.tasks_endpoint(),
            api_token: config.api_token.clone(),
        })
    }
}

#[async_trait]
impl TaskSink for TodoistSink {
    async fn submit(&self, unit: &TaskUnit, destination: &Destination) -> anyhow::Result<()> {
        let form = CreateTaskForm::new(unit, destination);
        let created = todoist::create_task(&self.client, &self.endpoint, &self.api_token, &form)
            .await
            .with_context(|| format!("create task {}", form.content))?;

        // Printed for every response, failed statuses included.
        println!("{}", created.body);
        created
            .error_for_status()
            .with_context(|| format!("create task {}", form.content))?;
        tracing::info!(
            content = %form.content,
            status = created.status.as_u16(),
            task_id = ?created.task_id(),
            "task created"
        );
        Ok(())
    }
}

/// Submits one task per (chapter, section) pair of `plan`. One spawned unit
/// per chapter, each spawning one unit per section; at most `concurrency`
/// submissions are in flight at once. Returns after every submission
/// finished.
pub async fn dispatch(
    plan: &BookPlan,
    destination: &Destination,
    sink: Arc<dyn TaskSink>,
    concurrency: usize,
) -> anyhow::Result<DispatchReport> {
    let concurrency = concurrency.max(1);
    tracing::info!(
        title = %plan.title,
        chapters = plan.chapter_count(),
        tasks = plan.total_sections(),
        concurrency,
        "dispatch tasks"
    );

    let semaphore = Arc::new(Semaphore::new(concurrency));
    let destination = Arc::new(destination.clone());

    let mut chapters = JoinSet::new();
    for (idx, &sections) in plan.section_counts.iter().enumerate() {
        chapters.spawn(dispatch_chapter(
            plan.title.clone(),
            idx as u32 + 1,
            sections,
            Arc::clone(&destination),
            Arc::clone(&sink),
            Arc::clone(&semaphore),
        ));
    }

    let mut report = DispatchReport::default();
    while let Some(joined) = chapters.join_next().await {
        let chapter_report = joined.context("join chapter dispatch task")?;
        report.merge(chapter_report);
    }

    if report.failed > 0 {
        tracing::warn!(
            failed = report.failed,
            total = report.submitted,
            sample = ?report.failed_labels.iter().take(5).collect::<Vec<_>>(),
            "dispatch completed with failures"
        );
    }
    Ok(report)
}

async fn dispatch_chapter(
    title: String,
    chapter: u32,
    sections: u32,
    destination: Arc<Destination>,
    sink: Arc<dyn TaskSink>,
    semaphore: Arc<Semaphore>,
) -> DispatchReport {
    let mut join_set = JoinSet::new();
    let mut labels = HashMap::new();
    for section in 1..=sections {
        let unit = TaskUnit {
            title: title.clone(),
            chapter,
            section,
        };
        let destination = Arc::clone(&destination);
        let sink = Arc::clone(&sink);
        let semaphore = Arc::clone(&semaphore);

        let content = unit.content();
        let handle = join_set.spawn(async move {
            let outcome = match semaphore.acquire_owned().await {
                Ok(_permit) => sink.submit(&unit, &destination).await,
                Err(_) => Err(anyhow::anyhow!("dispatch semaphore is closed")),
            };
            (unit, outcome)
        });
        labels.insert(handle.id(), content);
    }

    let mut report = DispatchReport {
        submitted: sections as usize,
        ..DispatchReport::default()
    };
    while let Some(joined) = join_set.join_next().await {
        match joined {
            Ok((_, Ok(()))) => report.succeeded += 1,
            Ok((unit, Err(err))) => {
                let content = unit.content();
                tracing::warn!(content = %content, error = %format!("{err:#}"), "task creation failed");
                report.failed += 1;
                report.failed_labels.push(content);
            }
            Err(err) => {
                let content = labels
                    .remove(&err.id())
                    .unwrap_or_else(|| format!("chapter {chapter}: join error"));
                tracing::warn!(content = %content, error = %err, "join section dispatch task");
                report.failed += 1;
                report.failed_labels.push(content);
            }
        }
    }

    tracing::debug!(
        chapter,
        succeeded = report.succeeded,
        failed = report.failed,
        "chapter dispatched"
    );
    report
}
