use std::time::Duration;

use anyhow::Context as _;
use url::Url;

use crate::todoist;

#[derive(Debug, Clone)]
pub struct TodoistConfig {
    pub api_token: String,
    pub base_url: String,
    pub timeout: Duration,
    pub concurrency: usize,
}

impl TodoistConfig {
    /// Reads `TODOIST_API_TOKEN` and `TODOIST_API_BASE_URL`. An explicit
    /// `base_url` wins over the environment.
    pub fn from_env(
        base_url: Option<&str>,
        timeout: Duration,
        concurrency: usize,
    ) -> anyhow::Result<Self> {
        let api_token = std::env::var("TODOIST_API_TOKEN").unwrap_or_default();
        let env_base_url = std::env::var("TODOIST_API_BASE_URL").ok();
        let base_url = base_url
            .map(str::to_owned)
            .or(env_base_url)
            .unwrap_or_else(|| todoist::DEFAULT_BASE_URL.to_owned());
        Self::new(&api_token, &base_url, timeout, concurrency)
    }

    pub fn new(
        api_token: &str,
        base_url: &str,
        timeout: Duration,
        concurrency: usize,
    ) -> anyhow::Result<Self> {
        let api_token = api_token.trim();
        if api_token.is_empty() {
            anyhow::bail!("TODOIST_API_TOKEN is not set");
        }

        let parsed = Url::parse(base_url.trim())
            .with_context(|| format!("parse Todoist base url: {base_url}"))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            anyhow::bail!("Todoist base url must be http/https: {parsed}");
        }
        if timeout.is_zero() {
            anyhow::bail!("--timeout-secs must be > 0");
        }

        Ok(Self {
            api_token: api_token.to_owned(),
            base_url: base_url.trim().to_owned(),
            timeout,
            concurrency: concurrency.max(1),
        })
    }

    pub fn tasks_endpoint(&self) -> String {
        todoist::tasks_endpoint(&self.base_url)
    }
}
