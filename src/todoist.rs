use anyhow::Context as _;
use reqwest::StatusCode;

use crate::formats::CreateTaskForm;

pub const DEFAULT_BASE_URL: &str = "https://api.todoist.com/rest/v1";

pub fn tasks_endpoint(base_url: &str) -> String {
    let base_url = base_url.trim_end_matches('/');
    format!("{base_url}/tasks")
}

#[derive(Debug, Clone)]
pub struct CreatedTask {
    pub status: StatusCode,
    pub body: String,
}

impl CreatedTask {
    /// Task id from the response, when the body is the JSON task object.
    pub fn task_id(&self) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(&self.body).ok()?;
        match value.get("id")? {
            serde_json::Value::String(id) => Some(id.clone()),
            serde_json::Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }

    pub fn error_for_status(&self) -> anyhow::Result<()> {
        if !self.status.is_success() {
            anyhow::bail!("Todoist API error ({}): {}", self.status, self.body.trim());
        }
        Ok(())
    }
}

pub async fn create_task(
    client: &reqwest::Client,
    endpoint: &str,
    api_token: &str,
    form: &CreateTaskForm,
) -> anyhow::Result<CreatedTask> {
    let response = client
        .post(endpoint)
        .bearer_auth(api_token)
        .form(form)
        .send()
        .await
        .with_context(|| format!("POST {endpoint}"))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .context("read Todoist response body")?;

    Ok(CreatedTask { status, body })
}
