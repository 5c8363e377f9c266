//! Todoist client: the sink for reading tasks.

use chrono::NaiveDate;
use reqwest::Client;

use super::{handle_response, ClientError};
use crate::config::{Config, READ_BASE_URL, WORDS_PER_MINUTE};
use crate::models::{Article, CreatedTask, NewTask};

#[derive(Debug, Clone)]
pub struct TodoistClient {
    base_url: String,
    token: String,
    project_id: String,
    client: Client,
}

impl TodoistClient {
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        project_id: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            project_id: project_id.into(),
            client: Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.todoist_url, &config.todoist_token, &config.project_id)
    }

    /// Create one task in the configured project, due on `due_date`.
    pub async fn create_task(
        &self,
        content: &str,
        due_date: NaiveDate,
    ) -> Result<CreatedTask, ClientError> {
        let input = NewTask {
            content: content.to_string(),
            project_id: self.project_id.clone(),
            due_date,
        };

        let response = self
            .client
            .post(format!("{}/tasks", self.base_url))
            .bearer_auth(&self.token)
            .json(&input)
            .send()
            .await?;
        handle_response(response).await
    }
}

/// Whole minutes needed to read `word_count` words, rounded up.
pub fn reading_minutes(word_count: u64) -> u64 {
    word_count.div_ceil(WORDS_PER_MINUTE)
}

/// Reader deep link for an article.
pub fn article_link(article: &Article) -> String {
    format!("{}{}", READ_BASE_URL, article.id)
}

/// Task text: a markdown link to the article followed by its reading time.
pub fn format_task_content(article: &Article) -> String {
    format!(
        "[📰 {}]({}) [{} mins]",
        article.title,
        article_link(article),
        reading_minutes(article.word_count)
    )
}
