//! One daily-read run: fetch, select, publish.
//!
//! Stages run strictly in sequence and every remote call is awaited before
//! the next one starts. The first failure ends the run; tasks already
//! created stay created.

use chrono::NaiveDate;
use rand::Rng;
use thiserror::Error;

use crate::clients::{format_task_content, ClientError, PocketClient, TodoistClient};
use crate::config::Config;
use crate::models::{Article, CreatedTask};
use crate::selector::{select_articles, total_words};

#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to fetch unread articles: {0}")]
    Fetch(#[source] ClientError),

    #[error("failed to add task for '{title}': {source}")]
    Publish {
        title: String,
        #[source]
        source: ClientError,
    },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Log the selection without creating any task.
    pub dry_run: bool,
}

/// What a finished run did.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Size of the unread pool.
    pub fetched: usize,
    /// Articles picked, in shuffle order.
    pub selected: Vec<Article>,
    /// Tasks created, in the same order. Empty on a dry run.
    pub created: Vec<CreatedTask>,
}

impl RunReport {
    /// Closing console line for a successful run.
    pub fn summary_line(&self, dry_run: bool) -> String {
        if dry_run {
            format!(
                "Dry run: {} articles selected, no tasks added to Todoist.",
                self.selected.len()
            )
        } else {
            "All tasks added to Todoist successfully!".to_string()
        }
    }
}

pub struct DailyRead {
    pocket: PocketClient,
    todoist: TodoistClient,
    options: RunOptions,
}

impl DailyRead {
    pub fn new(pocket: PocketClient, todoist: TodoistClient) -> Self {
        Self {
            pocket,
            todoist,
            options: RunOptions::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            PocketClient::from_config(config),
            TodoistClient::from_config(config),
        )
    }

    pub fn with_options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }

    /// Run once. `due_date` is shared by every task this run creates.
    pub async fn run<R>(
        &self,
        word_budget: i64,
        due_date: NaiveDate,
        rng: &mut R,
    ) -> Result<RunReport, RunError>
    where
        R: Rng + ?Sized,
    {
        let articles = self
            .pocket
            .fetch_unread_articles()
            .await
            .map_err(RunError::Fetch)?;
        let fetched = articles.len();

        let selected = select_articles(articles, word_budget, rng);
        tracing::debug!(
            "Selected {} of {} articles ({} words)",
            selected.len(),
            fetched,
            total_words(&selected)
        );

        let mut created = Vec::with_capacity(selected.len());
        for article in &selected {
            let content = format_task_content(article);

            if self.options.dry_run {
                tracing::info!("Would add task to Todoist: {}", content);
                continue;
            }

            let task = self
                .todoist
                .create_task(&content, due_date)
                .await
                .map_err(|source| RunError::Publish {
                    title: article.title.clone(),
                    source,
                })?;
            tracing::info!("Added task to Todoist: {}", content);
            created.push(task);
        }

        Ok(RunReport {
            fetched,
            selected,
            created,
        })
    }
}
