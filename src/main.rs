use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use daily_read::config::{parse_reading_minutes, word_budget, Config};
use daily_read::run::{DailyRead, RunOptions};

#[derive(Parser)]
#[command(name = "daily-read")]
#[command(about = "Add a random, time-boxed batch of unread Pocket articles to today's Todoist")]
struct Cli {
    /// Reading budget in minutes (defaults to 30)
    #[arg(value_name = "MINUTES", allow_hyphen_values = true)]
    minutes: Option<String>,

    /// Show what would be added without creating tasks
    #[arg(long)]
    dry_run: bool,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "daily_read=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine; the variables may come from the shell.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing();

    let config = Config::from_env();
    let budget = word_budget(parse_reading_minutes(cli.minutes.as_deref()));
    tracing::info!("Running with word count: {}", budget);

    let today = chrono::Utc::now().date_naive();
    let daily_read = DailyRead::from_config(&config).with_options(RunOptions {
        dry_run: cli.dry_run,
    });

    match daily_read.run(budget, today, &mut rand::thread_rng()).await {
        Ok(report) => {
            tracing::debug!(
                "Created {} of {} selected tasks in project {}",
                report.created.len(),
                report.selected.len(),
                config.project_id
            );
            println!("{}", report.summary_line(cli.dry_run));
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Error adding tasks to Todoist: {}", e);
            ExitCode::FAILURE
        }
    }
}
